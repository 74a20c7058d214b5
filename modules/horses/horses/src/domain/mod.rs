pub mod error;
pub mod mapper;
pub mod repos;
pub mod service;
pub mod validator;
