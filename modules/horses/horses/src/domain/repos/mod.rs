pub mod horses_repo;
pub mod owners_repo;

pub use horses_repo::HorsesRepository;
pub use owners_repo::OwnersRepository;
