pub mod horse;
pub mod owner;

pub use horse::HorseSex;
