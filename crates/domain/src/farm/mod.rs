mod entity;
mod repository;

pub use entity::{Farm, Sector};
pub use repository::FarmRepository;
