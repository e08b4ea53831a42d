mod entity;
mod repository;

pub use entity::{Role, User};
pub use repository::UserRepository;
