mod entity;
mod repository;

pub use entity::Statement;
pub use repository::StatementRepository;
