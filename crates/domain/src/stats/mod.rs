mod entity;
mod repository;

pub use entity::{EmploymentType, FarmEmployeeStats};
pub use repository::EmployeeStatsRepository;
