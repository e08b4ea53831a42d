mod entity;
mod repository;

pub use entity::{SiteVisit, VisitStatus};
pub use repository::SiteVisitRepository;
