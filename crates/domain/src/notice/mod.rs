mod entity;
mod repository;

pub use entity::Notice;
pub use repository::NoticeRepository;
