pub mod draw_service;
pub mod record_builder;

pub use draw_service::DrawService;
pub use record_builder::build_records;
