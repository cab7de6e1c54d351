pub mod models;
pub mod service;

pub use models::BookingOutcome;
pub use service::BookingService;
