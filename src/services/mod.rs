pub mod draw_service;
pub mod event_service;
pub mod participant_service;

pub use draw_service::*;
pub use event_service::*;
pub use participant_service::*;
