pub mod assignment;
pub mod draw;
pub mod event;
pub mod participant;

pub use assignment::assignment_config;
pub use draw::draw_config;
pub use event::event_config;
pub use participant::participant_config;
