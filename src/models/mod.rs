pub mod event;
pub mod pagination;
pub mod participant;

pub use event::*;
pub use pagination::*;
pub use participant::*;
