pub mod screen_messages;
pub mod surface_messages;

pub use screen_messages::*;
pub use surface_messages::*;
