pub mod constants;
pub mod logger;
pub mod messages;
pub mod selection;
pub mod types;
pub mod viewport;
pub mod visible_set;
