pub mod console_surface;
pub mod screen;
