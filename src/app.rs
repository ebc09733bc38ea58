mod app_events;
mod app_render;
mod app_state;
mod footer_render;


// Re-export public types
pub use app_state::{App, Settings};
