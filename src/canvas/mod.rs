mod client;
pub mod models;

pub use client::CanvasClient;
pub use models::{Assignment, CalendarEvent, Course};
