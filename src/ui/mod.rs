pub mod app;
pub mod components;
pub mod events;
pub mod paste;
pub mod terminal_guard;

pub use app::App;
pub use events::{Focus, Status};
