pub mod controller;
pub mod prompt;
pub mod state;

pub use controller::DashboardController;
pub use prompt::{BrowserPrompt, UserPrompt};
pub use state::{DashboardAction, DashboardState, EditorMode, ListView};
