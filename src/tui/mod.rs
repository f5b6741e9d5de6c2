//! Terminal User Interface module
//!
//! A ratatui form interface: an expense table with an add form, a summary
//! popup with a bar chart, and a help overlay.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
