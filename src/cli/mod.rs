//! CLI command handlers
//!
//! This module contains the text menu and the one-shot subcommand handlers,
//! bridging user input with the expense service.

pub mod expense;
pub mod menu;

pub use expense::{handle_add, handle_list, handle_summary};
pub use menu::{choose_interface, run_menu, InterfaceChoice};
