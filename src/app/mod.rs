//! Application module structure for GuildhallApp
//!
//! - `core`: GuildhallApp struct, initialization and persistence
//! - `events`: Event processing from backend
//! - `update`: Main update loop
//! - `dialogs`: Dialog rendering and action dispatch
//! - `ui::panels`: Server/channel sidebar and central view

pub mod core;
pub mod dialogs;
pub mod events;
pub mod update;
pub mod ui;

// Re-export GuildhallApp for public API
pub use core::GuildhallApp;
