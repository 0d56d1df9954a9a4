//! Guildhall Client library.
//!
//! This module re-exports the core components for testing and extension.

pub mod api;
pub mod app;
pub mod backend;
pub mod channel_form;
pub mod config;
pub mod dialog_manager;
pub mod events;
pub mod logging;
pub mod modal;
pub mod model;
pub mod protocol;
pub mod state;
pub mod ui;
pub mod validation;
