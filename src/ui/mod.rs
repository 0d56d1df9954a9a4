//! UI rendering modules for the Guildhall client.
//!
//! - `panels`: Sidebar rows for servers and channels
//! - `dialogs`: Modal dialogs (edit channel) and status toasts

pub mod dialogs;
pub mod panels;
