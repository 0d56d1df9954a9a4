//! Side panel rendering.

pub mod channel_list;

pub use channel_list::{channel_icon, render_channel_rows};
