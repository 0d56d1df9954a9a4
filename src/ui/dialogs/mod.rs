//! Modal dialogs and windows - self-contained dialog components.
//!
//! Each dialog owns its editing state and returns `DialogAction`s
//! instead of mutating external state directly.
//!
//! # Architecture
//!
//! Dialogs are driven by the `ModalState` held in `ClientState`: the
//! dialog manager hands it to each dialog every frame, and a dialog only
//! draws while the modal names it.

mod actions;
mod edit_channel;
mod status_toasts;

pub use actions::DialogAction;
pub use edit_channel::{EditChannelDialog, SubmitOutcome, SubmitState};
pub use status_toasts::render_status_toasts;
