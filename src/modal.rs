//! Modal visibility state.
//!
//! `ModalState` says which dialog (if any) is open and carries its payload.
//! It is owned by `ClientState` and handed to the dialog layer explicitly.

use crate::model::{Channel, Server};

/// Which dialog a modal request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    EditChannel,
}

/// Payload attached to an open modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalData {
    pub channel: Option<Channel>,
    pub server: Option<Server>,
}

/// Current modal request: open flag, kind, payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub is_open: bool,
    pub kind: Option<ModalKind>,
    pub data: ModalData,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a modal of the given kind with its payload.
    pub fn open(&mut self, kind: ModalKind, data: ModalData) {
        self.is_open = true;
        self.kind = Some(kind);
        self.data = data;
    }

    /// Close whatever modal is open and drop its payload.
    pub fn on_close(&mut self) {
        self.is_open = false;
        self.kind = None;
        self.data = ModalData::default();
    }

    /// True if a modal of `kind` is currently requested.
    pub fn is_showing(&self, kind: ModalKind) -> bool {
        self.is_open && self.kind == Some(kind)
    }
}
