//! Form state for editing a channel's name and type.
//!
//! Fields are bound one-way: the UI reads `name`/`channel_type` and writes
//! back through the `set_*` handlers, which also clear that field's error.

use crate::model::{Channel, ChannelType, ChannelUpdate};
use crate::validation::{validate_channel_form, FieldErrors};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelForm {
    pub name: String,
    pub channel_type: ChannelType,
    pub errors: FieldErrors,
}

impl ChannelForm {
    /// Empty form: `{ name: "", type: Text }`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy a channel's current values into the fields.
    pub fn populate(&mut self, channel: &Channel) {
        self.name = channel.name.clone();
        self.channel_type = channel.channel_type;
        self.errors = FieldErrors::default();
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
        self.errors.name = None;
    }

    pub fn set_channel_type(&mut self, channel_type: ChannelType) {
        self.channel_type = channel_type;
    }

    /// Clear fields and errors back to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Run validation, recording errors on failure.
    pub fn validate(&mut self) -> Option<ChannelUpdate> {
        match validate_channel_form(&self.name, self.channel_type) {
            Ok(update) => {
                self.errors = FieldErrors::default();
                Some(update)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }
}
