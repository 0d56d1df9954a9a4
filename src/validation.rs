//! Input validation for the channel edit form.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::model::{ChannelType, ChannelUpdate};

/// Why a channel name was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelNameError {
    #[error("Channel Name Required")]
    Required,
    #[error("Channel name cannot be 'general'")]
    ReservedLowercase,
    #[error("Channel name cannot be 'General'")]
    ReservedCapitalized,
}

/// A channel type string outside the known set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid channel type")]
pub struct ChannelTypeError(pub String);

/// Field-keyed validation errors for the edit form.
///
/// The form holds its type as a [`ChannelType`], so only the name can be
/// invalid there. Raw type strings are rejected earlier, when channel data is
/// deserialized (see [`parse_channel_type`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<ChannelNameError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

/// Validates a channel name for the edit form.
///
/// Only the two exact spellings "general" and "General" are reserved;
/// other casings pass. Names are not trimmed.
pub fn validate_channel_name(name: &str) -> Result<(), ChannelNameError> {
    if name.is_empty() {
        return Err(ChannelNameError::Required);
    }
    if name == "general" {
        return Err(ChannelNameError::ReservedLowercase);
    }
    if name == "General" {
        return Err(ChannelNameError::ReservedCapitalized);
    }
    Ok(())
}

/// Parses a raw channel type constant ("Text", "Audio", "Video").
pub fn parse_channel_type(raw: &str) -> Result<ChannelType, ChannelTypeError> {
    ChannelType::ALL
        .iter()
        .copied()
        .find(|t| t.as_str() == raw)
        .ok_or_else(|| ChannelTypeError(raw.to_string()))
}

/// Validates the whole form and produces the request payload.
pub fn validate_channel_form(
    name: &str,
    channel_type: ChannelType,
) -> Result<ChannelUpdate, FieldErrors> {
    let errors = FieldErrors {
        name: validate_channel_name(name).err(),
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ChannelUpdate {
        name: name.to_string(),
        channel_type,
    })
}

static WORD_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w").expect("static regex"));

/// Uppercases the first character of every word.
pub fn capitalize_words(s: &str) -> String {
    WORD_START
        .replace_all(s, |caps: &regex::Captures| caps[0].to_uppercase())
        .into_owned()
}

/// Selector label for a raw channel type value: "AUDIO" -> "Audio".
pub fn channel_type_label(raw: &str) -> String {
    capitalize_words(&raw.to_lowercase())
}
