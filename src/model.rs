//! Server and channel data as the API reports it.
//!
//! These are read-only views of backend-owned records; the client only
//! proposes edits through [`ChannelUpdate`].

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::validation::{parse_channel_type, ChannelTypeError};

/// Kind of a channel. Wire values are the variant names verbatim.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub enum ChannelType {
    #[default]
    Text,
    Audio,
    Video,
}

impl ChannelType {
    /// Every channel type, in selector order.
    pub const ALL: [ChannelType; 3] = [ChannelType::Text, ChannelType::Audio, ChannelType::Video];

    /// The raw enum constant sent to the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelType::Text => "Text",
            ChannelType::Audio => "Audio",
            ChannelType::Video => "Video",
        }
    }

    /// Human-readable label for the type selector.
    pub fn label(&self) -> String {
        crate::validation::channel_type_label(self.as_str())
    }
}

impl TryFrom<String> for ChannelType {
    type Error = ChannelTypeError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        parse_channel_type(&raw)
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named communication sub-unit within a server.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Channel {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub channel_type: ChannelType,
}

impl Channel {
    pub fn new(id: &str, name: &str, channel_type: ChannelType) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            channel_type,
        }
    }

    /// Apply an accepted update in place.
    pub fn apply(&mut self, update: &ChannelUpdate) {
        self.name = update.name.clone();
        self.channel_type = update.channel_type;
    }
}

/// A top-level container of channels.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Server {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "skip_invalid_channels")]
    pub channels: Vec<Channel>,
}

/// Keep the channels that parse; drop and log the rest.
fn skip_invalid_channels<'de, D>(deserializer: D) -> Result<Vec<Channel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<Channel>(value) {
            Ok(channel) => Some(channel),
            Err(e) => {
                warn!("Skipping cached channel: {}", e);
                None
            }
        })
        .collect())
}

impl Server {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            channels: Vec::new(),
        }
    }

    pub fn channel_mut(&mut self, channel_id: &str) -> Option<&mut Channel> {
        self.channels.iter_mut().find(|c| c.id == channel_id)
    }
}

/// Validated payload of a channel edit: `{"name": ..., "type": ...}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChannelUpdate {
    pub name: String,
    #[serde(rename = "type")]
    pub channel_type: ChannelType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_type_wire_values() {
        assert_eq!(serde_json::to_string(&ChannelType::Text).unwrap(), "\"Text\"");
        assert_eq!(serde_json::to_string(&ChannelType::Video).unwrap(), "\"Video\"");
        let parsed: ChannelType = serde_json::from_str("\"Audio\"").unwrap();
        assert_eq!(parsed, ChannelType::Audio);
        let err = serde_json::from_str::<ChannelType>("\"Forum\"").unwrap_err();
        assert!(err.to_string().contains("Invalid channel type"));
    }

    #[test]
    fn test_update_body_shape() {
        let update = ChannelUpdate {
            name: "rules-updated".to_string(),
            channel_type: ChannelType::Text,
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"name": "rules-updated", "type": "Text"})
        );
    }

    #[test]
    fn test_channel_apply() {
        let mut channel = Channel::new("c1", "rules", ChannelType::Text);
        channel.apply(&ChannelUpdate {
            name: "voice".to_string(),
            channel_type: ChannelType::Audio,
        });
        assert_eq!(channel.name, "voice");
        assert_eq!(channel.channel_type, ChannelType::Audio);
        assert_eq!(channel.id, "c1");
    }

    #[test]
    fn test_server_skips_channels_with_unknown_type() {
        let server: Server = serde_json::from_str(
            r#"{"id":"s1","name":"Home","channels":[
                {"id":"c1","name":"rules","type":"Text"},
                {"id":"c2","name":"lobby","type":"TEXT"},
                {"id":"c3","name":"voice","type":"Audio"}
            ]}"#,
        )
        .unwrap();
        let ids: Vec<&str> = server.channels.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c1", "c3"]);
    }

    #[test]
    fn test_server_deserializes_without_channels() {
        let server: Server = serde_json::from_str(r#"{"id":"s1","name":"Home"}"#).unwrap();
        assert!(server.channels.is_empty());
    }
}
