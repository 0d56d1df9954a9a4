use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::model::Server;

// Default configuration
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/";
pub const KEYRING_SERVICE: &str = "guildhall-client";
const KEYRING_USER: &str = "api-token";

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_theme() -> String {
    "dark".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Settings {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Cached servers and channels shown in the sidebar.
    #[serde(default)]
    pub servers: Vec<Server>,
    #[serde(default)]
    pub active_server: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            theme: default_theme(),
            servers: Vec::new(),
            active_server: None,
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("com", "guildhall", "guildhall-client") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            warn!("Failed to create config dir: {}", e);
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

pub fn load_settings() -> Option<Settings> {
    load_settings_from(&settings_path()?)
}

/// Read settings from `path`.
///
/// A file that fails to parse is renamed to `<path>.bak` so the next save
/// does not overwrite it.
pub fn load_settings_from(path: &Path) -> Option<Settings> {
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(settings) => Some(settings),
        Err(e) => {
            let backup = backup_path(path);
            warn!(path = %path.display(), backup = %backup.display(), "Ignoring unreadable settings: {}", e);
            if let Err(e) = fs::rename(path, &backup) {
                warn!("Failed to back up unreadable settings: {}", e);
            }
            None
        }
    }
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".bak");
    path.with_file_name(name)
}

pub fn save_settings(settings: &Settings) -> std::io::Result<()> {
    match settings_path() {
        Some(path) => save_settings_to(&path, settings),
        None => Ok(()),
    }
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> std::io::Result<()> {
    let data = serde_json::to_string_pretty(settings)?;
    let mut file = fs::File::create(path)?;
    file.write_all(data.as_bytes())
}

/// Read the API bearer token from the system keyring, if one is stored.
pub fn load_api_token() -> Option<String> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER).ok()?;
    match entry.get_password() {
        Ok(token) if !token.is_empty() => Some(token),
        Ok(_) => None,
        Err(keyring::Error::NoEntry) => None,
        Err(e) => {
            warn!("Failed to read API token from keyring: {}", e);
            None
        }
    }
}

/// Remove the stored API token. Succeeds if none was stored.
pub fn clear_api_token() -> Result<(), keyring::Error> {
    match keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER)?.delete_password() {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Channel, ChannelType};

    #[test]
    fn test_defaults_fill_missing_fields() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(settings.theme, "dark");
    }

    #[test]
    fn test_settings_json_shape() {
        let mut server = Server::new("s1", "Home");
        server.channels.push(Channel::new("c1", "rules", ChannelType::Text));
        let settings = Settings {
            servers: vec![server],
            active_server: Some("s1".into()),
            ..Settings::default()
        };

        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(value["servers"][0]["channels"][0]["type"], "Text");
        assert_eq!(value["active_server"], "s1");

        let back: Settings = serde_json::from_value(value).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_unknown_channel_type_keeps_rest_of_settings() {
        let json = r#"{
            "api_base_url": "https://chat.example.com/",
            "theme": "light",
            "servers": [{"id": "s1", "name": "Home", "channels": [
                {"id": "c1", "name": "rules", "type": "Text"},
                {"id": "c2", "name": "lobby", "type": "TEXT"}
            ]}],
            "active_server": "s1"
        }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.api_base_url, "https://chat.example.com/");
        assert_eq!(settings.theme, "light");
        assert_eq!(settings.active_server.as_deref(), Some("s1"));
        assert_eq!(settings.servers[0].channels.len(), 1);
        assert_eq!(settings.servers[0].channels[0].id, "c1");
    }

    #[test]
    fn test_load_and_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut server = Server::new("s1", "Home");
        server.channels.push(Channel::new("c1", "voice", ChannelType::Audio));
        let settings = Settings {
            theme: "light".into(),
            servers: vec![server],
            ..Settings::default()
        };

        save_settings_to(&path, &settings).unwrap();
        assert_eq!(load_settings_from(&path), Some(settings));
        assert_eq!(load_settings_from(&dir.path().join("missing.json")), None);
    }

    #[test]
    fn test_unreadable_settings_are_backed_up() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let original = r#"{"api_base_url": "https://chat.example.com/", "servers": 42}"#;
        fs::write(&path, original).unwrap();

        assert_eq!(load_settings_from(&path), None);
        assert!(!path.exists());
        let backup = dir.path().join("settings.json.bak");
        assert_eq!(fs::read_to_string(&backup).unwrap(), original);

        // Saving defaults afterwards leaves the backup alone
        save_settings_to(&path, &Settings::default()).unwrap();
        assert_eq!(fs::read_to_string(&backup).unwrap(), original);
        assert_eq!(load_settings_from(&path), Some(Settings::default()));
    }

    #[test]
    fn test_settings_path_is_json() {
        if let Some(path) = settings_path() {
            assert!(path.to_string_lossy().ends_with("settings.json"));
        }
    }
}
