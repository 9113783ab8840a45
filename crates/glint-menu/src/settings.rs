//! Persistent settings, stored as a JSON document.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// ── document ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoSettings {
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    pub fps: u32,
    pub show_fps: bool,
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self { width: 1280, height: 720, vsync: true, fps: 60, show_fps: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// 0..=100
    pub volume: i32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self { volume: 50 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageSettings {
    pub active: String,
    /// Language code → text key → text.
    pub texts: BTreeMap<String, BTreeMap<String, String>>,
}

impl Default for LanguageSettings {
    fn default() -> Self {
        let en = [
            ("title", "Settings"),
            ("volume", "Volume"),
            ("vsync", "VSync"),
            ("fps_cap", "FPS cap"),
            ("show_fps", "Show FPS"),
            ("on", "On"),
            ("off", "Off"),
            ("name", "Name"),
            ("password", "Password"),
            ("quit", "Quit"),
        ];
        let en = en.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Self { active: "en".into(), texts: BTreeMap::from([("en".to_string(), en)]) }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameData {
    pub player_name: String,
}

/// The whole settings file.
///
/// Sections this program does not know about are kept and written back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsDocument {
    pub video: VideoSettings,
    pub audio: AudioSettings,
    pub language: LanguageSettings,
    pub game_data: GameData,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum SettingsError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    Serialize(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io { path, source } => {
                write!(f, "settings I/O error on '{}': {}", path.display(), source)
            }
            SettingsError::Parse { path, source } => {
                write!(f, "invalid settings file '{}': {}", path.display(), source)
            }
            SettingsError::Serialize(e) => write!(f, "failed to serialize settings: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io { source, .. } => Some(source),
            SettingsError::Parse { source, .. } => Some(source),
            SettingsError::Serialize(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Serialize(e)
    }
}

// ── store ─────────────────────────────────────────────────────────────────

/// Typed access to the settings document. Every setter persists.
pub trait SettingsStore {
    fn document(&self) -> &SettingsDocument;

    /// Applies `edit` and persists the result.
    fn update(&mut self, edit: &mut dyn FnMut(&mut SettingsDocument)) -> Result<(), SettingsError>;

    fn video(&self) -> &VideoSettings {
        &self.document().video
    }

    fn audio(&self) -> &AudioSettings {
        &self.document().audio
    }

    /// Text for `key` in the active language, or `key` itself when missing.
    fn text<'a>(&'a self, key: &'a str) -> &'a str {
        let lang = &self.document().language;
        lang.texts
            .get(&lang.active)
            .and_then(|t| t.get(key))
            .map_or(key, String::as_str)
    }

    fn set_volume(&mut self, volume: i32) -> Result<(), SettingsError> {
        self.update(&mut |d| d.audio.volume = volume.clamp(0, 100))
    }

    fn set_resolution(&mut self, width: u32, height: u32, vsync: bool) -> Result<(), SettingsError> {
        self.update(&mut |d| {
            d.video.width = width;
            d.video.height = height;
            d.video.vsync = vsync;
        })
    }

    fn set_vsync(&mut self, vsync: bool) -> Result<(), SettingsError> {
        self.update(&mut |d| d.video.vsync = vsync)
    }

    fn set_fps(&mut self, fps: u32) -> Result<(), SettingsError> {
        self.update(&mut |d| d.video.fps = fps)
    }

    fn set_show_fps(&mut self, show: bool) -> Result<(), SettingsError> {
        self.update(&mut |d| d.video.show_fps = show)
    }

    fn set_player_name(&mut self, name: &str) -> Result<(), SettingsError> {
        self.update(&mut |d| d.game_data.player_name = name.to_string())
    }
}

/// Settings backed by a pretty-printed JSON file, rewritten on every change.
#[derive(Debug)]
pub struct JsonSettings {
    path: PathBuf,
    doc: SettingsDocument,
}

impl JsonSettings {
    /// Reads `path`, or starts from defaults when the file does not exist.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let doc = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|source| SettingsError::Parse { path: path.clone(), source })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("no settings at {}, using defaults", path.display());
                SettingsDocument::default()
            }
            Err(source) => return Err(SettingsError::Io { path, source }),
        };
        Ok(Self { path, doc })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `doc` to the settings file, creating parent directories.
    fn write(&self, doc: &SettingsDocument) -> Result<(), SettingsError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .map_err(|source| SettingsError::Io { path: dir.to_path_buf(), source })?;
        }

        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        doc.serialize(&mut ser)?;

        fs::write(&self.path, out)
            .map_err(|source| SettingsError::Io { path: self.path.clone(), source })?;
        log::debug!("settings saved to {}", self.path.display());
        Ok(())
    }
}

impl SettingsStore for JsonSettings {
    fn document(&self) -> &SettingsDocument {
        &self.doc
    }

    /// The in-memory document only changes once the edited copy is on disk.
    fn update(&mut self, edit: &mut dyn FnMut(&mut SettingsDocument)) -> Result<(), SettingsError> {
        let mut doc = self.doc.clone();
        edit(&mut doc);
        self.write(&doc)?;
        self.doc = doc;
        Ok(())
    }
}
