use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::{
    assets::wallpaper::PlacementMode,
    foundation::error::{DeskError, DeskResult},
    foundation::palette::Color,
};

/// Persisted desktop preferences.
///
/// Loaded once at startup; afterwards only [`crate::Desktop::apply_settings`] changes the
/// visual fields.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DesktopSettings {
    pub background: Color,
    pub wallpaper: Option<PathBuf>,
    pub placement: PlacementMode,
    /// 0..=100.
    pub volume: u8,
}

impl Default for DesktopSettings {
    fn default() -> Self {
        Self {
            background: Color::TEAL,
            wallpaper: None,
            placement: PlacementMode::Center,
            volume: 50,
        }
    }
}

impl DesktopSettings {
    /// Parse settings from a JSON reader and validate them.
    pub fn from_reader<R: std::io::Read>(r: R) -> DeskResult<Self> {
        let settings: Self = serde_json::from_reader(r)
            .map_err(|e| DeskError::serde(format!("parse settings JSON: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from a JSON file. A relative wallpaper path resolves against the
    /// file's directory.
    pub fn from_path(path: impl AsRef<Path>) -> DeskResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            DeskError::settings(format!("open settings JSON '{}': {e}", path.display()))
        })?;
        let mut settings = Self::from_reader(BufReader::new(f))?;
        if let (Some(wp), Some(dir)) = (settings.wallpaper.as_ref(), path.parent())
            && wp.is_relative()
        {
            settings.wallpaper = Some(dir.join(wp));
        }
        Ok(settings)
    }

    pub fn validate(&self) -> DeskResult<()> {
        if self.volume > 100 {
            return Err(DeskError::settings(format!(
                "volume must be within 0..=100, got {}",
                self.volume
            )));
        }
        if self.wallpaper.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            return Err(DeskError::settings("wallpaper path must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shell/settings.rs"]
mod tests;
