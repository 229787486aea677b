//! Best-score persistence.
//!
//! A single small JSON file in the platform config directory. Losing or
//! corrupting it only costs the recorded best, so loading falls back to
//! a fresh default instead of failing.

use chrono::Utc;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

/// The best score recorded on this installation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HighScore {
    pub best: f64,
    /// Unix timestamp of when the best was set.
    pub recorded_at: i64,
}

impl HighScore {
    pub fn new(best: f64) -> Self {
        Self {
            best,
            recorded_at: Utc::now().timestamp(),
        }
    }
}

impl Default for HighScore {
    fn default() -> Self {
        Self {
            best: 0.0,
            recorded_at: 0,
        }
    }
}

/// Loads and stores the high-score file.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Set up the save location under the platform config directory.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "skyward").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            save_path: config_dir.join("highscore.json"),
        })
    }

    /// Load the stored best. A missing or unreadable file is a fresh start.
    pub fn load(&self) -> HighScore {
        fs::read_to_string(&self.save_path)
            .ok()
            .and_then(|data| serde_json::from_str(&data).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, high_score: &HighScore) -> io::Result<()> {
        let data = serde_json::to_string_pretty(high_score)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.save_path, data)
    }
}
