//! The few preferences the launcher needs, read from a `terminalrc` file.
//!
//! ```text
//! [Configuration]
//! MiscDefaultGeometry=100x30
//! MiscDefaultWorkingDir=/home/me/src
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LaunchError, Result};

pub const DEFAULT_GEOMETRY: &str = "80x24";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub default_geometry: String,
    pub default_working_directory: Option<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            default_geometry: DEFAULT_GEOMETRY.to_string(),
            default_working_directory: None,
        }
    }
}

impl Preferences {
    /// `$TERMLAUNCH_RC`, else `<config dir>/termlaunch/terminalrc`.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os("TERMLAUNCH_RC") {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("termlaunch").join("terminalrc"))
    }

    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// A missing file is not an error; it just means defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no preferences file");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        Self::parse(&content, path)
    }

    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let mut prefs = Self::default();

        for (n, line) in content.lines().enumerate() {
            let l = line.trim();
            if l.is_empty() || l.starts_with('#') || l.starts_with(';') {
                continue;
            }
            if l.starts_with('[') {
                if !l.ends_with(']') {
                    return Err(bad_line(path, n, "unterminated section header"));
                }
                continue;
            }
            let Some((key, value)) = l.split_once('=') else {
                return Err(bad_line(path, n, "expected key=value"));
            };
            let value = value.trim();

            match key.trim() {
                "MiscDefaultGeometry" => {
                    if !value.is_empty() {
                        prefs.default_geometry = value.to_string();
                    }
                }
                "MiscDefaultWorkingDir" => {
                    prefs.default_working_directory =
                        (!value.is_empty()).then(|| value.to_string());
                }
                _ => {}
            }
        }

        Ok(prefs)
    }
}

fn bad_line(path: &Path, index: usize, message: &str) -> LaunchError {
    LaunchError::Preferences {
        path: path.to_path_buf(),
        line: index + 1,
        message: message.to_string(),
    }
}
