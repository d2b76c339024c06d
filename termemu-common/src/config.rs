// Copyright (C) 2026 the termemu authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use directories::BaseDirs;

/// ---------------------------------------------------------------------------------------------
///  Top-level Config Structure
/// ---------------------------------------------------------------------------------------------
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub version: u32,
    pub scrollback_max_lines: usize,
    pub answerback: String,
    pub hard_backspace: bool,
    pub line_wrap: bool,
    pub origin_mode: bool,
    pub insert_mode: bool,
    pub display_null: bool,
    pub bracketed_paste_mode: bool,
    pub line_feed_on_cr: bool,
    pub assume_80_columns: bool,
    pub avatar: AvatarConfig,
    pub petscii: PetsciiConfig,
    pub atascii: AtasciiConfig,
    pub vt52: Vt52Config,
    pub vt100: Vt100Config,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            scrollback_max_lines: 2000,
            answerback: String::new(),
            hard_backspace: false,
            line_wrap: true,
            origin_mode: false,
            insert_mode: false,
            display_null: false,
            bracketed_paste_mode: false,
            line_feed_on_cr: false,
            assume_80_columns: true,
            avatar: AvatarConfig::default(),
            petscii: PetsciiConfig::default(),
            atascii: AtasciiConfig::default(),
            vt52: Vt52Config::default(),
            vt100: Vt100Config::default(),
        }
    }
}

/// ---------------------------------------------------------------------------------------------
///  AVATAR
/// ---------------------------------------------------------------------------------------------
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    pub color: bool,
    pub ansi_fallback: bool,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            color: true,
            ansi_fallback: true,
        }
    }
}

/// ---------------------------------------------------------------------------------------------
///  PETSCII
/// ---------------------------------------------------------------------------------------------
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PetsciiConfig {
    pub color: bool,
    pub ansi_fallback: bool,
    pub is_c64: bool,
    pub wide_font: bool,
}

impl Default for PetsciiConfig {
    fn default() -> Self {
        Self {
            color: true,
            ansi_fallback: true,
            is_c64: true,
            wide_font: false,
        }
    }
}

/// ---------------------------------------------------------------------------------------------
///  ATASCII
/// ---------------------------------------------------------------------------------------------
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AtasciiConfig {
    pub wide_font: bool,
}

impl Default for AtasciiConfig {
    fn default() -> Self {
        Self { wide_font: false }
    }
}

/// ---------------------------------------------------------------------------------------------
///  VT52 / VT100
/// ---------------------------------------------------------------------------------------------
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Vt52Config {
    pub color: bool,
}

impl Default for Vt52Config {
    fn default() -> Self {
        Self { color: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Vt100Config {
    pub color: bool,
}

impl Default for Vt100Config {
    fn default() -> Self {
        Self { color: true }
    }
}

/// ---------------------------------------------------------------------------------------------
///  Partial config (for layered merging)
/// ---------------------------------------------------------------------------------------------
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigPartial {
    pub version: Option<u32>,
    pub scrollback_max_lines: Option<usize>,
    pub answerback: Option<String>,
    pub hard_backspace: Option<bool>,
    pub line_wrap: Option<bool>,
    pub origin_mode: Option<bool>,
    pub insert_mode: Option<bool>,
    pub display_null: Option<bool>,
    pub bracketed_paste_mode: Option<bool>,
    pub line_feed_on_cr: Option<bool>,
    pub assume_80_columns: Option<bool>,
    pub avatar: Option<AvatarConfig>,
    pub petscii: Option<PetsciiConfig>,
    pub atascii: Option<AtasciiConfig>,
    pub vt52: Option<Vt52Config>,
    pub vt100: Option<Vt100Config>,
}

impl Config {
    fn apply_partial(&mut self, partial: ConfigPartial) {
        if let Some(v) = partial.version {
            self.version = v;
        }
        if let Some(v) = partial.scrollback_max_lines {
            self.scrollback_max_lines = v;
        }
        if let Some(v) = partial.answerback {
            self.answerback = v;
        }
        if let Some(v) = partial.hard_backspace {
            self.hard_backspace = v;
        }
        if let Some(v) = partial.line_wrap {
            self.line_wrap = v;
        }
        if let Some(v) = partial.origin_mode {
            self.origin_mode = v;
        }
        if let Some(v) = partial.insert_mode {
            self.insert_mode = v;
        }
        if let Some(v) = partial.display_null {
            self.display_null = v;
        }
        if let Some(v) = partial.bracketed_paste_mode {
            self.bracketed_paste_mode = v;
        }
        if let Some(v) = partial.line_feed_on_cr {
            self.line_feed_on_cr = v;
        }
        if let Some(v) = partial.assume_80_columns {
            self.assume_80_columns = v;
        }
        if let Some(v) = partial.avatar {
            self.avatar = v;
        }
        if let Some(v) = partial.petscii {
            self.petscii = v;
        }
        if let Some(v) = partial.atascii {
            self.atascii = v;
        }
        if let Some(v) = partial.vt52 {
            self.vt52 = v;
        }
        if let Some(v) = partial.vt100 {
            self.vt100 = v;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 {
            return Err(ConfigError::Validation("version must be >= 1".to_string()));
        }

        if self.scrollback_max_lines == 0 {
            return Err(ConfigError::Validation(
                "scrollback_max_lines must be >= 1".to_string(),
            ));
        }

        if !self.answerback.is_ascii() {
            return Err(ConfigError::Validation(
                "answerback must be ASCII".to_string(),
            ));
        }

        Ok(())
    }
}

/// ---------------------------------------------------------------------------------------------
///  Errors
/// ---------------------------------------------------------------------------------------------
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// ---------------------------------------------------------------------------------------------
///  Public loader
/// ---------------------------------------------------------------------------------------------
/// Loads the configuration by applying layers in the following order (later layers override
/// earlier ones): system config, user config, `TERMEMU_CONFIG` env override, explicit CLI path.
///
/// # Errors
/// Returns `ConfigError` if any config file cannot be read or parsed, or if the final config
/// is invalid.
pub fn load_config(explicit_path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut cfg = Config::default();

    // 1. System config (Linux only)
    if let Some(system_path) = system_config_path()
        && system_path.is_file()
    {
        let partial = load_partial(&system_path)?;
        cfg.apply_partial(partial);
    }

    // 2. Platform-specific user config
    if let Some(user_path) = user_config_path()
        && user_path.is_file()
    {
        let partial = load_partial(&user_path)?;
        cfg.apply_partial(partial);
    }

    // 3. TERMEMU_CONFIG= override
    if let Ok(env_path) = env::var("TERMEMU_CONFIG") {
        let path = PathBuf::from(env_path);
        if path.is_file() {
            let partial = load_partial(&path)?;
            cfg.apply_partial(partial);
        }
    }

    // 4. Explicit CLI override
    if let Some(path) = explicit_path
        && path.is_file()
    {
        let partial = load_partial(path)?;
        cfg.apply_partial(partial);
    }

    cfg.validate()?;
    Ok(cfg)
}

/// ---------------------------------------------------------------------------------------------
///  Helpers
/// ---------------------------------------------------------------------------------------------
fn load_partial(path: &Path) -> Result<ConfigPartial, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// ---------------------------------------------------------------------------------------------
///  Platform-specific config paths
/// ---------------------------------------------------------------------------------------------
#[allow(clippy::missing_const_for_fn, clippy::unnecessary_wraps)]
fn system_config_path() -> Option<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        Some(PathBuf::from("/etc/termemu/config.toml"))
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

/// User config paths:
///
/// Linux:   `$XDG_CONFIG_HOME/termemu/config.toml`
/// macOS:   ~/Library/Application Support/termemu/config.toml
/// Windows: %APPDATA%\termemu\config.toml
#[allow(unreachable_code)]
fn user_config_path() -> Option<PathBuf> {
    let base = BaseDirs::new()?;

    #[cfg(target_os = "macos")]
    {
        let mut p = base.data_dir().join("termemu");
        create_dir_if_missing(&p);
        p.push("config.toml");
        return Some(p);
    }

    #[cfg(target_os = "windows")]
    {
        let mut p = base.data_dir().join("termemu");
        create_dir_if_missing(&p);
        p.push("config.toml");
        return Some(p);
    }

    // Linux / BSD / everything else Unix-y
    #[cfg(any(
        target_os = "linux",
        target_os = "freebsd",
        target_os = "dragonfly",
        target_os = "openbsd",
        target_os = "netbsd"
    ))]
    {
        let mut p = base.config_dir().join("termemu");
        create_dir_if_missing(&p);
        p.push("config.toml");
        return Some(p);
    }

    None
}

fn create_dir_if_missing(path: &Path) {
    if !path.exists() {
        let _ = fs::create_dir_all(path);
    }
}
