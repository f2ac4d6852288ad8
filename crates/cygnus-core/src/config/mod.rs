// Cygnus Build Configuration
// Build-time flags of the keyboard firmware, loadable from TOML

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::dispatch::Dispatcher;
use crate::keymap::{Keymap, Variant, COMBOS};
use crate::layer::LAYER_SLOTS;

/// Build-time configuration of the firmware.
///
/// Loaded from a TOML file (default: ~/.config/cygnus/config.toml). Every
/// field is optional; missing fields keep the shipped values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// The left half is the USB master
    pub master_left: bool,
    /// Layers reserved in on-device keymap storage
    pub dynamic_keymap_layer_count: u8,
    /// Press duration separating a tap from a hold
    pub tapping_term_ms: u16,
    pub permissive_hold: bool,
    /// Number of combos the firmware allocates
    pub combo_count: usize,
    /// Window in which combo keys must all be pressed
    pub combo_term_ms: u16,
    pub mousekey: MousekeyConfig,
    pub features: FeatureFlags,
    /// Which layer Lower + Raise reaches
    pub variant: Variant,

    #[serde(skip)]
    source_path: Option<PathBuf>,
}

/// Mouse-emulation acceleration parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MousekeyConfig {
    pub delay: u16,
    pub interval: u16,
    pub max_speed: u8,
    pub time_to_max: u8,
}

/// Optional firmware subsystems; all disabled in the shipped build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeatureFlags {
    pub rgblight: bool,
    pub rgb_matrix: bool,
    pub music_mode: bool,
    pub action_macro: bool,
    pub action_function: bool,
    pub oneshot: bool,
    pub console: bool,
}

impl FeatureFlags {
    /// Names of the enabled subsystems
    pub fn enabled(&self) -> Vec<&'static str> {
        [
            ("rgblight", self.rgblight),
            ("rgb_matrix", self.rgb_matrix),
            ("music_mode", self.music_mode),
            ("action_macro", self.action_macro),
            ("action_function", self.action_function),
            ("oneshot", self.oneshot),
            ("console", self.console),
        ]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
        .collect()
    }
}

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl Default for MousekeyConfig {
    fn default() -> Self {
        Self {
            delay: 0,
            interval: 16,
            max_speed: 3,
            time_to_max: 32,
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            master_left: true,
            dynamic_keymap_layer_count: LAYER_SLOTS as u8,
            tapping_term_ms: crate::dispatch::TAPPING_TERM,
            permissive_hold: true,
            combo_count: COMBOS.len(),
            combo_term_ms: 30,
            mousekey: MousekeyConfig::default(),
            features: FeatureFlags::default(),
            variant: Variant::Standard,
            source_path: None,
        }
    }
}

impl BuildConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path)?;
        let mut config = Self::from_toml(&content)?;
        config.source_path = Some(path.as_ref().to_path_buf());
        Ok(config)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::TomlParse(e.to_string()))
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cygnus").join("config.toml"))
    }

    /// Load from the default location, falling back to the shipped values
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(path),
            Some(path) => {
                log::warn!("No config at {}, using built-in defaults", path.display());
                Ok(Self::default())
            }
            None => {
                log::warn!("No config directory available, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load `path` if given, the default location otherwise
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::load_default(),
        }
    }

    /// File this configuration was read from, if any
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Re-read the file this configuration came from
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        let path = self
            .source_path
            .clone()
            .ok_or_else(|| ConfigError::Invalid("No source path set".to_string()))?;
        *self = Self::from_file(path)?;
        Ok(())
    }

    /// Check the values against what the keymap needs
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tapping_term_ms == 0 {
            return Err(ConfigError::Invalid(
                "tapping_term_ms must be greater than zero".to_string(),
            ));
        }
        if self.combo_count != COMBOS.len() {
            return Err(ConfigError::Invalid(format!(
                "combo_count is {} but the keymap defines {} combos",
                self.combo_count,
                COMBOS.len()
            )));
        }
        if (self.dynamic_keymap_layer_count as usize) < LAYER_SLOTS {
            return Err(ConfigError::Invalid(format!(
                "dynamic_keymap_layer_count is {} but the {} keymap uses {} layers",
                self.dynamic_keymap_layer_count, self.variant, LAYER_SLOTS
            )));
        }
        if self.mousekey.max_speed == 0 {
            return Err(ConfigError::Invalid(
                "mousekey.max_speed must be greater than zero".to_string(),
            ));
        }
        if self.combo_term_ms >= self.tapping_term_ms {
            log::warn!(
                "combo_term_ms ({}) is not shorter than tapping_term_ms ({})",
                self.combo_term_ms,
                self.tapping_term_ms
            );
        }
        Ok(())
    }

    /// The same configuration with a different keymap variant
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn keymap(&self) -> Keymap {
        Keymap::new(self.variant)
    }

    /// Dispatcher using this configuration's tapping term
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::with_tapping_term(self.tapping_term_ms)
    }
}

/// Configuration file matching the shipped firmware build
pub fn default_config_content() -> &'static str {
    r#"# Cygnus V1 build configuration
# Place this file at: ~/.config/cygnus/config.toml

master_left = true
dynamic_keymap_layer_count = 5
tapping_term_ms = 200
permissive_hold = true
combo_count = 3
combo_term_ms = 30

# "standard" puts system controls on Lower + Raise,
# "terminal" puts terminal tab/pane shortcuts there
variant = "standard"

[mousekey]
delay = 0
interval = 16
max_speed = 3
time_to_max = 32

[features]
rgblight = false
rgb_matrix = false
music_mode = false
action_macro = false
action_function = false
oneshot = false
console = false
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = BuildConfig::default();
        assert!(config.master_left);
        assert_eq!(config.tapping_term_ms, 200);
        assert_eq!(config.combo_term_ms, 30);
        assert_eq!(config.combo_count, 3);
        assert_eq!(config.dynamic_keymap_layer_count, 5);
        assert_eq!(config.mousekey.max_speed, 3);
        assert_eq!(config.mousekey.time_to_max, 32);
        assert!(config.features.enabled().is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_content_matches_default() {
        let config = BuildConfig::from_toml(default_config_content()).unwrap();
        assert_eq!(config, BuildConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
tapping_term_ms = 180
variant = "terminal"

[mousekey]
max_speed = 6
"#;
        let config = BuildConfig::from_toml(toml).unwrap();
        assert_eq!(config.tapping_term_ms, 180);
        assert_eq!(config.variant, Variant::Terminal);
        assert_eq!(config.mousekey.max_speed, 6);
        assert_eq!(config.mousekey.interval, 16);
        assert_eq!(config.combo_term_ms, 30);
        assert_eq!(config.dispatcher().tapping_term(), 180);
        assert_eq!(config.keymap().variant(), Variant::Terminal);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = BuildConfig::from_toml("tapping_term = 200").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));

        let err = BuildConfig::from_toml("[features]\noled = true").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_bad_variant_rejected() {
        let err = BuildConfig::from_toml(r#"variant = "vial""#).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_validate_rejects() {
        let zero_term = BuildConfig {
            tapping_term_ms: 0,
            ..BuildConfig::default()
        };
        assert!(matches!(zero_term.validate(), Err(ConfigError::Invalid(_))));

        let combos = BuildConfig {
            combo_count: 4,
            ..BuildConfig::default()
        };
        assert!(matches!(combos.validate(), Err(ConfigError::Invalid(_))));

        let layers = BuildConfig {
            dynamic_keymap_layer_count: 4,
            ..BuildConfig::default()
        };
        assert!(matches!(layers.validate(), Err(ConfigError::Invalid(_))));

        let mut mouse = BuildConfig::default();
        mouse.mousekey.max_speed = 0;
        assert!(matches!(mouse.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_enabled_features() {
        let toml = "[features]\nconsole = true\nrgb_matrix = true\n";
        let config = BuildConfig::from_toml(toml).unwrap();
        assert_eq!(config.features.enabled(), vec!["rgb_matrix", "console"]);
    }

    #[test]
    fn test_with_variant() {
        let config = BuildConfig::default().with_variant(Variant::Terminal);
        assert_eq!(config.variant, Variant::Terminal);
        assert_eq!(config.tapping_term_ms, 200);
        assert_eq!(config.keymap().variant(), Variant::Terminal);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reload_without_source() {
        let mut config = BuildConfig::default();
        assert!(config.reload().is_err());
        assert!(config.source_path().is_none());
    }
}
