use anyhow::{Context, ensure};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::prefs::{FONT_SCALE_PERCENT, FontStep};
use crate::storage::DEFAULT_STORAGE_KEY;

const DEFAULT_A11Y_DATA: &str = include_str!("../../tribal-web/static/assets/data/a11y.json");

static STATIC_CONFIG: Lazy<A11yConfig> = Lazy::new(|| {
    A11yConfig::from_json(DEFAULT_A11Y_DATA).unwrap_or_else(|err| {
        log::warn!("using built-in accessibility config: {err:#}");
        A11yConfig::default()
    })
});

/// Deployment settings for the preference engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct A11yConfig {
    /// Storage slot holding the persisted preferences.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Root font size in percent for each font step, baseline first.
    #[serde(default = "default_font_scales")]
    pub font_scales: Vec<u16>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_font_scales() -> Vec<u16> {
    FONT_SCALE_PERCENT.to_vec()
}

impl Default for A11yConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            font_scales: default_font_scales(),
        }
    }
}

impl A11yConfig {
    /// Parse and validate a config document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails [`Self::validate`].
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("parsing accessibility config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage key is blank or the font scales are not
    /// five strictly ascending percentages starting at 100.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            !self.storage_key.trim().is_empty(),
            "storage_key must not be empty"
        );
        ensure!(
            self.font_scales.len() == FontStep::ALL.len(),
            "font_scales needs {} entries (got {})",
            FontStep::ALL.len(),
            self.font_scales.len()
        );
        ensure!(
            self.font_scales.first() == Some(&100),
            "font_scales must start at 100"
        );
        ensure!(
            self.font_scales.windows(2).all(|pair| pair[0] < pair[1]),
            "font_scales must be strictly ascending"
        );
        Ok(())
    }

    /// The config embedded from `a11y.json`, or the built-in defaults when
    /// that file does not validate.
    #[must_use]
    pub fn default_config() -> Self {
        STATIC_CONFIG.clone()
    }

    /// Root font size for a step, falling back to the built-in table.
    #[must_use]
    pub fn font_scale(&self, step: FontStep) -> u16 {
        self.font_scales
            .get(usize::from(step.get()))
            .copied()
            .unwrap_or_else(|| step.scale_percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_config_matches_built_in_defaults() {
        assert_eq!(A11yConfig::default_config(), A11yConfig::default());
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = A11yConfig::from_json("{}").unwrap();
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.font_scale(FontStep::new(2)), 125);
    }

    #[test]
    fn rejects_unusable_configs() {
        let cases = [
            r#"{"storage_key": "  "}"#,
            r#"{"font_scales": [100, 110]}"#,
            r#"{"font_scales": [90, 100, 110, 120, 130]}"#,
            r#"{"font_scales": [100, 120, 120, 130, 140]}"#,
            "not json",
        ];
        for json in cases {
            assert!(A11yConfig::from_json(json).is_err(), "{json} should fail");
        }
    }

    #[test]
    fn custom_scales_are_used_per_step() {
        let config = A11yConfig::from_json(
            r#"{"storage_key": "site.prefs", "font_scales": [100, 110, 120, 130, 140]}"#,
        )
        .unwrap();
        assert_eq!(config.storage_key, "site.prefs");
        assert_eq!(config.font_scale(FontStep::MAX), 140);
    }
}
