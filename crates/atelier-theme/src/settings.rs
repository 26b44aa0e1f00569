//! Theme initialization from persisted appearance settings.
//!
//! The active theme is stored as rows of the `system_settings` table under the
//! `appearance` category:
//!
//! | key | value |
//! |-----|-------|
//! | `custom_theme_light` | `{ "primary": "222 47% 11%", ... }` |
//! | `custom_theme_dark` | `{ "primary": "210 40% 98%", ... }` |
//! | `active_preset` | `"midnight"` |
//!
//! Some rows wrap their payload as `{ "value": ... }`; both shapes are read.
//!
//! Themes saved from older editors may still hold `oklch()` values. Those are
//! re-normalized on load so the stylesheet only ever receives HSL triplets.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::css_parser::parse_theme_from_json;
use crate::error::Result;
use crate::normalize::Warning;
use crate::stylesheet::{StyleTarget, ThemeStylesheet};
use crate::theme::{ColorMode, Theme, ThemeColors};

/// A single persisted setting.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SettingRow {
    pub key: String,
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub category: Option<String>,
}

/// The appearance settings relevant to theming.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppearanceSettings {
    pub light: Map<String, Value>,
    pub dark: Map<String, Value>,
    pub active_preset: Option<String>,
}

/// What [`initialize_theme`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// The stored theme was written to the stylesheet.
    Applied {
        preset: Option<String>,
        warnings: Vec<Warning>,
    },
    /// One side was empty; the stylesheet was not touched.
    Skipped { warnings: Vec<Warning> },
}

/// Unwraps `{ "value": x }` to `x`; other values pass through.
fn unwrap_value(raw: Value) -> Value {
    match raw {
        Value::Object(mut map) if map.contains_key("value") => {
            map.remove("value").unwrap_or(Value::Null)
        }
        other => other,
    }
}

impl AppearanceSettings {
    /// Collects the theme settings from setting rows.
    ///
    /// Rows from a category other than `appearance` are ignored; rows without
    /// a category are assumed to be appearance rows.
    pub fn from_rows(rows: impl IntoIterator<Item = SettingRow>) -> Self {
        let mut settings = AppearanceSettings::default();

        for row in rows {
            if row.category.as_deref().is_some_and(|c| c != "appearance") {
                continue;
            }
            let value = unwrap_value(row.value);
            match row.key.as_str() {
                "custom_theme_light" => {
                    if let Value::Object(map) = value {
                        settings.light = map;
                    }
                }
                "custom_theme_dark" => {
                    if let Value::Object(map) = value {
                        settings.dark = map;
                    }
                }
                "active_preset" => {
                    settings.active_preset = value.as_str().map(str::to_string);
                }
                _ => {}
            }
        }

        settings
    }

    /// Parses a JSON array of setting rows.
    pub fn from_json(json: &str) -> Result<Self> {
        let rows: Vec<SettingRow> = serde_json::from_str(json)?;
        Ok(Self::from_rows(rows))
    }

    /// Whether any stored value still uses OKLCH notation.
    pub fn needs_normalization(&self) -> bool {
        let mentions_oklch = |map: &Map<String, Value>| {
            map.values()
                .filter_map(Value::as_str)
                .any(|s| s.contains("oklch"))
        };
        mentions_oklch(&self.light) || mentions_oklch(&self.dark)
    }

    /// Resolves the stored maps into a theme, re-normalizing when needed.
    pub fn theme(&self) -> (Theme, Vec<Warning>) {
        if self.needs_normalization() {
            let doc = serde_json::json!({
                "cssVars": { "light": self.light, "dark": self.dark }
            });
            if let Some(normalized) = parse_theme_from_json(&doc) {
                return (normalized.value, normalized.warnings);
            }
        }

        let light = ThemeColors::from_stored(&self.light).in_mode(ColorMode::Light);
        let dark = ThemeColors::from_stored(&self.dark).in_mode(ColorMode::Dark);
        let mut warnings = light.warnings;
        warnings.extend(dark.warnings);
        (Theme::new(light.value, dark.value), warnings)
    }
}

/// Applies the persisted theme to the managed stylesheet.
///
/// Nothing is written unless both modes end up with at least one role; the
/// previously active styling stays in place otherwise.
pub fn initialize_theme<T: StyleTarget>(
    settings: &AppearanceSettings,
    stylesheet: &mut ThemeStylesheet<T>,
) -> Result<InitOutcome> {
    let (theme, warnings) = settings.theme();

    if let Some(mode) = theme.empty_mode() {
        tracing::debug!(%mode, "stored theme incomplete, keeping current styling");
        return Ok(InitOutcome::Skipped { warnings });
    }

    stylesheet.apply(&theme)?;
    tracing::info!(
        preset = settings.active_preset.as_deref().unwrap_or("custom"),
        "theme applied"
    );

    Ok(InitOutcome::Applied {
        preset: settings.active_preset.clone(),
        warnings,
    })
}
