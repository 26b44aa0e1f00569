//! Key and theme-object normalization.
//!
//! Theme sources name roles in whatever convention their tooling uses:
//! `primaryForeground` in JSON exports, `primary_foreground` in hand-written
//! settings, `--primary-foreground` in stylesheets. Normalization maps all of
//! them onto the closed [`Role`] set and every value onto the canonical HSL
//! triplet.
//!
//! Import is best-effort. An entry that cannot be used never fails the import;
//! it is dropped (unknown key, non-string value) or kept as-is (unparseable
//! color), and a [`Warning`] records what happened so callers can show it.

use std::fmt;

use crate::color::{normalize_color, ColorOutcome};
use crate::role::Role;
use crate::theme::{ColorMode, ThemeColors};

/// What went wrong with a single theme entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// The key does not name a theme role. The entry was dropped.
    UnknownKey,
    /// The value is not a string. The entry was dropped.
    NotAString,
    /// The declaration has no value. The entry was dropped.
    EmptyValue,
    /// No supported color notation matched. The original value was kept.
    UnparseableColor(String),
}

/// A non-fatal problem found while normalizing a theme entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Mode the entry belonged to, when known.
    pub mode: Option<ColorMode>,
    /// The key as it appeared in the source.
    pub key: String,
    pub kind: WarningKind,
}

impl Warning {
    pub fn new(key: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            mode: None,
            key: key.into(),
            kind,
        }
    }

    /// Tags the warning with the mode it came from.
    pub fn in_mode(mut self, mode: ColorMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Whether the entry was left out of the result.
    pub fn is_dropped(&self) -> bool {
        !matches!(self.kind, WarningKind::UnparseableColor(_))
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(mode) = self.mode {
            write!(f, "{}: ", mode)?;
        }
        match &self.kind {
            WarningKind::UnknownKey => write!(f, "'{}' is not a theme role, skipped", self.key),
            WarningKind::NotAString => write!(f, "'{}' has a non-string value, skipped", self.key),
            WarningKind::EmptyValue => write!(f, "'{}' has no value, skipped", self.key),
            WarningKind::UnparseableColor(value) => write!(
                f,
                "'{}' has unrecognized color '{}', kept as-is",
                self.key, value
            ),
        }
    }
}

/// A normalized value together with the warnings produced on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized<T> {
    pub value: T,
    pub warnings: Vec<Warning>,
}

impl<T> Normalized<T> {
    pub fn new(value: T, warnings: Vec<Warning>) -> Self {
        Self { value, warnings }
    }

    /// Tags every warning with `mode`.
    pub fn in_mode(mut self, mode: ColorMode) -> Self {
        self.warnings = self
            .warnings
            .into_iter()
            .map(|warning| warning.in_mode(mode))
            .collect();
        self
    }
}

/// Converts an identifier to kebab-case.
///
/// A hyphen goes between a lowercase letter and a following uppercase letter,
/// underscores become hyphens, and the result is lowercased.
///
/// ```rust
/// use atelier_theme::normalize_theme_key;
///
/// assert_eq!(normalize_theme_key("primaryForeground"), "primary-foreground");
/// assert_eq!(normalize_theme_key("primary_foreground"), "primary-foreground");
/// assert_eq!(normalize_theme_key("chart_1"), "chart-1");
/// ```
pub fn normalize_theme_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev_lower = false;

    for c in key.chars() {
        if prev_lower && c.is_ascii_uppercase() {
            out.push('-');
        }
        prev_lower = c.is_ascii_lowercase();
        if c == '_' {
            out.push('-');
        } else {
            out.push(c);
        }
    }

    out.to_lowercase()
}

/// A raw theme entry value, as found in a source document.
#[derive(Debug, Clone, Copy)]
pub enum RawValue<'a> {
    Str(&'a str),
    Other,
}

impl<'a> From<&'a serde_json::Value> for RawValue<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        match value.as_str() {
            Some(s) => RawValue::Str(s),
            None => RawValue::Other,
        }
    }
}

impl<'a> From<&'a str> for RawValue<'a> {
    fn from(value: &'a str) -> Self {
        RawValue::Str(value)
    }
}

/// Normalizes raw `(key, value)` entries into a partial theme.
///
/// Keys go through [`normalize_theme_key`] and must then name a [`Role`];
/// values must be strings and go through color normalization. Later entries
/// for the same role replace earlier ones.
pub fn normalize_entries<'a, I, V>(entries: I) -> Normalized<ThemeColors>
where
    I: IntoIterator<Item = (&'a str, V)>,
    V: Into<RawValue<'a>>,
{
    let mut colors = ThemeColors::new();
    let mut warnings = Vec::new();

    for (key, value) in entries {
        let Ok(role) = normalize_theme_key(key).parse::<Role>() else {
            tracing::debug!(key, "skipping key outside the theme role set");
            warnings.push(Warning::new(key, WarningKind::UnknownKey));
            continue;
        };

        let raw = match value.into() {
            RawValue::Str(s) => s,
            RawValue::Other => {
                warnings.push(Warning::new(key, WarningKind::NotAString));
                continue;
            }
        };

        match normalize_color(raw) {
            ColorOutcome::Normalized(hsl) => {
                colors.insert(role, hsl.to_string());
            }
            ColorOutcome::Passthrough(original) => {
                tracing::warn!(key, color = %original, "could not parse color, keeping original");
                warnings.push(Warning::new(
                    key,
                    WarningKind::UnparseableColor(original.clone()),
                ));
                colors.insert(role, original);
            }
        }
    }

    Normalized::new(colors, warnings)
}

/// Normalizes a structured theme object, such as one mode of a JSON export.
///
/// ```rust
/// use atelier_theme::{normalize_theme_object, Role};
/// use serde_json::json;
///
/// let raw = json!({ "primary": "#ff0000", "borderRadius": "0.5rem" });
/// let result = normalize_theme_object(raw.as_object().unwrap());
///
/// assert_eq!(result.value.get(Role::Primary), Some("0 100% 50%"));
/// assert_eq!(result.value.len(), 1);
/// assert_eq!(result.warnings[0].key, "borderRadius");
/// ```
pub fn normalize_theme_object(
    raw: &serde_json::Map<String, serde_json::Value>,
) -> Normalized<ThemeColors> {
    normalize_entries(raw.iter().map(|(key, value)| (key.as_str(), value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // =========================================================================
    // normalize_theme_key
    // =========================================================================

    #[test]
    fn key_camel_and_snake_agree() {
        assert_eq!(normalize_theme_key("primaryForeground"), "primary-foreground");
        assert_eq!(
            normalize_theme_key("primary_foreground"),
            normalize_theme_key("primaryForeground")
        );
    }

    #[test]
    fn key_already_kebab_is_unchanged() {
        assert_eq!(
            normalize_theme_key("sidebar-primary-foreground"),
            "sidebar-primary-foreground"
        );
    }

    #[test]
    fn key_multiple_boundaries() {
        assert_eq!(
            normalize_theme_key("sidebarAccentForeground"),
            "sidebar-accent-foreground"
        );
    }

    #[test]
    fn key_uppercase_runs_only_split_after_lowercase() {
        assert_eq!(normalize_theme_key("cardRGB"), "card-rgb");
        assert_eq!(normalize_theme_key("ABC"), "abc");
    }

    #[test]
    fn key_digits_do_not_split() {
        assert_eq!(normalize_theme_key("chart1"), "chart1");
        assert_eq!(normalize_theme_key("chart_1"), "chart-1");
    }

    // =========================================================================
    // normalize_theme_object
    // =========================================================================

    #[test]
    fn object_keeps_only_known_roles() {
        let raw = json!({ "primary": "0 0% 0%", "borderRadius": "0.5rem" });
        let result = normalize_theme_object(raw.as_object().unwrap());

        assert_eq!(result.value.len(), 1);
        assert!(result.value.contains(Role::Primary));
        assert_eq!(
            result.warnings,
            vec![Warning::new("borderRadius", WarningKind::UnknownKey)]
        );
    }

    #[test]
    fn object_drops_non_string_values() {
        let raw = json!({ "primary": 42, "ring": null });
        let result = normalize_theme_object(raw.as_object().unwrap());

        assert!(result.value.is_empty());
        assert!(result
            .warnings
            .iter()
            .all(|w| w.kind == WarningKind::NotAString));
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn object_normalizes_keys_and_values() {
        let raw = json!({
            "cardForeground": "rgb(255, 255, 255)",
            "chart_2": "hsl(173, 58%, 39%)",
        });
        let result = normalize_theme_object(raw.as_object().unwrap());

        assert_eq!(result.value.get(Role::CardForeground), Some("0 0% 100%"));
        assert_eq!(result.value.get(Role::Chart2), Some("173 58% 39%"));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn object_keeps_unparseable_color_with_warning() {
        let raw = json!({ "accent": "var(--brand)" });
        let result = normalize_theme_object(raw.as_object().unwrap());

        assert_eq!(result.value.get(Role::Accent), Some("var(--brand)"));
        assert_eq!(result.warnings.len(), 1);
        assert!(!result.warnings[0].is_dropped());
    }

    #[test]
    fn entries_later_duplicate_wins() {
        let result = normalize_entries(vec![
            ("primary", "#000000"),
            ("primary", "#ffffff"),
        ]);
        assert_eq!(result.value.get(Role::Primary), Some("0 0% 100%"));
    }

    // =========================================================================
    // Warning display
    // =========================================================================

    #[test]
    fn warning_display_includes_mode() {
        let warning = Warning::new("borderRadius", WarningKind::UnknownKey).in_mode(ColorMode::Dark);
        assert_eq!(
            warning.to_string(),
            "dark: 'borderRadius' is not a theme role, skipped"
        );
    }

    #[test]
    fn normalized_in_mode_tags_all_warnings() {
        let result = normalize_entries(vec![("a", "1"), ("b", "2")]).in_mode(ColorMode::Light);
        assert!(result
            .warnings
            .iter()
            .all(|w| w.mode == Some(ColorMode::Light)));
    }
}
