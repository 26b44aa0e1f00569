//! Theme model: per-mode role → color mappings.
//!
//! A [`Theme`] pairs two [`ThemeColors`] maps, one for light mode and one for
//! dark mode. Both are partial: a theme source may define only some roles, and
//! the base stylesheet provides the rest.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::normalize::{Normalized, Warning, WarningKind};
use crate::role::Role;

/// Display mode a set of theme colors applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// The CSS selector that scopes this mode's variables.
    ///
    /// Light colors live on the document root; dark colors on the `.dark`
    /// marker class toggled on the root element.
    pub fn selector(self) -> &'static str {
        match self {
            ColorMode::Light => ":root",
            ColorMode::Dark => ".dark",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Light => f.write_str("light"),
            ColorMode::Dark => f.write_str("dark"),
        }
    }
}

/// A partial role → color mapping for one mode.
///
/// Values are stored as they will be injected, normally the canonical
/// `"H S% L%"` triplet. Iteration follows [`Role`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeColors(BTreeMap<Role, String>);

impl ThemeColors {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the color for a role, replacing any previous value.
    pub fn insert(&mut self, role: Role, value: impl Into<String>) -> Option<String> {
        self.0.insert(role, value.into())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, role: Role, value: impl Into<String>) -> Self {
        self.insert(role, value);
        self
    }

    pub fn get(&self, role: Role) -> Option<&str> {
        self.0.get(&role).map(String::as_str)
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains_key(&role)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in role order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &str)> {
        self.0.iter().map(|(role, value)| (*role, value.as_str()))
    }

    /// Builds a mapping from a stored settings object without touching the
    /// values.
    ///
    /// Keys must already be exact role names; persisted themes were normalized
    /// when they were saved. Other keys and non-string values are dropped and
    /// reported.
    pub fn from_stored(map: &serde_json::Map<String, serde_json::Value>) -> Normalized<Self> {
        let mut colors = ThemeColors::new();
        let mut warnings = Vec::new();

        for (key, value) in map {
            let Ok(role) = key.parse::<Role>() else {
                warnings.push(Warning::new(key, WarningKind::UnknownKey));
                continue;
            };
            match value.as_str() {
                Some(s) => {
                    colors.insert(role, s);
                }
                None => warnings.push(Warning::new(key, WarningKind::NotAString)),
            }
        }

        Normalized::new(colors, warnings)
    }
}

impl FromIterator<(Role, String)> for ThemeColors {
    fn from_iter<I: IntoIterator<Item = (Role, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Light and dark colors applied together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub light: ThemeColors,
    pub dark: ThemeColors,
}

impl Theme {
    pub fn new(light: ThemeColors, dark: ThemeColors) -> Self {
        Self { light, dark }
    }

    /// Colors for the given mode.
    pub fn colors(&self, mode: ColorMode) -> &ThemeColors {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    /// The first mode with no recognized roles, if any.
    ///
    /// A theme is only worth applying when both modes define something.
    pub fn empty_mode(&self) -> Option<ColorMode> {
        if self.light.is_empty() {
            Some(ColorMode::Light)
        } else if self.dark.is_empty() {
            Some(ColorMode::Dark)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn colors_iterate_in_role_order() {
        let colors = ThemeColors::new()
            .with(Role::Ring, "1 1% 1%")
            .with(Role::Background, "0 0% 100%")
            .with(Role::Primary, "2 2% 2%");
        let roles: Vec<Role> = colors.iter().map(|(role, _)| role).collect();
        assert_eq!(roles, vec![Role::Background, Role::Primary, Role::Ring]);
    }

    #[test]
    fn insert_replaces_previous_value() {
        let mut colors = ThemeColors::new();
        colors.insert(Role::Primary, "0 0% 0%");
        let previous = colors.insert(Role::Primary, "0 0% 100%");
        assert_eq!(previous.as_deref(), Some("0 0% 0%"));
        assert_eq!(colors.get(Role::Primary), Some("0 0% 100%"));
        assert_eq!(colors.len(), 1);
    }

    #[test]
    fn colors_serialize_as_role_keyed_object() {
        let colors = ThemeColors::new().with(Role::Chart1, "12 76% 61%");
        let value = serde_json::to_value(&colors).unwrap();
        assert_eq!(value, json!({ "chart-1": "12 76% 61%" }));
    }

    #[test]
    fn colors_deserialize_from_role_keyed_object() {
        let colors: ThemeColors =
            serde_json::from_value(json!({ "sidebar-ring": "217 91% 60%" })).unwrap();
        assert_eq!(colors.get(Role::SidebarRing), Some("217 91% 60%"));
    }

    #[test]
    fn from_stored_keeps_values_verbatim() {
        let stored = json!({
            "primary": "oklch(0.5 0.1 200)",
            "primaryForeground": "0 0% 100%",
            "radius": 4,
        });
        let result = ThemeColors::from_stored(stored.as_object().unwrap());
        assert_eq!(result.value.get(Role::Primary), Some("oklch(0.5 0.1 200)"));
        assert_eq!(result.value.len(), 1);
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn empty_mode_reports_first_empty_side() {
        let filled = ThemeColors::new().with(Role::Primary, "0 0% 0%");
        assert_eq!(Theme::default().empty_mode(), Some(ColorMode::Light));
        assert_eq!(
            Theme::new(filled.clone(), ThemeColors::new()).empty_mode(),
            Some(ColorMode::Dark)
        );
        assert_eq!(Theme::new(filled.clone(), filled).empty_mode(), None);
    }

    #[test]
    fn theme_colors_by_mode() {
        let theme = Theme::new(
            ThemeColors::new().with(Role::Primary, "0 0% 0%"),
            ThemeColors::new().with(Role::Primary, "0 0% 100%"),
        );
        assert_eq!(theme.colors(ColorMode::Light).get(Role::Primary), Some("0 0% 0%"));
        assert_eq!(theme.colors(ColorMode::Dark).get(Role::Primary), Some("0 0% 100%"));
    }

    #[test]
    fn mode_selectors() {
        assert_eq!(ColorMode::Light.selector(), ":root");
        assert_eq!(ColorMode::Dark.selector(), ".dark");
    }
}
