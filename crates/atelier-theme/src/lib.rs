//! # Atelier Theme - Color Normalization and Theme Stylesheets
//!
//! `atelier-theme` turns theme sources from design tools into the stylesheet
//! the atelier back office runs on.
//!
//! ## Core Concepts
//!
//! - [`Role`]: the closed set of styling slots (`primary`, `border`, `chart-1`, ...)
//! - [`ThemeColors`]: a partial role → color map for one [`ColorMode`]
//! - [`Theme`]: light and dark colors applied together
//! - [`normalize_color_string`]: any supported notation → `"H S% L%"`
//! - [`parse_theme_from_css`]: JSON export or stylesheet → normalized [`Theme`]
//! - [`ThemeStylesheet`]: the single writer of the injected stylesheet
//!
//! ## Quick Start
//!
//! ```rust
//! use atelier_theme::{parse_theme_from_css, InMemoryStyle, Role, ThemeStylesheet};
//!
//! let source = r#"
//! :root { --primary: oklch(0.205 0 0); --radius: 0.5rem; }
//! .dark { --primary: #fafafa; }
//! "#;
//!
//! let imported = parse_theme_from_css(source).unwrap();
//! assert!(imported.value.light.contains(Role::Primary));
//! assert_eq!(imported.value.dark.get(Role::Primary), Some("0 0% 98%"));
//!
//! // --radius is not a color role; it is reported, not applied
//! assert_eq!(imported.warnings.len(), 1);
//!
//! let mut sheet = ThemeStylesheet::new(InMemoryStyle::new());
//! sheet.apply(&imported.value).unwrap();
//! assert!(sheet.target().content().unwrap().contains("--primary: 0 0% 98% !important;"));
//! ```
//!
//! ## Best-Effort Import
//!
//! Theme sources carry more than colors. Unknown keys and non-string values
//! are dropped, and colors in an unknown notation are kept verbatim. Each case
//! is recorded as a [`Warning`] in the returned [`Normalized`] value. The only
//! hard stop is applying a theme where a mode ended up empty, which would wipe
//! the active styling.

pub mod colorspace;
pub mod css_parser;
pub mod stylesheet;

mod color;
mod error;
mod normalize;
mod role;
mod settings;
mod theme;

// Error type
pub use error::{Result, ThemeError};

// Color exports
pub use color::{normalize_color, normalize_color_string, parse_color_to_hsl, ColorOutcome};
pub use colorspace::{oklch_to_rgb, rgb_to_hsl, Hsl, Rgb};

// Theme model exports
pub use role::Role;
pub use theme::{ColorMode, Theme, ThemeColors};

// Normalization exports
pub use normalize::{
    normalize_entries, normalize_theme_key, normalize_theme_object, Normalized, RawValue, Warning,
    WarningKind,
};

// Import exports
pub use css_parser::{parse_theme_from_css, parse_theme_from_json, parse_theme_from_stylesheet};

// Stylesheet exports
pub use stylesheet::{
    render_mode_css, render_theme_css, FileStyle, InMemoryStyle, StyleTarget, ThemeStylesheet,
};

// Settings exports
pub use settings::{initialize_theme, AppearanceSettings, InitOutcome, SettingRow};
