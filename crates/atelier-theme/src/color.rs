//! Color notation parsing.
//!
//! Supports the notations theme sources export:
//!
//! - Bare HSL triplet: `222 47% 11%` (already canonical)
//! - HSL functions: `hsl(222, 47%, 11%)`, `hsla(222 47% 11% / 0.5)` (commas optional)
//! - RGB hex: `#1e293b` or `#fff` (6 or 3 digits)
//! - RGB functions: `rgb(30, 41, 59)`, `rgba(30, 41, 59, 0.5)`
//! - OKLCH: `oklch(0.21 0.034 264.7)` or `oklch(21% 0.034 264.7)`
//!
//! Alpha components are accepted and ignored.
//!
//! # Example
//!
//! ```rust
//! use atelier_theme::{normalize_color, ColorOutcome};
//!
//! assert_eq!(atelier_theme::normalize_color_string("#ff0000"), "0 100% 50%");
//! assert_eq!(atelier_theme::normalize_color_string("oklch(1 0 0)"), "0 0% 100%");
//!
//! // Unknown notations are handed back untouched
//! assert_eq!(
//!     normalize_color("var(--brand)"),
//!     ColorOutcome::Passthrough("var(--brand)".to_string())
//! );
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::colorspace::{oklch_to_rgb, rgb_to_hsl, Hsl, Rgb};

static HSL_TRIPLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\s+(\d+)%\s+(\d+)%$").expect("valid regex"));

static HSL_FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^hsla?\(\s*(\d+)\s*,?\s*(\d+)%\s*,?\s*(\d+)%").expect("valid regex")
});

static RGB_FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^rgba?\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)").expect("valid regex")
});

static OKLCH_FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^oklch\(\s*([\d.]+)(%?)\s+([\d.]+)\s+([\d.]+)\s*\)$").expect("valid regex")
});

/// Result of normalizing a single color value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorOutcome {
    /// The value was recognized and converted.
    Normalized(Hsl),
    /// No supported notation matched; carries the trimmed original.
    Passthrough(String),
}

impl ColorOutcome {
    /// Returns the string to inject: the canonical triplet, or the original.
    pub fn into_string(self) -> String {
        match self {
            ColorOutcome::Normalized(hsl) => hsl.to_string(),
            ColorOutcome::Passthrough(original) => original,
        }
    }

    /// Whether a supported notation matched.
    pub fn is_normalized(&self) -> bool {
        matches!(self, ColorOutcome::Normalized(_))
    }
}

/// Parses a color in any non-OKLCH notation into HSL.
///
/// Notations are tried in order: bare triplet, `hsl()`/`hsla()`, hex,
/// `rgb()`/`rgba()`. Returns `None` when nothing matches; callers keep the
/// original string in that case.
///
/// HSL inputs are taken at face value. RGB function components above 255 are
/// clamped to 255.
pub fn parse_color_to_hsl(input: &str) -> Option<Hsl> {
    let color = input.trim();

    if let Some(caps) = HSL_TRIPLET.captures(color) {
        return hsl_from_captures(&caps);
    }

    if let Some(caps) = HSL_FUNCTION.captures(color) {
        return hsl_from_captures(&caps);
    }

    if let Some(hex) = color.strip_prefix('#') {
        if let Some(rgb) = parse_hex(hex) {
            return Some(rgb_to_hsl(rgb));
        }
    }

    if let Some(caps) = RGB_FUNCTION.captures(color) {
        let channel = |i: usize| -> Option<u8> {
            let n: u32 = caps[i].parse().ok()?;
            Some(n.min(255) as u8)
        };
        return Some(rgb_to_hsl(Rgb(channel(1)?, channel(2)?, channel(3)?)));
    }

    None
}

fn hsl_from_captures(caps: &regex::Captures<'_>) -> Option<Hsl> {
    Some(Hsl {
        h: caps[1].parse().ok()?,
        s: caps[2].parse().ok()?,
        l: caps[3].parse().ok()?,
    })
}

/// Parses a hex color code (without the # prefix).
///
/// Three-digit shorthand doubles each nibble: `f80` becomes `ff8800`.
fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);
            Some(Rgb(nibble(0)?, nibble(1)?, nibble(2)?))
        }
        6 => {
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Rgb(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

/// Parses `oklch(L C H)` or `oklch(L% C H)` into its three components.
///
/// A percentage lightness is divided by 100.
fn parse_oklch(color: &str) -> Option<(f64, f64, f64)> {
    let caps = OKLCH_FUNCTION.captures(color)?;
    let mut l: f64 = caps[1].parse().ok()?;
    if !caps[2].is_empty() {
        l /= 100.0;
    }
    let c: f64 = caps[3].parse().ok()?;
    let h: f64 = caps[4].parse().ok()?;
    Some((l, c, h))
}

/// Normalizes a color string in any supported notation.
pub fn normalize_color(input: &str) -> ColorOutcome {
    let color = input.trim();

    if let Some((l, c, h)) = parse_oklch(color) {
        return ColorOutcome::Normalized(rgb_to_hsl(oklch_to_rgb(l, c, h)));
    }

    match parse_color_to_hsl(color) {
        Some(hsl) => ColorOutcome::Normalized(hsl),
        None => ColorOutcome::Passthrough(color.to_string()),
    }
}

/// Normalizes a color string to the `"H S% L%"` form.
///
/// Unrecognized values are logged and returned unchanged (trimmed), so a
/// theme keeps working even when one entry uses a notation this module does
/// not know.
pub fn normalize_color_string(input: &str) -> String {
    let outcome = normalize_color(input);
    if let ColorOutcome::Passthrough(ref original) = outcome {
        tracing::warn!(color = %original, "could not parse color, keeping original");
    }
    outcome.into_string()
}
