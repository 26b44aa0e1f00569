//! Color space conversions behind theme normalization.
//!
//! # Motivation
//!
//! Theme editors export colors in whatever notation their author preferred:
//! hex codes, `rgb()`, `hsl()`, and increasingly `oklch()`. The stylesheet the
//! back office injects only understands one form, the bare HSL triplet
//! `"H S% L%"` that the component styles wrap in `hsl(var(--role))`. Every
//! notation therefore has to land in HSL.
//!
//! Two conversions do the work:
//!
//! | From | To | Function |
//! |------|----|----------|
//! | sRGB (0–255 per channel) | HSL (integer degrees and percents) | [`rgb_to_hsl`] |
//! | OKLCH (perceptual) | sRGB | [`oklch_to_rgb`] |
//!
//! OKLCH reaches HSL by chaining both.
//!
//! # Gamut
//!
//! OKLCH can describe colors sRGB cannot show. [`oklch_to_rgb`] clamps each
//! channel into `0..=255` after gamma encoding, so out-of-gamut inputs shift
//! hue and chroma at the boundary. No gamut mapping is attempted.
//!
//! # Example
//!
//! ```rust
//! use atelier_theme::colorspace::{oklch_to_rgb, rgb_to_hsl, Hsl, Rgb};
//!
//! assert_eq!(rgb_to_hsl(Rgb(255, 0, 0)), Hsl { h: 0, s: 100, l: 50 });
//!
//! let white = oklch_to_rgb(1.0, 0.0, 0.0);
//! assert_eq!(white, Rgb(255, 255, 255));
//! ```

use std::fmt;

// ─── RGB / HSL types ────────────────────────────────────────────────────────

/// An sRGB color triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// A canonical HSL color.
///
/// Hue is in degrees, saturation and lightness in percent. Values produced by
/// [`rgb_to_hsl`] are always within `0..360`, `0..=100` and `0..=100`; values
/// parsed from an already-HSL notation are carried through unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: u32,
    /// Saturation percent.
    pub s: u32,
    /// Lightness percent.
    pub l: u32,
}

impl fmt::Display for Hsl {
    /// Renders the injection form `"H S% L%"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.h, self.s, self.l)
    }
}

// ─── RGB → HSL ──────────────────────────────────────────────────────────────

/// Converts an sRGB color to HSL.
///
/// Lightness is the midpoint of the largest and smallest normalized channel.
/// Saturation divides the chroma by `2 - max - min` above 50% lightness and by
/// `max + min` otherwise, and is zero for achromatic colors. Hue comes from the
/// six-sector formula keyed on the dominant channel.
///
/// All three components are rounded to the nearest integer. A hue that rounds
/// up to 360 wraps to 0.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.0 as f64 / 255.0;
    let g = rgb.1 as f64 / 255.0;
    let b = rgb.2 as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (sector / 6.0, s)
    };

    let hue = (h * 360.0).round() as u32;
    Hsl {
        h: if hue == 360 { 0 } else { hue },
        s: (s * 100.0).round() as u32,
        l: (l * 100.0).round() as u32,
    }
}

// ─── OKLCH → RGB ────────────────────────────────────────────────────────────

/// Applies the sRGB transfer curve to a linear value, preserving sign.
fn gamma_encode(c: f64) -> f64 {
    let abs = c.abs();
    if abs <= 0.0031308 {
        12.92 * c
    } else {
        c.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
    }
}

/// Scales an encoded value to a byte, rounding before clamping.
fn to_channel(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Converts an OKLCH color to sRGB.
///
/// `l` is lightness in `0.0..=1.0`, `c` is chroma and `h` is hue in degrees.
/// Chroma and hue become OKLab `a`/`b`, which go through the reference
/// OKLab → LMS′ matrix, get cubed to linear LMS, and then pass through the
/// LMS → linear sRGB matrix before gamma encoding.
pub fn oklch_to_rgb(l: f64, c: f64, h: f64) -> Rgb {
    let h_rad = h.to_radians();
    let a = c * h_rad.cos();
    let b = c * h_rad.sin();

    let l_ = l + 0.3963377774 * a + 0.2158037573 * b;
    let m_ = l - 0.1055613458 * a - 0.0638541728 * b;
    let s_ = l - 0.0894841775 * a - 1.2914855480 * b;

    let l3 = l_ * l_ * l_;
    let m3 = m_ * m_ * m_;
    let s3 = s_ * s_ * s_;

    let r_lin = 4.0767416621 * l3 - 3.3077115913 * m3 + 0.2309699292 * s3;
    let g_lin = -1.2684380046 * l3 + 2.6097574011 * m3 - 0.3413193965 * s3;
    let b_lin = -0.0041960863 * l3 - 0.7034186147 * m3 + 1.7076147010 * s3;

    Rgb(
        to_channel(gamma_encode(r_lin)),
        to_channel(gamma_encode(g_lin)),
        to_channel(gamma_encode(b_lin)),
    )
}

// ─── Tests ──────────────────────────────────────────────────────────────────
