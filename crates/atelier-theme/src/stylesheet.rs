//! Managed theme stylesheet.
//!
//! The back office keeps exactly one stylesheet holding the active theme's
//! custom properties. [`ThemeStylesheet`] owns the handle to it and is the
//! only writer: every apply replaces the whole content, so the last call wins
//! and there is never a half-merged theme.
//!
//! Where the stylesheet lives is up to the [`StyleTarget`]:
//!
//! - [`InMemoryStyle`] keeps the text in memory (embedding, tests)
//! - [`FileStyle`] writes it to a `.css` file served alongside the app
//!
//! # Output
//!
//! ```css
//! :root {
//!   --background: 0 0% 100% !important;
//!   --primary: 222 47% 11% !important;
//! }
//!
//! .dark {
//!   --background: 222 84% 5% !important;
//! }
//! ```
//!
//! Every declaration carries `!important` so it overrides the base
//! stylesheet's defaults for the same property.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::{Result, ThemeError};
use crate::theme::{ColorMode, Theme, ThemeColors};

/// Renders one mode's colors as a CSS rule.
pub fn render_mode_css(colors: &ThemeColors, mode: ColorMode) -> String {
    let declarations: Vec<String> = colors
        .iter()
        .map(|(role, value)| format!("  --{}: {} !important;", role, value))
        .collect();

    format!("{} {{\n{}\n}}", mode.selector(), declarations.join("\n"))
}

/// Renders a full theme: the light rule, a blank line, then the dark rule.
pub fn render_theme_css(theme: &Theme) -> String {
    [ColorMode::Light, ColorMode::Dark]
        .map(|mode| render_mode_css(theme.colors(mode), mode))
        .join("\n\n")
}

/// Where the managed stylesheet's text is stored.
pub trait StyleTarget {
    /// Replaces the entire stylesheet content.
    fn replace_content(&mut self, css: &str) -> Result<()>;

    /// Removes the stylesheet so the base styling shows through.
    fn clear(&mut self) -> Result<()>;
}

/// A stylesheet held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStyle {
    content: Option<String>,
}

impl InMemoryStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stylesheet text, `None` before the first apply or after a clear.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl StyleTarget for InMemoryStyle {
    fn replace_content(&mut self, css: &str) -> Result<()> {
        self.content = Some(css.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.content = None;
        Ok(())
    }
}

/// A stylesheet written to a file.
#[derive(Debug, Clone)]
pub struct FileStyle {
    path: PathBuf,
}

impl FileStyle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write_error(&self, source: io::Error) -> ThemeError {
        ThemeError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl StyleTarget for FileStyle {
    fn replace_content(&mut self, css: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }
        fs::write(&self.path, css).map_err(|e| self.write_error(e))
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.write_error(e)),
        }
    }
}

/// The single writer of the managed theme stylesheet.
///
/// # Example
///
/// ```rust
/// use atelier_theme::{InMemoryStyle, Role, Theme, ThemeColors, ThemeStylesheet};
///
/// let theme = Theme::new(
///     ThemeColors::new().with(Role::Primary, "222 47% 11%"),
///     ThemeColors::new().with(Role::Primary, "210 40% 98%"),
/// );
///
/// let mut sheet = ThemeStylesheet::new(InMemoryStyle::new());
/// sheet.apply(&theme).unwrap();
///
/// let css = sheet.target().content().unwrap();
/// assert!(css.starts_with(":root {\n  --primary: 222 47% 11% !important;"));
/// ```
#[derive(Debug)]
pub struct ThemeStylesheet<T: StyleTarget> {
    target: T,
}

impl<T: StyleTarget> ThemeStylesheet<T> {
    pub fn new(target: T) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Writes both modes, replacing whatever the stylesheet held.
    ///
    /// Fails with [`ThemeError::EmptyTheme`] when either mode has no roles;
    /// the current content is left untouched in that case.
    pub fn apply(&mut self, theme: &Theme) -> Result<()> {
        if let Some(mode) = theme.empty_mode() {
            return Err(ThemeError::EmptyTheme(mode));
        }
        self.target.replace_content(&render_theme_css(theme))?;
        tracing::debug!(
            light = theme.light.len(),
            dark = theme.dark.len(),
            "theme stylesheet replaced"
        );
        Ok(())
    }

    /// Writes a single mode's rule, replacing whatever the stylesheet held.
    ///
    /// Used when only one palette is being previewed.
    pub fn apply_mode(&mut self, colors: &ThemeColors, mode: ColorMode) -> Result<()> {
        if colors.is_empty() {
            return Err(ThemeError::EmptyTheme(mode));
        }
        self.target.replace_content(&render_mode_css(colors, mode))
    }

    /// Removes the managed stylesheet.
    pub fn clear(&mut self) -> Result<()> {
        self.target.clear()
    }
}
