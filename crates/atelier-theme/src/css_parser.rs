//! Theme import from JSON exports and stylesheets.
//!
//! # Motivation
//!
//! Theme editors hand out themes in two shapes. Registry-style tools export a
//! JSON document with a `cssVars` object; everything else hands over the
//! stylesheet itself. [`parse_theme_from_css`] accepts either and produces a
//! normalized [`Theme`].
//!
//! # JSON exports
//!
//! ```json
//! {
//!   "cssVars": {
//!     "light": { "primary": "oklch(0.205 0 0)", "borderRadius": "0.5rem" },
//!     "dark":  { "primary": "oklch(0.922 0 0)" }
//!   }
//! }
//! ```
//!
//! Both `light` and `dark` must be objects. Each goes through
//! [`normalize_theme_object`], so camelCase keys are accepted and unknown keys
//! (like `borderRadius`) are dropped with a warning.
//!
//! # Stylesheets
//!
//! ```css
//! @layer base {
//!   :root {
//!     --background: 0 0% 100%;
//!     --primary: oklch(0.205 0 0);
//!     --radius: 0.625rem;
//!   }
//!   .dark {
//!     --background: oklch(0.145 0 0);
//!   }
//! }
//! ```
//!
//! The first rule whose selector list contains `:root` provides the light
//! colors and the first containing `.dark` provides the dark colors. Rules may
//! be nested in `@layer`, `@media` or `@supports` blocks. Only custom
//! properties (`--name`) are read; the value is the raw declaration text.
//!
//! Tokenizing goes through `cssparser`, so comments, strings and nested
//! functions in values are handled the way a browser would.

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser,
};

use crate::normalize::{
    normalize_entries, normalize_theme_object, Normalized, Warning, WarningKind,
};
use crate::theme::{ColorMode, Theme, ThemeColors};

/// Parses a theme from a JSON export or a stylesheet.
///
/// Returns `None` when the source is neither a JSON document with both
/// `cssVars.light` and `cssVars.dark` objects nor a stylesheet with both a
/// `:root` and a `.dark` rule. Sections that are present but empty yield empty
/// color maps, not `None`.
pub fn parse_theme_from_css(source: &str) -> Option<Normalized<Theme>> {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(source) {
        if let Some(theme) = parse_theme_from_json(&json) {
            return Some(theme);
        }
    }

    parse_theme_from_stylesheet(source)
}

/// Parses the `cssVars.light` / `cssVars.dark` sections of a JSON export.
pub fn parse_theme_from_json(json: &serde_json::Value) -> Option<Normalized<Theme>> {
    let vars = json.get("cssVars")?;
    let light = vars.get("light")?.as_object()?;
    let dark = vars.get("dark")?.as_object()?;

    let light = normalize_theme_object(light).in_mode(ColorMode::Light);
    let dark = normalize_theme_object(dark).in_mode(ColorMode::Dark);

    Some(combine(light, dark))
}

/// Parses the `:root` and `.dark` rules of a stylesheet.
pub fn parse_theme_from_stylesheet(css: &str) -> Option<Normalized<Theme>> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);

    let mut sheet = ThemeSheetParser {
        light: None,
        dark: None,
    };

    let rule_list_parser = cssparser::StyleSheetParser::new(&mut parser, &mut sheet);
    for result in rule_list_parser {
        if let Err((err, slice)) = result {
            tracing::trace!(?err, rule = slice, "skipping rule");
        }
    }

    let light = sheet.light?;
    let dark = sheet.dark?;

    let light = normalize_custom_properties(&light).in_mode(ColorMode::Light);
    let dark = normalize_custom_properties(&dark).in_mode(ColorMode::Dark);

    Some(combine(light, dark))
}

fn normalize_custom_properties(declarations: &[(String, String)]) -> Normalized<ThemeColors> {
    let mut warnings = Vec::new();
    let entries: Vec<(&str, &str)> = declarations
        .iter()
        .filter_map(|(name, value)| {
            let key = name.strip_prefix("--")?;
            if value.is_empty() {
                warnings.push(Warning::new(key, WarningKind::EmptyValue));
                return None;
            }
            Some((key, value.as_str()))
        })
        .collect();

    let mut normalized = normalize_entries(entries);
    warnings.append(&mut normalized.warnings);
    normalized.warnings = warnings;
    normalized
}

fn combine(light: Normalized<ThemeColors>, dark: Normalized<ThemeColors>) -> Normalized<Theme> {
    let mut warnings = light.warnings;
    warnings.extend(dark.warnings);
    Normalized::new(Theme::new(light.value, dark.value), warnings)
}

// ─── Rule-level parser ──────────────────────────────────────────────────────

type Declarations = Vec<(String, String)>;

struct ThemeSheetParser {
    light: Option<Declarations>,
    dark: Option<Declarations>,
}

/// Which theme blocks a rule's selector list targets.
#[derive(Debug, Clone, Copy, Default)]
struct Targets {
    light: bool,
    dark: bool,
}

/// Consumes the rest of the input and returns its source text.
fn rest_of_input<'i>(input: &mut Parser<'i, '_>) -> &'i str {
    let start = input.position();
    while input.next().is_ok() {}
    input.slice_from(start)
}

impl<'i> QualifiedRuleParser<'i> for ThemeSheetParser {
    type Prelude = Targets;
    type QualifiedRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let selectors = rest_of_input(input);
        let mut targets = Targets::default();

        for selector in selectors.split(',').map(str::trim) {
            match selector {
                ":root" => targets.light = true,
                ".dark" => targets.dark = true,
                _ => {}
            }
        }

        Ok(targets)
    }

    fn parse_block<'t>(
        &mut self,
        targets: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let wanted_light = targets.light && self.light.is_none();
        let wanted_dark = targets.dark && self.dark.is_none();

        if !wanted_light && !wanted_dark {
            rest_of_input(input);
            return Ok(());
        }

        let mut decl_parser = CustomPropertyParser;
        let body = RuleBodyParser::new(input, &mut decl_parser);
        let declarations: Declarations = body.flatten().collect();

        if wanted_light {
            self.light = Some(declarations.clone());
        }
        if wanted_dark {
            self.dark = Some(declarations);
        }
        Ok(())
    }
}

impl<'i> AtRuleParser<'i> for ThemeSheetParser {
    type Prelude = ();
    type AtRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        match name.as_ref() {
            "layer" | "media" | "supports" => {
                rest_of_input(input);
                Ok(())
            }
            _ => Err(input.new_custom_error::<(), ()>(())),
        }
    }

    fn parse_block<'t>(
        &mut self,
        _prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::AtRule, ParseError<'i, Self::Error>> {
        let list_parser = cssparser::StyleSheetParser::new(input, self);
        for _ in list_parser {}
        Ok(())
    }
}

// ─── Declaration-level parser ───────────────────────────────────────────────

struct CustomPropertyParser;

impl<'i> DeclarationParser<'i> for CustomPropertyParser {
    type Declaration = (String, String);
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let value = rest_of_input(input).trim();
        Ok((name.as_ref().to_string(), value.to_string()))
    }
}

impl<'i> AtRuleParser<'i> for CustomPropertyParser {
    type Prelude = ();
    type AtRule = (String, String);
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for CustomPropertyParser {
    type Prelude = ();
    type QualifiedRule = (String, String);
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, (String, String), ()> for CustomPropertyParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}
