//! Command handlers.
//!
//! Each handler returns the text destined for stdout. Diagnostics, such as
//! skipped theme entries, go through `tracing` to stderr.

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context};
use atelier_inventory::{
    image_object_key, parse_diamond_csv_with, write_rows_csv, write_rows_json, ImportOptions,
};
use atelier_theme::{
    initialize_theme, normalize_color_string, parse_theme_from_css, AppearanceSettings, FileStyle,
    InitOutcome, ThemeStylesheet, Warning,
};

use crate::cli::{Command, InventoryCommand, RowFormat, ThemeCommand};
use crate::config::{delimiter_byte, Config};

/// Dispatches a parsed command.
pub fn run(command: &Command, config: &Config) -> anyhow::Result<String> {
    match command {
        Command::Color { values } => Ok(normalize_colors(values)),
        Command::Theme(ThemeCommand::Import { file, out, json }) => {
            let out = out.as_deref().unwrap_or(config.stylesheet.as_path());
            import_theme(file, out, *json)
        }
        Command::Theme(ThemeCommand::Init { settings, out }) => {
            init_theme(settings, out.as_deref().unwrap_or(config.stylesheet.as_path()))
        }
        Command::Theme(ThemeCommand::Clear { out }) => {
            clear_theme(out.as_deref().unwrap_or(config.stylesheet.as_path()))
        }
        Command::Inventory(InventoryCommand::Import {
            csv,
            format,
            delimiter,
        }) => {
            let delimiter = delimiter.unwrap_or(config.csv_delimiter);
            import_inventory(csv, *format, delimiter_byte(delimiter)?)
        }
        Command::Inventory(InventoryCommand::ImageKey {
            order_id,
            image_url,
            unique,
        }) => {
            let unique = match unique {
                Some(unique) => unique.clone(),
                None => timestamp_millis()?.to_string(),
            };
            Ok(image_object_key(order_id, image_url, &unique))
        }
    }
}

/// One canonical color per line, in input order.
pub fn normalize_colors(values: &[String]) -> String {
    values
        .iter()
        .map(|value| normalize_color_string(value))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn import_theme(file: &Path, out: &Path, json: bool) -> anyhow::Result<String> {
    let source = read(file)?;
    let imported = parse_theme_from_css(&source).ok_or_else(|| {
        anyhow!(
            "no theme found in {}: expected a cssVars export or :root and .dark rules",
            file.display()
        )
    })?;
    report(&imported.warnings);

    if json {
        return Ok(serde_json::to_string_pretty(&imported.value)?);
    }

    let mut sheet = ThemeStylesheet::new(FileStyle::new(out));
    sheet
        .apply(&imported.value)
        .with_context(|| format!("theme from {} was not applied", file.display()))?;

    Ok(format!(
        "wrote {} ({} light, {} dark)",
        out.display(),
        imported.value.light.len(),
        imported.value.dark.len()
    ))
}

pub fn init_theme(settings: &Path, out: &Path) -> anyhow::Result<String> {
    let settings = AppearanceSettings::from_json(&read(settings)?)
        .with_context(|| format!("invalid settings in {}", settings.display()))?;

    let mut sheet = ThemeStylesheet::new(FileStyle::new(out));
    match initialize_theme(&settings, &mut sheet)? {
        InitOutcome::Applied { preset, warnings } => {
            report(&warnings);
            Ok(format!(
                "applied {} theme to {}",
                preset.as_deref().unwrap_or("custom"),
                out.display()
            ))
        }
        InitOutcome::Skipped { warnings } => {
            report(&warnings);
            Ok(format!(
                "stored theme is incomplete; {} left unchanged",
                out.display()
            ))
        }
    }
}

pub fn clear_theme(out: &Path) -> anyhow::Result<String> {
    ThemeStylesheet::new(FileStyle::new(out)).clear()?;
    Ok(format!("removed {}", out.display()))
}

pub fn import_inventory(csv: &Path, format: RowFormat, delimiter: u8) -> anyhow::Result<String> {
    let text = read(csv)?;
    let rows = parse_diamond_csv_with(&text, &ImportOptions { delimiter })
        .with_context(|| format!("cannot import {}", csv.display()))?;
    tracing::info!(rows = rows.len(), file = %csv.display(), "inventory parsed");

    let output = match format {
        RowFormat::Json => write_rows_json(&rows)?,
        RowFormat::Csv => write_rows_csv(&rows)?,
    };
    Ok(output.trim_end().to_string())
}

fn read(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn report(warnings: &[Warning]) {
    for warning in warnings {
        tracing::warn!("{}", warning);
    }
}

fn timestamp_millis() -> anyhow::Result<u128> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis())
}
