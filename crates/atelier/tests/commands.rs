//! End-to-end tests for the command handlers and the binary.

use std::fs;
use std::process::Command as Process;

use atelier::cli::{Command, InventoryCommand, RowFormat, ThemeCommand};
use atelier::commands::{self, clear_theme, import_inventory, import_theme, init_theme};
use atelier::config::Config;
use tempfile::TempDir;

const THEME_CSS: &str = r#"
@layer base {
  :root {
    --background: 0 0% 100%;
    --primary: #1e293b;
    --radius: 0.5rem;
  }
  .dark {
    --background: oklch(0.141 0.005 285.823);
    --primary: rgb(248, 250, 252);
  }
}
"#;

const INVENTORY_CSV: &str = "\
Stock,Shape,Cts,Color,Grade,Cut,Pol,Sym,Lab,Measurements,Report No,Image Link
S1,Round,1.01,D,VS1,Excellent,Excellent,Excellent,GIA,6.40x6.42x3.95,1234567,http://x
S2,Oval,0.72,F,SI1,,VG,VG,IGI,7.0x5.0x3.1,778899,
";

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Theme commands
// ============================================================================

#[test]
fn theme_import_writes_stylesheet() {
    let dir = TempDir::new().unwrap();
    let source = write(&dir, "theme.css", THEME_CSS);
    let out = dir.path().join("public").join("theme-variables.css");

    let message = import_theme(&source, &out, false).unwrap();

    assert!(message.contains("2 light, 2 dark"));
    let css = fs::read_to_string(&out).unwrap();
    assert!(css.starts_with(":root {\n"));
    assert!(css.contains("  --primary: 217 33% 17% !important;"));
    assert!(css.contains(".dark {\n"));
    assert!(css.contains("  --primary: 210 40% 98% !important;"));
    assert!(!css.contains("radius"));
}

#[test]
fn theme_import_json_prints_normalized_theme() {
    let dir = TempDir::new().unwrap();
    let source = write(&dir, "theme.css", THEME_CSS);
    let out = dir.path().join("unused.css");

    let printed = import_theme(&source, &out, true).unwrap();

    let value: serde_json::Value = serde_json::from_str(&printed).unwrap();
    assert_eq!(value["light"]["background"], "0 0% 100%");
    assert_eq!(value["dark"]["primary"], "210 40% 98%");
    assert!(!out.exists());
}

#[test]
fn theme_import_rejects_text_without_theme() {
    let dir = TempDir::new().unwrap();
    let source = write(&dir, "notes.txt", "no matching blocks");

    let err = import_theme(&source, &dir.path().join("x.css"), false).unwrap_err();

    assert!(err.to_string().contains("no theme found"));
}

#[test]
fn theme_import_with_empty_side_keeps_existing_stylesheet() {
    let dir = TempDir::new().unwrap();
    let out = write(&dir, "theme-variables.css", "/* current */");
    let source = write(
        &dir,
        "half.json",
        r##"{"cssVars":{"light":{"primary":"#000"},"dark":{"radius":"1rem"}}}"##,
    );

    let err = import_theme(&source, &out, false).unwrap_err();

    assert!(format!("{:#}", err).contains("dark theme has no recognized color roles"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "/* current */");
}

#[test]
fn theme_init_applies_stored_settings() {
    let dir = TempDir::new().unwrap();
    let settings = write(
        &dir,
        "settings.json",
        r#"[
            {"key":"custom_theme_light","value":{"value":{"primary":"oklch(1 0 0)"}},"category":"appearance"},
            {"key":"custom_theme_dark","value":{"primary":"0 0% 0%"},"category":"appearance"},
            {"key":"active_preset","value":"ivory","category":"appearance"}
        ]"#,
    );
    let out = dir.path().join("theme.css");

    let message = init_theme(&settings, &out).unwrap();

    assert!(message.contains("ivory"));
    let css = fs::read_to_string(&out).unwrap();
    assert!(css.contains("--primary: 0 0% 100% !important;"));
}

#[test]
fn theme_init_skips_incomplete_settings() {
    let dir = TempDir::new().unwrap();
    let settings = write(
        &dir,
        "settings.json",
        r#"[{"key":"custom_theme_light","value":{"primary":"0 0% 0%"}}]"#,
    );
    let out = dir.path().join("theme.css");

    let message = init_theme(&settings, &out).unwrap();

    assert!(message.contains("left unchanged"));
    assert!(!out.exists());
}

#[test]
fn theme_clear_removes_stylesheet() {
    let dir = TempDir::new().unwrap();
    let out = write(&dir, "theme.css", ":root {}");

    clear_theme(&out).unwrap();

    assert!(!out.exists());
}

#[test]
fn theme_commands_default_to_configured_path() {
    let dir = TempDir::new().unwrap();
    let source = write(&dir, "theme.css", THEME_CSS);
    let config = Config {
        stylesheet: dir.path().join("configured.css"),
        ..Config::default()
    };

    let import = Command::Theme(ThemeCommand::Import {
        file: source,
        out: None,
        json: false,
    });
    commands::run(&import, &config).unwrap();
    assert!(config.stylesheet.exists());

    commands::run(&Command::Theme(ThemeCommand::Clear { out: None }), &config).unwrap();
    assert!(!config.stylesheet.exists());
}

// ============================================================================
// Inventory commands
// ============================================================================

#[test]
fn inventory_import_as_json() {
    let dir = TempDir::new().unwrap();
    let csv = write(&dir, "stock.csv", INVENTORY_CSV);

    let printed = import_inventory(&csv, RowFormat::Json, b',').unwrap();

    let rows: serde_json::Value = serde_json::from_str(&printed).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 2);
    assert_eq!(rows[0]["clarity"], "VS1");
    assert_eq!(rows[1]["cut"], "");
    assert_eq!(rows[1]["image_link"], "");
}

#[test]
fn inventory_import_as_csv() {
    let dir = TempDir::new().unwrap();
    let csv = write(&dir, "stock.csv", INVENTORY_CSV);

    let printed = import_inventory(&csv, RowFormat::Csv, b',').unwrap();

    let lines: Vec<&str> = printed.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("stock_number,"));
    assert!(lines[2].starts_with("S2,Oval,0.72"));
}

#[test]
fn inventory_delimiter_comes_from_config() {
    let dir = TempDir::new().unwrap();
    let csv = write(&dir, "stock.csv", &INVENTORY_CSV.replace(',', ";"));
    let config = Config {
        csv_delimiter: ';',
        ..Config::default()
    };

    let command = Command::Inventory(InventoryCommand::Import {
        csv,
        format: RowFormat::Json,
        delimiter: None,
    });
    let printed = commands::run(&command, &config).unwrap();

    assert!(printed.contains("\"stock_number\": \"S2\""));
}

#[test]
fn inventory_missing_columns_is_reported() {
    let dir = TempDir::new().unwrap();
    let csv = write(&dir, "stock.csv", "Stock,Shape\nS1,Round\n");

    let err = import_inventory(&csv, RowFormat::Json, b',').unwrap_err();

    let chain = format!("{:#}", err);
    assert!(chain.contains("stock.csv"));
    assert!(chain.contains("lab"));
}

// ============================================================================
// Binary
// ============================================================================

#[test]
fn binary_normalizes_colors() {
    let output = Process::new(env!("CARGO_BIN_EXE_atelier"))
        .args(["color", "#ff0000", "hsl(210, 40%, 98%)", "not-a-color"])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "0 100% 50%\n210 40% 98%\nnot-a-color\n");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("not-a-color"));
}

#[test]
fn binary_rejects_bad_config() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "atelier.yaml", "stylesheet: a.css\nunknown: 1\n");

    let output = Process::new(env!("CARGO_BIN_EXE_atelier"))
        .arg("--config")
        .arg(&config)
        .args(["color", "#fff"])
        .output()
        .unwrap();

    assert!(!output.status.success());
}
