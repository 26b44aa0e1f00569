//! Command-line definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Theme and inventory tools for the atelier back office
#[derive(Parser, Debug)]
#[command(name = "atelier", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./atelier.yaml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the canonical "H S% L%" form of each color
    Color {
        /// Colors in hex, rgb(), hsl(), oklch() or triplet notation
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Manage the theme stylesheet
    #[command(subcommand)]
    Theme(ThemeCommand),

    /// Review supplier inventory files
    #[command(subcommand)]
    Inventory(InventoryCommand),
}

#[derive(Subcommand, Debug)]
pub enum ThemeCommand {
    /// Import a theme from a JSON export or a stylesheet
    Import {
        /// Theme source file
        file: PathBuf,

        /// Stylesheet to write (defaults to the configured path)
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,

        /// Print the normalized theme as JSON instead of writing it
        #[arg(long, conflicts_with = "out")]
        json: bool,
    },

    /// Apply the theme stored in exported appearance settings
    Init {
        /// JSON array of setting rows
        settings: PathBuf,

        /// Stylesheet to write (defaults to the configured path)
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// Remove the theme stylesheet
    Clear {
        /// Stylesheet to remove (defaults to the configured path)
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum InventoryCommand {
    /// Parse a supplier CSV and print the rows
    Import {
        /// Inventory file
        csv: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = RowFormat::Json)]
        format: RowFormat,

        /// Cell separator (defaults to the configured delimiter)
        #[arg(long, value_name = "CHAR")]
        delimiter: Option<char>,
    },

    /// Print the storage key for a diamond image
    ImageKey {
        /// Order the image belongs to
        order_id: String,

        /// Supplier image URL
        image_url: String,

        /// Unique file stem (defaults to the current time in milliseconds)
        #[arg(long)]
        unique: Option<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowFormat {
    Json,
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["atelier", "color", "#fff", "-v", "--config", "a.yaml"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("a.yaml")));
    }

    #[test]
    fn color_requires_a_value() {
        assert!(Cli::try_parse_from(["atelier", "color"]).is_err());
    }

    #[test]
    fn inventory_import_defaults() {
        let cli = Cli::parse_from(["atelier", "inventory", "import", "stock.csv"]);
        match cli.command {
            Command::Inventory(InventoryCommand::Import {
                format, delimiter, ..
            }) => {
                assert_eq!(format, RowFormat::Json);
                assert_eq!(delimiter, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn theme_import_json_conflicts_with_out() {
        let result =
            Cli::try_parse_from(["atelier", "theme", "import", "t.css", "--json", "--out", "x"]);
        assert!(result.is_err());
    }
}
