//! The closed set of color roles a theme can define.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// A semantic styling slot, independent of any concrete color.
///
/// Each role maps to the custom property `--<name>` in the injected
/// stylesheet. The variant order is the order in which roles are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Background,
    Foreground,
    Card,
    CardForeground,
    Popover,
    PopoverForeground,
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Muted,
    MutedForeground,
    Accent,
    AccentForeground,
    Destructive,
    DestructiveForeground,
    Border,
    Input,
    Ring,
    #[serde(rename = "chart-1")]
    Chart1,
    #[serde(rename = "chart-2")]
    Chart2,
    #[serde(rename = "chart-3")]
    Chart3,
    #[serde(rename = "chart-4")]
    Chart4,
    #[serde(rename = "chart-5")]
    Chart5,
    SidebarBackground,
    SidebarForeground,
    SidebarPrimary,
    SidebarPrimaryForeground,
    SidebarAccent,
    SidebarAccentForeground,
    SidebarBorder,
    SidebarRing,
}

impl Role {
    /// Every role, in render order.
    pub const ALL: [Role; 32] = [
        Role::Background,
        Role::Foreground,
        Role::Card,
        Role::CardForeground,
        Role::Popover,
        Role::PopoverForeground,
        Role::Primary,
        Role::PrimaryForeground,
        Role::Secondary,
        Role::SecondaryForeground,
        Role::Muted,
        Role::MutedForeground,
        Role::Accent,
        Role::AccentForeground,
        Role::Destructive,
        Role::DestructiveForeground,
        Role::Border,
        Role::Input,
        Role::Ring,
        Role::Chart1,
        Role::Chart2,
        Role::Chart3,
        Role::Chart4,
        Role::Chart5,
        Role::SidebarBackground,
        Role::SidebarForeground,
        Role::SidebarPrimary,
        Role::SidebarPrimaryForeground,
        Role::SidebarAccent,
        Role::SidebarAccentForeground,
        Role::SidebarBorder,
        Role::SidebarRing,
    ];

    /// The kebab-case role name, without the `--` custom property prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Background => "background",
            Role::Foreground => "foreground",
            Role::Card => "card",
            Role::CardForeground => "card-foreground",
            Role::Popover => "popover",
            Role::PopoverForeground => "popover-foreground",
            Role::Primary => "primary",
            Role::PrimaryForeground => "primary-foreground",
            Role::Secondary => "secondary",
            Role::SecondaryForeground => "secondary-foreground",
            Role::Muted => "muted",
            Role::MutedForeground => "muted-foreground",
            Role::Accent => "accent",
            Role::AccentForeground => "accent-foreground",
            Role::Destructive => "destructive",
            Role::DestructiveForeground => "destructive-foreground",
            Role::Border => "border",
            Role::Input => "input",
            Role::Ring => "ring",
            Role::Chart1 => "chart-1",
            Role::Chart2 => "chart-2",
            Role::Chart3 => "chart-3",
            Role::Chart4 => "chart-4",
            Role::Chart5 => "chart-5",
            Role::SidebarBackground => "sidebar-background",
            Role::SidebarForeground => "sidebar-foreground",
            Role::SidebarPrimary => "sidebar-primary",
            Role::SidebarPrimaryForeground => "sidebar-primary-foreground",
            Role::SidebarAccent => "sidebar-accent",
            Role::SidebarAccentForeground => "sidebar-accent-foreground",
            Role::SidebarBorder => "sidebar-border",
            Role::SidebarRing => "sidebar-ring",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ThemeError;

    /// Matches the exact kebab-case name. Callers with camelCase or snake_case
    /// keys run them through [`normalize_theme_key`](crate::normalize_theme_key) first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ThemeError::UnknownRole(s.to_string()))
    }
}
