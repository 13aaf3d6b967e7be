use xdg::BaseDirectories;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use anyhow::{Context, Result};
use phf::phf_map;
use ratatui::style::Color;
use tracing::warn;

use crate::formatting::{is_valid_strftime, BoxChars};
use crate::layout_constants::{DEFAULT_EVENTS_SHOWN, MAX_EVENTS_SHOWN, MIN_EVENTS_SHOWN};

/// strftime pattern of event start times
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    /// Event store file; defaults to `events.toml` in the XDG data home
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_file: Option<PathBuf>,
    /// Calendars whose events are shown; empty means all of them
    pub enabled_calendars: BTreeSet<String>,
    pub max_events: usize,
    pub show_all_day_events: bool,
    pub launch_at_login: bool,
    pub time_format: String,
    pub display: DisplayConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    #[serde(deserialize_with = "deserialize_color", serialize_with = "serialize_color")]
    pub accent_fg: Color,
    #[serde(deserialize_with = "deserialize_color", serialize_with = "serialize_color")]
    pub text_fg: Color,
    #[serde(deserialize_with = "deserialize_color", serialize_with = "serialize_color")]
    pub muted_fg: Color,
    #[serde(deserialize_with = "deserialize_color", serialize_with = "serialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color", serialize_with = "serialize_color")]
    pub error_fg: Color,
    #[serde(skip)]
    pub box_chars: BoxChars,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            events_file: None,
            enabled_calendars: BTreeSet::new(),
            max_events: DEFAULT_EVENTS_SHOWN,
            show_all_day_events: true,
            launch_at_login: false,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            use_unicode: true,
            accent_fg: Color::Rgb(191, 56, 56),
            text_fg: Color::White,
            muted_fg: Color::Rgb(115, 115, 115),
            selection_fg: Color::Rgb(160, 160, 160),
            error_fg: Color::Red,
            box_chars: BoxChars::unicode(),
        }
    }
}

impl Config {
    /// Number of events to list, with 0 meaning "unset"
    pub fn max_events(&self) -> usize {
        if self.max_events == 0 {
            DEFAULT_EVENTS_SHOWN
        } else {
            self.max_events.clamp(MIN_EVENTS_SHOWN, MAX_EVENTS_SHOWN)
        }
    }

    /// Event store location: the configured file or the XDG default
    pub fn events_path(&self) -> Option<PathBuf> {
        self.events_file.clone().or_else(default_events_path)
    }
}

static NAMED_COLORS: phf::Map<&'static str, Color> = phf_map! {
    "reset" => Color::Reset,
    "black" => Color::Black,
    "red" => Color::Red,
    "green" => Color::Green,
    "yellow" => Color::Yellow,
    "blue" => Color::Blue,
    "magenta" => Color::Magenta,
    "cyan" => Color::Cyan,
    "gray" => Color::Gray,
    "grey" => Color::Gray,
    "darkgray" => Color::DarkGray,
    "darkgrey" => Color::DarkGray,
    "lightred" => Color::LightRed,
    "lightgreen" => Color::LightGreen,
    "lightyellow" => Color::LightYellow,
    "lightblue" => Color::LightBlue,
    "lightmagenta" => Color::LightMagenta,
    "lightcyan" => Color::LightCyan,
    "white" => Color::White,
    "orange" => Color::Rgb(255, 165, 0),
};

/// Deserialize a color from a string (supports named colors, RGB hex, or RGB tuple)
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

/// Serialize a color in a form `parse_color` reads back
fn serialize_color<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&color.to_string().to_lowercase())
}

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "blue", "cyan", "orange", etc.
/// - Hex colors: "#FF6600", "#f60"
/// - RGB tuples: "255,165,0"
/// - Indexed colors: "0" through "255"
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    if let Some(color) = NAMED_COLORS.get(s.as_str()) {
        return Some(*color);
    }

    // Hex colors (#FF6600 or #f60)
    if let Some(hex) = s.strip_prefix('#') {
        if !hex.is_ascii() {
            return None;
        }
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        } else if hex.len() == 3 {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    // RGB tuples "255,165,0"
    if s.contains(',') {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() == 3 {
            let r = parts[0].trim().parse::<u8>().ok()?;
            let g = parts[1].trim().parse::<u8>().ok()?;
            let b = parts[2].trim().parse::<u8>().ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    // Terminal palette index
    s.parse::<u8>().ok().map(Color::Indexed)
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

pub fn default_events_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let data_home = xdg_dirs.get_data_home()?;
    Some(data_home.join("events.toml"))
}

/// Parse config file content, deriving the box characters from `use_unicode`
///
/// An unusable `time_format` is replaced by the default rather than failing
/// the whole file.
pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
    let mut config: Config = toml::from_str(content)?;
    config.display.box_chars = BoxChars::from_use_unicode(config.display.use_unicode);
    if !is_valid_strftime(&config.time_format) {
        warn!("CONFIG: invalid time_format '{}', using '{}'", config.time_format, DEFAULT_TIME_FORMAT);
        config.time_format = DEFAULT_TIME_FORMAT.to_string();
    }
    Ok(config)
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    // Check if file exists
    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    parse(&content).unwrap_or_else(|_| Config::default())
}

pub fn write(config: &Config) -> Result<()> {
    let config_path = get_config_path().context("Unable to determine config path")?;
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(&config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_named() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("blue"), Some(Color::Blue));
        assert_eq!(parse_color("orange"), Some(Color::Rgb(255, 165, 0)));
        assert_eq!(parse_color("darkgrey"), Some(Color::DarkGray));
    }

    #[test]
    fn test_parse_color_case_insensitive() {
        assert_eq!(parse_color("RED"), Some(Color::Red));
        assert_eq!(parse_color("LightBlue"), Some(Color::LightBlue));
    }

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(parse_color("#FF6600"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("#3b82f6"), Some(Color::Rgb(59, 130, 246)));
        assert_eq!(parse_color("#f60"), Some(Color::Rgb(255, 102, 0)));
    }

    #[test]
    fn test_parse_color_rgb_tuple_and_index() {
        assert_eq!(parse_color("255, 102, 0"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("208"), Some(Color::Indexed(208)));
    }

    #[test]
    fn test_parse_color_invalid() {
        assert_eq!(parse_color("invalid"), None);
        assert_eq!(parse_color("#ZZZ"), None);
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("256,0,0"), None);
        assert_eq!(parse_color("300"), None);
    }

    #[test]
    fn test_default_preferences() {
        let config = Config::default();
        assert_eq!(config.max_events(), 5);
        assert!(config.show_all_day_events);
        assert!(!config.launch_at_login);
        assert!(config.enabled_calendars.is_empty());
    }

    #[test]
    fn test_parse_invalid_time_format_falls_back() {
        let config = parse("time_format = \"%Q\"\nmax_events = 3\n").unwrap();
        assert_eq!(config.time_format, DEFAULT_TIME_FORMAT);
        assert_eq!(config.max_events, 3);

        let config = parse("time_format = \"%I:%M %p\"\n").unwrap();
        assert_eq!(config.time_format, "%I:%M %p");
    }

    #[test]
    fn test_max_events_normalized() {
        let mut config = Config::default();
        config.max_events = 0;
        assert_eq!(config.max_events(), 5);
        config.max_events = 40;
        assert_eq!(config.max_events(), 15);
        config.max_events = 3;
        assert_eq!(config.max_events(), 3);
    }

    #[test]
    fn test_parse_partial_file_keeps_defaults() {
        let config = parse(
            r##"
max_events = 8
enabled_calendars = ["work"]

[display]
use_unicode = false
accent_fg = "#00FFFF"
        "##,
        )
        .unwrap();
        assert_eq!(config.max_events(), 8);
        assert!(config.enabled_calendars.contains("work"));
        assert!(config.show_all_day_events);
        assert_eq!(config.display.accent_fg, Color::Rgb(0, 255, 255));
        assert_eq!(config.display.text_fg, Color::White);
        assert_eq!(config.display.box_chars, BoxChars::ascii());
    }

    #[test]
    fn test_parse_rejects_bad_color() {
        assert!(parse("[display]\naccent_fg = \"nope\"\n").is_err());
    }

    #[test]
    fn test_serialized_config_reads_back() {
        let mut config = Config::default();
        config.display.muted_fg = Color::DarkGray;
        config.display.selection_fg = Color::Indexed(33);
        config.enabled_calendars.insert("home".to_string());
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(parse(&text).unwrap(), config);
    }
}
