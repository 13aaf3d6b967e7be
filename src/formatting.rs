use chrono::format::{Item, StrftimeItems};
use std::fmt::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::{DisplayConfig, DEFAULT_TIME_FORMAT};
use crate::events::EventSummary;

/// Box-drawing and marker characters for panels and lists
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub connector3: String,
    pub selector: String,
    pub bullet: String,
    pub check_on: String,
    pub check_off: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            top_left: "╭".to_string(),
            top_right: "╮".to_string(),
            bottom_left: "╰".to_string(),
            bottom_right: "╯".to_string(),
            connector3: "┬".to_string(),
            selector: "►".to_string(),
            bullet: "●".to_string(),
            check_on: "☑".to_string(),
            check_off: "☐".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
            connector3: "-".to_string(),
            selector: ">".to_string(),
            bullet: "*".to_string(),
            check_on: "[x]".to_string(),
            check_off: "[ ]".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

impl Default for BoxChars {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `display` - Display configuration to determine unicode vs ASCII
///
/// # Returns
/// A formatted string with the header text and underline separator matching the text width
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.width()))
}

/// Whether chrono understands every specifier of a strftime pattern
pub fn is_valid_strftime(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

/// Render a chrono `DelayedFormat`, or None when formatting fails
///
/// `to_string()` panics on a failing `Display`, which user-supplied
/// patterns can trigger.
pub fn try_format(formatted: impl fmt::Display) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", formatted).ok()?;
    Some(out)
}

/// Time column of an event row: "All day" or the start time
///
/// Falls back to `DEFAULT_TIME_FORMAT` when `time_format` cannot be used.
pub fn format_event_time(event: &EventSummary, time_format: &str) -> String {
    if event.is_all_day {
        return "All day".to_string();
    }
    try_format(event.start.format(time_format))
        .unwrap_or_else(|| event.start.format(DEFAULT_TIME_FORMAT).to_string())
}

/// Cut `text` to at most `max_width` terminal columns, ending with "…" when cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        result.push(ch);
        width += w;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn event(all_day: bool) -> EventSummary {
        EventSummary {
            title: "Standup".to_string(),
            start: NaiveDateTime::parse_from_str("2026-10-19T09:30:00", "%Y-%m-%dT%H:%M:%S").unwrap(),
            end: None,
            is_all_day: all_day,
            calendar_id: "work".to_string(),
            source_color: "blue".to_string(),
        }
    }

    #[test]
    fn test_format_header_single_line_unicode() {
        let display = DisplayConfig { use_unicode: true, ..Default::default() };
        let result = format_header("Test Header", false, &display);
        assert_eq!(result, "Test Header\n───────────\n");
    }

    #[test]
    fn test_format_header_double_line_ascii() {
        let display = DisplayConfig {
            use_unicode: false,
            box_chars: BoxChars::ascii(),
            ..Default::default()
        };
        let result = format_header("Test Header", true, &display);
        assert_eq!(result, "Test Header\n===========\n");
    }

    #[test]
    fn test_format_event_time() {
        assert_eq!(format_event_time(&event(false), "%H:%M"), "09:30");
        assert_eq!(format_event_time(&event(false), "%I:%M %p"), "09:30 AM");
        assert_eq!(format_event_time(&event(true), "%H:%M"), "All day");
    }

    #[test]
    fn test_format_event_time_bad_pattern_uses_default() {
        assert_eq!(format_event_time(&event(false), "%H:%"), "09:30");
        assert_eq!(format_event_time(&event(false), "%Q"), "09:30");
    }

    #[test]
    fn test_is_valid_strftime() {
        assert!(is_valid_strftime("%H:%M"));
        assert!(is_valid_strftime("%a %b %-d"));
        assert!(!is_valid_strftime("%Q"));
        assert!(!is_valid_strftime("%H:%"));
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_to_width("Lunch", 10), "Lunch");
        assert_eq!(truncate_to_width("Lunch", 5), "Lunch");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Quarterly review", 8), "Quarter…");
        assert_eq!(truncate_to_width("Quarterly review", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK character takes two columns
        let result = truncate_to_width("会議会議会議", 5);
        assert_eq!(result, "会議…");
        assert!(result.width() <= 5);
    }
}
