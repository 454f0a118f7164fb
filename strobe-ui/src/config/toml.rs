//! Simple TOML parser for panel configuration
//!
//! Handles only the subset `panel.toml` needs. It does NOT support the
//! full TOML grammar.
//!
//! Supported features:
//! - Key = value pairs (string, integer, single character)
//! - `[panel]` and `[ui]` section headers
//! - Colours as hex (`0x07E0`) or decimal integers
//! - Comments (# ...)
//!
//! Unknown sections and keys are rejected so typos do not silently fall
//! back to defaults.

use strobe_display::Rotation;

use super::types::{AppConfig, PanelConfig, UiConfig};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid or unknown section header
    InvalidSection,
    /// Invalid value type or out of range
    InvalidValue,
    /// Key not valid in its section
    UnknownKey,
    /// Colour not a 16-bit hex or decimal value
    InvalidColor,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Panel,
    Ui,
}

/// Parse TOML configuration into AppConfig
///
/// Missing sections and keys keep their defaults.
pub fn parse_config(input: &str) -> Result<AppConfig, ParseError> {
    let mut config = AppConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;
        match section {
            Section::Panel => apply_panel(&mut config.panel, key, value)?,
            Section::Ui => apply_ui(&mut config.ui, key, value)?,
            Section::Root => return Err(ParseError::UnknownKey),
        }
    }

    if config.panel.width == 0 || config.panel.height == 0 {
        return Err(ParseError::InvalidValue);
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "panel" => Ok(Section::Panel),
        "ui" => Ok(Section::Ui),
        _ => Err(ParseError::InvalidSection),
    }
}

fn apply_panel(panel: &mut PanelConfig, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "width" => panel.width = parse_int(value)?,
        "height" => panel.height = parse_int(value)?,
        "rotation" => panel.rotation = parse_rotation(value)?,
        "reset_hold_ms" => panel.reset_hold_ms = parse_int(value)?,
        "swreset_delay_ms" => panel.swreset_delay_ms = parse_int(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

fn apply_ui(ui: &mut UiConfig, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "origin_x" => ui.origin_x = parse_int(value)?,
        "origin_y" => ui.origin_y = parse_int(value)?,
        "row_spacing" => ui.row_spacing = parse_int(value)?,
        "foreground" => ui.foreground = parse_color(value)?,
        "background" => ui.background = parse_color(value)?,
        "action_color" => ui.action_color = parse_color(value)?,
        "submenu_color" => ui.submenu_color = parse_color(value)?,
        "selection_marker" => ui.selection_marker = parse_char(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = if let Some(hash_pos) = value.find('#') {
        // Make sure # is not inside a string
        let quote_count = value[..hash_pos].matches('"').count();
        if quote_count % 2 == 0 {
            value[..hash_pos].trim()
        } else {
            value
        }
    } else {
        value
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

/// Parse an RGB565 colour like 0x07E0 or 2016
fn parse_color(value: &str) -> Result<u16, ParseError> {
    let value = parse_string(value);
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|_| ParseError::InvalidColor)
}

/// Parse a single-character string
fn parse_char(value: &str) -> Result<char, ParseError> {
    let mut chars = parse_string(value).chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse panel rotation
fn parse_rotation(value: &str) -> Result<Rotation, ParseError> {
    match parse_string(value) {
        "swap_flip" | "SwapFlip" => Ok(Rotation::SwapFlip),
        "identity" | "Identity" => Ok(Rotation::Identity),
        _ => Err(ParseError::InvalidValue),
    }
}
