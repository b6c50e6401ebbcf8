//! Simple TOML parser for display configuration
//!
//! This is a minimal, allocation-free TOML parser that handles only the
//! subset needed for the display configuration. It does NOT support the
//! full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - `[rotation]` and `[demo]` section headers
//! - String arrays, on one line or spread over several lines
//! - Comments (# ...), including after a value
//! - Underscores in integers (`3_000`)
//!
//! NOT supported:
//! - Multi-line strings
//! - Escape sequences in strings
//! - Inline tables, datetimes, floats
//!
//! Keys missing from the file keep their defaults; unknown keys are ignored.

use crate::assets::{asset_name, AssetName};

use super::types::{EmoteConfig, NameList};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Line is neither a section header nor `key = value`
    InvalidLine,
    /// Value has the wrong type or is malformed
    InvalidValue,
    /// Asset name longer than the name buffer
    NameTooLong,
    /// Too many items (exceeded heapless capacity)
    TooManyItems,
    /// Rotation sequence has no names
    EmptySequence,
    /// Interval or step delay is zero
    ZeroInterval,
    /// Input ended inside an array
    UnclosedArray,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Rotation,
    Demo,
}

/// Array whose closing bracket is on a later line
struct OpenArray<'s> {
    key: &'s str,
    names: NameList,
}

/// Parse TOML configuration into EmoteConfig
pub fn parse_config(input: &str) -> Result<EmoteConfig, ParseError> {
    let mut config = EmoteConfig::default();
    let mut section = Section::Root;
    let mut open: Option<OpenArray<'_>> = None;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        // Continuation of a multi-line array
        if let Some(array) = open.as_mut() {
            match line.strip_suffix(']') {
                Some(items) => {
                    push_names(items, &mut array.names)?;
                    if let Some(array) = open.take() {
                        apply_names(section, array.key, array.names, &mut config);
                    }
                }
                None => push_names(line, &mut array.names)?,
            }
            continue;
        }

        // Check for section header
        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;

        if let Some(first) = value.strip_prefix('[').filter(|_| !value.ends_with(']')) {
            let mut names = NameList::new();
            push_names(first, &mut names)?;
            open = Some(OpenArray { key, names });
            continue;
        }

        apply_value(section, key, value, &mut config)?;
    }

    if open.is_some() {
        return Err(ParseError::UnclosedArray);
    }

    validate(&config)?;
    Ok(config)
}

/// Parse section header like "rotation" or "demo"
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "rotation" => Ok(Section::Rotation),
        "demo" => Ok(Section::Demo),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Split `key = value`
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Apply a key/value pair to the section being parsed
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut EmoteConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Rotation => match key {
            "interval_ms" => config.rotation.interval_ms = parse_u32(value)?,
            "fallback" => config.rotation.fallback = parse_name(value)?,
            "sequence" => apply_names(section, key, parse_name_list(value)?, config),
            "autostart" => config.rotation.autostart = parse_bool(value)?,
            _ => {} // Ignore unknown keys
        },
        Section::Demo => match key {
            "step_ms" => config.demo.step_ms = parse_u32(value)?,
            "emotions" => apply_names(section, key, parse_name_list(value)?, config),
            _ => {}
        },
        Section::Root => {}
    }
    Ok(())
}

/// Store a parsed name list under its key
fn apply_names(section: Section, key: &str, names: NameList, config: &mut EmoteConfig) {
    match (section, key) {
        (Section::Rotation, "sequence") => config.rotation.sequence = names,
        (Section::Demo, "emotions") => config.demo.emotions = names,
        _ => {}
    }
}

/// Check values that parse fine but cannot drive a rotation
fn validate(config: &EmoteConfig) -> Result<(), ParseError> {
    if config.rotation.sequence.is_empty() {
        return Err(ParseError::EmptySequence);
    }
    if config.rotation.interval_ms == 0 || config.demo.step_ms == 0 {
        return Err(ParseError::ZeroInterval);
    }
    Ok(())
}

/// Cut a trailing `# comment`, ignoring `#` inside strings
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Parse a decimal integer, allowing `_` separators
fn parse_u32(value: &str) -> Result<u32, ParseError> {
    let mut result: u32 = 0;
    let mut digits = 0;

    for c in value.chars() {
        if c == '_' {
            continue;
        }
        let digit = c.to_digit(10).ok_or(ParseError::InvalidValue)?;
        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add(digit))
            .ok_or(ParseError::InvalidValue)?;
        digits += 1;
    }

    if digits == 0 {
        return Err(ParseError::InvalidValue);
    }
    Ok(result)
}

fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse a quoted string (no escapes)
fn parse_string(value: &str) -> Result<&str, ParseError> {
    let value = value.trim();
    let inner = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or(ParseError::InvalidValue)?;
    if inner.contains('"') {
        return Err(ParseError::InvalidValue);
    }
    Ok(inner)
}

/// Parse a quoted, non-empty asset name
fn parse_name(value: &str) -> Result<AssetName, ParseError> {
    let name = parse_string(value)?;
    if name.is_empty() {
        return Err(ParseError::InvalidValue);
    }
    asset_name(name).ok_or(ParseError::NameTooLong)
}

/// Parse `["a", "b", ...]`; a trailing comma is allowed
fn parse_name_list(value: &str) -> Result<NameList, ParseError> {
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .ok_or(ParseError::InvalidValue)?;

    let mut names = NameList::new();
    push_names(inner, &mut names)?;
    Ok(names)
}

/// Append comma-separated quoted names; commas inside quotes are literal
fn push_names(items: &str, names: &mut NameList) -> Result<(), ParseError> {
    let mut rest = items.trim();

    while !rest.is_empty() {
        let quoted = rest.strip_prefix('"').ok_or(ParseError::InvalidValue)?;
        let end = quoted.find('"').ok_or(ParseError::InvalidValue)?;
        names
            .push(parse_name(&rest[..end + 2])?)
            .map_err(|_| ParseError::TooManyItems)?;

        rest = quoted[end + 1..].trim_start();
        if let Some(after) = rest.strip_prefix(',') {
            rest = after.trim_start();
        } else if !rest.is_empty() {
            return Err(ParseError::InvalidValue);
        }
    }
    Ok(())
}
