// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the argument CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Respects `NO_COLOR`
//! and drops color when the target stream is not a TTY, so piping a check
//! into a script yields plain text.
//!
//! # Theme detection order
//!
//! 1. `ARGUMENT_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use argument::{ArgumentError, FailureKind};
use std::sync::OnceLock;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// `COLORFGBG` is "fg;bg"; background colors 7 and up (except 8) are light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg = value.split(';').next_back()?.parse::<u8>().ok()?;
    if bg >= 7 && bg != 8 {
        Some(Theme::Light)
    } else {
        None
    }
}

fn detect_theme() -> Theme {
    if let Some(theme) = std::env::var("ARGUMENT_THEME")
        .ok()
        .and_then(|value| parse_theme(&value))
    {
        return theme;
    }

    if let Some(theme) = std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| theme_from_colorfgbg(&value))
    {
        return theme;
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            // "Dark" means dark mode; absence or error means light mode
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════
//
// OneDark: https://github.com/joshdick/onedark.vim
// One Light: https://github.com/sonph/onehalf

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Output stream a line is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Check if colors should be used on `stream`
pub fn use_colors(stream: Stream) -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    match stream {
        Stream::Stdout => atty::is(atty::Stream::Stdout),
        Stream::Stderr => atty::is(atty::Stream::Stderr),
    }
}

/// Apply theme color with optional modifiers
pub fn themed(stream: Stream, color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors(stream) {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(pad))
}

// ═══════════════════════════════════════════════════════════════════════════
// CHECK OUTCOMES
// ═══════════════════════════════════════════════════════════════════════════

/// `✓ name = value`, or `✓ name (absent)` when an optional value was allowed through.
pub fn passed_line(name: &str, value: Option<&str>) -> String {
    let mark = themed(Stream::Stdout, GREEN, &[BOLD], "✓");
    let name = themed(Stream::Stdout, CYAN, &[], name);
    match value {
        Some(value) => format!("{} {} = {}", mark, name, value),
        None => format!("{} {} {}", mark, name, themed(Stream::Stdout, GRAY, &[], "(absent)")),
    }
}

fn kind_color(kind: FailureKind) -> fn() -> String {
    match kind {
        FailureKind::Null | FailureKind::Empty | FailureKind::WhiteSpace => YELLOW,
        FailureKind::Type | FailureKind::OutOfRange | FailureKind::Invalid => RED,
    }
}

/// `✗ name [kind] message`, with the rejected value on a second line when recorded.
pub fn failed_line(error: &ArgumentError) -> String {
    let mark = themed(Stream::Stderr, RED, &[BOLD], "✗");
    let name = themed(Stream::Stderr, CYAN, &[], error.name());
    let kind = themed(
        Stream::Stderr,
        kind_color(error.kind()),
        &[],
        &format!("[{}]", error.kind()),
    );
    let mut line = format!("{} {} {} {}", mark, name, kind, error.message());
    if let Some(actual) = error.actual_value() {
        line.push_str(&format!(
            "\n  {}",
            themed(Stream::Stderr, GRAY, &[], &format!("actual value: {}", actual))
        ));
    }
    line
}

/// One line of the `rules` listing.
pub fn rule_row(name: &str, description: &str, width: usize) -> String {
    let name = themed(Stream::Stdout, CYAN, &[BOLD], name);
    format!("  {}  {}", pad_right(&name, width), description)
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
