// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the unicharmap CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `UNICHARMAP_THEME` first, then `COLORFGBG`, then defaults to dark.
//! `NO_COLOR` and non-TTY output turn colors off entirely, so piped output
//! stays plain.
//!
//! Status lines (`✓`, `❌`) go to stderr; tables and results go to stdout.

use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 60;

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

/// Pick a theme from the two environment hints.
fn theme_from(explicit: Option<&str>, colorfgbg: Option<&str>) -> Theme {
    if let Some(theme) = explicit {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Some(bg) = colorfgbg.and_then(|v| v.split(';').next_back()) {
        if let Ok(bg_num) = bg.parse::<u8>() {
            if bg_num >= 7 && bg_num != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

fn detect_theme() -> Theme {
    theme_from(
        std::env::var("UNICHARMAP_THEME").ok().as_deref(),
        std::env::var("COLORFGBG").ok().as_deref(),
    )
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

/// One Light palette
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

/// Colors are on when `NO_COLOR` is unset and the stream is a terminal.
fn colors_enabled(no_color: bool, is_tty: bool) -> bool {
    !no_color && is_tty
}

/// Check if colors should be used on `stream` (TTY detection)
pub fn use_colors_on(stream: atty::Stream) -> bool {
    colors_enabled(std::env::var("NO_COLOR").is_ok(), atty::is(stream))
}

/// Check if colors should be used on stdout
pub fn use_colors() -> bool {
    use_colors_on(atty::Stream::Stdout)
}

fn paint(colored: bool, color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if colored {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Apply theme color with optional modifiers, for stdout
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    paint(use_colors(), color_fn, modifiers, text)
}

/// Like [`themed`], but for text written to stderr
pub fn themed_err(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    paint(use_colors_on(atty::Stream::Stderr), color_fn, modifiers, text)
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

/// Print a success line to stderr
pub fn success(msg: &str) {
    eprintln!("{} {}", themed_err(GREEN, &[BOLD], "✓"), msg);
}

/// Print an error line to stderr
pub fn failure(msg: &str) {
    eprintln!("{} {}", themed_err(RED, &[BOLD], "❌"), msg);
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    let (b, r) = (border(), reset());
    println!("{b}│{r}{}{}{b}│{r}", content, " ".repeat(pad));
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    let (b, r) = (border(), reset());
    println!("{b}┌{r}{}{b}{}┐{r}", label_part, "─".repeat(remaining));
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let (b, r) = (border(), reset());
    println!("{b}└{}┘{r}", "─".repeat(BOX_WIDTH));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Render key bytes for display: UTF-8 as text, anything else as hex.
pub fn key_label(key: &[u8]) -> String {
    match std::str::from_utf8(key) {
        Ok(" ") => "␠".to_string(),
        Ok(s) if !s.chars().any(char::is_control) => s.to_string(),
        _ => key
            .iter()
            .map(|b| format!("\\x{:02x}", b))
            .collect::<String>(),
    }
}

/// Color-coded id of a scanned unit (gray dash when nothing matched)
pub fn id_value(id: i32, known: bool) -> String {
    if !known {
        themed(GRAY, &[], "-")
    } else {
        themed(YELLOW, &[], &id.to_string())
    }
}

/// Format bytes as human-readable size
pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}
