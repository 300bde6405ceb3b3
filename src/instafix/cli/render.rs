//! # Rendering
//!
//! Everything here builds strings; the command handlers decide where they go.
//! Layout math (widths, truncation) is Unicode-aware, styling comes from the
//! active [`Palette`].

use super::styles::Palette;
use chrono::{DateTime, Utc};
use instafix::model::{CardBody, FixResult, SavedFix};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 80;
pub const TIME_WIDTH: usize = 16;
pub const SAVED_MARKER: &str = "★";

#[derive(Debug, Clone, Copy)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

pub fn render_message(level: MessageLevel, content: &str, palette: &Palette) -> String {
    let style = match level {
        MessageLevel::Info => &palette.muted,
        MessageLevel::Success => &palette.success,
        MessageLevel::Warning => &palette.warning,
        MessageLevel::Error => &palette.error,
    };
    format!("{}\n", style.apply_to(content))
}

/// The query line followed by the three cards.
pub fn render_fix(fix: &FixResult, is_saved: bool, palette: &Palette) -> String {
    let mut out = String::new();

    let marker = if is_saved {
        format!(" {}", palette.saved.apply_to(SAVED_MARKER))
    } else {
        String::new()
    };
    out.push_str(&format!(
        "\n{} {}{}\n",
        palette.muted.apply_to(">"),
        palette.query.apply_to(&fix.query),
        marker
    ));

    for card in fix.cards() {
        out.push('\n');
        out.push_str(&format!(
            "{}\n",
            palette.card_title(card.kind).apply_to(card.title())
        ));
        match &card.body {
            CardBody::SingleText(text) => {
                for line in wrap(text, LINE_WIDTH - 2) {
                    out.push_str(&format!("  {}\n", palette.body.apply_to(line)));
                }
            }
            CardBody::StepList(steps) => {
                for (i, step) in steps.iter().enumerate() {
                    let number = format!("{}.", i + 1);
                    let indent = " ".repeat(number.width() + 3);
                    for (j, line) in wrap(step, LINE_WIDTH - indent.width()).iter().enumerate() {
                        if j == 0 {
                            out.push_str(&format!(
                                "  {} {}\n",
                                palette.step_number.apply_to(&number),
                                palette.body.apply_to(line)
                            ));
                        } else {
                            out.push_str(&format!("{}{}\n", indent, palette.body.apply_to(line)));
                        }
                    }
                }
            }
        }
    }

    out
}

/// One line per saved fix: position, query, age.
pub fn render_saved_list(items: &[SavedFix], palette: &Palette) -> String {
    if items.is_empty() {
        return format!(
            "{}\n",
            palette.muted.apply_to("No saved fixes yet. Save one to see it here.")
        );
    }

    let mut out = String::new();
    for (i, fix) in items.iter().enumerate() {
        let index = format!("{:>3}. ", i + 1);
        let available = LINE_WIDTH.saturating_sub(index.width() + TIME_WIDTH);
        let query = truncate_to_width(&fix.query.replace('\n', " "), available);
        let padding = available.saturating_sub(query.width());
        out.push_str(&format!(
            "{}{}{}{}\n",
            palette.muted.apply_to(&index),
            palette.body.apply_to(&query),
            " ".repeat(padding),
            palette.muted.apply_to(format_time_ago(fix.timestamp))
        ));
    }
    out
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Greedy word wrap on display width. Words wider than `width` get their own line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if !line.is_empty() && line.width() + 1 + word.width() > width {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
