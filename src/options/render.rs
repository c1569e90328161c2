//! Options menu rendering so menu state maps to stable text output.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::settings_store::OptionValue;

use super::items::OptionEntry;

const MIN_WIDTH: usize = 24;
const VALUE_WIDTH: usize = 8;

pub struct OptionsView<'a> {
    pub entries: &'a [OptionEntry],
    pub values: Vec<OptionValue>,
    pub selected: usize,
}

pub fn format_options_menu(view: &OptionsView<'_>, width: usize) -> String {
    let width = width.max(MIN_WIDTH);
    let inner_width = width - 2;
    let mut lines = Vec::with_capacity(view.entries.len() + 4);

    lines.push(format!("┌{}┐", "─".repeat(inner_width)));
    lines.push(boxed_line(&centered("Options", inner_width), inner_width));
    lines.push(format!("├{}┤", "─".repeat(inner_width)));
    for (idx, entry) in view.entries.iter().enumerate() {
        let value = view.values.get(idx).copied();
        lines.push(format_option_row(entry, value, idx == view.selected, inner_width));
    }
    lines.push(format!("└{}┘", "─".repeat(inner_width)));

    lines.join("\n")
}

fn format_option_row(
    entry: &OptionEntry,
    value: Option<OptionValue>,
    selected: bool,
    inner_width: usize,
) -> String {
    let marker = if selected { "▸" } else { " " };
    let value_text = value.map(value_label).unwrap_or_default();
    let label_width = inner_width.saturating_sub(VALUE_WIDTH + 3);
    let label = truncate_display(&entry.label, label_width);
    let pad = " ".repeat(label_width.saturating_sub(display_width(&label)));
    let row = format!("{marker} {label}{pad} {value_text:>w$}", w = VALUE_WIDTH);
    boxed_line(&row, inner_width)
}

fn value_label(value: OptionValue) -> String {
    match value {
        OptionValue::Flag(true) => "[ ON ]".to_string(),
        OptionValue::Flag(false) => "[ OFF ]".to_string(),
        OptionValue::Volume(volume) => format!("{volume}%"),
    }
}

fn boxed_line(text: &str, inner_width: usize) -> String {
    let clipped = truncate_display(text, inner_width);
    let pad = " ".repeat(inner_width.saturating_sub(display_width(&clipped)));
    format!("│{clipped}{pad}│")
}

fn centered(text: &str, width: usize) -> String {
    let left = width.saturating_sub(display_width(text)) / 2;
    format!("{}{text}", " ".repeat(left))
}

fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

fn truncate_display(text: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}
