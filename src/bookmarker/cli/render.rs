//! Terminal output for command results.
//!
//! Layout (widths, truncation, padding) is computed on plain strings and
//! colored last, so Unicode titles line up.

use bookmarker::commands::{CmdMessage, MessageLevel};
use bookmarker::index::DisplayRecord;
use bookmarker::model::Settings;
use chrono::{DateTime, Utc};
use colored::Colorize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
const REMINDER_SEPARATOR: &str = " - ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_record_list(records: &[DisplayRecord]) {
    let now = Utc::now();
    for line in record_lines(records, now) {
        println!("{}", line);
    }
}

/// One line per page: index, title, reminder preview, then the age aligned
/// to the right edge.
fn record_lines(records: &[DisplayRecord], now: DateTime<Utc>) -> Vec<String> {
    let index_width = records
        .iter()
        .map(|dr| format!("{}.", dr.index).width())
        .max()
        .unwrap_or(0);

    records
        .iter()
        .map(|dr| {
            let idx = format!("{:>width$} ", format!("{}.", dr.index), width = index_width);
            let time_ago = format_time_ago(dr.record.save_date, now);

            let fixed = 2 + idx.width() + 2 + TIME_WIDTH;
            let available = LINE_WIDTH.saturating_sub(fixed);

            let title = truncate_to_width(&dr.record.title, available);
            let room = available.saturating_sub(title.width() + REMINDER_SEPARATOR.width());
            let reminder = if room > 3 {
                truncate_to_width(&single_line(&dr.record.reminder_text), room)
            } else {
                String::new()
            };

            let mut used = title.width();
            let mut body = title.bold().to_string();
            if !reminder.is_empty() {
                used += REMINDER_SEPARATOR.width() + reminder.width();
                body.push_str(REMINDER_SEPARATOR);
                body.push_str(&reminder.dimmed().to_string());
            }
            let padding = available.saturating_sub(used);

            format!(
                "  {}{}{}  {}",
                idx.yellow(),
                body,
                " ".repeat(padding),
                time_ago.dimmed()
            )
        })
        .collect()
}

pub(super) fn print_full_records(records: &[DisplayRecord]) {
    for (i, dr) in records.iter().enumerate() {
        if i > 0 {
            println!("\n--------------------------------\n");
        }
        println!("{} {}", dr.index.to_string().yellow(), dr.record.title.bold());
        println!("{}", dr.record.url.underline());
        println!();
        println!("{}", dr.record.reminder_text);
        println!();
        println!(
            "{}",
            format!(
                "Saved {} ({})",
                dr.record.save_date.format("%Y-%m-%d %H:%M"),
                dr.record.id
            )
            .dimmed()
        );
    }
}

pub(super) fn print_settings(settings: &Settings) {
    for (key, value) in settings.list_all() {
        println!("{} = {}", key, value);
    }
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
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

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookmarker::index::DisplayIndex;
    use bookmarker::model::SavedPage;
    use chrono::Duration;

    fn record(index: usize, title: &str, reminder: &str, saved: DateTime<Utc>) -> DisplayRecord {
        let mut page = SavedPage::new("https://example.com".into(), title.into(), reminder.into());
        page.save_date = saved;
        DisplayRecord {
            record: page,
            index: DisplayIndex(index),
        }
    }

    fn strip(s: &str) -> String {
        let mut out = String::new();
        let mut in_escape = false;
        for c in s.chars() {
            match (in_escape, c) {
                (false, '\u{1b}') => in_escape = true,
                (true, 'm') => in_escape = false,
                (true, _) => {}
                (false, c) => out.push(c),
            }
        }
        out
    }

    #[test]
    fn truncates_by_display_width() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn lines_have_fixed_width() {
        let now = Utc::now();
        let lines = record_lines(
            &[
                record(1, "Short", "note", now - Duration::hours(2)),
                record(10, &"Long title ".repeat(20), "x", now - Duration::days(3)),
            ],
            now,
        );
        for line in &lines {
            assert_eq!(strip(line).width(), LINE_WIDTH);
        }
        assert!(strip(&lines[0]).contains("Short - note"));
        assert!(strip(&lines[0]).trim_end().ends_with("ago"));
    }

    #[test]
    fn reminder_is_flattened() {
        assert_eq!(single_line("line one\n  line two"), "line one line two");
    }
}
