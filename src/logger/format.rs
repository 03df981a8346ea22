//! Log formatting and output
//!
//! Lines go to stderr so that table or JSON output on stdout stays clean
//! when piped. Long messages wrap at word boundaries under an aligned prefix.

use std::io::{ stderr, ErrorKind, Write };

use chrono::Local;
use colored::*;

use super::config::get_logger_config;
use super::levels::LogLevel;
use super::tags::LogTag;

/// Log format widths for alignment
const TAG_WIDTH: usize = 8;
const LEVEL_WIDTH: usize = 7;

/// Maximum line length before wrapping
const MAX_LINE_LENGTH: usize = 120;

pub fn format_and_log(tag: &LogTag, level: LogLevel, message: &str) {
    let config = get_logger_config();

    let time = if config.show_time {
        format!("{} ", Local::now().format("%H:%M:%S"))
    } else {
        String::new()
    };
    let tag_str = format!("{:<width$}", tag.label(), width = TAG_WIDTH);
    let level_str = format!("{:<width$}", level.as_str(), width = LEVEL_WIDTH);

    let prefix_len = time.len() + TAG_WIDTH + LEVEL_WIDTH + 6;
    let available = MAX_LINE_LENGTH.saturating_sub(prefix_len).max(40);
    let chunks = wrap_text(message, available);

    let first = if config.colored {
        format!(
            "{}[{}] [{}] {}",
            time.dimmed(),
            color_tag(tag, &tag_str),
            color_level(level, &level_str),
            chunks[0]
        )
    } else {
        format!("{}[{}] [{}] {}", time, tag_str, level_str, chunks[0])
    };
    write_stderr_safe(&first);

    let continuation = " ".repeat(prefix_len);
    for chunk in &chunks[1..] {
        write_stderr_safe(&format!("{}{}", continuation, chunk));
    }
}

fn color_tag(tag: &LogTag, padded: &str) -> ColoredString {
    match tag {
        LogTag::System => padded.bright_yellow().bold(),
        LogTag::Config => padded.bright_magenta().bold(),
        LogTag::Input => padded.bright_cyan().bold(),
        LogTag::Pools => padded.bright_blue().bold(),
        LogTag::Other(_) => padded.white().bold(),
    }
}

fn color_level(level: LogLevel, padded: &str) -> ColoredString {
    match level {
        LogLevel::Error => padded.bright_red().bold(),
        LogLevel::Warning => padded.bright_yellow().bold(),
        LogLevel::Info => padded.white().bold(),
        LogLevel::Debug | LogLevel::Verbose => padded.dimmed(),
    }
}

/// Write to stderr, ignoring broken pipes
fn write_stderr_safe(line: &str) {
    if let Err(e) = writeln!(stderr(), "{}", line) {
        if e.kind() == ErrorKind::BrokenPipe {
            return;
        }
    }
}

/// Wrap text at word boundaries, respecting existing newlines
///
/// Words longer than the width are split by characters.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut result = Vec::new();

    for line in text.split('\n') {
        if line.chars().count() <= max_width {
            result.push(line.to_string());
            continue;
        }

        let mut current = String::new();
        for word in line.split_whitespace() {
            let word_len = word.chars().count();
            let current_len = current.chars().count();

            if word_len > max_width {
                if !current.is_empty() {
                    result.push(std::mem::take(&mut current));
                }
                let chars: Vec<char> = word.chars().collect();
                for piece in chars.chunks(max_width) {
                    result.push(piece.iter().collect());
                }
            } else if current.is_empty() {
                current = word.to_string();
            } else if current_len + word_len + 1 <= max_width {
                current.push(' ');
                current.push_str(word);
            } else {
                result.push(std::mem::replace(&mut current, word.to_string()));
            }
        }
        if !current.is_empty() {
            result.push(current);
        }
    }

    if result.is_empty() {
        result.push(String::new());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_line_untouched() {
        assert_eq!(wrap_text("3 of 5 pools match", 40), vec!["3 of 5 pools match"]);
        assert_eq!(wrap_text("", 40), vec![""]);
    }

    #[test]
    fn test_wrap_at_word_boundaries() {
        let chunks = wrap_text("alpha beta gamma delta", 11);
        assert_eq!(chunks, vec!["alpha beta", "gamma delta"]);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let chunks = wrap_text("0x0123456789abcdef", 8);
        assert_eq!(chunks, vec!["0x012345", "6789abcd", "ef"]);
    }
}
