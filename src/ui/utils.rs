use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Safely truncate string to max columns, appending "…" if truncated 🛡️
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Splits `s` into lines of at most `width` columns. Always at least one line.
pub fn wrap(s: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = vec![String::new()];
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width && used > 0 {
            lines.push(String::new());
            used = 0;
        }
        if let Some(line) = lines.last_mut() {
            line.push(ch);
        }
        used += w;
    }
    lines
}

/// File name without its extension, for song rows.
pub fn display_name(name: &str) -> &str {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
}

pub fn format_hms(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}

/// Leading integer of a tag date ("1973-03-01" → "1973"); the raw text when
/// it does not start with a digit.
pub fn year_of(date: &str) -> &str {
    let trimmed = date.trim();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    if end == 0 {
        trimmed
    } else {
        &trimmed[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_by_columns() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefgh", 5), "abcd…");
        assert_eq!(truncate("日本語の歌", 5), "日本…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_wrap_matches_column_count() {
        assert_eq!(wrap("", 10), vec![""]);
        assert_eq!(wrap("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(wrap("日本語", 4), vec!["日本", "語"]);
    }

    #[test]
    fn test_names_and_times() {
        assert_eq!(display_name("01 Time.flac"), "01 Time");
        assert_eq!(display_name("noext"), "noext");
        assert_eq!(format_hms(3_725_000), "01:02:05");
        assert_eq!(year_of("1973-03-01"), "1973");
        assert_eq!(year_of("March 1973"), "March 1973");
        assert_eq!(year_of(""), "");
    }
}
