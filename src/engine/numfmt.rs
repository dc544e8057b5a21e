// * Locale-style integer formatting for report output.
// * Honor totals, deltas and search counts all go through here.

/// Inserts a comma every 3 digits from the right. Negative values keep one leading '-'.
pub fn format_with_separators(n: i64) -> String {
    if n < 0 {
        return format!("-{}", group_digits(n.unsigned_abs()));
    }
    group_digits(n as u64)
}

fn group_digits(n: u64) -> String {
    if n < 1000 {
        return n.to_string();
    }
    format!("{},{:03}", group_digits(n / 1000), n % 1000)
}

/// Signed delta: explicit '+' for zero and positive values, native '-' otherwise.
pub fn format_delta(delta: i64) -> String {
    if delta >= 0 {
        format!("+{}", format_with_separators(delta))
    } else {
        format_with_separators(delta)
    }
}

/// Parses a source display string such as "1,234,567" or " -42 ".
pub fn parse_display_int(raw: &str) -> Option<i64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    let cleaned = cleaned.strip_prefix('+').unwrap_or(&cleaned);
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}
