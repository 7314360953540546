//! Helpers every renderer uses: escaping, date display, achievement
//! filtering.

use chrono::NaiveDate;

/// Minimal HTML escaping for user-entered text.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Formats a stored date ("YYYY-MM", optionally with a day) as short month +
/// year, e.g. "Jan 2021". Unparseable input is shown as entered.
pub fn format_month_year(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d"));
    match parsed {
        Ok(d) => d.format("%b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Displayable date range. A `current` entry always ends in "Present",
/// regardless of the stored end date.
pub fn date_range(start: &str, end: &str, current: bool) -> String {
    let start = format_month_year(start);
    let end = if current {
        "Present".to_string()
    } else {
        format_month_year(end)
    };
    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (false, true) => start,
        (true, false) => end,
        (false, false) => format!("{start} - {end}"),
    }
}

/// Achievements with empty placeholders (pending user input) dropped.
pub fn filled(items: &[String]) -> Vec<&str> {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_month_year() {
        assert_eq!(format_month_year("2021-01"), "Jan 2021");
        assert_eq!(format_month_year("2020-05-15"), "May 2020");
        assert_eq!(format_month_year(""), "");
        assert_eq!(format_month_year("circa 2019"), "circa 2019");
    }

    #[test]
    fn test_date_range_current_wins_over_end_date() {
        assert_eq!(date_range("2021-01", "2020-05", true), "Jan 2021 - Present");
        assert_eq!(date_range("2021-01", "2022-03", false), "Jan 2021 - Mar 2022");
        assert_eq!(date_range("", "", true), "Present");
        assert_eq!(date_range("2021-01", "", false), "Jan 2021");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[test]
    fn test_filled_drops_placeholders() {
        let items = vec!["One".to_string(), String::new(), "  ".to_string(), "Two".to_string()];
        assert_eq!(filled(&items), vec!["One", "Two"]);
    }
}
