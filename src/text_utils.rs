use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

/// Publish date of a post. Parsed dates keep the offset they were written
/// with; dates which can't be parsed are kept verbatim so they can still be shown.
#[derive(Debug, Clone, PartialEq)]
pub enum PostDate {
    Parsed(DateTime<FixedOffset>),
    Raw(String),
}

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

impl PostDate {
    pub fn parse(date_str: &str) -> PostDate {
        let trimmed = date_str.trim();

        if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
            return PostDate::Parsed(date_time);
        }

        // A trailing Z is UTC
        let with_offset = match trimmed.strip_suffix(['Z', 'z']) {
            Some(rest) => format!("{}+00:00", rest),
            None => trimmed.to_string(),
        };
        for format in OFFSET_FORMATS {
            if let Ok(date_time) = DateTime::parse_from_str(&with_offset, format) {
                return PostDate::Parsed(date_time);
            }
        }

        for format in NAIVE_FORMATS {
            if let Ok(date_time) = NaiveDateTime::parse_from_str(trimmed, format) {
                return PostDate::Parsed(date_time.and_utc().fixed_offset());
            }
        }

        if let Some(date_time) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0)) {
            return PostDate::Parsed(date_time.and_utc().fixed_offset());
        }

        PostDate::Raw(date_str.to_string())
    }

    /// The point in time, used for ordering.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            PostDate::Parsed(date_time) => Some(date_time.with_timezone(&Utc)),
            PostDate::Raw(_) => None,
        }
    }

    /// Formats the date in the offset it was written with.
    pub fn display(&self, format: &str) -> String {
        match self {
            PostDate::Parsed(date_time) => date_time.format(format).to_string(),
            PostDate::Raw(raw) => raw.clone(),
        }
    }
}

pub fn strip_quotes(title: &str) -> &str {
    title.trim_matches('"')
}

/// Indents every non-blank line; blank lines are left empty.
pub fn indent_content(content: &str, indent: usize) -> String {
    let pad = " ".repeat(indent);
    content.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_parse_date_time() {
        let expected = Some(Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap());
        assert_eq!(PostDate::parse("2024-03-01T08:30:00.000Z").instant(), expected);
        assert_eq!(PostDate::parse("2024-03-01T08:30:00Z").instant(), expected);
        assert_eq!(PostDate::parse("2024-03-01T10:30:00+02:00").instant(), expected);
        assert_eq!(PostDate::parse("2024-03-01T08:30:00").instant(), expected);
        assert_eq!(PostDate::parse("2024-03-01 08:30:00.123").instant().map(|d| d.timestamp()),
                   expected.map(|d| d.timestamp()));

        let midnight = Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
        assert_eq!(PostDate::parse("2024-03-01").instant(), midnight);
    }

    #[test]
    fn test_parse_without_seconds() {
        let expected = Some(Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap());
        assert_eq!(PostDate::parse("2024-03-01T08:30").instant(), expected);
        assert_eq!(PostDate::parse("2024-03-01 08:30").instant(), expected);
        assert_eq!(PostDate::parse("2024-03-01T08:30Z").instant(), expected);
        assert_eq!(PostDate::parse("2024-03-01T03:30-05:00").instant(), expected);
        assert_eq!(PostDate::parse("2024-03-01T08:30").display("%B %d, %Y"), "March 01, 2024");
    }

    #[test]
    fn test_display_keeps_written_offset() {
        let date = PostDate::parse("2024-03-01T23:30:00-05:00");
        assert_eq!(date.display("%B %d, %Y"), "March 01, 2024");
        assert_eq!(date.display("%H:%M"), "23:30");
        // ordering still uses the instant
        assert_eq!(date.instant(), Some(Utc.with_ymd_and_hms(2024, 3, 2, 4, 30, 0).unwrap()));
    }

    #[test]
    fn test_unparsable_date_is_kept() {
        let date = PostDate::parse("sometime in spring");
        assert_eq!(date, PostDate::Raw("sometime in spring".to_string()));
        assert_eq!(date.instant(), None);
        assert_eq!(date.display("%B %d, %Y"), "sometime in spring");
    }

    #[test]
    fn test_display() {
        let date = PostDate::parse("2024-03-01T08:30:00.000Z");
        assert_eq!(date.display("%B %d, %Y"), "March 01, 2024");
        assert_eq!(date.display("%Y-%m-%d"), "2024-03-01");
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"Quoted\""), "Quoted");
        assert_eq!(strip_quotes("\"\"Twice\"\""), "Twice");
        assert_eq!(strip_quotes("Say \"hi\" now"), "Say \"hi\" now");
    }

    #[test]
    fn test_indent_content() {
        let content = "<p>a</p>\n\n   \n<pre>b\nc</pre>";
        assert_eq!(indent_content(content, 2), "  <p>a</p>\n\n\n  <pre>b\n  c</pre>");
        assert_eq!(indent_content("", 6), "");
    }
}
