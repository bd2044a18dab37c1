use chrono::NaiveDate;

pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p";
pub const PLACEHOLDER_POSTER: &str = "/placeholder-poster.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    /// List thumbnails.
    W342,
    /// Detail page poster.
    W500,
    /// Backdrops.
    Original,
}

impl ImageSize {
    pub fn as_token(&self) -> &'static str {
        match self {
            ImageSize::W342 => "w342",
            ImageSize::W500 => "w500",
            ImageSize::Original => "original",
        }
    }
}

/// Loadable URL for an upstream image path, or `None` when there is no path.
pub fn tmdb_image_url(path: Option<&str>, size: ImageSize) -> Option<String> {
    let path = path.filter(|p| !p.is_empty())?;
    Some(format!("{IMAGE_BASE}/{}{path}", size.as_token()))
}

/// Like [`tmdb_image_url`] but falls back to the local placeholder.
pub fn image_url(path: Option<&str>, size: ImageSize) -> String {
    tmdb_image_url(path, size).unwrap_or_else(|| PLACEHOLDER_POSTER.to_string())
}

pub fn format_runtime(minutes: Option<u32>) -> String {
    match minutes {
        None | Some(0) => "N/A".to_string(),
        Some(m) => {
            let hours = m / 60;
            let mins = m % 60;
            if hours > 0 {
                format!("{hours}h {mins}m")
            } else {
                format!("{mins}m")
            }
        }
    }
}

pub fn format_rating(vote_average: f64) -> String {
    format!("{vote_average:.1}/10")
}

/// `2024-01-15` -> `January 15, 2024`. Values that are not a plain date are
/// shown as given.
pub fn format_release_date(date: Option<&str>) -> String {
    let Some(raw) = date.filter(|d| !d.trim().is_empty()) else {
        return "N/A".to_string();
    };
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(d) => d.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_runtime() {
        assert_eq!(format_runtime(Some(125)), "2h 5m");
        assert_eq!(format_runtime(Some(45)), "45m");
        assert_eq!(format_runtime(Some(60)), "1h 0m");
        assert_eq!(format_runtime(None), "N/A");
        assert_eq!(format_runtime(Some(0)), "N/A");
    }

    #[test]
    fn formats_rating_to_one_decimal() {
        assert_eq!(format_rating(7.5), "7.5/10");
        assert_eq!(format_rating(8.0), "8.0/10");
        assert_eq!(format_rating(6.44), "6.4/10");
    }

    #[test]
    fn formats_release_dates() {
        assert_eq!(format_release_date(Some("2024-01-15")), "January 15, 2024");
        assert_eq!(format_release_date(Some("1999-10-05")), "October 5, 1999");
        assert_eq!(format_release_date(None), "N/A");
        assert_eq!(format_release_date(Some("")), "N/A");
        assert_eq!(format_release_date(Some("2024")), "2024");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(12345), "12,345");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn absent_path_never_builds_tmdb_url() {
        assert_eq!(tmdb_image_url(None, ImageSize::W342), None);
        assert_eq!(tmdb_image_url(Some(""), ImageSize::W342), None);
        assert_eq!(image_url(None, ImageSize::W500), PLACEHOLDER_POSTER);
        assert_eq!(
            image_url(Some("/abc.jpg"), ImageSize::W342),
            "https://image.tmdb.org/t/p/w342/abc.jpg"
        );
        assert_eq!(
            image_url(Some("/abc.jpg"), ImageSize::Original),
            "https://image.tmdb.org/t/p/original/abc.jpg"
        );
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html("<b>\"Tom & Jerry's\"</b>"),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }
}
