use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};

/// Starts a steadily ticking spinner with `message`.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

/// Formats a vote average with one decimal, e.g. `7.2`.
pub fn format_rating(vote_average: f64) -> String {
    format!("{:.1}", vote_average)
}

/// Joins the image base URL and a TMDB poster path.
pub fn poster_url(image_url: &str, poster_path: Option<&str>) -> Option<String> {
    poster_path
        .filter(|p| !p.is_empty())
        .map(|p| format!("{}{}", image_url.trim_end_matches('/'), p))
}

/// Extracts the year of a `YYYY-MM-DD` release date.
pub fn release_year(release_date: Option<&str>) -> Option<i32> {
    release_date
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .map(|d| d.year())
}

/// Formats a runtime in minutes as `2h 16m`.
pub fn format_runtime(minutes: Option<u32>) -> Option<String> {
    match minutes {
        Some(0) | None => None,
        Some(m) if m < 60 => Some(format!("{}m", m)),
        Some(m) => Some(format!("{}h {}m", m / 60, m % 60)),
    }
}
