use chrono::Duration;

/// Renders a run duration as m:ss for the summary footers.
#[must_use]
pub fn format_duration(value: Duration) -> String {
    let total = value.num_seconds().max(0);
    format!("{}:{:02}", total / 60, total % 60)
}
