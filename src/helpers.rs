use chrono::{DateTime, Utc};

pub fn human_duration_secs(total_secs: i64) -> String {
    if total_secs < 60 {
        format!("{}s", total_secs.max(0))
    } else if total_secs < 3600 {
        format!("{}m{}s", total_secs / 60, total_secs % 60)
    } else if total_secs < 86400 {
        format!("{}h{}m", total_secs / 3600, (total_secs % 3600) / 60)
    } else {
        let days = total_secs / 86400;
        let hours = (total_secs % 86400) / 3600;
        format!("{}d{}h", days, hours)
    }
}

pub fn parse_age(timestamp: Option<&str>) -> String {
    parse_age_at(timestamp, Utc::now())
}

/// Age of an RFC 3339 timestamp relative to `now`; empty when unparseable.
pub fn parse_age_at(timestamp: Option<&str>, now: DateTime<Utc>) -> String {
    let ts = match timestamp {
        Some(s) if !s.is_empty() => s,
        _ => return String::new(),
    };

    match DateTime::parse_from_rfc3339(ts) {
        Ok(dt) => human_duration_secs((now - dt.to_utc()).num_seconds()),
        Err(_) => String::new(),
    }
}
