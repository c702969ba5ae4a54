use crate::messages;

const BYTE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// `H:MM:SS` when the duration reaches an hour, `M:SS` otherwise.
/// Zero yields an empty string so the caller can hide the badge.
pub fn format_duration(seconds: u64) -> String {
    if seconds == 0 {
        return String::new();
    }
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;

    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}

/// Human-readable size in powers of 1024, capped at GB, with at most two
/// decimals. Zero yields the unknown-size label.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return messages::UNKNOWN_SIZE.to_string();
    }
    let mut unit = 0;
    let mut scaled = bytes as f64;
    while scaled >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }
    format!("{} {}", trim_decimals(scaled), BYTE_UNITS[unit])
}

fn trim_decimals(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
