use chrono::NaiveTime;

/// Uppercases the first character and leaves the rest untouched.
#[must_use]
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Formats elapsed match seconds as `MM:SS`, or `H:MM:SS` past one hour.
#[must_use]
pub fn format_match_clock(seconds: usize) -> String {
    let clamped = u32::try_from(seconds).unwrap_or(u32::MAX).min(86_399);
    let Some(time) = NaiveTime::from_num_seconds_from_midnight_opt(clamped, 0) else {
        return seconds.to_string();
    };
    if clamped >= 3_600 {
        time.format("%-H:%M:%S").to_string()
    } else {
        time.format("%M:%S").to_string()
    }
}
