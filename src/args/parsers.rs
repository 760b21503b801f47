use std::time::Duration;

/// Parses `<n>[ms|s|m|h]`; a bare number is seconds. Zero is rejected.
pub(crate) fn parse_duration_arg(s: &str) -> Result<Duration, String> {
    let value = s.trim();
    if value.is_empty() {
        return Err("Duration must not be empty.".to_owned());
    }

    let digits_len = value.chars().take_while(char::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(format!("Invalid duration '{}'.", value));
    }
    let (num_part, unit_part) = value.split_at(digits_len);
    let number: u64 = num_part
        .parse()
        .map_err(|err| format!("Invalid duration '{}': {}", value, err))?;

    let unit = if unit_part.is_empty() { "s" } else { unit_part };
    let duration = match unit {
        "ms" => Duration::from_millis(number),
        "s" => Duration::from_secs(number),
        "m" => {
            let secs = number
                .checked_mul(60)
                .ok_or_else(|| "Duration overflow.".to_owned())?;
            Duration::from_secs(secs)
        }
        "h" => {
            let secs = number
                .checked_mul(60)
                .and_then(|seconds| seconds.checked_mul(60))
                .ok_or_else(|| "Duration overflow.".to_owned())?;
            Duration::from_secs(secs)
        }
        _ => return Err(format!("Invalid duration unit '{}'.", unit)),
    };

    if duration.is_zero() {
        return Err("Duration must be > 0.".to_owned());
    }

    Ok(duration)
}
