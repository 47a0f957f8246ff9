use chrono::{TimeZone, Utc};

/// A millisecond epoch timestamp has at most 13 decimal digits until the year
/// 2286. Values longer than that were left in a finer-grained unit upstream.
const MAX_MILLIS_DIGITS: u32 = 13;

/// Decodes a fixed-size on-chain text buffer into an owned string.
///
/// The program zero-pads these buffers, and partially-initialized accounts
/// have been observed with zero bytes in the middle of the text, so every
/// zero byte is stripped, not just the trailing run.
pub fn decode_fixed_text(buffer: &[u8]) -> String {
    let bytes: Vec<u8> = buffer.iter().copied().filter(|b| *b != 0).collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Like [`decode_fixed_text`], but collapses an empty buffer to `None`.
pub fn decode_optional_text(buffer: &[u8]) -> Option<String> {
    let text = decode_fixed_text(buffer);
    if text.is_empty() { None } else { Some(text) }
}

/// Renders a byte payload as space-joined two-hex-digit tokens,
/// e.g. `"0a ff 3c"`.
pub fn hex_byte_tokens(data: &[u8]) -> String {
    data.iter()
        .map(|byte| format!("{:02x}", byte))
        .collect::<Vec<String>>()
        .join(" ")
}

/// Converts a seconds-since-epoch chain timestamp to milliseconds.
pub fn seconds_to_millis(seconds: i64) -> i64 {
    seconds.saturating_mul(1000)
}

/// Corrects a double-scaled expiration timestamp.
///
/// Some records reach us already in milliseconds and get scaled a second
/// time; such values exceed 13 decimal digits and are divided back down.
/// Values of 13 digits or fewer pass through unchanged.
pub fn normalize_expiration_millis(value: i64) -> i64 {
    if decimal_digits(value) > MAX_MILLIS_DIGITS {
        value / 1000
    } else {
        value
    }
}

fn decimal_digits(value: i64) -> u32 {
    value.unsigned_abs().checked_ilog10().map_or(1, |d| d + 1)
}

/// Current wall-clock time in milliseconds since epoch.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Formats a millisecond epoch timestamp as human-readable UTC text.
/// Returns `None` for values chrono cannot represent.
pub fn format_timestamp(timestamp_ms: i64) -> Option<String> {
    let datetime = Utc.timestamp_millis_opt(timestamp_ms).single()?;
    Some(datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}
