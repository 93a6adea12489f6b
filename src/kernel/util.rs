//! Display formatting helpers.

use chrono::Local;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable byte size at base 1024, two decimals with trailing zeros
/// trimmed: `2048 → "2 KB"`, `1536000 → "1.46 MB"`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut exponent = 0usize;
    let mut scaled = bytes;
    while scaled >= 1024 && exponent < SIZE_UNITS.len() - 1 {
        scaled /= 1024;
        exponent += 1;
    }
    let value = bytes as f64 / 1024f64.powi(exponent as i32);

    let formatted = format!("{value:.2}");
    let formatted = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{formatted} {}", SIZE_UNITS[exponent])
}

/// Display timestamp captured at record creation.
pub fn upload_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
