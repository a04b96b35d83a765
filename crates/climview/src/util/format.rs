/// Prefix a formatted metric with its sign and append the unit.
///
/// Values that already carry a `-` keep it; everything else gets a `+`.
pub fn format_signed(value: &str, unit: &str) -> String {
    if value.starts_with('-') {
        format!("{value}{unit}")
    } else {
        format!("+{value}{unit}")
    }
}

/// Format a CO2 level in ppm
pub fn format_ppm(level: f64) -> String {
    format!("{:.0} ppm", level)
}

/// Format a temperature deviation for chart axes
pub fn format_degrees(value: f64) -> String {
    format!("{:.1}°C", value)
}
