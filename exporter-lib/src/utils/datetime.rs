use calamine::ExcelDateTime;
use chrono::Duration;

/// Text format for date cells, matching how the workbook's date cells were rendered before
const EXCEL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// First serial past 9999-12-31 23:59:59, the last date Excel can store
const EXCEL_SERIAL_LIMIT: f64 = 2_958_466.0;

/// Render a date or duration cell as text.
///
/// calamine applies the workbook's date system (1900 or 1904). Durations print
/// as total hours, minutes and seconds (`36:00:00`). `None` for serials Excel
/// itself cannot represent.
pub fn format_excel_datetime(dt: &ExcelDateTime) -> Option<String> {
    let serial = dt.as_f64();
    if !serial.is_finite() || !(0.0..EXCEL_SERIAL_LIMIT).contains(&serial) {
        return None;
    }

    if dt.is_duration() {
        return dt.as_duration().map(format_duration);
    }

    return dt
        .as_datetime()
        .map(|value| value.format(EXCEL_DATETIME_FORMAT).to_string());
}

fn format_duration(duration: Duration) -> String {
    let seconds = duration.num_seconds();
    format!(
        "{}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}
