use chrono::Local;

/// The current local weekday as a full English name ("Monday"), matching the
/// `Day` column values expected in the timetable source.
pub fn today_weekday_name() -> String {
    Local::now().format("%A").to_string()
}
