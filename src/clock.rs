//! Wall-clock sampling for the header clock and the attendance check screen.
//!
//! The clock holds the most recent sample and is re-sampled from the event
//! loop tick; formatting is pure so it can be tested on fixed timestamps.

use chrono::{DateTime, Datelike, Local, Timelike, Weekday};

#[derive(Debug, Clone)]
pub struct Clock {
    now: DateTime<Local>,
}

impl Clock {
    pub fn new() -> Self {
        Self { now: Local::now() }
    }

    /// Take a fresh wall-clock sample. Called once per tick; stops with the
    /// event loop, so there is no dangling timer to cancel.
    pub fn sample(&mut self) {
        self.now = Local::now();
    }

    /// Header format, e.g. `2025/11/13 (木) 20:20:20`.
    pub fn display(&self) -> String {
        format_stamp(self.now)
    }

    /// Time-only format for the attendance check screen.
    pub fn display_time(&self) -> String {
        format_time(self.now)
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

pub fn format_stamp(at: DateTime<Local>) -> String {
    format!(
        "{:04}/{:02}/{:02} ({}) {}",
        at.year(),
        at.month(),
        at.day(),
        weekday_kanji(at.weekday()),
        format_time(at)
    )
}

pub fn format_time(at: DateTime<Local>) -> String {
    format!("{:02}:{:02}:{:02}", at.hour(), at.minute(), at.second())
}

fn weekday_kanji(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "月",
        Weekday::Tue => "火",
        Weekday::Wed => "水",
        Weekday::Thu => "木",
        Weekday::Fri => "金",
        Weekday::Sat => "土",
        Weekday::Sun => "日",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn stamp(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn formats_date_with_kanji_weekday() {
        // 2025-11-13 is a Thursday.
        let at = stamp(2025, 11, 13, 20, 20, 20);
        assert_eq!(format_stamp(at), "2025/11/13 (木) 20:20:20");
    }

    #[test]
    fn time_only_format_is_zero_padded() {
        let at = stamp(2025, 1, 5, 9, 3, 7);
        assert_eq!(format_time(at), "09:03:07");
    }

    #[test]
    fn samples_more_than_a_second_apart_render_differently() {
        let first = stamp(2025, 11, 13, 20, 20, 20);
        let second = first + Duration::seconds(2);
        assert_ne!(format_stamp(first), format_stamp(second));
    }

    #[test]
    fn each_weekday_has_a_distinct_glyph() {
        // 2025-11-10 is a Monday; walk a full week.
        let glyphs: Vec<String> = (0..7)
            .map(|offset| {
                let at = stamp(2025, 11, 10 + offset, 12, 0, 0);
                weekday_kanji(at.weekday()).to_string()
            })
            .collect();
        assert_eq!(glyphs, ["月", "火", "水", "木", "金", "土", "日"]);
    }
}
