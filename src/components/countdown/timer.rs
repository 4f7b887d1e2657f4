//! Time remaining until Christmas morning.

use chrono::{DateTime, Datelike, FixedOffset, TimeZone};

/// Whole days, hours, minutes and seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeLeft {
	pub days: i64,
	pub hours: i64,
	pub minutes: i64,
	pub seconds: i64,
}

impl TimeLeft {
	pub fn from_seconds(total: i64) -> Self {
		if total <= 0 {
			return Self::default();
		}
		Self {
			days: total / 86_400,
			hours: total / 3_600 % 24,
			minutes: total / 60 % 60,
			seconds: total % 60,
		}
	}
}

/// Midnight starting the next December 25 in `now`'s offset. Once that
/// moment is reached the target moves to the following year.
pub fn next_christmas(now: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
	let tz = now.timezone();
	let this_year = tz.with_ymd_and_hms(now.year(), 12, 25, 0, 0, 0).single()?;
	if now < this_year {
		Some(this_year)
	} else {
		tz.with_ymd_and_hms(now.year() + 1, 12, 25, 0, 0, 0).single()
	}
}

pub fn time_left(now: DateTime<FixedOffset>) -> TimeLeft {
	next_christmas(now)
		.map(|target| TimeLeft::from_seconds((target - now).num_seconds()))
		.unwrap_or_default()
}

/// Current time in the browser's timezone.
pub fn local_now() -> Option<DateTime<FixedOffset>> {
	let date = js_sys::Date::new_0();
	// getTimezoneOffset is minutes *behind* UTC.
	let offset = FixedOffset::east_opt((-date.get_timezone_offset() * 60.0) as i32)?;
	let utc = DateTime::from_timestamp_millis(date.get_time() as i64)?;
	Some(utc.with_timezone(&offset))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn at(offset_hours: i32, y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<FixedOffset> {
		FixedOffset::east_opt(offset_hours * 3600)
			.unwrap()
			.with_ymd_and_hms(y, mo, d, h, mi, s)
			.unwrap()
	}

	#[test]
	fn counts_down_within_the_year() {
		let left = time_left(at(0, 2026, 12, 24, 22, 30, 15));
		assert_eq!(
			left,
			TimeLeft {
				days: 0,
				hours: 1,
				minutes: 29,
				seconds: 45
			}
		);
	}

	#[test]
	fn target_is_local_midnight() {
		let target = next_christmas(at(5, 2026, 10, 16, 12, 0, 0)).unwrap();
		assert_eq!(target, at(5, 2026, 12, 25, 0, 0, 0));
		assert_eq!(target.naive_utc().to_string(), "2026-12-24 19:00:00");
	}

	#[test]
	fn rolls_over_once_christmas_starts() {
		let target = next_christmas(at(-8, 2026, 12, 25, 0, 0, 0)).unwrap();
		assert_eq!(target, at(-8, 2027, 12, 25, 0, 0, 0));
	}

	#[test]
	fn boxing_day_counts_to_next_year() {
		let left = time_left(at(0, 2026, 12, 26, 0, 0, 0));
		assert_eq!(left.days, 364);
		assert_eq!((left.hours, left.minutes, left.seconds), (0, 0, 0));
	}

	#[test]
	fn non_positive_spans_are_zero() {
		assert_eq!(TimeLeft::from_seconds(0), TimeLeft::default());
		assert_eq!(TimeLeft::from_seconds(-5), TimeLeft::default());
	}

	#[test]
	fn splits_seconds_into_units() {
		let left = TimeLeft::from_seconds(2 * 86_400 + 3 * 3_600 + 4 * 60 + 5);
		assert_eq!(
			left,
			TimeLeft {
				days: 2,
				hours: 3,
				minutes: 4,
				seconds: 5
			}
		);
	}
}
