use std::time::Duration;

use leptos::prelude::*;
use log::warn;

use super::timer::{TimeLeft, local_now, time_left};

fn current() -> TimeLeft {
	local_now().map(time_left).unwrap_or_default()
}

/// Days/hours/minutes/seconds until Christmas, refreshed every second.
#[component]
pub fn CountdownTimer() -> impl IntoView {
	let (left, set_left) = signal(current());

	match set_interval_with_handle(move || set_left.set(current()), Duration::from_secs(1)) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(e) => warn!("countdown: could not start timer: {:?}", e),
	}

	let unit = move |label: &'static str, pick: fn(&TimeLeft) -> i64| {
		view! {
			<div class="countdown-unit">
				<span class="countdown-value">{move || format!("{:02}", pick(&left.get()))}</span>
				<span class="countdown-label">{label}</span>
			</div>
		}
	};

	view! {
		<div class="countdown">
			{unit("Days", |t| t.days)}
			{unit("Hours", |t| t.hours)}
			{unit("Min", |t| t.minutes)}
			{unit("Sec", |t| t.seconds)}
		</div>
	}
}
