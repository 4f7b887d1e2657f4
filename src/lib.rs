//! christmas-snow: an animated Christmas landing page for the browser.
//!
//! The page shows falling snow, a countdown to Christmas morning and lets
//! visitors send each other greeting cards encoded into a link. Everything
//! runs client-side as a Leptos CSR app compiled to WASM.

use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

// rand needs the `js` entropy backend on wasm32.
use getrandom as _;

pub mod components;
pub mod config;
pub mod dom;
pub mod error;

pub use components::countdown::CountdownTimer;
pub use components::greeting::{Greeting, GreetingModal, ReceivedCard};
pub use components::parallax::Parallax;
pub use components::snow::{AnimationController, SnowCanvas, SnowPreset};
pub use config::{ConfigError, PageConfig};
pub use error::{Error, Result};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("christmas-snow: logging initialized");
}

/// How long a gift's message stays visible after a click.
const GIFT_MESSAGE: Duration = Duration::from_secs(2);

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = PageConfig::load();
	let (modal_open, set_modal_open) = signal(false);
	let (received, set_received) =
		signal(components::greeting::take_received_greeting());
	let (active_gift, set_active_gift) = signal(None::<&'static str>);

	let open_gift = move |id: &'static str| {
		set_active_gift.set(Some(id));
		set_timeout(move || set_active_gift.set(None), GIFT_MESSAGE);
	};
	let gift_message = move |id: &'static str, text: &'static str| {
		move || {
			(active_gift.get() == Some(id)).then(|| view! { <span class="gift-message">{text}</span> })
		}
	};

	let card_snow = config.modal.clone();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Merry Christmas" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<GreetingModal
			open=modal_open
			on_close=Callback::new(move |_: ()| set_modal_open.set(false))
			snow=config.modal
		/>
		{move || {
			received
				.get()
				.map(|greeting| {
					view! {
						<ReceivedCard
							greeting=greeting
							on_close=Callback::new(move |_: ()| set_received.set(None))
							snow=card_snow.clone()
						/>
					}
				})
		}}

		<div class="page">
			<SnowCanvas preset=config.background fullscreen=true class="page-snow" />

			<Parallax speed=2.0 class="moon">
				<span class="moon-glyph">"☾"</span>
			</Parallax>
			<Parallax speed=-1.0 class="forest">
				<span class="tree">"🌲"</span>
				<span class="tree">"🌲"</span>
				<span class="tree">"🌲"</span>
			</Parallax>

			<main class="content">
				<h1 class="kicker">"It's Beginning to Look Like"</h1>
				<h2 class="title">"Christmas"</h2>
				<CountdownTimer />
				<p class="tagline">"Magic is on its way."</p>
				<button class="send-card" on:click=move |_| set_modal_open.set(true)>
					"Send a Christmas Card"
				</button>
			</main>

			<div class="gifts">
				<button class="gift gift-red" on:click=move |_| open_gift("red")>
					{gift_message("red", "Ho Ho Ho!")}
					"🎁"
				</button>
				<button class="gift gift-gold" on:click=move |_| open_gift("gold")>
					{gift_message("gold", "Merry Christmas!")}
					"🎁"
				</button>
			</div>
		</div>
	}
}
