//! Modal for composing a greeting and the card shown to its recipient.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use log::warn;

use super::codec::Greeting;
use super::link::share_link;
use crate::components::snow::{SnowCanvas, SnowPreset};

/// Form that turns a name and message into a shareable link.
#[component]
pub fn GreetingModal(
	#[prop(into)] open: Signal<bool>,
	#[prop(into)] on_close: Callback<()>,
	#[prop(into, default = SnowPreset::modal())] snow: SnowPreset,
) -> impl IntoView {
	let (sender, set_sender) = signal(String::new());
	let (message, set_message) = signal(String::new());
	let (link, set_link) = signal(None::<String>);

	let generate = move |_: MouseEvent| {
		let Ok(greeting) = Greeting::new(&sender.get(), &message.get()) else {
			return;
		};
		match share_link(&greeting) {
			Ok(url) => set_link.set(Some(url)),
			Err(e) => warn!("greeting: could not build link: {}", e),
		}
	};

	let reset = move |_: MouseEvent| {
		set_link.set(None);
		set_sender.set(String::new());
		set_message.set(String::new());
	};

	let message_blank = move || message.get().trim().is_empty();

	view! {
		<Show when=move || open.get()>
			<div class="modal-backdrop" on:click=move |_| on_close.run(())></div>
			<div class="modal greeting-modal">
				<SnowCanvas preset=snow.clone() class="modal-snow" />
				<button class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
				<h3>"Send a Special Greeting"</h3>
				<p class="subtitle">"Create a magical Christmas card"</p>
				<Show
					when=move || link.get().is_none()
					fallback=move || {
						view! {
							<div class="greeting-link">
								<input readonly=true prop:value=move || link.get().unwrap_or_default() />
								<button on:click=reset>"Create another card"</button>
							</div>
						}
					}
				>
					<label for="sender-name">"Your Name (Optional)"</label>
					<input
						id="sender-name"
						placeholder="Santa Claus"
						autocomplete="name"
						prop:value=move || sender.get()
						on:input=move |ev| set_sender.set(event_target_value(&ev))
					/>
					<label for="greeting-message">"Your Message"</label>
					<textarea
						id="greeting-message"
						placeholder="Merry Christmas! Wishing you love and joy..."
						prop:value=move || message.get()
						on:input=move |ev| set_message.set(event_target_value(&ev))
					></textarea>
					<button on:click=generate disabled=message_blank>
						"Generate Magic Link"
					</button>
				</Show>
			</div>
		</Show>
	}
}

/// Card showing a greeting that arrived through a link.
#[component]
pub fn ReceivedCard(
	greeting: Greeting,
	#[prop(into)] on_close: Callback<()>,
	#[prop(into, default = SnowPreset::modal())] snow: SnowPreset,
) -> impl IntoView {
	let Greeting { name, message } = greeting;

	view! {
		<div class="modal-backdrop" on:click=move |_| on_close.run(())></div>
		<div class="modal received-card">
			<SnowCanvas preset=snow class="modal-snow" />
			<button class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
			<h3>"You've received a Christmas card!"</h3>
			{name.map(|n| view! { <p class="sender">"From: " {n}</p> })}
			<blockquote class="message">"\u{201c}" {message} "\u{201d}"</blockquote>
			<button class="card-close" on:click=move |_| on_close.run(())>"Close"</button>
		</div>
	}
}
