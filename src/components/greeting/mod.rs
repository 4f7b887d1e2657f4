//! Shareable greeting cards.
//!
//! A sender's name and message travel inside the page URL as
//! `?text=<base64 JSON>`. Opening such a link shows the card once and
//! cleans the address bar.

mod codec;
mod component;
mod link;

pub use codec::{Greeting, GreetingError, QUERY_PARAM, decode, decode_lenient, encode};
pub use component::{GreetingModal, ReceivedCard};
pub use link::{share_link, take_received_greeting};
