//! Greeting <-> URL token encoding.
//!
//! A greeting is serialised to JSON and wrapped in standard base64. This is
//! an obfuscation for pretty links, not a security boundary: anyone holding
//! a link can read or forge its greeting.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};

/// Query parameter carrying the encoded greeting.
pub const QUERY_PARAM: &str = "text";

/// Errors from building or decoding a greeting.
#[derive(Debug, thiserror::Error)]
pub enum GreetingError {
	#[error("greeting message is empty")]
	EmptyMessage,
	#[error("token is not valid base64: {0}")]
	Base64(#[from] base64::DecodeError),
	#[error("token is not valid UTF-8: {0}")]
	Utf8(#[from] std::string::FromUtf8Error),
	#[error("token is not a greeting: {0}")]
	Json(#[from] serde_json::Error),
}

/// A short message from an optionally named sender.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
	#[serde(
		rename = "s",
		default,
		skip_serializing_if = "Option::is_none",
		deserialize_with = "blank_as_none"
	)]
	pub name: Option<String>,
	#[serde(rename = "m")]
	pub message: String,
}

fn blank_as_none<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
	let name = Option::<String>::deserialize(d)?;
	Ok(name.filter(|n| !n.trim().is_empty()))
}

impl Greeting {
	/// Build a greeting from form input. Blank messages are rejected; blank
	/// names are dropped.
	pub fn new(name: &str, message: &str) -> Result<Self, GreetingError> {
		let message = message.trim();
		if message.is_empty() {
			return Err(GreetingError::EmptyMessage);
		}
		let name = Some(name.trim())
			.filter(|n| !n.is_empty())
			.map(str::to_owned);
		Ok(Self {
			name,
			message: message.to_owned(),
		})
	}
}

pub fn encode(greeting: &Greeting) -> Result<String, GreetingError> {
	let json = serde_json::to_string(greeting)?;
	Ok(STANDARD.encode(json))
}

pub fn decode(token: &str) -> Result<Greeting, GreetingError> {
	// Unescaped '+' arrives as ' ' after query-string decoding.
	let token = token.trim().replace(' ', "+");
	let bytes = STANDARD.decode(token)?;
	let json = String::from_utf8(bytes)?;
	Ok(serde_json::from_str(&json)?)
}

/// Decode a token from an untrusted link. Failures are logged and dropped.
pub fn decode_lenient(token: &str) -> Option<Greeting> {
	match decode(token) {
		Ok(g) => Some(g),
		Err(e) => {
			warn!("greeting: ignoring undecodable link: {}", e);
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn alice() -> Greeting {
		Greeting {
			name: Some("Alice".into()),
			message: "Merry Christmas".into(),
		}
	}

	#[test]
	fn round_trips_named_greeting() {
		let token = encode(&alice()).unwrap();
		assert_eq!(decode(&token).unwrap(), alice());
	}

	#[test]
	fn round_trips_anonymous_unicode_greeting() {
		let g = Greeting::new("", "Frohe Weihnachten ❄ 🎄").unwrap();
		assert_eq!(g.name, None);
		assert_eq!(decode(&encode(&g).unwrap()).unwrap(), g);
	}

	#[test]
	fn uses_short_wire_keys() {
		let token = encode(&alice()).unwrap();
		let json = String::from_utf8(STANDARD.decode(token).unwrap()).unwrap();
		assert_eq!(json, r#"{"s":"Alice","m":"Merry Christmas"}"#);
	}

	#[test]
	fn decodes_links_with_empty_sender() {
		let token = STANDARD.encode(r#"{"s":"","m":"Ho ho ho"}"#);
		let g = decode(&token).unwrap();
		assert_eq!(g.name, None);
		assert_eq!(g.message, "Ho ho ho");
	}

	#[test]
	fn tolerates_plus_decoded_as_space() {
		let g = Greeting::new("Bob", "~~~>>>???").unwrap();
		let token = encode(&g).unwrap();
		assert!(token.contains('+'));
		assert_eq!(decode(&token.replace('+', " ")).unwrap(), g);
	}

	#[test]
	fn rejects_blank_message() {
		assert!(matches!(Greeting::new("Santa", "   "), Err(GreetingError::EmptyMessage)));
	}

	#[test]
	fn trims_form_input() {
		let g = Greeting::new("  Santa ", "  Hi  ").unwrap();
		assert_eq!(g.name.as_deref(), Some("Santa"));
		assert_eq!(g.message, "Hi");
	}

	#[test]
	fn corrupted_tokens_decode_to_nothing() {
		let token = encode(&alice()).unwrap();
		let truncated = &token[..token.len() / 2];
		for bad in [truncated, "not base64 at all!", "", "%%%", "e30="] {
			assert_eq!(decode_lenient(bad), None, "token {bad:?}");
		}
	}

	#[test]
	fn non_json_payload_is_a_json_error() {
		let token = STANDARD.encode("hello");
		assert!(matches!(decode(&token), Err(GreetingError::Json(_))));
	}
}
