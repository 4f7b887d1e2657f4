pub mod countdown;
pub mod greeting;
pub mod parallax;
pub mod snow;
