//! Pure text utilities shared by the console and its adapters.

pub mod escape;
pub mod key_value;

pub use escape::escape_html;
pub use key_value::parse_key_value_text;
