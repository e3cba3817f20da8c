//! Filters for the Tera template engine
//! Currently supports the following filters:
//! - `rot13` : Encode the text with ROT13
//! - `unbracket` : Remove angle brackets from the text
//! - `repeat` : Repeat the text a number of times

pub mod repeat;
pub mod transform;
