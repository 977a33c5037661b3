//! Caliper Text - String helpers
//!
//! Small, total functions over `&str`. The signatures guarantee string
//! inputs at compile time, so nothing here returns a `Result`.

mod analyze;
mod transform;

pub use analyze::{count_vowels, is_palindrome};
pub use transform::{capitalize, reverse, to_camel_case};
