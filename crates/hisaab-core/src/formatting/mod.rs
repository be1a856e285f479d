//! Indian-system number formatting: lakh/crore digit grouping, English words
//! on the Indian scale, and display glyphs for keypad expressions.

pub mod display;
pub mod grouping;
pub mod words;

pub use display::format_expression_for_display;
pub use grouping::{format_grouped_digits, format_grouped_f64, format_rupees, parse_grouped_digits};
pub use words::{number_to_words, number_to_words_f64};
