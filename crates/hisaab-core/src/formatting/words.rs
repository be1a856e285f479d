use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::types::money_from_f64;

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Scale names by chunk index. Chunk 0 is three digits wide, every later
/// chunk is two digits; the last scale absorbs whatever magnitude is left.
const SCALES: [&str; 9] = [
    "", "Thousand", "Lakh", "Crore", "Arab", "Kharab", "Neel", "Padma", "Shankh",
];

/// Spell the integer magnitude of `value` in English on the Indian scale,
/// e.g. 1,23,45,678 => "One Crore Twenty Three Lakh Forty Five Thousand Six
/// Hundred Seventy Eight". Any fractional part is ignored.
pub fn number_to_words(value: Decimal) -> String {
    let magnitude = match value.abs().trunc().to_u128() {
        Some(m) if m > 0 => m,
        _ => return "Zero".to_string(),
    };

    let words = magnitude_to_words(magnitude);
    if value.is_sign_negative() {
        format!("Negative {words}")
    } else {
        words
    }
}

/// Float entry point. NaN and infinities read as "Zero".
pub fn number_to_words_f64(value: f64) -> String {
    match money_from_f64(value) {
        Some(v) => number_to_words(v),
        None => "Zero".to_string(),
    }
}

fn magnitude_to_words(mut n: u128) -> String {
    let mut chunks: Vec<String> = Vec::new();

    for (idx, scale) in SCALES.iter().enumerate() {
        if n == 0 {
            break;
        }
        let chunk = if idx == 0 {
            let c = n % 1000;
            n /= 1000;
            c
        } else if idx == SCALES.len() - 1 {
            std::mem::take(&mut n)
        } else {
            let c = n % 100;
            n /= 100;
            c
        };

        if chunk == 0 {
            continue;
        }

        let chunk_words = if chunk < 1000 {
            hundreds_to_words(chunk as u16)
        } else {
            magnitude_to_words(chunk)
        };

        if scale.is_empty() {
            chunks.push(chunk_words);
        } else {
            chunks.push(format!("{chunk_words} {scale}"));
        }
    }

    chunks.reverse();
    chunks.join(" ")
}

fn hundreds_to_words(n: u16) -> String {
    match n {
        0..=19 => ONES[n as usize].to_string(),
        20..=99 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                unit => format!("{tens} {}", ONES[unit as usize]),
            }
        }
        _ => {
            let hundreds = format!("{} Hundred", ONES[(n / 100) as usize]);
            match n % 100 {
                0 => hundreds,
                rest => format!("{hundreds} {}", hundreds_to_words(rest)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_words_known_answers() {
        assert_eq!(number_to_words(dec!(100000)), "One Lakh");
        assert_eq!(number_to_words(dec!(10000000)), "One Crore");
        assert_eq!(number_to_words(dec!(0)), "Zero");
        assert_eq!(
            number_to_words(dec!(1234)),
            "One Thousand Two Hundred Thirty Four"
        );
    }

    #[test]
    fn test_words_teens_and_tens() {
        assert_eq!(number_to_words(dec!(13)), "Thirteen");
        assert_eq!(number_to_words(dec!(40)), "Forty");
        assert_eq!(number_to_words(dec!(99)), "Ninety Nine");
        assert_eq!(number_to_words(dec!(110)), "One Hundred Ten");
        assert_eq!(number_to_words(dec!(500)), "Five Hundred");
    }

    #[test]
    fn test_words_mixed_scales() {
        assert_eq!(
            number_to_words(dec!(12345678)),
            "One Crore Twenty Three Lakh Forty Five Thousand Six Hundred Seventy Eight"
        );
        assert_eq!(number_to_words(dec!(2500000)), "Twenty Five Lakh");
        assert_eq!(number_to_words(dec!(10001)), "Ten Thousand One");
    }

    #[test]
    fn test_words_beyond_crore() {
        assert_eq!(number_to_words(dec!(1000000000)), "One Arab");
        assert_eq!(number_to_words(dec!(100000000000000)), "Ten Neel");
        assert_eq!(
            number_to_words(dec!(123400000000000000000)),
            "One Thousand Two Hundred Thirty Four Shankh"
        );
    }

    #[test]
    fn test_words_negative_and_fraction() {
        assert_eq!(number_to_words(dec!(-5000)), "Negative Five Thousand");
        assert_eq!(number_to_words(dec!(42.99)), "Forty Two");
        assert_eq!(number_to_words(dec!(-0.4)), "Zero");
    }

    #[test]
    fn test_words_non_finite_floats() {
        assert_eq!(number_to_words_f64(f64::NAN), "Zero");
        assert_eq!(number_to_words_f64(f64::NEG_INFINITY), "Zero");
        assert_eq!(number_to_words_f64(100000.0), "One Lakh");
    }
}
