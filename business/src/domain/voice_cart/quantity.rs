use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::cart::model::MAX_LINE_QUANTITY;

use super::vocabulary::{NUMBER_WORDS, REQUEST_VERBS, UNIT_NOUNS, number_word_value};

/// Quantity used when a transcript carries no explicit amount.
pub const DEFAULT_QUANTITY: u32 = 1;

fn alternation(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

static UNIT_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"([0-9]+)\s+(?:{})", alternation(UNIT_NOUNS)))
        .expect("unit phrase pattern is valid")
});

static VERB_DIGITS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?:{})\s+([0-9]+)", alternation(REQUEST_VERBS)))
        .expect("verb digits pattern is valid")
});

static VERB_NUMBER_WORDS: Lazy<Vec<(Regex, u32)>> = Lazy::new(|| {
    let verbs = alternation(REQUEST_VERBS);
    NUMBER_WORDS
        .iter()
        .map(|(word, value)| {
            let pattern = format!(r"(?:{})\s+{}", verbs, regex::escape(word));
            (
                Regex::new(&pattern).expect("verb number word pattern is valid"),
                *value,
            )
        })
        .collect()
});

/// Parses an ASCII digit run, clamping it to [`MAX_LINE_QUANTITY`].
/// Zero is not an amount.
fn positive(digits: &str) -> Option<u32> {
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return None;
    }
    // Only overflow can fail here: the run is all digits.
    let value = significant.parse::<u64>().unwrap_or(u64::MAX);
    Some(u32::try_from(value).map_or(MAX_LINE_QUANTITY, |q| q.min(MAX_LINE_QUANTITY)))
}

/// A digit run followed (after optional whitespace) by a letter or digit is
/// part of a token such as "123abc", not a standalone amount. Accented and
/// other Unicode letters count as letters too.
fn is_trailed_by_alphanumeric(rest: &str) -> bool {
    rest.trim_start()
        .chars()
        .next()
        .is_some_and(char::is_alphanumeric)
}

fn unit_phrase_quantity(text: &str) -> Option<u32> {
    UNIT_PHRASE
        .captures_iter(text)
        .find_map(|caps| positive(&caps[1]))
}

fn verb_digits_quantity(text: &str) -> Option<u32> {
    VERB_DIGITS.captures_iter(text).find_map(|caps| {
        let digits = caps.get(1)?;
        if is_trailed_by_alphanumeric(&text[digits.end()..]) {
            return None;
        }
        positive(digits.as_str())
    })
}

fn verb_number_word_quantity(text: &str) -> Option<u32> {
    VERB_NUMBER_WORDS
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, value)| *value)
}

fn leading_number_word_quantity(text: &str) -> Option<u32> {
    text.split_whitespace().take(2).find_map(number_word_value)
}

/// Best-guess requested quantity for a transcript.
///
/// Rules are tried in order and the first hit wins:
/// 1. digits followed by a unit noun ("3 camaras")
/// 2. a request verb followed by standalone digits ("quiero 4")
/// 3. a request verb followed by a spelled number ("necesito dos")
/// 4. a spelled number among the first two words ("tres teclados")
///
/// Falls back to [`DEFAULT_QUANTITY`]. Never returns zero: a literal "0" is
/// not an amount and the search moves on to the next rule. Larger amounts
/// than a cart line can hold are clamped to [`MAX_LINE_QUANTITY`].
pub fn extract_quantity(transcript: &str) -> u32 {
    let text = transcript.to_lowercase();

    unit_phrase_quantity(&text)
        .or_else(|| verb_digits_quantity(&text))
        .or_else(|| verb_number_word_quantity(&text))
        .or_else(|| leading_number_word_quantity(&text))
        .unwrap_or(DEFAULT_QUANTITY)
}
