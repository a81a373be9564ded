use super::model::{CatalogEntry, DetectedItem};
use super::quantity::extract_quantity;
use super::vocabulary::is_stopword;

/// Minimum number of shared significant words for the overlap fallback.
const MIN_WORD_OVERLAP: usize = 2;

/// Transcript words this short never count towards an overlap.
const MAX_INSIGNIFICANT_LEN: usize = 2;

/// Naive Spanish plural of a product name.
///
/// - trailing `z` becomes `ces` ("luz" -> "luces")
/// - names ending in `s` or `x` are left as they are
/// - names ending in a vowel get `s`
/// - anything else gets `es`
pub fn pluralize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix('z') {
        return format!("{stem}ces");
    }
    match name.chars().last() {
        Some('s' | 'x') => name.to_string(),
        Some('a' | 'e' | 'i' | 'o' | 'u') => format!("{name}s"),
        _ => format!("{name}es"),
    }
}

fn significant_words(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .filter(|w| w.chars().count() > MAX_INSIGNIFICANT_LEN && !is_stopword(w))
        .collect()
}

fn mentions_by_name(text: &str, name: &str) -> bool {
    text.contains(name) || text.contains(pluralize(name).as_str())
}

/// Counts transcript words that also appear in the product name. A word
/// repeated in the transcript counts once per occurrence.
fn word_overlap(significant: &[&str], name: &str) -> usize {
    let name_words: Vec<&str> = name.split_whitespace().collect();
    significant
        .iter()
        .filter(|w| name_words.contains(w))
        .count()
}

/// Finds the catalog products mentioned in a transcript.
///
/// A product is detected when its name (or naive plural) appears verbatim,
/// or, failing that, when at least two significant transcript words appear
/// in its name. Each catalog entry is reported at most once, in catalog
/// order.
///
/// The quantity is extracted once per transcript and shared by every
/// detected product, so "dos teclados y tres mouse" adds two of each.
pub fn detect_products(transcript: &str, catalog: &[CatalogEntry]) -> Vec<DetectedItem> {
    let text = transcript.to_lowercase();
    if text.trim().is_empty() {
        return Vec::new();
    }

    let significant = significant_words(&text);
    let mut shared_quantity: Option<u32> = None;
    let mut detected = Vec::new();

    for entry in catalog {
        let name = entry.name.trim().to_lowercase();
        if name.is_empty() {
            continue;
        }

        let mentioned = mentions_by_name(&text, &name)
            || word_overlap(&significant, &name) >= MIN_WORD_OVERLAP;

        if mentioned {
            let quantity = *shared_quantity.get_or_insert_with(|| extract_quantity(&text));
            detected.push(DetectedItem {
                product_id: entry.id,
                quantity,
            });
        }
    }

    detected
}
