//! Fixed Spanish vocabulary used by the voice-to-cart interpreter.
//!
//! The tables are immutable and shared by the quantity extractor and the
//! product matcher. Order matters where it is documented.

/// Nouns that, right after a number, mark that number as a quantity.
///
/// Longer forms precede their prefixes (`unidades` before `unidad`,
/// `cpus` before `cpu`) so alternation picks the full word.
pub const UNIT_NOUNS: &[&str] = &[
    "unidades", "productos", "camaras", "cámaras", "webcams", "unidad", "cpus", "cpu",
];

/// Request verbs that may introduce a quantity.
pub const REQUEST_VERBS: &[&str] = &["quiero", "necesito", "agregar", "añadir", "comprar", "pedir"];

/// Spelled-out numbers, in lookup precedence order.
pub const NUMBER_WORDS: &[(&str, u32)] = &[
    ("uno", 1),
    ("una", 1),
    ("dos", 2),
    ("tres", 3),
    ("cuatro", 4),
    ("cinco", 5),
    ("seis", 6),
    ("siete", 7),
    ("ocho", 8),
    ("nueve", 9),
    ("diez", 10),
];

/// Words ignored by the overlap fallback of the matcher.
pub const STOPWORDS: &[&str] = &[
    "el", "la", "los", "las", "un", "una", "unos", "unas", "y", "o", "a", "ante", "con", "de",
    "desde", "en", "para", "por", "sin", "sobre", "quiero", "necesito", "agregar", "añadir",
    "comprar", "mi", "pedir",
];

/// Returns the value of a spelled-out number, if `word` is one.
pub fn number_word_value(word: &str) -> Option<u32> {
    NUMBER_WORDS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, value)| *value)
}

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}
