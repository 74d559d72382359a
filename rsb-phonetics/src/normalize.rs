//! Word normalization before transcription
//!
//! Responses are typed or recognized free text ("le café", "Café !"). The
//! transcriber only ever sees a single bare, unaccented, lowercase word.

/// Punctuation removed before tokenizing
const PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '\'', '"', '(', ')', '-'];

/// Leading French articles ignored in responses
const ARTICLES: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "du", "de", "l\u{2019}", "d\u{2019}",
];

fn strip_accent(c: char) -> char {
    match c {
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'à' | 'â' | 'ä' => 'a',
        'î' | 'ï' => 'i',
        'ô' | 'ö' => 'o',
        'ù' | 'û' | 'ü' => 'u',
        'ÿ' => 'y',
        'ç' => 'c',
        'ñ' => 'n',
        other => other,
    }
}

pub fn is_article(token: &str) -> bool {
    ARTICLES.contains(&token)
}

/// Normalize a raw response to the single word that gets transcribed
///
/// Lowercases, strips punctuation and accents, then returns the first token
/// that is not an article. When every token is an article the last one is
/// kept ("un" stays "un"); when there is no token at all the cleaned string
/// is returned as is.
pub fn normalize_word(word: &str) -> String {
    let normalized: String = word
        .to_lowercase()
        .trim()
        .chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .map(strip_accent)
        .collect();

    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    if let Some(first) = tokens.iter().find(|t| !is_article(t)) {
        return (*first).to_string();
    }

    match tokens.last() {
        Some(last) => (*last).to_string(),
        None => normalized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_articles_are_removed() {
        assert_eq!(normalize_word("le chat"), "chat");
        assert_eq!(normalize_word("la maison"), "maison");
        assert_eq!(normalize_word("les chiens"), "chiens");
        assert_eq!(normalize_word("un pain"), "pain");
        assert_eq!(normalize_word("du pain"), "pain");
        assert_eq!(normalize_word("des mots"), "mots");
    }

    #[test]
    fn test_accents_are_stripped() {
        assert_eq!(normalize_word("père"), "pere");
        assert_eq!(normalize_word("été"), "ete");
        assert_eq!(normalize_word("élève"), "eleve");
        assert_eq!(normalize_word("hôtel"), "hotel");
        assert_eq!(normalize_word("garçon"), "garcon");
        assert_eq!(normalize_word("une mère"), "mere");
    }

    #[test]
    fn test_case_and_punctuation() {
        assert_eq!(normalize_word("  Café ! "), "cafe");
        assert_eq!(normalize_word("(Chat)"), "chat");
        assert_eq!(normalize_word("LE CAFÉ"), "cafe");
    }

    #[test]
    fn test_normalization_equivalence() {
        assert_eq!(normalize_word("le café"), normalize_word("cafe"));
    }

    #[test]
    fn test_only_articles_keeps_last() {
        assert_eq!(normalize_word("un"), "un");
        assert_eq!(normalize_word("de la"), "la");
    }

    #[test]
    fn test_curly_elision_is_an_article_token() {
        assert_eq!(normalize_word("l\u{2019} avion"), "avion");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_word(""), "");
        assert_eq!(normalize_word("?!"), "");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(normalize_word("Une Fête"), normalize_word("Une Fête"));
    }
}
