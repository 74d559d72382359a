//! Orthographic French → phoneme transcription
//!
//! Lookup order:
//! 1. Normalize the word (`normalize_word`)
//! 2. Dictionary hit (built-in entries, optionally overridden by a user lexicon)
//! 3. Rule-based fallback: trigraphs, then digraphs, then single letters
//!
//! The fallback is deliberately approximate. Characters it does not know are
//! skipped rather than reported.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::{debug, trace};

use crate::alignment::levenshtein_distance;
use crate::dictionary::FRENCH_DICTIONARY;
use crate::error::{PhoneticError, Result};
use crate::normalize::normalize_word;
use crate::phonemes::Phoneme;

/// Dictionary-backed transcriber with rule-based fallback
#[derive(Debug, Clone)]
pub struct Transcriber {
    /// Normalized word → phonemes
    lexicon: HashMap<String, Vec<Phoneme>>,
}

impl Default for Transcriber {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcriber {
    /// Transcriber over the built-in French dictionary
    pub fn new() -> Self {
        let mut lexicon = HashMap::with_capacity(FRENCH_DICTIONARY.len());

        for (word, phonemes) in FRENCH_DICTIONARY {
            lexicon
                .entry(normalize_word(word))
                .or_insert_with(|| phonemes.to_vec());
        }

        Self { lexicon }
    }

    /// Shared instance over the built-in dictionary, built on first use
    pub fn french() -> &'static Transcriber {
        static FRENCH: OnceLock<Transcriber> = OnceLock::new();
        FRENCH.get_or_init(Transcriber::new)
    }

    /// Built-in dictionary extended (and overridden) by user entries
    pub fn with_entries<I, W>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (W, Vec<Phoneme>)>,
        W: AsRef<str>,
    {
        let mut transcriber = Self::new();

        for (word, phonemes) in entries {
            let word = word.as_ref();
            let key = normalize_word(word);

            if key.trim().is_empty() {
                return Err(PhoneticError::invalid_entry(word, "word is empty after normalization"));
            }
            if phonemes.is_empty() {
                return Err(PhoneticError::invalid_entry(word, "no phonemes given"));
            }

            transcriber.lexicon.insert(key, phonemes);
        }

        debug!("Transcriber lexicon holds {} entries", transcriber.lexicon.len());
        Ok(transcriber)
    }

    /// Number of dictionary entries
    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    /// Dictionary entry for a word, if any (the word is normalized first)
    pub fn lookup(&self, word: &str) -> Option<&[Phoneme]> {
        self.lexicon.get(&normalize_word(word)).map(Vec::as_slice)
    }

    /// Transcribe a raw word or short response into phonemes
    pub fn transcribe(&self, word: &str) -> Vec<Phoneme> {
        let normalized = normalize_word(word);

        if let Some(phonemes) = self.lexicon.get(&normalized) {
            return phonemes.clone();
        }

        let phonemes = transcribe_with_rules(&normalized);
        debug!(
            "'{}' not in lexicon, rule-based transcription gave {} phoneme(s)",
            normalized,
            phonemes.len()
        );
        phonemes
    }

    /// Edit distance between the phoneme sequences of two words
    pub fn distance(&self, word1: &str, word2: &str) -> usize {
        levenshtein_distance(&self.transcribe(word1), &self.transcribe(word2))
    }
}

/// Transcribe with the built-in French dictionary
pub fn transcribe_to_phonemes(word: &str) -> Vec<Phoneme> {
    Transcriber::french().transcribe(word)
}

/// Phonetic (phoneme-level Levenshtein) distance between two words
pub fn calculate_phonetic_distance(word1: &str, word2: &str) -> usize {
    Transcriber::french().distance(word1, word2)
}

fn is_vowel_letter(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

fn is_consonant_letter(c: char) -> bool {
    matches!(
        c,
        'b' | 'c' | 'd' | 'f' | 'g' | 'h' | 'j' | 'k' | 'l' | 'm' | 'n' | 'p' | 'q' | 'r' | 's'
            | 't' | 'v' | 'w' | 'x' | 'z'
    )
}

/// Index one past the last pronounced letter
///
/// Final s/t/d/x/p/z/g are mute in words of three letters or more.
fn sounding_end(chars: &[char]) -> usize {
    let len = chars.len();
    if len >= 3 && matches!(chars[len - 1], 's' | 't' | 'd' | 'x' | 'p' | 'z' | 'g') {
        len - 1
    } else {
        len
    }
}

/// Multi-letter grapheme starting at `i`, limited to the pronounced part
fn match_grapheme(chars: &[char], i: usize, end: usize) -> Option<(Phoneme, usize)> {
    let trigraph: String = chars[i..end.min(i + 3)].iter().collect();
    match trigraph.as_str() {
        "eau" => return Some((Phoneme::O, 3)),
        "ain" | "ein" => return Some((Phoneme::ENasal, 3)),
        _ => {}
    }

    if i + 2 > end {
        return None;
    }

    let phoneme = match (chars[i], chars[i + 1]) {
        ('c', 'h') => Phoneme::Sh,
        ('q', 'u') => Phoneme::K,
        ('p', 'h') => Phoneme::F,
        ('t', 'h') => Phoneme::T,
        ('g', 'n') => Phoneme::Gn,
        ('o', 'u') => Phoneme::U,
        ('e', 'u') => {
            // eu is closed at the end of a word or before a consonant
            let at_end = i + 2 == chars.len();
            if at_end || chars.get(i + 2).copied().is_some_and(is_consonant_letter) {
                Phoneme::Eu
            } else {
                Phoneme::Oe
            }
        }
        ('a', 'u') => Phoneme::O,
        ('a', 'i') | ('e', 'i') => Phoneme::EOpen,
        ('o', 'n') => Phoneme::ONasal,
        ('a', 'n') | ('e', 'n') => Phoneme::ANasal,
        ('i', 'n') | ('y', 'n') => Phoneme::ENasal,
        ('u', 'n') => Phoneme::OeNasal,
        _ => return None,
    };

    Some((phoneme, 2))
}

/// Letter-by-letter fallback for words missing from the dictionary
///
/// Expects an already normalized word.
pub fn transcribe_with_rules(word: &str) -> Vec<Phoneme> {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();
    let end = sounding_end(&chars);
    let mut phonemes = Vec::with_capacity(len);

    let mut i = 0;
    while i < end {
        if let Some((phoneme, consumed)) = match_grapheme(&chars, i, end) {
            phonemes.push(phoneme);
            i += consumed;
            continue;
        }

        let next = chars.get(i + 1).copied();
        match chars[i] {
            'a' => phonemes.push(Phoneme::A),
            'e' => {
                if i == len - 1 && len > 1 {
                    phonemes.push(Phoneme::Schwa);
                } else if next == Some('r') {
                    phonemes.push(Phoneme::EOpen);
                } else {
                    phonemes.push(Phoneme::E);
                }
            }
            'i' | 'y' => phonemes.push(Phoneme::I),
            'o' => phonemes.push(Phoneme::O),
            'u' => phonemes.push(Phoneme::Y),

            'b' => phonemes.push(Phoneme::B),
            'c' => match next {
                Some('e') | Some('i') => phonemes.push(Phoneme::S),
                _ => phonemes.push(Phoneme::K),
            },
            'd' => phonemes.push(Phoneme::D),
            'f' => phonemes.push(Phoneme::F),
            'g' => match next {
                Some('e') | Some('i') => phonemes.push(Phoneme::Zh),
                _ => phonemes.push(Phoneme::G),
            },
            'h' => {}
            'j' => phonemes.push(Phoneme::Zh),
            'k' => phonemes.push(Phoneme::K),
            'l' => phonemes.push(Phoneme::L),
            'm' => phonemes.push(Phoneme::M),
            'n' => phonemes.push(Phoneme::N),
            'p' => phonemes.push(Phoneme::P),
            'r' => phonemes.push(Phoneme::R),
            's' => {
                let intervocalic = i > 0
                    && is_vowel_letter(chars[i - 1])
                    && next.is_some_and(is_vowel_letter);
                if intervocalic {
                    phonemes.push(Phoneme::Z);
                } else {
                    phonemes.push(Phoneme::S);
                }
            }
            't' => phonemes.push(Phoneme::T),
            'v' => phonemes.push(Phoneme::V),
            'w' => phonemes.push(Phoneme::W),
            'x' => phonemes.extend([Phoneme::K, Phoneme::S]),
            'z' => phonemes.push(Phoneme::Z),
            other => trace!("Skipping untranscribable character {:?}", other),
        }
        i += 1;
    }

    phonemes
}
