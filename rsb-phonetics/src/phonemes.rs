//! French phoneme inventory
//!
//! The closed set of symbols the transcriber can emit, with the articulatory
//! classification used to bucket errors (vowel/consonant, oral/nasal,
//! occlusive/fricative, voiced/voiceless).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::{PhoneticError, Result};

/// A French phoneme (IPA-like symbol set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phoneme {
    // Oral vowels
    A,
    ABack,
    E,
    EOpen,
    I,
    O,
    OOpen,
    U,
    Y,
    Eu,
    Oe,
    Schwa,
    // Nasal vowels
    ANasal,
    ENasal,
    ONasal,
    OeNasal,
    // Occlusives
    P,
    B,
    T,
    D,
    K,
    G,
    // Fricatives
    F,
    V,
    S,
    Z,
    Sh,
    Zh,
    // Nasal consonants
    M,
    N,
    Gn,
    Ng,
    // Liquids
    L,
    R,
    // Semi-consonants
    J,
    W,
    Hu,
}

/// Broad class of a phoneme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhonemeCategory {
    #[serde(rename = "voyelle")]
    Vowel,
    #[serde(rename = "consonne")]
    Consonant,
}

/// Articulatory sub-class of a phoneme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubCategory {
    #[serde(rename = "orale")]
    Oral,
    #[serde(rename = "nasale")]
    Nasal,
    #[serde(rename = "occlusive_sourde")]
    VoicelessOcclusive,
    #[serde(rename = "occlusive_sonore")]
    VoicedOcclusive,
    #[serde(rename = "fricative_sourde")]
    VoicelessFricative,
    #[serde(rename = "fricative_sonore")]
    VoicedFricative,
    #[serde(rename = "liquide")]
    Liquid,
    #[serde(rename = "semi_consonne")]
    SemiConsonant,
}

impl SubCategory {
    pub fn is_nasal(&self) -> bool {
        matches!(self, SubCategory::Nasal)
    }

    pub fn is_occlusive(&self) -> bool {
        matches!(
            self,
            SubCategory::VoicelessOcclusive | SubCategory::VoicedOcclusive
        )
    }

    pub fn is_fricative(&self) -> bool {
        matches!(
            self,
            SubCategory::VoicelessFricative | SubCategory::VoicedFricative
        )
    }
}

/// Error buckets reported by the analyzers
///
/// A phoneme may belong to several buckets: a nasal consonant is counted in
/// both `consonnes` and `nasales`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    #[serde(rename = "voyelles")]
    Vowels,
    #[serde(rename = "consonnes")]
    Consonants,
    #[serde(rename = "nasales")]
    Nasals,
    #[serde(rename = "occlusives")]
    Occlusives,
    #[serde(rename = "fricatives")]
    Fricatives,
}

impl ErrorCategory {
    /// All buckets, in reporting order
    pub const ALL: [ErrorCategory; 5] = [
        ErrorCategory::Vowels,
        ErrorCategory::Consonants,
        ErrorCategory::Nasals,
        ErrorCategory::Occlusives,
        ErrorCategory::Fricatives,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ErrorCategory::Vowels => "voyelles",
            ErrorCategory::Consonants => "consonnes",
            ErrorCategory::Nasals => "nasales",
            ErrorCategory::Occlusives => "occlusives",
            ErrorCategory::Fricatives => "fricatives",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static description of one phoneme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhonemeInfo {
    pub symbol: &'static str,
    pub category: PhonemeCategory,
    pub sub_category: SubCategory,
    pub description: &'static str,
}

const fn info(
    symbol: &'static str,
    category: PhonemeCategory,
    sub_category: SubCategory,
    description: &'static str,
) -> PhonemeInfo {
    PhonemeInfo {
        symbol,
        category,
        sub_category,
        description,
    }
}

use PhonemeCategory::{Consonant, Vowel};
use SubCategory::*;

impl Phoneme {
    /// Every phoneme of the inventory, vowels first
    pub const ALL: [Phoneme; 37] = [
        Phoneme::A,
        Phoneme::ABack,
        Phoneme::E,
        Phoneme::EOpen,
        Phoneme::I,
        Phoneme::O,
        Phoneme::OOpen,
        Phoneme::U,
        Phoneme::Y,
        Phoneme::Eu,
        Phoneme::Oe,
        Phoneme::Schwa,
        Phoneme::ANasal,
        Phoneme::ENasal,
        Phoneme::ONasal,
        Phoneme::OeNasal,
        Phoneme::P,
        Phoneme::B,
        Phoneme::T,
        Phoneme::D,
        Phoneme::K,
        Phoneme::G,
        Phoneme::F,
        Phoneme::V,
        Phoneme::S,
        Phoneme::Z,
        Phoneme::Sh,
        Phoneme::Zh,
        Phoneme::M,
        Phoneme::N,
        Phoneme::Gn,
        Phoneme::Ng,
        Phoneme::L,
        Phoneme::R,
        Phoneme::J,
        Phoneme::W,
        Phoneme::Hu,
    ];

    pub fn info(&self) -> PhonemeInfo {
        match self {
            Phoneme::A => info("a", Vowel, Oral, "a de patte"),
            Phoneme::ABack => info("\u{251}", Vowel, Oral, "â de pâte"),
            Phoneme::E => info("e", Vowel, Oral, "é de thé"),
            Phoneme::EOpen => info("\u{25b}", Vowel, Oral, "è de mère"),
            Phoneme::I => info("i", Vowel, Oral, "i de lit"),
            Phoneme::O => info("o", Vowel, Oral, "o de sot"),
            Phoneme::OOpen => info("\u{254}", Vowel, Oral, "o de mort"),
            Phoneme::U => info("u", Vowel, Oral, "ou de roue"),
            Phoneme::Y => info("y", Vowel, Oral, "u de mur"),
            Phoneme::Eu => info("\u{f8}", Vowel, Oral, "eu de peu"),
            Phoneme::Oe => info("\u{153}", Vowel, Oral, "eu de peur"),
            Phoneme::Schwa => info("\u{259}", Vowel, Oral, "e de le"),
            Phoneme::ANasal => info("\u{e3}", Vowel, Nasal, "an de plan"),
            Phoneme::ENasal => info("\u{25b}\u{303}", Vowel, Nasal, "in de fin"),
            Phoneme::ONasal => info("\u{254}\u{303}", Vowel, Nasal, "on de bon"),
            Phoneme::OeNasal => info("\u{153}\u{303}", Vowel, Nasal, "un de brun"),
            Phoneme::P => info("p", Consonant, VoicelessOcclusive, "p de pain"),
            Phoneme::B => info("b", Consonant, VoicedOcclusive, "b de bain"),
            Phoneme::T => info("t", Consonant, VoicelessOcclusive, "t de temps"),
            Phoneme::D => info("d", Consonant, VoicedOcclusive, "d de dans"),
            Phoneme::K => info("k", Consonant, VoicelessOcclusive, "c de car"),
            Phoneme::G => info("g", Consonant, VoicedOcclusive, "g de gare"),
            Phoneme::F => info("f", Consonant, VoicelessFricative, "f de feu"),
            Phoneme::V => info("v", Consonant, VoicedFricative, "v de veux"),
            Phoneme::S => info("s", Consonant, VoicelessFricative, "s de seau"),
            Phoneme::Z => info("z", Consonant, VoicedFricative, "z de zéro"),
            Phoneme::Sh => info("\u{283}", Consonant, VoicelessFricative, "ch de chat"),
            Phoneme::Zh => info("\u{292}", Consonant, VoicedFricative, "j de jeu"),
            Phoneme::M => info("m", Consonant, Nasal, "m de mère"),
            Phoneme::N => info("n", Consonant, Nasal, "n de nez"),
            Phoneme::Gn => info("\u{272}", Consonant, Nasal, "gn de agneau"),
            Phoneme::Ng => info("\u{14b}", Consonant, Nasal, "ng de parking"),
            Phoneme::L => info("l", Consonant, Liquid, "l de lit"),
            Phoneme::R => info("\u{281}", Consonant, Liquid, "r de rat"),
            Phoneme::J => info("j", Consonant, SemiConsonant, "y de yeux"),
            Phoneme::W => info("w", Consonant, SemiConsonant, "ou de oui"),
            Phoneme::Hu => info("\u{265}", Consonant, SemiConsonant, "u de lui"),
        }
    }

    pub fn symbol(&self) -> &'static str {
        self.info().symbol
    }

    pub fn category(&self) -> PhonemeCategory {
        self.info().category
    }

    pub fn is_vowel(&self) -> bool {
        self.category() == PhonemeCategory::Vowel
    }

    /// Parse an IPA symbol
    ///
    /// Nasal vowels are accepted both precomposed (`ã`) and decomposed
    /// (`a` + U+0303).
    pub fn from_symbol(symbol: &str) -> Result<Phoneme> {
        let symbol = symbol.trim();
        let canonical = if symbol == "a\u{303}" { "\u{e3}" } else { symbol };

        Phoneme::ALL
            .iter()
            .copied()
            .find(|p| p.symbol() == canonical)
            .ok_or_else(|| PhoneticError::unknown_phoneme(symbol))
    }

    /// Error buckets this phoneme contributes to
    pub fn error_categories(&self) -> Vec<ErrorCategory> {
        let info = self.info();
        let mut categories = Vec::with_capacity(3);

        match info.category {
            PhonemeCategory::Vowel => categories.push(ErrorCategory::Vowels),
            PhonemeCategory::Consonant => categories.push(ErrorCategory::Consonants),
        }
        // Nasal vowels stay in `voyelles` only
        if info.category == PhonemeCategory::Consonant && info.sub_category.is_nasal() {
            categories.push(ErrorCategory::Nasals);
        }
        if info.sub_category.is_occlusive() {
            categories.push(ErrorCategory::Occlusives);
        }
        if info.sub_category.is_fricative() {
            categories.push(ErrorCategory::Fricatives);
        }

        categories
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::str::FromStr for Phoneme {
    type Err = PhoneticError;

    fn from_str(s: &str) -> Result<Self> {
        Phoneme::from_symbol(s)
    }
}

impl Serialize for Phoneme {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Phoneme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let symbol = String::deserialize(deserializer)?;
        Phoneme::from_symbol(&symbol).map_err(serde::de::Error::custom)
    }
}

/// Render a phoneme sequence as `[p, ɛ̃]`
pub fn format_phonemes(phonemes: &[Phoneme]) -> String {
    let symbols: Vec<&str> = phonemes.iter().map(|p| p.symbol()).collect();
    format!("[{}]", symbols.join(", "))
}
