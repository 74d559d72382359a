//! Built-in French pronunciation dictionary
//!
//! Curated orthography → phoneme entries for the words that show up in RSB
//! word lists. Keys are run through `normalize_word` when the lookup table is
//! built, so accented spellings are reachable from unaccented responses.

use crate::phonemes::Phoneme::{self, *};

pub(crate) static FRENCH_DICTIONARY: &[(&str, &[Phoneme])] = &[
    // Minimal pairs used in RSB word lists
    ("chat", &[Sh, A]),
    ("chien", &[Sh, J, ENasal]),
    ("pain", &[P, ENasal]),
    ("bain", &[B, ENasal]),
    ("main", &[M, ENasal]),
    ("train", &[T, R, ENasal]),
    ("grain", &[G, R, ENasal]),
    ("plein", &[P, L, ENasal]),
    ("sein", &[S, ENasal]),
    ("soin", &[S, W, ENasal]),
    ("lait", &[L, EOpen]),
    ("paix", &[P, EOpen]),
    ("laid", &[L, EOpen]),
    ("mais", &[M, EOpen]),
    ("fait", &[F, EOpen]),
    ("vrai", &[V, R, EOpen]),
    ("fou", &[F, U]),
    ("sous", &[S, U]),
    ("tout", &[T, U]),
    ("coup", &[K, U]),
    ("loup", &[L, U]),
    ("bout", &[B, U]),
    ("goût", &[G, U]),
    ("nous", &[N, U]),
    ("vous", &[V, U]),
    ("joue", &[Zh, U]),
    ("porte", &[P, OOpen, R, T]),
    ("morte", &[M, OOpen, R, T]),
    ("forte", &[F, OOpen, R, T]),
    ("sorte", &[S, OOpen, R, T]),
    ("corde", &[K, OOpen, R, D]),
    ("père", &[P, EOpen, R]),
    ("mère", &[M, EOpen, R]),
    ("frère", &[F, R, EOpen, R]),
    ("terre", &[T, EOpen, R]),
    ("verre", &[V, EOpen, R]),
    ("guerre", &[G, EOpen, R]),
    ("feu", &[F, Eu]),
    ("peu", &[P, Eu]),
    ("deux", &[D, Eu]),
    ("veux", &[V, Eu]),
    ("jeux", &[Zh, Eu]),
    ("bleu", &[B, L, Eu]),
    ("peur", &[P, Oe, R]),
    ("sœur", &[S, Oe, R]),
    ("cœur", &[K, Oe, R]),
    ("fleur", &[F, L, Oe, R]),
    ("heure", &[Oe, R]),
    ("long", &[L, ONasal]),
    ("pont", &[P, ONasal]),
    ("fond", &[F, ONasal]),
    ("rond", &[R, ONasal]),
    ("sont", &[S, ONasal]),
    ("mont", &[M, ONasal]),
    ("bon", &[B, ONasal]),
    ("ton", &[T, ONasal]),
    ("don", &[D, ONasal]),
    ("blanc", &[B, L, ANasal]),
    ("grand", &[G, R, ANasal]),
    ("plan", &[P, L, ANasal]),
    ("rang", &[R, ANasal]),
    ("sang", &[S, ANasal]),
    ("dans", &[D, ANasal]),
    ("sans", &[S, ANasal]),
    ("temps", &[T, ANasal]),
    ("champ", &[Sh, ANasal]),

    // Frequent monosyllables
    ("la", &[L, A]),
    ("le", &[L, Schwa]),
    ("de", &[D, Schwa]),
    ("un", &[OeNasal]),
    ("une", &[Y, N]),
    ("et", &[E]),
    ("ou", &[U]),
    ("si", &[S, I]),
    ("ni", &[N, I]),
    ("mi", &[M, I]),
    ("lit", &[L, I]),
    ("dit", &[D, I]),
    ("fit", &[F, I]),
    ("kit", &[K, I, T]),
    ("fete", &[F, EOpen, T]),
    ("tete", &[T, EOpen, T]),
    ("bete", &[B, EOpen, T]),

    // Consonant + vowel syllables
    ("ba", &[B, A]),
    ("da", &[D, A]),
    ("ga", &[G, A]),
    ("ma", &[M, A]),
    ("na", &[N, A]),
    ("pa", &[P, A]),
    ("ta", &[T, A]),
    ("va", &[V, A]),
    ("za", &[Z, A]),
    ("ja", &[Zh, A]),
    ("ra", &[R, A]),
    ("sa", &[S, A]),
    ("cha", &[Sh, A]),
    ("fa", &[F, A]),

    // Consonant clusters
    ("pré", &[P, R, E]),
    ("pro", &[P, R, O]),
    ("pru", &[P, R, Y]),
    ("bré", &[B, R, E]),
    ("bro", &[B, R, O]),
    ("cré", &[K, R, E]),
    ("cro", &[K, R, O]),
    ("dré", &[D, R, E]),
    ("dro", &[D, R, O]),
    ("fré", &[F, R, E]),
    ("fro", &[F, R, O]),
    ("gré", &[G, R, E]),
    ("gro", &[G, R, O]),
    ("tré", &[T, R, E]),
    ("tro", &[T, R, O]),
    ("pla", &[P, L, A]),
    ("ple", &[P, L, Schwa]),
    ("pli", &[P, L, I]),
    ("plo", &[P, L, O]),
    ("blu", &[B, L, Y]),
    ("bla", &[B, L, A]),
    ("ble", &[B, L, Schwa]),
    ("bli", &[B, L, I]),
    ("blo", &[B, L, O]),
    ("cla", &[K, L, A]),
    ("cle", &[K, L, E]),
    ("cli", &[K, L, I]),
    ("clo", &[K, L, O]),
    ("flu", &[F, L, Y]),
    ("fla", &[F, L, A]),
    ("fle", &[F, L, Schwa]),
    ("fli", &[F, L, I]),
    ("flo", &[F, L, O]),
    ("gla", &[G, L, A]),
    ("gle", &[G, L, Schwa]),
    ("gli", &[G, L, I]),
    ("glo", &[G, L, O]),

    // Numbers
    ("trois", &[T, R, W, A]),
    ("quatre", &[K, A, T, R]),
    ("cinq", &[S, ENasal, K]),
    ("six", &[S, I, S]),
    ("sept", &[S, EOpen, T]),
    ("huit", &[Hu, I, T]),
    ("neuf", &[N, Oe, F]),
    ("dix", &[D, I, S]),
    ("onze", &[ONasal, Z]),
    ("douze", &[D, U, Z]),
    ("treize", &[T, R, EOpen, Z]),
    ("quinze", &[K, ENasal, Z]),
    ("vingt", &[V, ENasal]),
    ("cent", &[S, ANasal]),
    ("mille", &[M, I, L]),

    // Colours
    ("rouge", &[R, U, Zh]),
    ("vert", &[V, EOpen, R]),
    ("noir", &[N, W, A, R]),
    ("blanche", &[B, L, ANasal, Sh]),
    ("gris", &[G, R, I]),
    ("brun", &[B, R, OeNasal]),
    ("rose", &[R, O, Z]),
    ("jaune", &[Zh, O, N]),

    // Body
    ("bras", &[B, R, A]),
    ("dos", &[D, O]),
    ("nez", &[N, E]),
    ("pied", &[P, J, E]),
    ("doigt", &[D, W, A]),
    ("dent", &[D, ANasal]),
    ("cou", &[K, U]),
    ("oeil", &[Oe, J]),
    ("yeux", &[J, Eu]),
    ("bouche", &[B, U, Sh]),
    ("jambe", &[Zh, ANasal, B]),
    ("genou", &[Zh, Schwa, N, U]),
    ("ventre", &[V, ANasal, T, R]),
    ("peau", &[P, O]),

    // Family
    ("soeur", &[S, Oe, R]),
    ("coeur", &[K, Oe, R]),
    ("fils", &[F, I, S]),
    ("fille", &[F, I, J]),
    ("oncle", &[ONasal, K, L]),
    ("tante", &[T, ANasal, T]),
    ("ami", &[A, M, I]),
    ("femme", &[F, A, M]),
    ("homme", &[OOpen, M]),
    ("enfant", &[ANasal, F, ANasal]),
    ("bebe", &[B, E, B, E]),

    // Animals
    ("cheval", &[Sh, Schwa, V, A, L]),
    ("vache", &[V, A, Sh]),
    ("poule", &[P, U, L]),
    ("coq", &[K, OOpen, K]),
    ("lapin", &[L, A, P, ENasal]),
    ("souris", &[S, U, R, I]),
    ("rat", &[R, A]),
    ("ours", &[U, R, S]),
    ("lion", &[L, J, ONasal]),
    ("renard", &[R, Schwa, N, A, R]),
    ("mouton", &[M, U, T, ONasal]),
    ("cochon", &[K, OOpen, Sh, ONasal]),
    ("oiseau", &[W, A, Z, O]),
    ("poisson", &[P, W, A, S, ONasal]),
    ("canard", &[K, A, N, A, R]),
    ("singe", &[S, ENasal, Zh]),

    // Household
    ("maison", &[M, EOpen, Z, ONasal]),
    ("mur", &[M, Y, R]),
    ("toit", &[T, W, A]),
    ("table", &[T, A, B, L]),
    ("chaise", &[Sh, EOpen, Z]),
    ("lampe", &[L, ANasal, P]),
    ("bol", &[B, OOpen, L]),
    ("tasse", &[T, A, S]),
    ("four", &[F, U, R]),
    ("clef", &[K, L, E]),
    ("sol", &[S, OOpen, L]),
    ("salle", &[S, A, L]),
    ("cave", &[K, A, V]),

    // Nature
    ("eau", &[O]),
    ("air", &[EOpen, R]),
    ("mer", &[M, EOpen, R]),
    ("ciel", &[S, J, EOpen, L]),
    ("soleil", &[S, OOpen, L, EOpen, J]),
    ("lune", &[L, Y, N]),
    ("pluie", &[P, L, Hu, I]),
    ("neige", &[N, EOpen, Zh]),
    ("vent", &[V, ANasal]),
    ("nuit", &[N, Hu, I]),
    ("jour", &[Zh, U, R]),
    ("bois", &[B, W, A]),
    ("arbre", &[A, R, B, R]),
    ("herbe", &[EOpen, R, B]),
    ("rocher", &[R, OOpen, Sh, E]),
    ("sable", &[S, A, B, L]),
    ("lac", &[L, A, K]),

    // Food
    ("vin", &[V, ENasal]),
    ("sel", &[S, EOpen, L]),
    ("sucre", &[S, Y, K, R]),
    ("riz", &[R, I]),
    ("oeuf", &[Oe, F]),
    ("beurre", &[B, Oe, R]),
    ("miel", &[M, J, EOpen, L]),
    ("pomme", &[P, OOpen, M]),
    ("poire", &[P, W, A, R]),
    ("prune", &[P, R, Y, N]),
    ("fraise", &[F, R, EOpen, Z]),
    ("raisin", &[R, EOpen, Z, ENasal]),
    ("soupe", &[S, U, P]),
    ("viande", &[V, J, ANasal, D]),
    ("gateau", &[G, A, T, O]),
    ("fromage", &[F, R, OOpen, M, A, Zh]),
    ("the", &[T, E]),
    ("cafe", &[K, A, F, E]),
    ("jus", &[Zh, Y]),
    ("chou", &[Sh, U]),
    ("noix", &[N, W, A]),

    // Objects and transport
    ("livre", &[L, I, V, R]),
    ("stylo", &[S, T, I, L, O]),
    ("sac", &[S, A, K]),
    ("robe", &[R, OOpen, B]),
    ("jupe", &[Zh, Y, P]),
    ("gant", &[G, ANasal]),
    ("botte", &[B, OOpen, T]),
    ("bague", &[B, A, G]),
    ("clou", &[K, L, U]),
    ("vis", &[V, I, S]),
    ("balle", &[B, A, L]),
    ("boule", &[B, U, L]),
    ("roue", &[R, U]),
    ("velo", &[V, E, L, O]),
    ("bus", &[B, Y, S]),
    ("car", &[K, A, R]),
    ("port", &[P, OOpen, R]),
    ("gare", &[G, A, R]),

    // Verbs and short words
    ("dire", &[D, I, R]),
    ("lire", &[L, I, R]),
    ("rire", &[R, I, R]),
    ("faire", &[F, EOpen, R]),
    ("voir", &[V, W, A, R]),
    ("boire", &[B, W, A, R]),
    ("dormir", &[D, OOpen, R, M, I, R]),
    ("venir", &[V, Schwa, N, I, R]),
    ("partir", &[P, A, R, T, I, R]),
    ("aller", &[A, L, E]),
    ("jouer", &[Zh, U, E]),
    ("oui", &[W, I]),
    ("non", &[N, ONasal]),
    ("moi", &[M, W, A]),
    ("toi", &[T, W, A]),
    ("lui", &[L, Hu, I]),
    ("ici", &[I, S, I]),
    ("puis", &[P, Hu, I]),
    ("bien", &[B, J, ENasal]),
    ("rien", &[R, J, ENasal]),
    ("trop", &[T, R, O]),
    ("beau", &[B, O]),
    ("haut", &[O]),
    ("bas", &[B, A]),
    ("gros", &[G, R, O]),
    ("doux", &[D, U]),
    ("dur", &[D, Y, R]),
    ("fin", &[F, ENasal]),
    ("faim", &[F, ENasal]),
    ("froid", &[F, R, W, A]),
    ("chaud", &[Sh, O]),
    ("vieux", &[V, J, Eu]),
    ("jeune", &[Zh, Oe, N]),

    // Common minimal pairs
    ("bateau", &[B, A, T, O]),
    ("seau", &[S, O]),
    ("zero", &[Z, E, R, O]),
    ("jeu", &[Zh, Eu]),
    ("lu", &[L, Y]),
    ("sot", &[S, O]),
    ("sort", &[S, OOpen, R]),
    ("moule", &[M, U, L]),
    ("foule", &[F, U, L]),
    ("roule", &[R, U, L]),
    ("coule", &[K, U, L]),
    ("seul", &[S, Oe, L]),
    ("cil", &[S, I, L]),
    ("fil", &[F, I, L]),
    ("vil", &[V, I, L]),
    ("mil", &[M, I, L]),
    ("nil", &[N, I, L]),
    ("pile", &[P, I, L]),
    ("bile", &[B, I, L]),
    ("file", &[F, I, L]),
    ("ville", &[V, I, L]),
    ("pou", &[P, U]),
    ("mou", &[M, U]),
    ("toux", &[T, U]),
    ("roux", &[R, U]),
    ("sou", &[S, U]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_word;
    use std::collections::HashSet;

    #[test]
    fn test_no_empty_entries() {
        for (word, phonemes) in FRENCH_DICTIONARY {
            assert!(!phonemes.is_empty(), "{} has no phonemes", word);
        }
    }

    #[test]
    fn test_normalized_keys_are_unique() {
        let mut seen = HashSet::new();
        for (word, _) in FRENCH_DICTIONARY {
            assert!(seen.insert(normalize_word(word)), "duplicate key {}", word);
        }
        assert!(seen.len() >= 300);
    }
}
