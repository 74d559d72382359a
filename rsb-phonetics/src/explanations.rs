//! French explanatory texts for the metrics and views of a phonetic report

use serde::Serialize;

/// Title and explanation of one metric or concept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub title: &'static str,
    pub explanation: &'static str,
}

const FALLBACK: Explanation = Explanation {
    title: "Information non disponible",
    explanation: "Aucune explication disponible pour cette métrique.",
};

static EXPLANATIONS: &[(&str, Explanation)] = &[
    // Headline metrics
    (
        "phoneticAccuracy",
        Explanation {
            title: "Précision phonétique",
            explanation: "Pourcentage de phonèmes (sons) correctement perçus et reproduits par rapport au mot cible. Une précision de 80% signifie que 8 phonèmes sur 10 sont corrects. Cette métrique est plus fine que la précision globale car elle analyse chaque son individuellement.",
        },
    ),
    (
        "phoneticErrors",
        Explanation {
            title: "Erreurs phonétiques",
            explanation: "Nombre total de phonèmes incorrectement perçus. Inclut les substitutions (un son remplacé par un autre), les insertions (son ajouté) et les suppressions (son manqué). Cette métrique révèle la charge cognitive de traitement auditif.",
        },
    ),
    (
        "phoneticDistance",
        Explanation {
            title: "Distance phonétique moyenne",
            explanation: "Mesure mathématique de la différence entre les mots cibles et les réponses, basée sur l'algorithme de Levenshtein appliqué aux phonèmes. Plus cette valeur est faible, plus les réponses sont phonétiquement proches des cibles.",
        },
    ),
    (
        "confusionTypes",
        Explanation {
            title: "Types de confusions",
            explanation: "Nombre de paires de phonèmes différentes qui sont confondues. Par exemple, si 'p' est souvent confondu avec 'b', c'est un type de confusion. Cette métrique indique la variété des erreurs auditives.",
        },
    ),

    // Error types
    (
        "substitution",
        Explanation {
            title: "Substitution phonétique",
            explanation: "Un phonème est remplacé par un autre (ex: 'p' → 'b' dans 'pain' → 'bain'). C'est l'erreur la plus fréquente en audiologie, révélant souvent des difficultés de discrimination auditive entre sons similaires.",
        },
    ),
    (
        "insertion",
        Explanation {
            title: "Insertion phonétique",
            explanation: "Un phonème supplémentaire est ajouté au mot (ex: 'chat' → 'chats'). Peut indiquer une sur-interprétation du signal auditif ou une stratégie compensatoire face à l'incertitude.",
        },
    ),
    (
        "deletion",
        Explanation {
            title: "Suppression phonétique",
            explanation: "Un phonème attendu n'est pas perçu (ex: 'train' → 'rain'). Souvent causé par un masquage auditif ou une fatigue cognitive. Fréquent en début ou fin de mot dans le bruit.",
        },
    ),

    // Phonetic categories
    (
        "vowels",
        Explanation {
            title: "Voyelles",
            explanation: "Sons produits sans obstruction du flux d'air (a, e, i, o, u, etc.). Les voyelles portent l'énergie principale de la parole et sont généralement mieux préservées dans le bruit que les consonnes.",
        },
    ),
    (
        "consonants",
        Explanation {
            title: "Consonnes",
            explanation: "Sons produits avec une obstruction du flux d'air. Plus vulnérables au bruit que les voyelles car elles contiennent moins d'énergie acoustique. Essentielles pour l'intelligibilité.",
        },
    ),
    (
        "nasals",
        Explanation {
            title: "Consonnes nasales",
            explanation: "Sons produits avec le passage de l'air par le nez (m, n, gn). Ont une signature acoustique particulière qui les rend relativement résistantes au bruit, mais peuvent être confondues entre elles.",
        },
    ),
    (
        "occlusives",
        Explanation {
            title: "Consonnes occlusives",
            explanation: "Sons produits par blocage complet puis relâchement du flux d'air (p, b, t, d, k, g). La distinction sourde/sonore (p/b, t/d, k/g) est particulièrement sensible au bruit.",
        },
    ),
    (
        "fricatives",
        Explanation {
            title: "Consonnes fricatives",
            explanation: "Sons produits par passage forcé de l'air dans un rétrécissement (f, v, s, z, ch, j). Riches en hautes fréquences, elles sont très sensibles au bruit et souvent les premières affectées.",
        },
    ),

    // Positions in the word
    (
        "wordBeginning",
        Explanation {
            title: "Début de mot",
            explanation: "Premiers phonèmes du mot. Bénéficient d'un effet d'amorçage contextuel et sont souvent mieux préservés. Leur bonne perception facilite la reconnaissance du mot entier.",
        },
    ),
    (
        "wordMiddle",
        Explanation {
            title: "Milieu de mot",
            explanation: "Phonèmes centraux du mot. Bénéficient du contexte des phonèmes adjacents mais peuvent être masqués par la coarticulation. Position intermédiaire en termes de vulnérabilité.",
        },
    ),
    (
        "wordEnd",
        Explanation {
            title: "Fin de mot",
            explanation: "Derniers phonèmes du mot. Particulièrement vulnérables car ils n'ont pas de contexte suivant pour aider à leur identification. Souvent tronqués dans le bruit.",
        },
    ),

    // Detailed views
    (
        "confusionMatrix",
        Explanation {
            title: "Matrice de confusion",
            explanation: "Tableau montrant quels phonèmes sont confondus avec quels autres. Révèle les patterns systématiques d'erreurs. Par exemple, 'p' souvent confondu avec 'b' indique une difficulté à percevoir la sonorité.",
        },
    ),
    (
        "rsbEvolution",
        Explanation {
            title: "Évolution par RSB",
            explanation: "Comment les erreurs phonétiques changent selon le niveau de bruit. Permet d'identifier les seuils critiques où certains types de confusions apparaissent ou s'intensifient.",
        },
    ),
    (
        "phoneticProfile",
        Explanation {
            title: "Profil phonétique",
            explanation: "Signature unique des forces et faiblesses auditives d'une personne basée sur ses patterns d'erreurs phonétiques. Utile pour personnaliser les stratégies de réhabilitation auditive.",
        },
    ),

    // Comparisons
    (
        "phoneticComparison",
        Explanation {
            title: "Comparaison phonétique",
            explanation: "Analyse comparative des profils phonétiques entre deux personnes. Révèle les différences dans les stratégies de traitement auditif et peut identifier des patterns liés à l'âge, la pathologie ou l'expérience.",
        },
    ),
    (
        "categoryDifferences",
        Explanation {
            title: "Différences par catégorie",
            explanation: "Comparaison du nombre d'erreurs par type phonétique entre deux personnes. Permet d'identifier si une personne a des difficultés spécifiques avec certaines catégories de sons.",
        },
    ),
];

/// Explanation for a key such as `phoneticAccuracy` or `wordEnd`
///
/// Unknown keys get a generic "not available" text.
pub fn phonetic_explanation(key: &str) -> Explanation {
    EXPLANATIONS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, explanation)| *explanation)
        .unwrap_or(FALLBACK)
}

/// Every known key, in display order
pub fn explanation_keys() -> impl Iterator<Item = &'static str> {
    EXPLANATIONS.iter().map(|(key, _)| *key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_key() {
        let explanation = phonetic_explanation("phoneticAccuracy");
        assert_eq!(explanation.title, "Précision phonétique");
        assert!(explanation.explanation.contains("phonèmes"));
    }

    #[test]
    fn test_unknown_key_falls_back() {
        assert_eq!(phonetic_explanation("nope").title, "Information non disponible");
    }

    #[test]
    fn test_keys_are_unique_and_resolvable() {
        let keys: Vec<&str> = explanation_keys().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), keys.len());

        for key in keys {
            assert_ne!(phonetic_explanation(key), FALLBACK);
        }
    }

    #[test]
    fn test_report_sections_have_explanations() {
        for key in ["substitution", "insertion", "deletion", "nasals", "wordEnd", "categoryDifferences"] {
            assert_ne!(phonetic_explanation(key).title, FALLBACK.title);
        }
    }
}
