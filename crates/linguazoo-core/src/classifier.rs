use std::collections::HashSet;

use linguazoo_dictionary::SenseDefinition;
use linguazoo_types::canonical_key;

/// Keywords that mark a definition as animal-related when they occur as a
/// substring of the flattened definition text.
const ANIMAL_KEYWORDS: &[&str] = &[
    "animal",
    "mammal",
    "bird",
    "fish",
    "insect",
    "reptile",
    "amphibian",
    "arthropod",
    "vertebrate",
    "invertebrate",
    "crustacean",
    "mollusk",
    "rodent",
    "primate",
    "creature",
    "species",
    "fauna",
    "beast",
    "livestock",
    "poultry",
    "wildlife",
    "domesticated",
];

/// Generic category nouns that name the category itself rather than a
/// member of it. These must never pass, whatever the dictionary says.
const CATEGORY_NOUN_BLACKLIST: &[&str] = &[
    "HEWAN",
    "BINATANG",
    "FAUNA",
    "SATWA",
    "MAKHLUK",
    "MARGASATWA",
];

/// Decides whether a word's dictionary definitions describe an animal.
///
/// Deliberately coarse and false-positive-tolerant: this is a UX gate for
/// a children's game, not a scientific classifier. Keyword and blacklist
/// sets are a content decision, so both can be overridden.
pub struct AnimalClassifier {
    keywords: Vec<String>,
    blacklist: HashSet<String>,
}

impl Default for AnimalClassifier {
    fn default() -> Self {
        Self::new(
            ANIMAL_KEYWORDS.iter().map(|k| k.to_string()),
            CATEGORY_NOUN_BLACKLIST.iter().map(|w| w.to_string()),
        )
    }
}

impl AnimalClassifier {
    pub fn new(
        keywords: impl IntoIterator<Item = String>,
        blacklist: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            keywords: keywords.into_iter().map(|k| k.to_lowercase()).collect(),
            blacklist: blacklist.into_iter().map(|w| canonical_key(&w)).collect(),
        }
    }

    /// Local, synchronous check; callers use it to fail fast before any
    /// remote call.
    pub fn is_blacklisted(&self, word: &str) -> bool {
        self.blacklist.contains(&canonical_key(word))
    }

    /// `true` iff the definitions look animal-related and the original
    /// word is not a blacklisted category noun.
    pub fn classify(&self, definitions: &[SenseDefinition], original_word: &str) -> bool {
        if self.is_blacklisted(original_word) {
            return false;
        }

        if definitions.is_empty() {
            return false;
        }

        let haystack = definitions
            .iter()
            .map(|d| d.search_text())
            .collect::<Vec<_>>()
            .join(" ");

        self.keywords.iter().any(|k| haystack.contains(k.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defs(texts: &[&str]) -> Vec<SenseDefinition> {
        texts
            .iter()
            .map(|t| SenseDefinition::new("noun", *t))
            .collect()
    }

    #[test]
    fn matches_taxonomic_keyword() {
        let classifier = AnimalClassifier::default();
        let definitions = defs(&["A small domesticated mammal kept as a pet."]);
        assert!(classifier.classify(&definitions, "KUCING"));
    }

    #[test]
    fn no_keyword_means_not_an_animal() {
        let classifier = AnimalClassifier::default();
        let definitions = defs(&["A chair with four legs.", "To sit down."]);
        assert!(!classifier.classify(&definitions, "KURSI"));
    }

    #[test]
    fn empty_definitions_classify_false() {
        let classifier = AnimalClassifier::default();
        assert!(!classifier.classify(&[], "KUCING"));
    }

    #[test]
    fn blacklist_wins_regardless_of_definitions() {
        let classifier = AnimalClassifier::default();
        let definitions = defs(&["A living organism; an animal."]);
        for word in ["HEWAN", "hewan", "  Binatang ", "FAUNA", "satwa"] {
            assert!(
                !classifier.classify(&definitions, word),
                "{word} must never classify as an animal"
            );
        }
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        let classifier = AnimalClassifier::default();
        let definitions = defs(&["A large MAMMAL of the savanna."]);
        assert!(classifier.classify(&definitions, "GAJAH"));
    }

    #[test]
    fn custom_sets_override_defaults() {
        let classifier = AnimalClassifier::new(
            vec!["dinosaur".to_string()],
            vec!["DINO".to_string()],
        );
        let definitions = defs(&["An extinct dinosaur."]);
        assert!(classifier.classify(&definitions, "TYRANNOSAURUS"));
        assert!(!classifier.classify(&definitions, "dino"));
    }
}
