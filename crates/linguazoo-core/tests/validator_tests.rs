mod common;

use common::{MockDictionary, MockTranslator, animal_defs, plain_defs, validator};
use linguazoo_core::{ErrorKind, ValidationResult};
use linguazoo_types::Language;

fn assert_invariant(result: &ValidationResult) {
    if result.error.is_some() {
        assert!(!result.is_valid, "errored result must not be valid");
    }
}

#[tokio::test]
async fn blank_input_is_a_no_op() {
    let translator = MockTranslator::with_mapping(&[]);
    let dictionary = MockDictionary::with_entries(&[]);
    let validator = validator(translator.clone(), dictionary.clone());

    for input in ["", "   ", "\n"] {
        let result = validator.validate(input, Language::Indonesian).await;
        assert!(!result.is_valid);
        assert_eq!(result.error, None);
        assert_invariant(&result);
    }

    assert_eq!(translator.call_count(), 0);
    assert_eq!(dictionary.call_count(), 0);
}

#[tokio::test]
async fn blacklisted_word_is_rejected_without_remote_calls() {
    let translator = MockTranslator::with_mapping(&[("HEWAN", "ANIMAL")]);
    let dictionary = MockDictionary::with_entries(&[("ANIMAL", &animal_defs())]);
    let validator = validator(translator.clone(), dictionary.clone());

    let result = validator.validate("hewan", Language::Indonesian).await;

    assert!(!result.is_valid);
    assert_eq!(result.error, None);
    assert_eq!(translator.call_count(), 0);
    assert_eq!(dictionary.call_count(), 0);
}

#[tokio::test]
async fn translation_failure_maps_to_network() {
    let translator = MockTranslator::failing();
    let dictionary = MockDictionary::with_entries(&[("CAT", &animal_defs())]);
    let validator = validator(translator, dictionary.clone());

    let result = validator.validate("KUCING", Language::Indonesian).await;

    assert_eq!(result.error, Some(ErrorKind::Network));
    assert_eq!(result.resolved_name, None);
    assert_invariant(&result);
    // No lookup after a failed translation.
    assert_eq!(dictionary.call_count(), 0);
}

#[tokio::test]
async fn missing_dictionary_entry_is_word_not_found() {
    let translator = MockTranslator::with_mapping(&[("KUCING", "CAT")]);
    let dictionary = MockDictionary::with_entries(&[]);
    let validator = validator(translator, dictionary);

    let result = validator.validate("KUCING", Language::Indonesian).await;

    assert_eq!(result.error, Some(ErrorKind::WordNotFound));
    // The resolved name survives so the caller can still show it.
    assert_eq!(result.resolved_name.as_deref(), Some("CAT"));
    assert_invariant(&result);
}

#[tokio::test]
async fn dictionary_transport_failure_maps_to_network() {
    let translator = MockTranslator::with_mapping(&[("KUCING", "CAT")]);
    let dictionary = MockDictionary::failing();
    let validator = validator(translator, dictionary);

    let result = validator.validate("KUCING", Language::Indonesian).await;

    assert_eq!(result.error, Some(ErrorKind::Network));
    assert_invariant(&result);
}

#[tokio::test]
async fn animal_definitions_validate() {
    let translator = MockTranslator::with_mapping(&[("KUCING", "Cat")]);
    let dictionary = MockDictionary::with_entries(&[("CAT", &animal_defs())]);
    let validator = validator(translator, dictionary);

    let result = validator.validate(" kucing ", Language::Indonesian).await;

    assert!(result.is_valid);
    assert_eq!(result.resolved_name.as_deref(), Some("CAT"));
    assert_eq!(result.error, None);
}

#[tokio::test]
async fn non_animal_definitions_do_not_validate() {
    let translator = MockTranslator::with_mapping(&[("KURSI", "CHAIR")]);
    let dictionary = MockDictionary::with_entries(&[("CHAIR", &plain_defs())]);
    let validator = validator(translator, dictionary);

    let result = validator.validate("KURSI", Language::Indonesian).await;

    assert!(!result.is_valid);
    assert_eq!(result.error, None);
    assert_eq!(result.resolved_name.as_deref(), Some("CHAIR"));
}

#[tokio::test]
async fn english_input_skips_translation() {
    let translator = MockTranslator::with_mapping(&[]);
    let dictionary = MockDictionary::with_entries(&[("CAT", &animal_defs())]);
    let validator = validator(translator.clone(), dictionary);

    let result = validator.validate("cat", Language::English).await;

    assert!(result.is_valid);
    assert_eq!(translator.call_count(), 0);
}
