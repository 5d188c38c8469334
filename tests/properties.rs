use proptest::prelude::*;
use tamil_tokenizer::{
    clean, get_char_category, segment_graphemes, segment_syllables, segment_words, Chunker,
    ChunkType, ConjunctMode, ScriptClass,
};
use tamil_tokenizer::grapheme::grapheme_count;

/// Tamil letters, signs and digits mixed with spaces, punctuation and Latin.
fn tamil_text() -> impl Strategy<Value = String> {
    "[\u{0B82}-\u{0BFA} a-z.,!?]{1,60}"
}

proptest! {
    #[test]
    fn graphemes_round_trip(s in tamil_text()) {
        prop_assume!(!s.trim().is_empty());
        let joined: String = segment_graphemes(&s).unwrap().concat();
        prop_assert_eq!(joined, s.trim());
    }

    #[test]
    fn syllables_round_trip(s in tamil_text()) {
        prop_assume!(!s.trim().is_empty());
        let joined: String = segment_syllables(&s).unwrap().concat();
        prop_assert_eq!(joined, s.trim());
    }

    #[test]
    fn clean_idempotent(s in tamil_text(), remove in any::<bool>()) {
        prop_assume!(!s.trim().is_empty());
        let once = clean(&s, remove).unwrap();
        prop_assume!(!once.is_empty());
        let twice = clean(&once, remove).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn grapheme_never_starts_with_combining_mark(s in tamil_text()) {
        prop_assume!(!s.trim().is_empty());
        for (i, g) in segment_graphemes(&s).unwrap().iter().enumerate() {
            let lead = g.chars().next().map(get_char_category);
            if i > 0 {
                prop_assert!(!matches!(lead, Some(ScriptClass::VowelSign | ScriptClass::Virama)));
            }
        }
    }

    #[test]
    fn words_conserve_graphemes(s in tamil_text()) {
        prop_assume!(!s.trim().is_empty());
        let words = segment_words(&s).unwrap();
        let in_words: usize = words
            .iter()
            .map(|w| grapheme_count(w, ConjunctMode::Join))
            .sum();

        let chunker = Chunker::new(s.trim());
        let in_runs: usize = chunker
            .make_chunks()
            .iter()
            .filter(|c| c.chunk_type == ChunkType::Text)
            .map(|c| grapheme_count(chunker.text(c), ConjunctMode::Join))
            .sum();

        prop_assert!(in_words <= in_runs);
    }

    #[test]
    fn segmentation_is_restartable(s in tamil_text()) {
        prop_assume!(!s.trim().is_empty());
        prop_assert_eq!(segment_graphemes(&s).unwrap(), segment_graphemes(&s).unwrap());
        prop_assert_eq!(segment_syllables(&s).unwrap(), segment_syllables(&s).unwrap());
    }
}
