//! Grapheme cluster segmentation for Tamil text.
//!
//! A cluster starts at every code point that is not a combining mark. Vowel
//! signs and the virama extend the current cluster, and in
//! [`ConjunctMode::Join`] a virama followed by a consonant pulls that
//! consonant in as well, so க்ஷ stays a single unit.

use serde::{Deserialize, Serialize};

use crate::char_categories::{get_char_category, ScriptClass, TaString};

/// How a virama followed by a consonant is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConjunctMode {
    /// Consonant + virama + consonant is one cluster
    #[default]
    Join,
    /// The virama closes the cluster; the next consonant starts a new one
    Split,
}

/// A grapheme cluster and its position in the source string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grapheme {
    /// The cluster text
    pub text: String,
    /// Starting byte offset in the original string
    pub start: usize,
    /// Length in bytes
    pub len: usize,
}

impl Grapheme {
    /// Check if the cluster holds a conjunct (virama directly before a consonant)
    pub fn is_conjunct(&self) -> bool {
        let classes: Vec<ScriptClass> = self.text.chars().map(get_char_category).collect();
        classes
            .windows(2)
            .any(|w| w[0] == ScriptClass::Virama && w[1] == ScriptClass::Consonant)
    }

    /// Class of the first code point
    pub fn lead_class(&self) -> ScriptClass {
        self.text
            .chars()
            .next()
            .map(get_char_category)
            .unwrap_or_default()
    }
}

/// Find the end (exclusive character index) of the cluster starting at `start`
pub(crate) fn cluster_end(ts: &TaString, start: usize, mode: ConjunctMode) -> usize {
    let base_is_consonant = ts.categories[start] == ScriptClass::Consonant;
    let mut i = start + 1;

    while i < ts.len() {
        let cat = ts.categories[i];
        if !cat.is_combining() {
            break;
        }

        i += 1;

        if cat.is_virama()
            && mode == ConjunctMode::Join
            && base_is_consonant
            && ts.get_category(i) == Some(ScriptClass::Consonant)
        {
            i += 1;
        }
    }

    i
}

/// Segment text into grapheme clusters with their byte positions
pub fn graphemes(text: &str, mode: ConjunctMode) -> Vec<Grapheme> {
    let ts = TaString::new(text);
    let mut clusters = Vec::new();
    let mut i = 0;

    while i < ts.len() {
        let end = cluster_end(&ts, i, mode);
        let (start, len) = ts.byte_span(i, end);
        clusters.push(Grapheme {
            text: ts.slice(i, end).to_string(),
            start,
            len,
        });
        i = end;
    }

    tracing::trace!(clusters = clusters.len(), "segmented graphemes");
    clusters
}

/// Segment text into grapheme cluster strings
pub fn grapheme_strings(text: &str, mode: ConjunctMode) -> Vec<String> {
    graphemes(text, mode).into_iter().map(|g| g.text).collect()
}

/// Number of grapheme clusters in `text`
pub fn grapheme_count(text: &str, mode: ConjunctMode) -> usize {
    let ts = TaString::new(text);
    let mut count = 0;
    let mut i = 0;
    while i < ts.len() {
        i = cluster_end(&ts, i, mode);
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(text: &str) -> Vec<String> {
        grapheme_strings(text, ConjunctMode::Join)
    }

    #[test]
    fn test_simple_word() {
        assert_eq!(segs("தமிழ்"), vec!["த", "மி", "ழ்"]);
        assert_eq!(segs("மொழி"), vec!["மொ", "ழி"]);
        assert_eq!(segs("அழகான"), vec!["அ", "ழ", "கா", "ன"]);
    }

    #[test]
    fn test_conjunct_join() {
        assert_eq!(segs("க்ஷ"), vec!["க்ஷ"]);
        assert_eq!(segs("க்ஷா"), vec!["க்ஷா"]);
        assert_eq!(segs("க்ஷ்ரீ"), vec!["க்ஷ்ரீ"]);
        assert_eq!(segs("வணக்கம்"), vec!["வ", "ண", "க்க", "ம்"]);
    }

    #[test]
    fn test_conjunct_split() {
        let clusters = grapheme_strings("வணக்கம்", ConjunctMode::Split);
        assert_eq!(clusters, vec!["வ", "ண", "க்", "க", "ம்"]);
        assert_eq!(grapheme_strings("க்ஷ", ConjunctMode::Split), vec!["க்", "ஷ"]);
    }

    #[test]
    fn test_decomposed_vowel_sign() {
        // ெ + ா is the decomposed form of ொ
        assert_eq!(segs("ம\u{0BC6}\u{0BBE}"), vec!["ம\u{0BC6}\u{0BBE}"]);
    }

    #[test]
    fn test_leading_combining_mark() {
        assert_eq!(segs("ிக"), vec!["ி", "க"]);
        assert_eq!(segs("்க"), vec!["்", "க"]);
    }

    #[test]
    fn test_mixed_text() {
        assert_eq!(segs("ab க்க"), vec!["a", "b", " ", "க்க"]);
        assert_eq!(segs("௧௨"), vec!["௧", "௨"]);
    }

    #[test]
    fn test_positions() {
        let text = "தமிழ் மொழி";
        for g in graphemes(text, ConjunctMode::Join) {
            assert_eq!(&text[g.start..g.start + g.len], g.text);
        }
    }

    #[test]
    fn test_is_conjunct() {
        let clusters = graphemes("வணக்கம்", ConjunctMode::Join);
        let flags: Vec<bool> = clusters.iter().map(|g| g.is_conjunct()).collect();
        assert_eq!(flags, vec![false, false, true, false]);
        assert_eq!(clusters[0].lead_class(), ScriptClass::Consonant);
        assert_eq!(grapheme_count("வணக்கம்", ConjunctMode::Join), 4);
    }
}
