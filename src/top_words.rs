//! Module for selecting the most frequent words of a sentence

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::error::{ExerciseError, Result};

/// Number of words selected by [`top_three_words`]
pub const DEFAULT_TOP_K: usize = 3;

/// A distinct word and how often it occurs.
///
/// Ordered by selection priority: higher frequency first, then the
/// lexicographically smaller word. The "least" record is the best one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordFrequency<'a> {
    pub word: &'a str,
    pub frequency: usize,
}

impl Ord for WordFrequency<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .frequency
            .cmp(&self.frequency)
            .then_with(|| self.word.cmp(other.word))
    }
}

impl PartialOrd for WordFrequency<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Separators between words: space, tab, line feed, vertical tab, form feed
/// and carriage return. Other Unicode spaces such as U+00A0 stay inside words.
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

fn count_words(sentence: &str) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for word in sentence.split(is_separator).filter(|w| !w.is_empty()) {
        *counts.entry(word).or_insert(0) += 1;
    }
    counts
}

/// Returns every distinct word of `sentence` in selection order.
pub fn word_frequencies(sentence: &str) -> Vec<WordFrequency<'_>> {
    let mut frequencies: Vec<_> = count_words(sentence)
        .into_iter()
        .map(|(word, frequency)| WordFrequency { word, frequency })
        .collect();
    frequencies.sort_unstable();
    frequencies
}

/// Selects the `k` most frequent words and returns them sorted lexicographically.
///
/// Words are tokens separated by runs of ASCII whitespace. Selection ranks by frequency
/// (descending) and breaks ties by word (ascending); the selected words are
/// then presented in plain lexicographic order. A bounded heap keeps the
/// selection at O(n log k).
///
/// # Errors
/// `InvalidInput` when `sentence` is absent.
pub fn top_k_words(sentence: Option<&str>, k: usize) -> Result<Vec<&str>> {
    let sentence = sentence.ok_or_else(|| ExerciseError::invalid("sentence cannot be absent"))?;
    let _span = tracing::debug_span!("top_k_words", k).entered();

    if k == 0 {
        return Ok(Vec::new());
    }

    let counts = count_words(sentence);

    // Max-heap on selection order: the top is the weakest record kept so far.
    let mut heap = BinaryHeap::with_capacity(k.min(counts.len()) + 1);
    for (word, frequency) in counts {
        heap.push(WordFrequency { word, frequency });
        if heap.len() > k {
            heap.pop();
        }
    }

    let mut selected: Vec<&str> = heap.into_iter().map(|wf| wf.word).collect();
    selected.sort_unstable();

    tracing::debug!(?selected, "selected words");
    Ok(selected)
}

/// [`top_k_words`] with k fixed at three.
///
/// # Examples
/// ```
/// use scan_exercises::top_words::top_three_words;
///
/// let sentence = "hi there care to discuss algorithm basis or how to solve algorithm or";
/// assert_eq!(top_three_words(Some(sentence)).unwrap(), vec!["algorithm", "or", "to"]);
/// ```
pub fn top_three_words(sentence: Option<&str>) -> Result<Vec<&str>> {
    top_k_words(sentence, DEFAULT_TOP_K)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn worked_example() {
        let sentence = "hi there care to discuss algorithm basis or how to solve algorithm or";
        assert_eq!(
            top_three_words(Some(sentence)).unwrap(),
            vec!["algorithm", "or", "to"]
        );
    }

    #[test]
    fn empty_and_blank_sentences_yield_nothing() {
        assert!(top_three_words(Some("")).unwrap().is_empty());
        assert!(top_three_words(Some("  \t\n ")).unwrap().is_empty());
    }

    #[test]
    fn absent_sentence_is_rejected() {
        assert!(matches!(
            top_three_words(None),
            Err(ExerciseError::InvalidInput(_))
        ));
    }

    #[test]
    fn small_vocabulary_returns_everything() {
        assert_eq!(top_three_words(Some("b a b")).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn tie_at_the_cut_prefers_smaller_words() {
        // "z" is most frequent; the remaining ties are cut alphabetically.
        let sentence = "z z z d c b a";
        assert_eq!(top_three_words(Some(sentence)).unwrap(), vec!["a", "b", "z"]);
    }

    #[test]
    fn presentation_order_differs_from_selection_order() {
        let sentence = "zeta zeta zeta mid mid alpha";
        let frequencies = word_frequencies(sentence);
        let selection: Vec<&str> = frequencies.iter().map(|wf| wf.word).collect();
        assert_eq!(selection, vec!["zeta", "mid", "alpha"]);
        assert_eq!(
            top_three_words(Some(sentence)).unwrap(),
            vec!["alpha", "mid", "zeta"]
        );
    }

    #[test]
    fn runs_of_whitespace_are_one_separator() {
        assert_eq!(
            top_k_words(Some("  a \t a\n\nb  "), 1).unwrap(),
            vec!["a"]
        );
    }

    #[test]
    fn huge_k_returns_whole_vocabulary() {
        assert_eq!(top_k_words(Some("a b a"), usize::MAX).unwrap(), vec!["a", "b"]);
        assert_eq!(top_k_words(Some("c a b"), 1 << 62).unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn no_break_space_stays_inside_a_word() {
        assert_eq!(
            top_three_words(Some("x\u{a0}y x\u{a0}y c")).unwrap(),
            vec!["c", "x\u{a0}y"]
        );
        assert_eq!(
            top_three_words(Some("p\u{2003}q\x0Br\x0Cr")).unwrap(),
            vec!["p\u{2003}q", "r"]
        );
    }

    #[test]
    fn zero_k_selects_nothing() {
        assert!(top_k_words(Some("a b c"), 0).unwrap().is_empty());
    }

    proptest! {
        /// Property: any reordering of the words keeps the selection
        #[test]
        fn prop_order_independent(
            (words, shuffled) in prop::collection::vec("[a-e]{1,2}", 0..30)
                .prop_flat_map(|words| (Just(words.clone()), Just(words).prop_shuffle())),
            k in 0usize..6
        ) {
            let forward = words.join(" ");
            let reordered = shuffled.join(" ");
            prop_assert_eq!(
                top_k_words(Some(forward.as_str()), k).unwrap(),
                top_k_words(Some(reordered.as_str()), k).unwrap()
            );
            prop_assert_eq!(word_frequencies(&forward), word_frequencies(&reordered));
        }

        /// Property: the heap selection matches a full sort
        #[test]
        fn prop_heap_matches_sort(
            words in prop::collection::vec("[a-e]{1,2}", 0..30),
            k in 0usize..6
        ) {
            let sentence = words.join(" ");
            let mut expected: Vec<&str> = word_frequencies(&sentence)
                .into_iter()
                .take(k)
                .map(|wf| wf.word)
                .collect();
            expected.sort_unstable();
            prop_assert_eq!(top_k_words(Some(sentence.as_str()), k).unwrap(), expected);
        }
    }
}
