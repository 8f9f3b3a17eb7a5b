//! Module for finding the longest candidate built from an allowed alphabet

use std::collections::HashSet;

use crate::error::{ExerciseError, Result};

/// Set of characters a candidate may contain
#[derive(Debug, Clone)]
pub struct AllowedChars {
    chars: HashSet<char>,
}

impl AllowedChars {
    /// Creates the set from every character of `allowed`
    pub fn new(allowed: &str) -> Self {
        Self {
            chars: allowed.chars().collect(),
        }
    }

    /// Returns true if `c` belongs to the set
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

/// Outcome of checking a single candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Valid,
    /// First character not drawn from the allowed set
    DisallowedChar(char),
    /// First character that immediately repeats itself
    RepeatedChar(char),
}

impl Validation {
    pub fn is_valid(self) -> bool {
        self == Validation::Valid
    }
}

/// Checks `candidate` against the allowed set and the no-adjacent-repeat rule.
///
/// The character-set rule is checked over the whole candidate before the
/// adjacency rule, so a candidate breaking both reports `DisallowedChar`.
pub fn validate(candidate: &str, allowed: &AllowedChars) -> Validation {
    if let Some(c) = candidate.chars().find(|&c| !allowed.contains(c)) {
        return Validation::DisallowedChar(c);
    }

    let mut previous = None;
    for c in candidate.chars() {
        if previous == Some(c) {
            return Validation::RepeatedChar(c);
        }
        previous = Some(c);
    }

    Validation::Valid
}

/// Returns the longest valid candidate, or `""` when none is valid.
///
/// Absent and empty candidates are skipped. Ties go to the candidate seen
/// first. Length is measured in characters.
///
/// # Errors
/// `InvalidInput` when `allowed` or `candidates` is absent.
///
/// # Examples
/// ```
/// use scan_exercises::longest::longest_valid_string;
///
/// let candidates = [Some("AABCDA"), Some("ABCDZADC"), Some("ABCDBCA"), Some("ABCDABDCA")];
/// assert_eq!(longest_valid_string(Some("ABCD"), Some(candidates.as_slice())).unwrap(), "ABCDABDCA");
/// ```
pub fn longest_valid_string<'a>(
    allowed: Option<&str>,
    candidates: Option<&[Option<&'a str>]>,
) -> Result<&'a str> {
    let allowed =
        allowed.ok_or_else(|| ExerciseError::invalid("allowed characters cannot be absent"))?;
    let candidates =
        candidates.ok_or_else(|| ExerciseError::invalid("candidate strings cannot be absent"))?;

    let _span =
        tracing::debug_span!("longest_valid_string", candidates = candidates.len()).entered();

    let allowed = AllowedChars::new(allowed);
    let mut longest = "";
    let mut longest_len = 0;

    for candidate in candidates.iter().flatten().copied().filter(|s| !s.is_empty()) {
        let len = candidate.chars().count();
        if len <= longest_len {
            continue;
        }
        match validate(candidate, &allowed) {
            Validation::Valid => {
                longest = candidate;
                longest_len = len;
            }
            rejected => tracing::trace!(candidate, ?rejected, "candidate rejected"),
        }
    }

    Ok(longest)
}

/// Counts the present, non-empty candidates
pub fn count_non_empty(candidates: &[Option<&str>]) -> usize {
    candidates.iter().flatten().filter(|s| !s.is_empty()).count()
}
