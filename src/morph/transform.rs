use super::sequence::SwapSequence;
use itertools::Itertools;
use std::fmt;

/// A pair of strings to morph between.
///
/// Both strings are kept as unicode scalar values. Construction fails unless `end` is a
/// rearrangement of `start`, so every transform that exists can be driven to completion.
#[derive(Clone, PartialEq, Eq)]
pub struct AnagramTransform {
    start: Vec<char>,
    end: Vec<char>,
}

impl AnagramTransform {
    /// Create a transform from `start` into `end`.
    pub fn new(start: &str, end: &str) -> Result<Self, AnagramError> {
        let start: Vec<char> = start.chars().collect();
        let end: Vec<char> = end.chars().collect();
        if start.len() != end.len() {
            return Err(AnagramError::LengthMismatch { start: start.len(), end: end.len() });
        }

        let available = start.iter().counts();
        let required = end.iter().counts();
        let excess = end.iter().find(|c| required[c] > available.get(c).copied().unwrap_or(0));
        if let Some(&character) = excess {
            return Err(AnagramError::NotAnagram { character });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> &[char] {
        &self.start
    }

    pub fn end(&self) -> &[char] {
        &self.end
    }

    /// The number of characters in either string.
    pub fn len(&self) -> usize {
        self.start.len()
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_empty()
    }

    /// Whether nothing needs to move at all.
    pub fn is_identity(&self) -> bool {
        self.start == self.end
    }

    /// The transform going the other way around.
    pub fn reversed(&self) -> Self {
        Self { start: self.end.clone(), end: self.start.clone() }
    }

    /// Get a fresh sequence of every swap needed to complete this transform.
    pub fn swaps(&self) -> SwapSequence {
        SwapSequence::new(self.clone())
    }

    #[cfg(test)]
    pub(crate) fn new_unchecked(start: &str, end: &str) -> Self {
        Self { start: start.chars().collect(), end: end.chars().collect() }
    }
}

impl fmt::Debug for AnagramTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start: String = self.start.iter().collect();
        let end: String = self.end.iter().collect();
        f.debug_struct("AnagramTransform").field("start", &start).field("end", &end).finish()
    }
}

/// Errors that can occur when morphing one string into another
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AnagramError {
    #[error("strings have different lengths: {start} and {end} characters")]
    LengthMismatch { start: usize, end: usize },

    #[error("strings are not anagrams: '{character}' is missing from the start string")]
    NotAnagram { character: char },

    #[error("no character left to place '{character}' at position {position}")]
    NoSwapPartner { position: usize, character: char },
}
