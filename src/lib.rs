//! Compute the swaps that morph a string into one of its anagrams, one letter at a time.
//!
//! A morph fixes positions left to right. Each step picks the position being corrected (the
//! "jump") and the position holding the character it needs (the "duck") and swaps them. How
//! those swaps are animated is up to whoever consumes the events.

pub mod config;
pub mod morph;
pub mod report;

pub use morph::{AnagramError, AnagramStepper, AnagramTransform, MorphController, Swap, SwapEvent, SwapPlan};
