use super::stepper::{AnagramStepper, SwapEvent};
use super::transform::{AnagramError, AnagramTransform};
use serde::Serialize;
use std::iter::FusedIterator;

/// Every event needed to complete a transform, in order.
///
/// The last event yielded is always the terminal one, unless advancing fails, in which case
/// the error is yielded and the sequence ends.
#[derive(Clone, Debug)]
pub struct SwapSequence {
    stepper: AnagramStepper,
    finished: bool,
}

impl SwapSequence {
    pub(crate) fn new(transform: AnagramTransform) -> Self {
        Self { stepper: AnagramStepper::new(transform), finished: false }
    }

    /// The stepper driving this sequence.
    pub fn stepper(&self) -> &AnagramStepper {
        &self.stepper
    }
}

impl Iterator for SwapSequence {
    type Item = Result<SwapEvent, AnagramError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let event = self.stepper.advance();
        self.finished = event.as_ref().map(SwapEvent::is_terminal).unwrap_or(true);
        Some(event)
    }
}

impl FusedIterator for SwapSequence {}

/// A fully computed list of swaps for a transform.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SwapPlan {
    pub start: String,
    pub end: String,
    pub events: Vec<SwapEvent>,
}

impl SwapPlan {
    /// Compute the plan for a transform.
    pub fn new(transform: &AnagramTransform) -> Result<Self, AnagramError> {
        let events = transform.swaps().collect::<Result<Vec<_>, _>>()?;
        Ok(Self { start: transform.start().iter().collect(), end: transform.end().iter().collect(), events })
    }

    /// The number of swaps, not counting the terminal event.
    pub fn swap_count(&self) -> usize {
        self.events.iter().filter(|event| !event.is_terminal()).count()
    }

    /// The string displayed once the plan has been fully applied.
    pub fn final_string(&self) -> &str {
        self.events.last().map(|event| event.resulting.as_str()).unwrap_or(&self.start)
    }
}

/// Validate `start` and `end` and compute every swap that turns one into the other.
pub fn plan(start: &str, end: &str) -> Result<SwapPlan, AnagramError> {
    SwapPlan::new(&AnagramTransform::new(start, end)?)
}
