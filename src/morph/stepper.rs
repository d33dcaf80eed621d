use super::state::PermutationState;
use super::transform::{AnagramError, AnagramTransform};
use log::{debug, trace};
use serde::Serialize;

/// A single swap between two displayed positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Swap {
    /// The position being corrected: it receives the character it needs.
    pub jump: usize,
    /// The position whose character moves into `jump`. It gets `jump`'s previous character.
    pub duck: usize,
}

/// The result of a single call to [AnagramStepper::advance].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SwapEvent {
    /// The swap that was applied, or `None` once there is nothing left to do.
    pub swap: Option<Swap>,
    /// The displayed string after the swap was applied.
    pub resulting: String,
}

impl SwapEvent {
    pub fn is_terminal(&self) -> bool {
        self.swap.is_none()
    }

    pub fn jump_index(&self) -> Option<usize> {
        self.swap.map(|swap| swap.jump)
    }

    pub fn duck_index(&self) -> Option<usize> {
        self.swap.map(|swap| swap.duck)
    }
}

/// Walks a transform one swap at a time, fixing positions from left to right.
///
/// Every call to [AnagramStepper::advance] places the right character at the leftmost
/// position that doesn't have it yet. When the character needed there appears more than once,
/// the leftmost occurrence in the current arrangement is the one that moves.
#[derive(Clone, Debug)]
pub struct AnagramStepper {
    transform: AnagramTransform,
    state: PermutationState,
    swaps_applied: usize,
    terminal: bool,
}

impl AnagramStepper {
    pub fn new(transform: AnagramTransform) -> Self {
        let state = PermutationState::new(transform.len());
        Self { transform, state, swaps_applied: 0, terminal: false }
    }

    /// Validate `start` and `end` and build a stepper for them.
    pub fn from_strs(start: &str, end: &str) -> Result<Self, AnagramError> {
        Ok(Self::new(AnagramTransform::new(start, end)?))
    }

    /// Apply the next swap.
    ///
    /// The cursor only moves past a position on the call after the one that fixed it. Once
    /// there's nothing left to swap, this keeps returning the same terminal event.
    pub fn advance(&mut self) -> Result<SwapEvent, AnagramError> {
        if self.terminal {
            return Ok(self.terminal_event());
        }

        let length = self.transform.len();
        while self.state.step() < length && self.state.is_settled(&self.transform, self.state.step()) {
            trace!("position {} already settled", self.state.step());
            self.state.advance_cursor();
        }

        // Once every other position is fixed the last one can only hold the right character.
        let step = self.state.step();
        if step + 1 >= length {
            debug!("morph complete after {} swaps: {}", self.swaps_applied, self.materialize());
            self.terminal = true;
            return Ok(self.terminal_event());
        }

        let target = self.transform.end()[step];
        let start = self.transform.start();
        let duck = self
            .state
            .original_indices()
            .enumerate()
            .skip(step)
            .find(|(_, index)| start[*index] == target)
            .map(|(position, _)| position)
            .ok_or(AnagramError::NoSwapPartner { position: step, character: target })?;

        self.state.swap(step, duck);
        self.swaps_applied += 1;
        let resulting = self.materialize();
        debug!("swapped positions {step} and {duck}: {resulting}");
        Ok(SwapEvent { swap: Some(Swap { jump: step, duck }), resulting })
    }

    /// The string currently displayed.
    pub fn materialize(&self) -> String {
        self.state.materialize(&self.transform)
    }

    /// Whether `position` already shows its final character. Out of range positions never are.
    pub fn is_settled(&self, position: usize) -> bool {
        self.state.is_settled(&self.transform, position)
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn state(&self) -> &PermutationState {
        &self.state
    }

    pub fn transform(&self) -> &AnagramTransform {
        &self.transform
    }

    /// The number of swaps applied so far.
    pub fn swaps_applied(&self) -> usize {
        self.swaps_applied
    }

    fn terminal_event(&self) -> SwapEvent {
        SwapEvent { swap: None, resulting: self.materialize() }
    }
}
