use super::transform::AnagramTransform;

/// The current arrangement of a transform's characters.
///
/// `order[i]` is the index into the start string of the character shown at position `i`.
/// Positions before `step` already show their final character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermutationState {
    order: Vec<usize>,
    step: usize,
}

impl PermutationState {
    /// The identity arrangement for `length` characters.
    pub fn new(length: usize) -> Self {
        Self { order: (0..length).collect(), step: 0 }
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// The next position that is not known to be settled.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Iterate the original index of every character, in the order they are displayed.
    pub fn original_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    /// Build the string currently displayed.
    pub fn materialize(&self, transform: &AnagramTransform) -> String {
        let start = transform.start();
        self.original_indices().map(|index| start[index]).collect()
    }

    /// Whether the character at `position` is the one the end string wants there.
    ///
    /// Positions past the end of the string are never settled.
    pub fn is_settled(&self, transform: &AnagramTransform, position: usize) -> bool {
        let current = self.order.get(position).and_then(|&index| transform.start().get(index));
        match (current, transform.end().get(position)) {
            (Some(current), Some(wanted)) => current == wanted,
            _ => false,
        }
    }

    /// The length of the run of settled positions at the beginning.
    pub fn settled_prefix_len(&self, transform: &AnagramTransform) -> usize {
        (0..self.order.len()).take_while(|&i| self.is_settled(transform, i)).count()
    }

    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.order.swap(a, b);
    }

    pub(crate) fn advance_cursor(&mut self) {
        self.step += 1;
    }
}
