use super::stepper::{AnagramStepper, SwapEvent};
use super::transform::{AnagramError, AnagramTransform};
use log::debug;

/// Drives a morph back and forth between two anagrams.
///
/// Flipping or retargeting mid-morph starts over from whatever is currently displayed, so the
/// displayed string never jumps.
#[derive(Debug)]
pub struct MorphController {
    pair: [String; 2],
    target: usize,
    stepper: AnagramStepper,
}

impl MorphController {
    /// Start morphing `first` into `second`.
    pub fn new(first: &str, second: &str) -> Result<Self, AnagramError> {
        let stepper = AnagramStepper::from_strs(first, second)?;
        Ok(Self { pair: [first.to_string(), second.to_string()], target: 1, stepper })
    }

    pub fn advance(&mut self) -> Result<SwapEvent, AnagramError> {
        self.stepper.advance()
    }

    /// The string currently displayed.
    pub fn displayed(&self) -> String {
        self.stepper.materialize()
    }

    /// The string being morphed into.
    pub fn target(&self) -> String {
        self.stepper.transform().end().iter().collect()
    }

    pub fn stepper(&self) -> &AnagramStepper {
        &self.stepper
    }

    pub fn is_done(&self) -> bool {
        self.stepper.is_terminal()
    }

    /// Morph towards the other string in the pair.
    pub fn flip(&mut self) -> Result<(), AnagramError> {
        let target = 1 - self.target;
        let end = self.pair[target].clone();
        self.rebuild(&end)?;
        self.target = target;
        Ok(())
    }

    /// Morph towards an arbitrary anagram of the displayed string.
    ///
    /// This replaces the string being flipped to. The controller is left untouched if
    /// `end` is not an anagram of what's being displayed.
    pub fn retarget(&mut self, end: &str) -> Result<(), AnagramError> {
        self.rebuild(end)?;
        self.pair[self.target] = end.to_string();
        Ok(())
    }

    fn rebuild(&mut self, end: &str) -> Result<(), AnagramError> {
        let displayed = self.displayed();
        let transform = AnagramTransform::new(&displayed, end)?;
        debug!("restarting morph from '{displayed}' to '{end}'");
        self.stepper = AnagramStepper::new(transform);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(controller: &mut MorphController) -> usize {
        let mut swaps = 0;
        while !controller.advance().expect("advance failed").is_terminal() {
            swaps += 1;
        }
        swaps
    }

    #[test]
    fn flip_back_and_forth() {
        let mut controller = MorphController::new("@radiantmood", "atom@android").expect("invalid pair");
        assert_eq!(drain(&mut controller), 7);
        assert_eq!(controller.displayed(), "atom@android");

        controller.flip().expect("flip failed");
        assert_eq!(controller.target(), "@radiantmood");
        assert!(!controller.is_done());
        assert_eq!(drain(&mut controller), 6);
        assert_eq!(controller.displayed(), "@radiantmood");

        controller.flip().expect("flip failed");
        assert_eq!(controller.target(), "atom@android");
    }

    #[test]
    fn flip_mid_morph() {
        let mut controller = MorphController::new("@radiantmood", "atom@android").expect("invalid pair");
        controller.advance().expect("advance failed");
        controller.advance().expect("advance failed");
        assert_eq!(controller.displayed(), "at@dianrmood");

        controller.flip().expect("flip failed");
        assert_eq!(controller.stepper().transform().start().iter().collect::<String>(), "at@dianrmood");
        drain(&mut controller);
        assert_eq!(controller.displayed(), "@radiantmood");
    }

    #[test]
    fn retarget() {
        let mut controller = MorphController::new("listen", "silent").expect("invalid pair");
        controller.advance().expect("advance failed");
        controller.retarget("tinsel").expect("retarget failed");
        drain(&mut controller);
        assert_eq!(controller.displayed(), "tinsel");

        controller.flip().expect("flip failed");
        drain(&mut controller);
        assert_eq!(controller.displayed(), "listen");

        controller.flip().expect("flip failed");
        assert_eq!(controller.target(), "tinsel");
    }

    #[test]
    fn invalid_retarget_keeps_state() {
        let mut controller = MorphController::new("listen", "silent").expect("invalid pair");
        controller.advance().expect("advance failed");
        let displayed = controller.displayed();

        let result = controller.retarget("lister");
        assert_eq!(result, Err(AnagramError::NotAnagram { character: 'r' }));
        assert_eq!(controller.displayed(), displayed);
        assert_eq!(controller.target(), "silent");
    }

    #[test]
    fn invalid_pair() {
        let result = MorphController::new("abc", "abcd");
        assert!(matches!(result, Err(AnagramError::LengthMismatch { start: 3, end: 4 })));
    }
}
