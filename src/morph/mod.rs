mod controller;
mod sequence;
mod state;
mod stepper;
mod transform;

pub use controller::MorphController;
pub use sequence::{SwapPlan, SwapSequence, plan};
pub use state::PermutationState;
pub use stepper::{AnagramStepper, Swap, SwapEvent};
pub use transform::{AnagramError, AnagramTransform};
