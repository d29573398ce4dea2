mod session_rng;

pub mod dots;

pub use session_rng::{RollSource, SessionRng};
