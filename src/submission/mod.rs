//! Submission of generation settings and the progress shown meanwhile.

mod cycle;
mod progress;

pub use cycle::*;
pub use progress::*;
