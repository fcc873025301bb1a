pub mod runner;

pub use runner::{Runner, StepFailure};
