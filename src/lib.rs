//! Run a fixed sequence of git commands, stopping at the first failure.
//!
//! The crate is split into the plan (which commands run, in which order),
//! the invoker (how a single external command is spawned and captured), and
//! the pipeline runner (the sequential execution loop).

pub mod invoker;
pub mod pipeline;
pub mod plan;
