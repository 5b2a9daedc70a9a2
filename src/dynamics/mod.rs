//! Motion resolution: the bounce loop and its batched form.

pub mod parallel;
pub mod resolver;

pub use parallel::resolve_batch;
pub use resolver::{resolve_motion, MovementResolver};
