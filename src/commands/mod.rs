//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod acquire;
pub mod trigger;

// Re-export main command functions
pub use acquire::{execute_acquire, validate_acquire_args, AcquireArgs};
pub use trigger::{execute_trigger, validate_trigger_args, TriggerArgs};
