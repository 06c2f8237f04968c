//! Demos of reference versus value semantics.
//!
//! Each demo is a fixed sequence of bind, mutate and print steps. Every
//! equality comparison it prints is also recorded in the [`Transcript`].
//!
//! # Demos
//!
//! 1. [`boxed_number`] - alias a boxed integer, rebind, compare
//! 2. [`string_map`] - mutate a map through an alias, compare maps
//! 3. [`handle_slots`] - distinct handle slots for one map; deep copies
//!
//! The default run is demos 1 and 2, separated by two blank lines.

pub mod boxed_number;
mod engine;
pub mod handle_slots;
mod runner;
pub mod string_map;

// Re-exports for convenience
pub use boxed_number::BoxedNumberDemo;
pub use engine::{render_lookup, Demo, EqualityCheck, Transcript};
pub use handle_slots::HandleSlotsDemo;
pub use runner::{build_demo, DemoRunner};
pub use string_map::StringMapDemo;
