//! # aliasing
//!
//! Reference versus value semantics, shown step by step.
//!
//! Two things are demonstrated:
//! - A boxed integer has an identity separate from its value, so
//!   identity-equality and value-equality are different questions.
//! - Assigning a mutable map handle to a second name creates an alias, not a
//!   copy. Mutation through either name is visible through both.
//!
//! ## Example
//!
//! ```rust
//! use aliasing::prelude::*;
//!
//! let ma = SharedMap::new();
//! ma.insert("a", "b");
//! let mb = ma.alias();
//! mb.insert("b", "c");
//!
//! assert_eq!(ma.get("b").as_deref(), Some("c"));
//! assert!(ma.identity_eq(&mb));
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_const_for_fn,  // Rc-backed handles can't be const
    clippy::must_use_candidate,
)]

pub mod boxed;
pub mod cli;
pub mod config;
pub mod demos;
pub mod error;
pub mod map;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::boxed::{Boxed, BoxedNumber};
    pub use crate::config::{DemoConfig, DemoConfigBuilder, DemoKind};
    pub use crate::demos::{Demo, DemoRunner, EqualityCheck, Transcript};
    pub use crate::error::{DemoError, DemoResult};
    pub use crate::map::SharedMap;
}

/// Re-export for public API
pub use error::{DemoError, DemoResult};
