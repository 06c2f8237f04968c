//! Boxed integer: aliasing, rebinding, value vs identity equality.
//!
//! ```text
//! a := box(1)
//! b := a            alias: same instance
//! b := box(2)       rebind: a is untouched
//! ```
//!
//! Identity-equality in the first print comes from the explicit alias,
//! never from caching of small values.

use super::{Demo, Transcript};
use crate::boxed::BoxedNumber;
use crate::config::DemoKind;

/// Boxed integer demo.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxedNumberDemo;

impl BoxedNumberDemo {
    /// Create the demo.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Demo for BoxedNumberDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::BoxedNumber
    }

    fn run(&self, out: &mut Transcript) {
        let a = BoxedNumber::new(1);
        let mut b = a.alias();
        print_pair(out, &a, &b);

        out.line("------ after -------");
        log::debug!("rebinding b to a fresh boxed value");
        b = BoxedNumber::new(2);
        print_pair(out, &a, &b);
    }
}

fn print_pair(out: &mut Transcript, a: &BoxedNumber, b: &BoxedNumber) {
    let value_equal = a.value_eq(b);
    let identity_equal = a.identity_eq(b);

    out.line(format!("a = {a}, b = {b}"));
    out.line(format!("equal = {value_equal}"));
    out.line(format!("== = {identity_equal}"));
    out.record_equality("a vs b", value_equal, identity_equal);
}
