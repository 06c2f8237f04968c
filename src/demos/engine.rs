//! Demo trait and transcript.
//!
//! Every demo writes human-readable lines into a [`Transcript`] and records
//! each equality comparison it prints as an [`EqualityCheck`], so the
//! boolean outcomes can be asserted without parsing text.

use serde::{Deserialize, Serialize};

use crate::config::DemoKind;

/// A single demonstration: a fixed sequence of bind/mutate/print steps.
pub trait Demo {
    /// Which demo this is.
    fn kind(&self) -> DemoKind;

    /// Execute every step in order, writing into `out`.
    ///
    /// Steps are total: nothing here can fail.
    fn run(&self, out: &mut Transcript);

    /// Demo name for display.
    fn name(&self) -> &'static str {
        self.kind().name()
    }
}

/// One printed equality comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EqualityCheck {
    /// What was compared (e.g. "ma vs mc").
    pub label: String,
    /// Contents compare equal.
    pub value_equal: bool,
    /// Both sides denote the same instance.
    pub identity_equal: bool,
}

/// Accumulated demo output plus the equality checks behind it.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    buf: String,
    checks: Vec<EqualityCheck>,
}

impl Transcript {
    /// Create an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line.
    pub fn line(&mut self, text: impl AsRef<str>) {
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
    }

    /// Append an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Record an equality comparison that was just printed.
    pub fn record_equality(&mut self, label: impl Into<String>, value_equal: bool, identity_equal: bool) {
        let label = label.into();
        log::debug!("{label}: value_equal={value_equal} identity_equal={identity_equal}");
        self.checks.push(EqualityCheck {
            label,
            value_equal,
            identity_equal,
        });
    }

    /// Everything written so far.
    pub fn output(&self) -> &str {
        &self.buf
    }

    /// Recorded equality checks, in print order.
    pub fn checks(&self) -> &[EqualityCheck] {
        &self.checks
    }

    /// Consume the transcript, keeping only the text.
    pub fn into_output(self) -> String {
        self.buf
    }
}

/// Render an optional lookup result, substituting `sentinel` for a miss.
pub fn render_lookup<'a>(value: Option<&'a str>, sentinel: &'a str) -> &'a str {
    value.unwrap_or(sentinel)
}
