//! Runs the configured demos in order.

use std::io::Write;

use super::{BoxedNumberDemo, Demo, HandleSlotsDemo, StringMapDemo, Transcript};
use crate::config::{DemoConfig, DemoKind};
use crate::error::DemoResult;

/// Executes a fixed, ordered list of demos.
#[derive(Debug, Clone, Default)]
pub struct DemoRunner {
    config: DemoConfig,
}

impl DemoRunner {
    /// Create a runner for the given configuration.
    #[must_use]
    pub const fn new(config: DemoConfig) -> Self {
        Self { config }
    }

    /// Instantiate the configured demos, in run order.
    pub fn demos(&self) -> Vec<Box<dyn Demo>> {
        self.config
            .demos
            .iter()
            .map(|&kind| build_demo(kind, &self.config))
            .collect()
    }

    /// Run every configured demo into `out`.
    ///
    /// Consecutive demos are separated by two blank lines.
    pub fn run(&self, out: &mut Transcript) {
        log::info!("running {} demo(s)", self.config.demos.len());
        for (i, demo) in self.demos().iter().enumerate() {
            if i > 0 {
                out.blank();
                out.blank();
            }
            if self.config.verbose {
                out.line(format!("=== {}: {} ===", demo.name(), demo.kind().description()));
            }
            log::debug!("demo {} starting", demo.name());
            demo.run(out);
        }
    }

    /// Run and return the text output.
    pub fn run_to_string(&self) -> String {
        let mut out = Transcript::new();
        self.run(&mut out);
        out.into_output()
    }

    /// Run and write the text output to `writer`.
    ///
    /// # Errors
    ///
    /// Returns error if writing to `writer` fails.
    pub fn run_to_writer<W: Write>(&self, writer: &mut W) -> DemoResult<Transcript> {
        let mut out = Transcript::new();
        self.run(&mut out);
        writer.write_all(out.output().as_bytes())?;
        writer.flush()?;
        Ok(out)
    }
}

/// Build one demo from its kind and the shared configuration.
pub fn build_demo(kind: DemoKind, config: &DemoConfig) -> Box<dyn Demo> {
    let sentinel = config.output.absent_sentinel.as_str();
    match kind {
        DemoKind::BoxedNumber => Box::new(BoxedNumberDemo::new()),
        DemoKind::StringMap => Box::new(StringMapDemo::new(sentinel)),
        DemoKind::HandleSlots => Box::new(HandleSlotsDemo::new(sentinel)),
    }
}
