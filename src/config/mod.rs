//! Configuration with YAML schema and validation.
//!
//! Configuration is optional: with no file the defaults reproduce the
//! canonical demo output. A file is checked in two passes:
//! - schema validation via serde (`deny_unknown_fields`) and `validator`
//! - semantic validation (no duplicate demos, single-line sentinel)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use validator::Validate;

use crate::error::{DemoError, DemoResult};

/// Top-level demo configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    /// Demos to run, in order.
    #[validate(length(min = 1))]
    #[serde(default = "default_demos")]
    pub demos: Vec<DemoKind>,

    /// Output rendering.
    #[validate(nested)]
    #[serde(default)]
    pub output: OutputConfig,

    /// Print a banner before each demo.
    #[serde(default)]
    pub verbose: bool,
}

fn default_demos() -> Vec<DemoKind> {
    vec![DemoKind::BoxedNumber, DemoKind::StringMap]
}

impl DemoConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> DemoResult<Self> {
        let path = path.as_ref();
        log::debug!("loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> DemoResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;

        config.validate()?;
        config.validate_semantic()?;

        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> DemoConfigBuilder {
        DemoConfigBuilder::default()
    }

    /// Validate semantic constraints beyond schema.
    fn validate_semantic(&self) -> DemoResult<()> {
        for (i, demo) in self.demos.iter().enumerate() {
            if self.demos[..i].contains(demo) {
                return Err(DemoError::config(format!(
                    "demo '{demo}' is listed more than once"
                )));
            }
        }

        if self.output.absent_sentinel.contains('\n') {
            return Err(DemoError::config(
                "absent_sentinel must be a single line",
            ));
        }

        Ok(())
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            demos: default_demos(),
            output: OutputConfig::default(),
            verbose: false,
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct DemoConfigBuilder {
    demos: Option<Vec<DemoKind>>,
    absent_sentinel: Option<String>,
    verbose: bool,
}

impl DemoConfigBuilder {
    /// Set the demos to run, in order.
    #[must_use]
    pub fn demos(mut self, demos: impl Into<Vec<DemoKind>>) -> Self {
        self.demos = Some(demos.into());
        self
    }

    /// Run every available demo.
    #[must_use]
    pub fn all_demos(self) -> Self {
        self.demos(DemoKind::ALL)
    }

    /// Set the text printed for an absent map key.
    #[must_use]
    pub fn absent_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.absent_sentinel = Some(sentinel.into());
        self
    }

    /// Enable demo banners.
    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> DemoConfig {
        let mut config = DemoConfig::default();

        if let Some(demos) = self.demos {
            config.demos = demos;
        }

        if let Some(sentinel) = self.absent_sentinel {
            config.output.absent_sentinel = sentinel;
        }

        config.verbose = self.verbose;

        config
    }
}

/// Output rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Printed in place of a value when a map lookup finds no key.
    #[validate(length(min = 1))]
    #[serde(default = "default_absent_sentinel")]
    pub absent_sentinel: String,
}

fn default_absent_sentinel() -> String {
    "<absent>".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            absent_sentinel: default_absent_sentinel(),
        }
    }
}

/// Available demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DemoKind {
    /// Boxed integer identity vs value equality.
    BoxedNumber,
    /// Aliased map mutation and map equality.
    StringMap,
    /// Handle slots vs referents, and deep copies.
    HandleSlots,
}

impl DemoKind {
    /// Every demo, in canonical order.
    pub const ALL: [Self; 3] = [Self::BoxedNumber, Self::StringMap, Self::HandleSlots];

    /// Kebab-case name used on the command line and in YAML.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BoxedNumber => "boxed-number",
            Self::StringMap => "string-map",
            Self::HandleSlots => "handle-slots",
        }
    }

    /// One-line description for `list`.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::BoxedNumber => "boxed integer: alias, rebind, value vs identity equality",
            Self::StringMap => "shared map: mutation through an alias, map equality",
            Self::HandleSlots => "two handle slots, one referent; deep copy isolation",
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DemoKind {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| DemoError::unknown_demo(s))
    }
}
