//! Named behaviour variants
//!
//! The animation historically shipped as two near-duplicate scripts. Each is
//! kept as a [`Variant`] bundling its collision rules, its error policy and
//! when it starts.

use serde::{Deserialize, Serialize};

use bounce_physics::StepRules;

/// What the loop does when a frame fails
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorPolicy {
    /// Log the error and stop scheduling frames
    Halt,
    /// Stop scheduling frames and hand the error to the host
    Propagate,
}

/// When the loop starts relative to the host document
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StartMode {
    /// As soon as the entry point runs
    Immediate,
    /// Once the host document has finished loading its content
    OnContentLoaded,
}

/// One of the two historical behaviours
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Defensive: checks the surface, catches frame errors, damped ceiling
    #[default]
    Guarded,
    /// No checks: frame errors propagate, elastic ceiling
    Plain,
}

impl Variant {
    /// Collision rules of this variant
    pub fn rules(self) -> StepRules {
        match self {
            Variant::Guarded => StepRules::GUARDED,
            Variant::Plain => StepRules::PLAIN,
        }
    }

    /// Error policy of this variant
    pub fn error_policy(self) -> ErrorPolicy {
        match self {
            Variant::Guarded => ErrorPolicy::Halt,
            Variant::Plain => ErrorPolicy::Propagate,
        }
    }

    /// Start trigger of this variant
    pub fn start_mode(self) -> StartMode {
        match self {
            Variant::Guarded => StartMode::OnContentLoaded,
            Variant::Plain => StartMode::Immediate,
        }
    }

    /// Lowercase name, as used in configuration
    pub fn name(self) -> &'static str {
        match self {
            Variant::Guarded => "guarded",
            Variant::Plain => "plain",
        }
    }
}

impl std::str::FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "guarded" => Ok(Variant::Guarded),
            "plain" => Ok(Variant::Plain),
            other => Err(format!("Unknown variant '{}', expected 'guarded' or 'plain'", other)),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
