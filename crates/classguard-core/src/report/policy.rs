use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What the startup reporter does with collisions that are not whitelisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Abort stage library registration
    #[default]
    Fail,
    /// Log the collision and carry on
    Warn,
}

impl CollisionPolicy {
    /// Every selectable policy, in display order
    pub const ALL: [CollisionPolicy; 2] = [CollisionPolicy::Fail, CollisionPolicy::Warn];

    /// Value used on the command line and in configuration files
    pub fn value(&self) -> &'static str {
        match self {
            CollisionPolicy::Fail => "fail",
            CollisionPolicy::Warn => "warn",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            CollisionPolicy::Fail => "Abort registration on non-whitelisted collisions",
            CollisionPolicy::Warn => "Log non-whitelisted collisions as warnings",
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, CollisionPolicy::Fail)
    }
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for CollisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CollisionPolicy::ALL
            .into_iter()
            .find(|policy| policy.value().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown collision policy '{}', expected one of: fail, warn", s))
    }
}
