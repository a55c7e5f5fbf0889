//! Built-in rewrite configuration
//!
//! The source prefix is fixed. The only choice is which mirror the link is
//! rewritten to, and both known mirrors are listed here.

use clap::ValueEnum;
use serde::Serialize;

use crate::mirror::rule::RewriteRule;

/// Prefix every rewritable link starts with (scheme included)
pub const SOURCE_PREFIX: &str = "https://github.com";

/// Primary rxgithub deployment
pub const RXGITHUB_PREFIX: &str = "https://rxgithub.com";

/// Fly.io deployment of the same service
pub const FLY_PREFIX: &str = "https://rxgithub.fly.dev";

/// Mirror a link can be rewritten to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mirror {
    /// https://rxgithub.com
    #[default]
    Rxgithub,
    /// https://rxgithub.fly.dev
    Fly,
}

impl Mirror {
    pub const ALL: [Mirror; 2] = [Mirror::Rxgithub, Mirror::Fly];

    /// Target prefix for this mirror
    pub fn target_prefix(self) -> &'static str {
        match self {
            Self::Rxgithub => RXGITHUB_PREFIX,
            Self::Fly => FLY_PREFIX,
        }
    }

    /// Rewrite rule from [`SOURCE_PREFIX`] to this mirror
    pub fn rule(self) -> RewriteRule {
        RewriteRule::new(SOURCE_PREFIX, self.target_prefix())
    }
}

impl std::fmt::Display for Mirror {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rxgithub => write!(f, "rxgithub"),
            Self::Fly => write!(f, "fly"),
        }
    }
}
