//! Rewriting GitHub links to a mirror

pub mod link;
pub mod rewriter;
pub mod rule;

// Re-exports for library consumers
#[allow(unused_imports)]
pub use link::LinkKind;
#[allow(unused_imports)]
pub use rewriter::{run, Outcome};
#[allow(unused_imports)]
pub use rule::{PrefixBoundary, Rewrite, RewriteRule};
