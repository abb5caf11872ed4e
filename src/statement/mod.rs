//! Statement templates — segmentation, pattern compilation, matching.

pub mod grammar;
pub mod matcher;
pub mod pattern;

pub use grammar::{segment, Segment, TypeTag};
pub use matcher::{Capture, MatchResult, Matcher};
pub use pattern::{compile, CompiledPattern};
