//! CLI command implementations

pub mod align;

pub use align::AlignArgs;
