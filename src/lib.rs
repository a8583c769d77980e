//! Genescreen Tool - Gene Stability & CRISPR Editing Simulator
//!
//! A Rust application for screening short DNA sequences: rule-based
//! structural stability prediction plus a simulated CRISPR-Cas9 repair of
//! point mutations against a reference sequence.

pub mod analysis;

pub use analysis::*;
