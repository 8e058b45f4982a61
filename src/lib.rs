//! Lead Triage — comment triage core.
//!
//! Sorts inbound social-platform comments into lead vs general, drafts a
//! reply for each, and tracks review state across filtered views. The
//! presentation layer consumes the store; sources and classifiers are
//! pluggable strategies behind traits.

pub mod classifier;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod source;
pub mod store;
