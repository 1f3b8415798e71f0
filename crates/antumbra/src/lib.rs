//! Antumbra - build identity reporting for the Antumbra CLI binary.
//!
//! Gathers the static identity of the running binary (application
//! name, display version, on-disk location) and renders it as a
//! deterministic banner, then holds for one acknowledgment keypress
//! before the process exits.

pub mod ack;
pub mod identity;
pub mod report;
