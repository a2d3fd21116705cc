//! Core domain logic for clipplan: brief normalization and deterministic
//! production-plan synthesis.
//!
//! Pure logic only — no I/O, no randomness, no global state. The HTTP
//! surface lives in `clipplan-api` and the hosted-model client in
//! `clipplan-model`; both build on the types defined here.

pub mod brief;
pub mod error;
pub mod plan;
pub mod synthesizer;
