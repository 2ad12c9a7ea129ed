//! Utility helpers shared across page behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! `dom` isolates the web-sys glue so behavior modules read as page logic.
//! It only exists in browser builds.

#[cfg(feature = "csr")]
pub mod dom;
pub mod ready;
