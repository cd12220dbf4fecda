//! Per-frame caption presentation.

pub mod fingerprint;
pub mod frame;
pub mod pipeline;
pub mod presentation;
