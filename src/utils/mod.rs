//! Utility helpers

pub mod cancel;

pub use cancel::run_cancellable;
