//! Utility functions shared by the estimators.

pub mod stats;
pub mod window;

pub use stats::{mean, recency_weights, weighted_mean};
pub use window::{centered_bounds, centered_mean};
