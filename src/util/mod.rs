// Utility Module

pub mod timing;

pub use timing::{format_duration, measure, ScopeTimer};
