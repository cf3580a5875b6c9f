//! # Features
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

// Rate limiting
pub mod rate_limiting;

pub use rate_limiting::{CooldownCheck, CooldownTracker};
