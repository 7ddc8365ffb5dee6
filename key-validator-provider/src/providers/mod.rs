//! Account-info service implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod siliconflow;

pub use siliconflow::{SILICONFLOW_USER_INFO_URL, SiliconFlowClient};
