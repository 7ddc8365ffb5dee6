//! # key-validator-provider
//!
//! Validates an API key against the SiliconFlow account service and returns
//! the account summary (including the pre-formatted balance) it belongs to.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* - Use the platform's native TLS implementation.
//! - **`rustls`** - Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use key_validator_provider::{AccountInfoClient, SiliconFlowClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SiliconFlowClient::new()?;
//!     let account = client.fetch_account("sk-your-key").await?;
//!     println!("balance: {}", account.total_balance);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every lookup returns [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::InvalidCredentials`] - the service answered with a non-2xx status
//! - [`ProviderError::NetworkError`] / [`ProviderError::Timeout`] - transport failure
//! - [`ProviderError::ParseError`] / [`ProviderError::MissingPayload`] - unusable response body
//!
//! Nothing is retried. [`ProviderError::detail`] gives the bare failure message.

mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export core trait only (internal traits are not exported)
pub use traits::AccountInfoClient;

// Re-export types
pub use types::{AccountSummary, ProviderMetadata};

// Re-export utils module
pub use utils::log_sanitizer;

// Re-export concrete providers
pub use providers::{SILICONFLOW_USER_INFO_URL, SiliconFlowClient};
