use serde::{Deserialize, Serialize};

/// Unified error type for account-info lookups.
///
/// Each variant includes a `provider` field identifying which service produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// None of these errors are retried by the library: every failure is terminal for the
/// lookup that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out at the transport level.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The service answered with a non-2xx status.
    ///
    /// Every non-success status is reported this way, whether the key is expired,
    /// malformed, revoked, or the service itself failed.
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status code returned by the service.
        status: u16,
        /// Original response body, if one could be read.
        raw_message: Option<String>,
    },

    /// Failed to parse the service's response body.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The response parsed, but carried no account payload.
    MissingPayload {
        /// Provider that produced the error.
        provider: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户输入错误等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::InvalidCredentials { .. })
    }

    /// Provider that produced the error.
    pub fn provider(&self) -> &str {
        match self {
            Self::NetworkError { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::InvalidCredentials { provider, .. }
            | Self::ParseError { provider, .. }
            | Self::MissingPayload { provider } => provider,
        }
    }

    /// The underlying failure message, without the provider prefix.
    ///
    /// Returns `None` when the error carries no message of its own
    /// (or only an empty one).
    pub fn detail(&self) -> Option<&str> {
        let detail = match self {
            Self::NetworkError { detail, .. }
            | Self::Timeout { detail, .. }
            | Self::ParseError { detail, .. } => Some(detail.as_str()),
            Self::InvalidCredentials { raw_message, .. } => raw_message.as_deref(),
            Self::MissingPayload { .. } => Some("response has no data field"),
        };
        detail.filter(|d| !d.trim().is_empty())
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::InvalidCredentials {
                provider, status, ..
            } => {
                write!(f, "[{provider}] Invalid credentials (HTTP {status})")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::MissingPayload { provider } => {
                write!(f, "[{provider}] Response has no data field")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
