//! Provider 公共工具函数

use reqwest::Client;

use crate::error::{ProviderError, Result};

// ============ HTTP Client ============

/// 创建 HTTP Client
///
/// 不设置连接或请求超时，沿用 reqwest 的默认行为。
pub fn create_http_client(provider: &str) -> Result<Client> {
    Client::builder()
        .build()
        .map_err(|e| ProviderError::NetworkError {
            provider: provider.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// 拼接 Bearer 认证头
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_with_transport_defaults() {
        assert!(create_http_client("test").is_ok());
    }

    #[test]
    fn bearer_header_format() {
        assert_eq!(bearer_header("sk-test"), "Bearer sk-test");
    }

    #[test]
    fn bearer_header_keeps_token_verbatim() {
        assert_eq!(bearer_header(" a b "), "Bearer  a b ");
    }
}
