use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{AccountSummary, ProviderMetadata};

/// Provider 错误构造 Trait（内部使用）
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：凭证被拒绝（非 2xx 状态码）
    fn rejected(&self, status: u16, body: Option<String>) -> ProviderError {
        ProviderError::InvalidCredentials {
            provider: self.provider_name().to_string(),
            status,
            raw_message: body,
        }
    }
}

/// 账户信息服务 Trait
///
/// 每次调用恰好发出一个请求，不重试。
#[async_trait]
pub trait AccountInfoClient: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 获取 Provider 元数据（类型级别）
    fn metadata() -> ProviderMetadata
    where
        Self: Sized;

    /// 使用 API Key 查询账户信息
    ///
    /// 非 2xx 响应统一映射为 [`ProviderError::InvalidCredentials`]。
    async fn fetch_account(&self, api_key: &str) -> Result<AccountSummary>;
}
