//! SiliconFlow `AccountInfoClient` trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::traits::{AccountInfoClient, ProviderErrorMapper};
use crate::types::{AccountSummary, ProviderMetadata};

use super::{PROVIDER_ID, SILICONFLOW_USER_INFO_URL, SiliconFlowClient, UserInfoResponse};

impl ProviderErrorMapper for SiliconFlowClient {
    fn provider_name(&self) -> &'static str {
        PROVIDER_ID
    }
}

#[async_trait]
impl AccountInfoClient for SiliconFlowClient {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn metadata() -> ProviderMetadata {
        ProviderMetadata {
            id: PROVIDER_ID,
            name: "SiliconFlow",
            endpoint: SILICONFLOW_USER_INFO_URL,
        }
    }

    async fn fetch_account(&self, api_key: &str) -> Result<AccountSummary> {
        let response: UserInfoResponse = self.get_authorized(api_key).await?;

        log::debug!(
            "[{PROVIDER_ID}] code={:?} status={:?} message={:?}",
            response.code,
            response.status,
            response.message
        );

        response.data.ok_or_else(|| {
            log::error!("[{PROVIDER_ID}] 响应中缺少 data 字段");
            ProviderError::MissingPayload {
                provider: self.provider_name().to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_points_at_user_info() {
        let meta = SiliconFlowClient::metadata();
        assert_eq!(meta.id, "siliconflow");
        assert_eq!(meta.endpoint, "https://api.siliconflow.cn/v1/user/info");
    }

    #[test]
    fn default_endpoint() {
        let client = SiliconFlowClient::new().unwrap();
        assert_eq!(client.endpoint(), SILICONFLOW_USER_INFO_URL);
        assert_eq!(client.id(), "siliconflow");
    }
}
