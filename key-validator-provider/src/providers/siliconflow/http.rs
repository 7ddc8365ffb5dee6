//! SiliconFlow HTTP 请求方法

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::{HttpUtils, is_success_status};
use crate::providers::common::bearer_header;
use crate::traits::ProviderErrorMapper;
use crate::utils::log_sanitizer::{mask_secret, truncate_for_log};

use super::{PROVIDER_ID, SiliconFlowClient};

impl SiliconFlowClient {
    /// 执行带 Bearer 认证的 GET 请求
    ///
    /// 非 2xx 状态码不解析响应体，直接映射为凭证错误。
    pub(crate) async fn get_authorized<T: DeserializeOwned>(&self, api_key: &str) -> Result<T> {
        log::debug!(
            "[{PROVIDER_ID}] Authorization: Bearer {}",
            mask_secret(api_key)
        );

        let request = self
            .client
            .get(&self.endpoint)
            .header("Authorization", bearer_header(api_key));

        let (status, body) =
            HttpUtils::execute_request(request, PROVIDER_ID, "GET", &self.endpoint).await?;

        if !is_success_status(status) {
            log::warn!(
                "[{PROVIDER_ID}] Key rejected (HTTP {status}): {}",
                truncate_for_log(&body)
            );
            let body = (!body.is_empty()).then_some(body);
            return Err(self.rejected(status, body));
        }

        HttpUtils::parse_json(&body, PROVIDER_ID)
    }
}
