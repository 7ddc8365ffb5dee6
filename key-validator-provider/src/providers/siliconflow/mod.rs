//! SiliconFlow account-info client

mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::create_http_client;

pub(crate) use types::UserInfoResponse;

/// 用户信息接口（固定地址）
pub const SILICONFLOW_USER_INFO_URL: &str = "https://api.siliconflow.cn/v1/user/info";

pub(crate) const PROVIDER_ID: &str = "siliconflow";

/// SiliconFlow account-info client
#[derive(Debug)]
pub struct SiliconFlowClient {
    pub(crate) client: Client,
    pub(crate) endpoint: String,
}

impl SiliconFlowClient {
    /// 使用默认接口地址创建客户端
    pub fn new() -> Result<Self> {
        Self::with_endpoint(SILICONFLOW_USER_INFO_URL)
    }

    /// 使用自定义接口地址创建客户端（网关代理、测试桩等）
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: create_http_client(PROVIDER_ID)?,
            endpoint: endpoint.into(),
        })
    }

    /// 当前使用的接口地址
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
