//! SiliconFlow API 类型定义

use serde::Deserialize;

use crate::types::AccountSummary;

/// `/v1/user/info` 响应外层结构
///
/// 除 `data` 外的字段仅用于日志。
#[derive(Debug, Deserialize)]
pub struct UserInfoResponse {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<bool>,
    #[serde(default)]
    pub data: Option<AccountSummary>,
}
