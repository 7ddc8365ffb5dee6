//! 校验服务
//!
//! 在 tokio 运行时上执行唯一的网络请求，结束后通过通道把结果发回主循环。

use std::sync::Arc;

use key_validator_provider::log_sanitizer::mask_secret;
use key_validator_provider::{AccountInfoClient, ProviderError};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::{AppMessage, ValidationOutcome, ValidatorMessage};

/// 校验后端 trait
///
/// Update 层通过它发起请求，每次调用对应恰好一次网络请求。
pub trait ValidationBackend {
    /// 发起一次校验，结果稍后以 `ValidatorMessage::Finished` 返回
    fn dispatch(&self, request_id: u64, credential: String);
}

/// 基于 `AccountInfoClient` 的校验服务
pub struct ValidationService {
    client: Arc<dyn AccountInfoClient>,
    runtime: Handle,
    results: UnboundedSender<AppMessage>,
}

impl ValidationService {
    pub fn new(
        client: Arc<dyn AccountInfoClient>,
        runtime: Handle,
        results: UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            client,
            runtime,
            results,
        }
    }
}

impl ValidationBackend for ValidationService {
    fn dispatch(&self, request_id: u64, credential: String) {
        log::info!(
            "[{}] request #{request_id}: validating key {}",
            self.client.id(),
            mask_secret(&credential)
        );

        let client = Arc::clone(&self.client);
        let guard = CompletionGuard::new(request_id, client.id(), self.results.clone());

        self.runtime.spawn(async move {
            let outcome = client.fetch_account(&credential).await;
            guard.complete(outcome);
        });
    }
}

/// 请求结束守卫
///
/// 保证每个请求都有一条 `Finished` 消息：正常结束时发送结果，
/// 任务在发送前被中止或 panic 时由 `Drop` 发送失败结果。
struct CompletionGuard {
    request_id: u64,
    provider: &'static str,
    results: UnboundedSender<AppMessage>,
    completed: bool,
}

impl CompletionGuard {
    fn new(request_id: u64, provider: &'static str, results: UnboundedSender<AppMessage>) -> Self {
        Self {
            request_id,
            provider,
            results,
            completed: false,
        }
    }

    fn complete(mut self, outcome: ValidationOutcome) {
        self.send(outcome);
    }

    fn send(&mut self, outcome: ValidationOutcome) {
        self.completed = true;
        let msg = AppMessage::Validator(ValidatorMessage::Finished {
            request_id: self.request_id,
            outcome,
        });
        if self.results.send(msg).is_err() {
            log::debug!("request #{}: UI already closed", self.request_id);
        }
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if self.completed {
            return;
        }
        log::error!("request #{}: task ended without a result", self.request_id);
        self.send(Err(ProviderError::NetworkError {
            provider: self.provider.to_string(),
            detail: "validation task ended before returning a result".to_string(),
        }));
    }
}
