//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 解耦，负责网络请求与配置读写。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod validation_service;     // 校验服务（tokio 任务 + 结果通道）
//!         mod config_service;         // 配置服务（JSON 文件）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、校验服务（ValidationService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     实现 ValidationBackend trait，内部持有：
//!         - Arc<dyn AccountInfoClient>    // key-validator-provider 的客户端
//!         - tokio Handle                  // 运行时句柄
//!         - UnboundedSender<AppMessage>   // 结果回传通道
//!
//!     dispatch(request_id, credential) 在运行时上启动一个任务：
//!         client.fetch_account(&credential).await
//!             ↓
//!         CompletionGuard 发送 ValidatorMessage::Finished { request_id, outcome }
//!
//!     CompletionGuard 在 Drop 时兜底，任务中途结束也会发送失败结果，
//!     因此 busy 一定会被复位。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、配置服务（JsonConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     存储位置：~/.config/key-validator-tui/config.json
//!
//!         {
//!             "language": "en-US",
//!             "theme": "dark",
//!             "endpoint": "https://..."     // 可选
//!         }
//!
//!     文件不存在时使用默认值；API Key 从不写入配置。
//!

mod config_service;
mod validation_service;

pub use config_service::{get_config_dir, AppConfig, ConfigService, JsonConfigService};
pub use validation_service::{ValidationBackend, ValidationService};
