//! Key Validator TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     config.load()           // 读取界面偏好
//!     init_logger()           // 日志写入配置目录
//!     Runtime::new()          // 后台请求使用的 tokio 运行时
//!     init_terminal()         // 初始化终端
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!     config.save()           // 保存界面偏好
//!
//! }

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use key_validator_provider::{SiliconFlowClient, SILICONFLOW_USER_INFO_URL};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use backend::{get_config_dir, ConfigService, JsonConfigService, ValidationService};
use util::{init_logger, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 读取配置并初始化日志
    let config_service = JsonConfigService::new();
    let config_result = config_service.load();
    let log_path = init_logger(&get_config_dir())?;
    log::info!(
        "key-validator-tui v{} starting, log file {}",
        env!("CARGO_PKG_VERSION"),
        log_path.display()
    );

    let mut config = config_result.unwrap_or_else(|e| {
        log::warn!("{e}; falling back to defaults");
        backend::AppConfig::default()
    });
    log::debug!("config file {}", config_service.path().display());

    // 2. 创建运行时和校验服务
    let runtime = Runtime::new().context("failed to start tokio runtime")?;
    let (tx, mut rx) = mpsc::unbounded_channel();

    let endpoint = config
        .endpoint
        .clone()
        .unwrap_or_else(|| SILICONFLOW_USER_INFO_URL.to_string());
    log::info!("user-info endpoint: {endpoint}");
    let client = SiliconFlowClient::with_endpoint(endpoint)?;
    let service = ValidationService::new(Arc::new(client), runtime.handle().clone(), tx);

    // 3. 创建应用实例
    let mut app = model::App::from_config(&config);

    // 4. 运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &service, &mut rx);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 6. 保存界面偏好
    app.apply_to_config(&mut config);
    if let Err(e) = config_service.save(&config) {
        log::error!("{e}");
    }

    if let Err(ref e) = result {
        log::error!("exited with error: {e:#}");
    } else {
        log::info!("exited");
    }

    // 7. 返回结果
    result
}
