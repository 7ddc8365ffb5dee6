//! 日志初始化
//!
//! TUI 占用整个终端，日志写入配置目录下的文件。
//! 级别由 `RUST_LOG` 控制，默认 `info`。

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

/// 日志文件名
const LOG_FILE_NAME: &str = "key-validator-tui.log";

/// 初始化日志，返回日志文件路径
pub fn init_logger(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already initialized")?;

    Ok(path)
}
