//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//! 终端的初始化和恢复，以及日志初始化。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化和恢复
//!         mod logger;         // 日志写入文件
//!
//!         pub use terminal::{init_terminal, restore_terminal, Term};
//!         pub use logger::init_logger;
//!
//!
//!     初始化终端：
//!         1. 启用原始模式（关闭行缓冲与回显）
//!         2. 进入备用屏幕
//!         3. 开启括号粘贴
//!
//!     恢复终端：按相反顺序撤销。
//!         无论程序是正常退出还是发生错误，都必须调用！
//!         否则终端会保持在原始模式，用户输入不会正常显示。
//!
//!
//!     日志：
//!         TUI 运行时 stdout 被界面占用，日志写入
//!             ~/.config/key-validator-tui/key-validator-tui.log
//!         API Key 在日志中只以掩码形式出现。
//!

mod logger;
mod terminal;

pub use logger::init_logger;
pub use terminal::{init_terminal, restore_terminal, Term};
