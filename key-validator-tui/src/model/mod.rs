//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         pub mod state;      // 表单数据状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub language: Language,             // 界面语言
//!             pub theme: Theme,                   // 界面主题
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!             pub validator: ValidatorState,      // 校验表单状态
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、校验表单状态（ValidatorState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/state/validator.rs 中定义，字段彼此独立：
//!
//!         credential: String                  // 输入框内容
//!         account: Option<AccountSummary>     // 最近一次成功结果
//!         error: Option<String>               // 最近一次错误消息
//!         busy: bool                          // 请求进行中
//!
//!     Idle / Loading / Success / Failure 四个阶段由 phase() 推导，不单独存储。
//!
//!     生命周期：
//!         提交           → busy = true, error = None（account 保留）
//!         请求结束       → busy = false，再写入 account 或 error
//!         编辑输入       → 只改 credential，不清除任何结果
//!

mod app;
pub mod state;

pub use app::App;
pub use state::{ValidatorState, ViewPhase};
