//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘/粘贴等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长等待 timeout
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Paste(String)                // 括号粘贴，整段插入输入框
//!             Event::Resize(width, height)        // 终端窗口大小发生变化，重绘终端
//!
//!         常用键盘映射：
//!             Enter       → ValidatorMessage::Submit
//!             字符输入     → ValidatorMessage::Input(c)
//!             Backspace   → ValidatorMessage::Backspace
//!             Ctrl+U      → ValidatorMessage::Clear
//!             Alt+S       → ValidatorMessage::ToggleMask
//!             Alt+L       → AppMessage::ToggleLanguage
//!             Alt+T       → AppMessage::ToggleTheme
//!             Esc/Ctrl+C  → AppMessage::Quit
//!
//!     请求进行中按键照常翻译，是否忽略由 Update 层决定。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::DefaultKeymap;
