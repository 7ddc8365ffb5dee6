//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 所有的用户操作和后台结果都通过 Message 来表达，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage：主消息
//!         mod validator;      // ValidatorMessage：表单子消息
//!
//!
//!     消息来源有两个：
//!         - src/event/handler.rs 把按键、粘贴翻译成消息
//!         - src/backend/validation_service.rs 在请求结束时发送
//!           AppMessage::Validator(ValidatorMessage::Finished { .. })
//!
//!     两者都在 src/app.rs 的主循环中交给 update::update 处理。
//!

mod app;
mod validator;

pub use app::AppMessage;
pub use validator::{ValidationOutcome, ValidatorMessage};
