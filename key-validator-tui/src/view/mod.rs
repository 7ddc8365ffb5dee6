//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + 内容区 + 状态栏
//!         mod components;     // 通用组件（状态栏）
//!         mod pages;          // 页面（校验表单）
//!         pub mod theme;      // 主题与样式
//!
//!
//!     主布局：
//!
//!         ┌──────────────────────────────────────────┐
//!         │ Key Validator v0.1.0                     │  ← 标题栏
//!         ├──────────────────────────────────────────┤
//!         │ ┌ SiliconFlow API Key Validator ───────┐ │
//!         │ │ API Key                              │ │
//!         │ │ ┌──────────────────────────────────┐ │ │  ← 输入框
//!         │ │ └──────────────────────────────────┘ │ │
//!         │ │  Validate Key                        │ │  ← 按钮
//!         │ │ ┌ Error ───────────────────────────┐ │ │  ← 仅在 error 存在时
//!         │ │ ┌ User Information ────────────────┐ │ │  ← 仅在 account 存在时
//!         │ └──────────────────────────────────────┘ │
//!         ├──────────────────────────────────────────┤
//!         │ Enter Validate │ Ctrl+U Clear │ ...      │  ← 状态栏
//!         └──────────────────────────────────────────┘
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
