//! hview - 终端 HTML 文件暂存与预览器
//!
//! 模块结构：
//! - kernel: 状态内核（Registry, Store, Action, Effect）
//! - runtime: 异步运行时（文件读取、目录加载）
//! - app: 应用层（输入分发、渲染）
//! - tui: 终端适配（事件转换、终端生命周期）

pub mod app;
pub mod kernel;
pub mod logging;
pub mod runtime;
pub mod settings;
pub mod tui;
