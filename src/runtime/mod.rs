//! 异步运行时 - 文件读取与目录加载

mod async_runtime;
mod message;

pub use async_runtime::AsyncRuntime;
pub use message::AppMessage;
