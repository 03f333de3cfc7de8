//! 交互式控制台
//!
//! 命令解析与结果格式化，供 `pathgraph-cli` 使用

mod commands;
mod printer;

pub use commands::{CommandResult, Console};
pub use printer::Printer;
