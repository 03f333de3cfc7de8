//! 日志初始化
//!
//! 日志写到 stderr，`RUST_LOG` 或 `PATHGRAPH_LOG` 可覆盖默认级别

use crate::error::{Error, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 初始化全局 tracing 订阅者（只应调用一次）
pub fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "pathgraph=debug" } else { "pathgraph=warn" };
    init_with_filter(level)
}

fn init_with_filter(default: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("PATHGRAPH_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .map_err(|e| Error::ConfigError(format!("日志初始化失败: {}", e)))
}
