//! PathGraph 服务器入口
//!
//! 启动 HTTP API 服务器

use anyhow::Context;
use clap::Parser;
use parking_lot::RwLock;
use pathgraph::graph::Graph;
use pathgraph::import::GraphImporter;
use pathgraph::logging::init_logging;
use pathgraph::server::{start_server, ServerConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "pathgraph-server")]
#[command(about = "PathGraph HTTP API 服务器")]
struct Args {
    /// 启动时导入的图文件
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// 监听地址
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// 监听端口
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let graph = match &args.file {
        Some(path) => {
            let (graph, stats) = GraphImporter::new()
                .import_file::<String, _>(path)
                .with_context(|| format!("无法导入图文件 {}", path.display()))?;
            info!(
                vertices = stats.vertices_imported,
                edges = stats.edges_imported,
                errors = stats.errors,
                "图已加载"
            );
            graph
        }
        None => Graph::new(),
    };

    let config = ServerConfig {
        host: args.host,
        port: args.port,
    };

    start_server(config, Arc::new(RwLock::new(graph))).await?;

    Ok(())
}
