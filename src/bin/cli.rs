//! PathGraph CLI 工具
//!
//! 交互式命令行界面

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use pathgraph::cli::{CommandResult, Console};
use pathgraph::import::GraphImporter;
use pathgraph::logging::init_logging;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pathgraph-cli")]
#[command(about = "PathGraph 命令行工具")]
struct Args {
    /// 启动时导入的图文件
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// 执行单个命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let mut console = match &args.file {
        Some(path) => {
            let (graph, stats) = GraphImporter::new()
                .import_file::<String, _>(path)
                .with_context(|| format!("无法导入图文件 {}", path.display()))?;
            println!(
                "已导入 {}: 顶点 {}，边 {}，错误 {}",
                path.display(),
                stats.vertices_imported,
                stats.edges_imported,
                stats.errors
            );
            Console::with_graph(graph)
        }
        None => Console::new(),
    };

    // 单个命令模式
    if let Some(command) = args.execute {
        return match console.execute(&command) {
            CommandResult::Error(e) => Err(anyhow::anyhow!(e)),
            result => {
                report(result);
                Ok(())
            }
        };
    }

    println!("PathGraph CLI - 有向带权图");
    println!("输入 'help' 查看命令列表，'quit' 退出\n");

    let stdin = io::stdin();
    loop {
        print!("{}", "pathgraph> ".cyan());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match console.execute(line.trim()) {
            CommandResult::Exit => break,
            result => report(result),
        }
    }

    println!("再见！");
    Ok(())
}

fn report(result: CommandResult) {
    match result {
        CommandResult::Message(msg) => println!("{}", msg.trim_end()),
        CommandResult::Error(e) => println!("{} {}", "错误:".red().bold(), e),
        CommandResult::Continue | CommandResult::Exit => {}
    }
}
