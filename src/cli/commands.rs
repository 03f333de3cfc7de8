//! 控制台命令处理

use super::printer::Printer;
use crate::graph::Graph;
use crate::import::GraphImporter;
use crate::types::Weight;
use tracing::debug;

/// 控制台命令执行结果
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// 继续运行（无输出）
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 控制台：持有一张以字符串为标签的图
#[derive(Default)]
pub struct Console {
    graph: Graph<String>,
    printer: Printer,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用已有的图创建控制台
    pub fn with_graph(graph: Graph<String>) -> Self {
        Self {
            graph,
            printer: Printer::new(),
        }
    }

    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// 执行一行命令
    pub fn execute(&mut self, input: &str) -> CommandResult {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some((cmd, args)) = parts.split_first() else {
            return CommandResult::Continue;
        };
        debug!(command = %cmd, ?args, "执行命令");

        match cmd.to_lowercase().as_str() {
            "quit" | "exit" | "q" => CommandResult::Exit,

            "help" | "h" | "?" => CommandResult::Message(Printer::print_help()),

            "stats" | "info" => CommandResult::Message(
                self.printer
                    .print_stats(self.graph.vertex_count(), self.graph.edge_count()),
            ),

            "show" => CommandResult::Message(self.printer.print_graph(&self.graph)),

            "clear" => {
                self.graph = Graph::new();
                CommandResult::Message("图已清空".to_string())
            }

            "vertex" | "v" => self.vertex_command(args),

            "edge" | "e" => self.edge_command(args),

            "has" => match args {
                [label] => {
                    let found = self.graph.contains_vertex(&label.to_string());
                    CommandResult::Message(format!("{}: {}", label, if found { "存在" } else { "不存在" }))
                }
                _ => usage("has <标签>"),
            },

            "path" | "shortest" => match args {
                [start, finish] => {
                    let labels: Vec<String> = self.graph.vertices().cloned().collect();
                    let result = self
                        .graph
                        .shortest_path(&start.to_string(), &finish.to_string());
                    CommandResult::Message(self.printer.print_path(&labels, &result))
                }
                _ => usage("path <起点> <终点>"),
            },

            "dfs" => match args {
                [start] => self.traversal("DFS", start, Graph::<String>::depth_first_order),
                _ => usage("dfs <起点>"),
            },

            "bfs" => match args {
                [start] => self.traversal("BFS", start, Graph::<String>::breadth_first_order),
                _ => usage("bfs <起点>"),
            },

            "load" => match args {
                [path] => self.load(path),
                _ => usage("load <文件>"),
            },

            other => CommandResult::Error(format!("未知命令: {}，输入 help 查看帮助", other)),
        }
    }

    fn vertex_command(&mut self, args: &[&str]) -> CommandResult {
        match args {
            ["add", label] => match self.graph.add_vertex(label.to_string()) {
                Ok(()) => CommandResult::Message(format!("已添加顶点 {}", label)),
                Err(e) => CommandResult::Error(e.to_string()),
            },
            ["remove" | "rm", label] => match self.graph.remove_vertex(&label.to_string()) {
                Ok(()) => CommandResult::Message(format!("已删除顶点 {}", label)),
                Err(e) => CommandResult::Error(e.to_string()),
            },
            _ => usage("vertex add|remove <标签>"),
        }
    }

    fn edge_command(&mut self, args: &[&str]) -> CommandResult {
        match args {
            ["add", start, finish, weight] => {
                let Ok(weight) = weight.parse::<Weight>() else {
                    return CommandResult::Error(format!("无效的权重: {}", weight));
                };
                match self
                    .graph
                    .add_edge(start.to_string(), finish.to_string(), weight)
                {
                    Ok(_) => CommandResult::Message(format!(
                        "已添加边 {} -> {} ({})",
                        start, finish, weight
                    )),
                    Err(e) => CommandResult::Error(e.to_string()),
                }
            }
            ["remove" | "rm", start, finish] => {
                let removed = self
                    .graph
                    .remove_edge(&start.to_string(), &finish.to_string());
                CommandResult::Message(format!("已删除 {} 条边", removed))
            }
            _ => usage("edge add <起点> <终点> <权重> | edge remove <起点> <终点>"),
        }
    }

    fn traversal(
        &self,
        name: &str,
        start: &str,
        order: fn(&Graph<String>, &String) -> Vec<String>,
    ) -> CommandResult {
        let start = start.to_string();
        if !self.graph.contains_vertex(&start) {
            return CommandResult::Error(format!("{}: 顶点 {} 不存在", name, start));
        }
        CommandResult::Message(self.printer.print_order(name, &order(&self.graph, &start)))
    }

    fn load(&mut self, path: &str) -> CommandResult {
        match GraphImporter::new().import_file::<String, _>(path) {
            Ok((graph, stats)) => {
                self.graph = graph;
                CommandResult::Message(format!(
                    "导入完成: 顶点 {}，边 {}，错误 {}，耗时 {} ms",
                    stats.vertices_imported, stats.edges_imported, stats.errors, stats.duration_ms
                ))
            }
            Err(e) => CommandResult::Error(e.to_string()),
        }
    }
}

fn usage(text: &str) -> CommandResult {
    CommandResult::Error(format!("用法: {}", text))
}
