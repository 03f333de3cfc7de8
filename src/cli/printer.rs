//! 结果打印器
//!
//! 把最短路径、遍历顺序和图内容格式化为表格文本

use crate::algorithm::PathResult;
use crate::graph::Graph;
use crate::types::{Label, UNREACHABLE};
use prettytable::{format, row, Table};
use std::fmt::Display;

/// 结果打印器
#[derive(Default)]
pub struct Printer;

impl Printer {
    pub fn new() -> Self {
        Self
    }

    fn table() -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table
    }

    /// 打印最短路径结果：距离表 + 路径
    ///
    /// `labels` 必须与结果的距离表顺序一致（即查询时图的顶点顺序）。
    pub fn print_path<T: Label + Display>(&self, labels: &[T], result: &PathResult<T>) -> String {
        let mut table = Self::table();
        table.set_titles(row!["Vertex", "Distance"]);
        for (label, distance) in labels.iter().zip(result.distances()) {
            let shown = if *distance == UNREACHABLE {
                "∞".to_string()
            } else {
                distance.to_string()
            };
            table.add_row(row![label.to_string(), shown]);
        }

        let mut output = table.to_string();
        if result.is_reachable() {
            output.push_str(&format!("路径: {}\n", join(result.path(), " -> ")));
        } else {
            output.push_str("路径不存在\n");
        }
        output
    }

    /// 打印遍历顺序
    pub fn print_order<T: Display>(&self, name: &str, order: &[T]) -> String {
        if order.is_empty() {
            return format!("{} 顺序: (空)\n", name);
        }
        format!("{} 顺序: {}\n", name, join(order, " "))
    }

    /// 打印图的所有顶点和边
    pub fn print_graph<T: Label + Display>(&self, graph: &Graph<T>) -> String {
        let mut output = format!(
            "顶点 ({}): {}\n",
            graph.vertex_count(),
            join(&graph.vertices().collect::<Vec<_>>(), ", ")
        );

        if graph.edge_count() == 0 {
            output.push_str("边: (无)\n");
            return output;
        }

        let mut table = Self::table();
        table.set_titles(row!["Start", "Finish", "Weight"]);
        for edge in graph.edges() {
            table.add_row(row![
                edge.start().to_string(),
                edge.finish().to_string(),
                edge.weight().to_string()
            ]);
        }
        output.push_str(&table.to_string());
        output
    }

    /// 打印统计信息
    pub fn print_stats(&self, vertex_count: usize, edge_count: usize) -> String {
        let mut table = Self::table();
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", vertex_count.to_string()]);
        table.add_row(row!["Edge Count", edge_count.to_string()]);
        table.to_string()
    }

    /// 打印帮助信息
    pub fn print_help() -> String {
        r#"
═══════════════════════════════════════════════════════════════
                   PathGraph CLI 命令帮助
═══════════════════════════════════════════════════════════════

基础命令:
  help, h, ?                 显示帮助
  quit, exit, q              退出程序
  stats, info                显示图统计信息
  show                       列出所有顶点和边
  clear                      清空图

图编辑:
  vertex add <标签>          添加顶点
  vertex remove <标签>       删除顶点（级联删除相关边）
  edge add <起点> <终点> <权重>
                             添加有向边
  edge remove <起点> <终点>  删除两点间所有有向边
  has <标签>                 检查顶点是否存在
  load <文件>                从文件导入（第一行顶点，其余每行 起点,终点,权重）

算法:
  path <起点> <终点>         Dijkstra 最短路径
  dfs <起点>                 深度优先遍历
  bfs <起点>                 广度优先遍历

═══════════════════════════════════════════════════════════════
"#
        .to_string()
    }
}

fn join<T: Display>(items: &[T], sep: &str) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}
