//! 图算法模块
//!
//! 包含 Dijkstra 最短路径以及深度/广度优先遍历

mod path_finder;
mod shortest_path;
mod traversal;

pub use path_finder::PathFinder;
pub use shortest_path::PathResult;
