//! PathGraph - 以标签为键的有向带权图
//!
//! 提供：
//! - 顶点/边的增删（删除顶点时级联删除相关边）
//! - Dijkstra 单源最短路径（含路径回溯）
//! - 深度优先与广度优先遍历
//! - 逗号分隔文本格式的图导入
//!
//! ```
//! use pathgraph::Graph;
//!
//! let mut graph = Graph::new();
//! for v in 0..3 {
//!     graph.add_vertex(v).unwrap();
//! }
//! graph.add_edge(0, 1, 4.0).unwrap();
//! graph.add_edge(1, 2, 1.0).unwrap();
//! graph.add_edge(0, 2, 9.0).unwrap();
//!
//! let result = graph.shortest_path(&0, &2);
//! assert_eq!(result.distances(), &[0, 4, 5]);
//! assert_eq!(result.path(), &[0, 1, 2]);
//! assert_eq!(graph.breadth_first_order(&0), vec![0, 1, 2]);
//! ```

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;
pub mod logging;
pub mod server;
pub mod types;

// 重导出常用类型
pub use algorithm::{PathFinder, PathResult};
pub use error::{Error, Result};
pub use graph::{Edge, EdgeId, Graph, Vertex};
pub use import::{GraphImporter, ImportStats};
pub use types::{Label, Weight, UNREACHABLE};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
