//! 路径查找器

use crate::graph::Graph;
use crate::types::Label;

/// 路径查找器
///
/// 借用图的当前快照；每次查询都是独立的计算，不在调用之间保留状态。
pub struct PathFinder<'a, T: Label> {
    pub(super) graph: &'a Graph<T>,
}

impl<'a, T: Label> PathFinder<'a, T> {
    /// 创建路径查找器
    pub fn new(graph: &'a Graph<T>) -> Self {
        Self { graph }
    }
}
