//! 顶点定义
//!
//! 顶点只保存边 ID，边记录本身存放在图的边表中

use crate::graph::edge::EdgeId;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// 邻接边列表（大多数顶点度数很小，内联存储）
type EdgeList = SmallVec<[EdgeId; 4]>;

/// 顶点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex<T> {
    /// 顶点标签
    label: T,
    /// 出边（本顶点为起点），按插入顺序
    outgoing: EdgeList,
    /// 入边（本顶点为终点），按插入顺序
    incoming: EdgeList,
}

impl<T> Vertex<T> {
    /// 创建没有任何边的顶点
    pub fn new(label: T) -> Self {
        Self {
            label,
            outgoing: EdgeList::new(),
            incoming: EdgeList::new(),
        }
    }

    /// 获取顶点标签
    pub fn label(&self) -> &T {
        &self.label
    }

    /// 出边 ID
    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }

    /// 入边 ID
    pub fn incoming(&self) -> &[EdgeId] {
        &self.incoming
    }

    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }

    pub(crate) fn push_outgoing(&mut self, id: EdgeId) {
        self.outgoing.push(id);
    }

    pub(crate) fn push_incoming(&mut self, id: EdgeId) {
        self.incoming.push(id);
    }

    /// 移除出边和入边中满足条件的边 ID
    pub(crate) fn retain_edges<F>(&mut self, mut keep: F)
    where
        F: FnMut(EdgeId) -> bool,
    {
        self.outgoing.retain(|id| keep(*id));
        self.incoming.retain(|id| keep(*id));
    }
}
