//! 边定义
//!
//! 有向带权边，保存端点标签的副本而不是顶点引用

use crate::types::Weight;
use serde::{Deserialize, Serialize};

/// 边 ID（图内唯一，删除后不复用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// 边
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<T> {
    /// 边 ID
    id: EdgeId,
    /// 起点标签
    start: T,
    /// 终点标签
    finish: T,
    /// 权重
    weight: Weight,
}

impl<T> Edge<T> {
    /// 创建新边
    pub fn new(id: EdgeId, start: T, finish: T, weight: Weight) -> Self {
        Self {
            id,
            start,
            finish,
            weight,
        }
    }

    /// 获取边 ID
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// 获取起点标签
    pub fn start(&self) -> &T {
        &self.start
    }

    /// 获取终点标签
    pub fn finish(&self) -> &T {
        &self.finish
    }

    /// 获取权重
    pub fn weight(&self) -> Weight {
        self.weight
    }
}

impl<T: PartialEq> Edge<T> {
    /// 是否连接给定的有向端点对
    pub fn connects(&self, start: &T, finish: &T) -> bool {
        &self.start == start && &self.finish == finish
    }

    /// 是否以给定标签为任一端点
    pub fn touches(&self, label: &T) -> bool {
        &self.start == label || &self.finish == label
    }
}
