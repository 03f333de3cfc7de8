//! 图数据结构
//!
//! 顶点按标签索引并保持插入顺序；边记录只存一份（边表），
//! 全局边序列和各顶点的出入边列表都只保存边 ID。

use super::edge::{Edge, EdgeId};
use super::vertex::Vertex;
use crate::algorithm::{PathFinder, PathResult};
use crate::error::{Error, Result};
use crate::types::{Label, Weight};
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// 有向带权图
#[derive(Debug, Clone)]
pub struct Graph<T: Label> {
    /// 标签 -> 顶点（迭代顺序即插入顺序）
    vertices: IndexMap<T, Vertex<T>>,
    /// 边表
    edge_table: HashMap<EdgeId, Edge<T>>,
    /// 全局边序列（插入顺序）
    edge_order: Vec<EdgeId>,
    /// 下一个边 ID
    next_edge_id: u64,
}

impl<T: Label> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Label> Graph<T> {
    /// 创建空图
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// 预分配顶点和边的容量
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: IndexMap::with_capacity(vertices),
            edge_table: HashMap::with_capacity(edges),
            edge_order: Vec::with_capacity(edges),
            next_edge_id: 1,
        }
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// 标签已存在时返回 `DuplicateVertex`，图保持不变。
    pub fn add_vertex(&mut self, label: T) -> Result<()> {
        if self.vertices.contains_key(&label) {
            warn!(label = ?label, "顶点已存在，忽略添加");
            return Err(Error::duplicate_vertex(&label));
        }

        debug!(label = ?label, "添加顶点");
        self.vertices.insert(label.clone(), Vertex::new(label));
        Ok(())
    }

    /// 删除顶点，并级联删除所有以它为端点的边
    ///
    /// 顶点不存在时返回 `VertexNotFound`，图保持不变。
    pub fn remove_vertex(&mut self, label: &T) -> Result<()> {
        let Some(vertex) = self.vertices.get(label) else {
            warn!(label = ?label, "顶点不存在，无需删除");
            return Err(Error::vertex_not_found(label));
        };

        let doomed: HashSet<EdgeId> = vertex
            .outgoing()
            .iter()
            .chain(vertex.incoming())
            .copied()
            .collect();

        // 受影响的另一端顶点
        let mut touched = Vec::new();
        for id in &doomed {
            if let Some(edge) = self.edge_table.remove(id) {
                let other = if edge.start() == label {
                    edge.finish().clone()
                } else {
                    edge.start().clone()
                };
                if &other != label {
                    touched.push(other);
                }
            }
        }

        self.edge_order.retain(|id| !doomed.contains(id));
        for other in touched {
            if let Some(v) = self.vertices.get_mut(&other) {
                v.retain_edges(|id| !doomed.contains(&id));
            }
        }

        self.vertices.shift_remove(label);
        debug!(label = ?label, removed_edges = doomed.len(), "删除顶点");
        Ok(())
    }

    /// 是否包含顶点
    pub fn contains_vertex(&self, label: &T) -> bool {
        self.vertices.contains_key(label)
    }

    /// 获取顶点
    pub fn get_vertex(&self, label: &T) -> Option<&Vertex<T>> {
        self.vertices.get(label)
    }

    /// 所有顶点标签（插入顺序）
    pub fn vertices(&self) -> impl Iterator<Item = &T> + '_ {
        self.vertices.keys()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // ==================== 边操作 ====================

    /// 添加边
    ///
    /// 任一端点不存在时返回 `VertexNotFound` 并中止。允许重复的 (起点, 终点) 对。
    pub fn add_edge(&mut self, start: T, finish: T, weight: Weight) -> Result<EdgeId> {
        if !self.vertices.contains_key(&start) {
            return Err(Error::vertex_not_found(&start));
        }
        if !self.vertices.contains_key(&finish) {
            return Err(Error::vertex_not_found(&finish));
        }

        let id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;

        if let Some(v) = self.vertices.get_mut(&start) {
            v.push_outgoing(id);
        }
        if let Some(v) = self.vertices.get_mut(&finish) {
            v.push_incoming(id);
        }

        debug!(start = ?start, finish = ?finish, weight, edge = id.as_u64(), "添加边");
        self.edge_table.insert(id, Edge::new(id, start, finish, weight));
        self.edge_order.push(id);

        Ok(id)
    }

    /// 删除所有 start -> finish 的边，返回删除的数量
    pub fn remove_edge(&mut self, start: &T, finish: &T) -> usize {
        let doomed: HashSet<EdgeId> = match self.vertices.get(start) {
            Some(v) => v
                .outgoing()
                .iter()
                .copied()
                .filter(|id| {
                    self.edge_table
                        .get(id)
                        .is_some_and(|e| e.connects(start, finish))
                })
                .collect(),
            None => HashSet::new(),
        };

        if doomed.is_empty() {
            return 0;
        }

        for id in &doomed {
            self.edge_table.remove(id);
        }
        self.edge_order.retain(|id| !doomed.contains(id));
        if let Some(v) = self.vertices.get_mut(start) {
            v.retain_edges(|id| !doomed.contains(&id));
        }
        if let Some(v) = self.vertices.get_mut(finish) {
            v.retain_edges(|id| !doomed.contains(&id));
        }

        debug!(start = ?start, finish = ?finish, removed = doomed.len(), "删除边");
        doomed.len()
    }

    /// 获取边
    pub fn get_edge(&self, id: EdgeId) -> Option<&Edge<T>> {
        self.edge_table.get(&id)
    }

    /// 全局边序列（插入顺序）
    pub fn edges(&self) -> impl Iterator<Item = &Edge<T>> + '_ {
        self.edge_order
            .iter()
            .filter_map(move |id| self.edge_table.get(id))
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edge_order.len()
    }

    /// 获取顶点的所有出边
    pub fn outgoing_edges(&self, label: &T) -> Vec<&Edge<T>> {
        self.vertices
            .get(label)
            .map(|v| self.resolve(v.outgoing()))
            .unwrap_or_default()
    }

    /// 获取顶点的所有入边
    pub fn incoming_edges(&self, label: &T) -> Vec<&Edge<T>> {
        self.vertices
            .get(label)
            .map(|v| self.resolve(v.incoming()))
            .unwrap_or_default()
    }

    /// 获取两点之间的所有边（平行边）
    pub fn edges_between(&self, start: &T, finish: &T) -> Vec<&Edge<T>> {
        self.outgoing_edges(start)
            .into_iter()
            .filter(|e| e.finish() == finish)
            .collect()
    }

    fn resolve(&self, ids: &[EdgeId]) -> Vec<&Edge<T>> {
        ids.iter().filter_map(|id| self.edge_table.get(id)).collect()
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的邻居（出边指向的顶点，按边顺序，可能重复）
    pub fn neighbors(&self, label: &T) -> Vec<&T> {
        self.outgoing_edges(label)
            .into_iter()
            .map(|e| e.finish())
            .collect()
    }

    /// 获取顶点的前驱（入边来源的顶点）
    pub fn predecessors(&self, label: &T) -> Vec<&T> {
        self.incoming_edges(label)
            .into_iter()
            .map(|e| e.start())
            .collect()
    }

    /// 获取顶点的出度
    pub fn out_degree(&self, label: &T) -> usize {
        self.vertices.get(label).map_or(0, |v| v.out_degree())
    }

    /// 获取顶点的入度
    pub fn in_degree(&self, label: &T) -> usize {
        self.vertices.get(label).map_or(0, |v| v.in_degree())
    }

    /// 计算顶点路径的总权重（每一跳取最轻的平行边），某一跳无边时返回 None
    pub fn path_weight(&self, path: &[T]) -> Option<Weight> {
        path.windows(2).try_fold(0.0, |total, hop| {
            self.edges_between(&hop[0], &hop[1])
                .into_iter()
                .map(|e| e.weight())
                .min_by(|a, b| a.total_cmp(b))
                .map(|w| total + w)
        })
    }

    // ==================== 算法 ====================

    /// Dijkstra 最短路径
    pub fn shortest_path(&self, start: &T, finish: &T) -> PathResult<T> {
        PathFinder::new(self).shortest_path(start, finish)
    }

    /// 深度优先遍历顺序（先序）
    pub fn depth_first_order(&self, start: &T) -> Vec<T> {
        PathFinder::new(self).depth_first_order(start)
    }

    /// 广度优先遍历顺序
    pub fn breadth_first_order(&self, start: &T) -> Vec<T> {
        PathFinder::new(self).breadth_first_order(start)
    }

    // ==================== 按位置访问（供算法使用） ====================

    /// 顶点在迭代顺序中的位置
    pub(crate) fn position_of(&self, label: &T) -> Option<usize> {
        self.vertices.get_index_of(label)
    }

    /// 指定位置的顶点标签
    pub(crate) fn label_at(&self, index: usize) -> Option<&T> {
        self.vertices.get_index(index).map(|(label, _)| label)
    }

    /// 指定位置顶点的后继：(后继位置, 边权重)，按出边插入顺序
    pub(crate) fn successors_at(&self, index: usize) -> Vec<(usize, Weight)> {
        let Some((_, vertex)) = self.vertices.get_index(index) else {
            return Vec::new();
        };
        vertex
            .outgoing()
            .iter()
            .filter_map(|id| self.edge_table.get(id))
            .filter_map(|e| self.position_of(e.finish()).map(|pos| (pos, e.weight())))
            .collect()
    }
}
