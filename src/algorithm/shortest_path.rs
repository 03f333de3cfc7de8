//! Dijkstra 最短路径
//!
//! 最小堆前沿 + 惰性删除：松弛时只压入新条目，旧条目在弹出时
//! 通过与当前最优距离比较来识别并跳过。

use super::PathFinder;
use crate::types::{truncate_distance, Label, Weight, UNREACHABLE};
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use tracing::{debug, trace, warn};

/// 最短路径结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult<T> {
    /// 每个顶点一个距离，顺序与图的顶点迭代顺序一致；-1 表示不可达
    distances: Vec<i64>,
    /// 起点到终点（含两端）的顶点序列；不可达时为空
    path: Vec<T>,
}

impl<T> PathResult<T> {
    pub fn new(distances: Vec<i64>, path: Vec<T>) -> Self {
        Self { distances, path }
    }

    /// 端点不存在时的结果：全部为 -1，路径为空
    fn absent(vertex_count: usize) -> Self {
        Self::new(vec![UNREACHABLE; vertex_count], Vec::new())
    }

    pub fn distances(&self) -> &[i64] {
        &self.distances
    }

    pub fn path(&self) -> &[T] {
        &self.path
    }

    /// 是否找到了路径
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn into_parts(self) -> (Vec<i64>, Vec<T>) {
        (self.distances, self.path)
    }
}

/// 前沿条目
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    distance: Weight,
    /// 插入序号，距离相同时先进先出
    seq: u64,
    vertex: usize,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// 最小堆前沿
struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    next_seq: u64,
}

impl Frontier {
    fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    fn push(&mut self, vertex: usize, distance: Weight) {
        self.heap.push(Reverse(FrontierEntry {
            distance,
            seq: self.next_seq,
            vertex,
        }));
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }
}

impl<'a, T: Label> PathFinder<'a, T> {
    /// Dijkstra 最短路径
    ///
    /// 任一端点不存在时返回全 -1 的距离表和空路径（不是错误）。
    /// 取出终点后立即停止，未确定的顶点报告其暂定距离。
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn shortest_path(&self, start: &T, finish: &T) -> PathResult<T> {
        let n = self.graph.vertex_count();
        let (Some(source), Some(target)) =
            (self.graph.position_of(start), self.graph.position_of(finish))
        else {
            warn!("最短路径查询的端点不存在");
            return PathResult::absent(n);
        };

        let mut dist = vec![Weight::INFINITY; n];
        let mut prev: Vec<Option<usize>> = vec![None; n];
        let mut frontier = Frontier::new();

        dist[source] = 0.0;
        frontier.push(source, 0.0);

        let mut settled = 0usize;
        while let Some(entry) = frontier.pop() {
            if entry.distance > dist[entry.vertex] {
                trace!(vertex = entry.vertex, "跳过过期的前沿条目");
                continue;
            }
            settled += 1;
            if entry.vertex == target {
                break;
            }

            for (next, weight) in self.graph.successors_at(entry.vertex) {
                let alt = entry.distance + weight;
                if alt < dist[next] {
                    dist[next] = alt;
                    prev[next] = Some(entry.vertex);
                    frontier.push(next, alt);
                }
            }
        }

        let distances: Vec<i64> = dist.iter().map(|&d| truncate_distance(d)).collect();
        let path = if dist[target].is_finite() {
            self.reconstruct_path(source, target, &prev)
        } else {
            Vec::new()
        };

        debug!(settled, hops = path.len().saturating_sub(1), "最短路径查询完成");
        PathResult::new(distances, path)
    }

    /// 沿前驱链从终点回溯到起点
    fn reconstruct_path(&self, source: usize, target: usize, prev: &[Option<usize>]) -> Vec<T> {
        let mut positions = vec![target];
        let mut current = target;

        while current != source {
            // 前驱链长度不可能超过顶点数，超过说明存在负权环
            if positions.len() > prev.len() {
                return Vec::new();
            }
            match prev[current] {
                Some(p) => {
                    positions.push(p);
                    current = p;
                }
                None => return Vec::new(),
            }
        }

        positions
            .iter()
            .rev()
            .filter_map(|&pos| self.graph.label_at(pos).cloned())
            .collect()
    }
}
