//! 深度优先与广度优先遍历

use super::PathFinder;
use crate::types::Label;
use std::collections::VecDeque;
use tracing::{debug, warn};

/// 深度优先遍历的显式栈帧：一个顶点的后继以及下一个待检查的位置
struct Frame {
    successors: Vec<usize>,
    cursor: usize,
}

impl Frame {
    fn next(&mut self) -> Option<usize> {
        let next = self.successors.get(self.cursor).copied();
        self.cursor += 1;
        next
    }
}

impl<'a, T: Label> PathFinder<'a, T> {
    /// 深度优先遍历（先序）
    ///
    /// 按出边插入顺序深入未访问的邻居，结果与递归写法完全一致，
    /// 但使用显式栈，不受调用栈深度限制。起点不存在时返回空序列。
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn depth_first_order(&self, start: &T) -> Vec<T> {
        let Some(source) = self.graph.position_of(start) else {
            warn!("DFS 起点不存在");
            return Vec::new();
        };

        let mut visited = vec![false; self.graph.vertex_count()];
        let mut order = Vec::new();
        let mut stack = Vec::new();

        self.visit(source, &mut visited, &mut order, &mut stack);

        loop {
            let next = match stack.last_mut() {
                Some(frame) => frame.next(),
                None => break,
            };
            match next {
                Some(v) if !visited[v] => self.visit(v, &mut visited, &mut order, &mut stack),
                Some(_) => {}
                None => {
                    stack.pop();
                }
            }
        }

        debug!(visited = order.len(), "DFS 完成");
        order
    }

    fn visit(&self, v: usize, visited: &mut [bool], order: &mut Vec<T>, stack: &mut Vec<Frame>) {
        visited[v] = true;
        if let Some(label) = self.graph.label_at(v) {
            order.push(label.clone());
        }
        stack.push(Frame {
            successors: self
                .graph
                .successors_at(v)
                .into_iter()
                .map(|(next, _)| next)
                .collect(),
            cursor: 0,
        });
    }

    /// 广度优先遍历
    ///
    /// 入队时即标记已访问，每个可达顶点恰好出现一次，按跳数非递减排列。
    /// 起点不存在时返回空序列。
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn breadth_first_order(&self, start: &T) -> Vec<T> {
        let Some(source) = self.graph.position_of(start) else {
            warn!("BFS 起点不存在");
            return Vec::new();
        };

        let mut visited = vec![false; self.graph.vertex_count()];
        let mut queue = VecDeque::new();
        let mut order = Vec::new();

        visited[source] = true;
        queue.push_back(source);

        while let Some(current) = queue.pop_front() {
            if let Some(label) = self.graph.label_at(current) {
                order.push(label.clone());
            }
            for (next, _) in self.graph.successors_at(current) {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }

        debug!(visited = order.len(), "BFS 完成");
        order
    }
}
