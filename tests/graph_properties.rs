//! 随机图上的性质测试：与朴素参考实现对照

use pathgraph::{Graph, UNREACHABLE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, HashSet, VecDeque};

const SEEDS: u64 = 40;

fn random_graph(rng: &mut StdRng) -> Graph<u32> {
    let n = rng.gen_range(1..=12u32);
    let mut graph = Graph::new();
    for v in 0..n {
        graph.add_vertex(v).unwrap();
    }
    let m = rng.gen_range(0..=n * 3);
    for _ in 0..m {
        let s = rng.gen_range(0..n);
        let f = rng.gen_range(0..n);
        // 半整数权重在二进制下精确，求和与顺序无关
        let w = rng.gen_range(0..=20u32) as f64 / 2.0;
        graph.add_edge(s, f, w).unwrap();
    }
    graph
}

/// Bellman-Ford 参考距离
fn reference_distances(graph: &Graph<u32>, source: u32) -> HashMap<u32, f64> {
    let mut dist: HashMap<u32, f64> = graph.vertices().map(|&v| (v, f64::INFINITY)).collect();
    dist.insert(source, 0.0);
    for _ in 0..graph.vertex_count() {
        for e in graph.edges() {
            let alt = dist[e.start()] + e.weight();
            if alt < dist[e.finish()] {
                dist.insert(*e.finish(), alt);
            }
        }
    }
    dist
}

fn reachable(graph: &Graph<u32>, source: u32) -> HashMap<u32, usize> {
    let mut hops = HashMap::from([(source, 0)]);
    let mut queue = VecDeque::from([source]);
    while let Some(v) = queue.pop_front() {
        for &n in graph.neighbors(&v) {
            if !hops.contains_key(&n) {
                hops.insert(n, hops[&v] + 1);
                queue.push_back(n);
            }
        }
    }
    hops
}

fn recursive_dfs(graph: &Graph<u32>, v: u32, visited: &mut Vec<u32>) {
    visited.push(v);
    for &n in graph.neighbors(&v) {
        if !visited.contains(&n) {
            recursive_dfs(graph, n, visited);
        }
    }
}

#[test]
fn shortest_paths_match_reference() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_graph(&mut rng);
        let labels: Vec<u32> = graph.vertices().copied().collect();

        for &s in &labels {
            let reference = reference_distances(&graph, s);
            for (fi, &f) in labels.iter().enumerate() {
                let result = graph.shortest_path(&s, &f);
                assert_eq!(result.distances().len(), labels.len());

                let expected = reference[&f];
                if expected.is_infinite() {
                    assert_eq!(result.distances()[fi], UNREACHABLE, "seed {seed}: {s}->{f}");
                    assert!(result.path().is_empty());
                    continue;
                }

                assert_eq!(result.distances()[fi], expected.trunc() as i64, "seed {seed}: {s}->{f}");
                assert_eq!(result.path().first(), Some(&s));
                assert_eq!(result.path().last(), Some(&f));
                assert_eq!(graph.path_weight(result.path()), Some(expected));
            }
        }
    }
}

#[test]
fn missing_endpoints_yield_sentinels() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_graph(&mut rng);

        let result = graph.shortest_path(&0, &999);
        assert_eq!(result.distances(), vec![UNREACHABLE; graph.vertex_count()].as_slice());
        assert!(result.path().is_empty());

        let result = graph.shortest_path(&999, &0);
        assert!(result.distances().iter().all(|&d| d == UNREACHABLE));
        assert!(result.path().is_empty());
    }
}

#[test]
fn traversals_visit_reachable_vertices_once() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_graph(&mut rng);

        for &s in graph.vertices() {
            let hops = reachable(&graph, s);
            let expected: HashSet<u32> = hops.keys().copied().collect();

            let dfs = graph.depth_first_order(&s);
            let bfs = graph.breadth_first_order(&s);

            for order in [&dfs, &bfs] {
                assert_eq!(order.first(), Some(&s));
                assert_eq!(order.len(), expected.len());
                assert_eq!(order.iter().copied().collect::<HashSet<_>>(), expected);
            }

            // BFS 按跳数非递减
            assert!(bfs.windows(2).all(|w| hops[&w[0]] <= hops[&w[1]]));

            // 显式栈 DFS 与递归写法顺序一致
            let mut recursive = Vec::new();
            recursive_dfs(&graph, s, &mut recursive);
            assert_eq!(dfs, recursive, "seed {seed}: dfs from {s}");
        }
    }
}

#[test]
fn queries_are_idempotent() {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = random_graph(&mut rng);
    let before = graph.clone();

    for &s in graph.vertices() {
        assert!(graph.contains_vertex(&s));
        assert_eq!(graph.shortest_path(&s, &0), graph.shortest_path(&s, &0));
        assert_eq!(graph.depth_first_order(&s), graph.depth_first_order(&s));
        assert_eq!(graph.breadth_first_order(&s), graph.breadth_first_order(&s));
    }

    assert_eq!(graph.vertex_count(), before.vertex_count());
    assert_eq!(graph.edge_count(), before.edge_count());
}

#[test]
fn removal_cascade_keeps_lists_consistent() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut graph = random_graph(&mut rng);
        let labels: Vec<u32> = graph.vertices().copied().collect();

        for &x in labels.iter().step_by(2) {
            graph.remove_vertex(&x).unwrap();

            assert!(!graph.contains_vertex(&x));
            assert!(graph.edges().all(|e| !e.touches(&x)));

            // 全局边表中的每条边恰好出现在起点的出边和终点的入边中
            let out_total: usize = graph.vertices().map(|v| graph.out_degree(v)).sum();
            let in_total: usize = graph.vertices().map(|v| graph.in_degree(v)).sum();
            assert_eq!(out_total, graph.edge_count());
            assert_eq!(in_total, graph.edge_count());
            for e in graph.edges() {
                let start = graph.get_vertex(e.start()).unwrap();
                let finish = graph.get_vertex(e.finish()).unwrap();
                assert_eq!(start.outgoing().iter().filter(|&&id| id == e.id()).count(), 1);
                assert_eq!(finish.incoming().iter().filter(|&&id| id == e.id()).count(), 1);
            }
        }
    }
}
