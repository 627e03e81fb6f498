//! 随机操作序列下的图不变量检查

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use wgraph::{ConnectOutcome, VertexId, WeightedGraph};

const MAX_ID: i64 = 24;

/// 检查邻居集合、边表与计数三者一致
fn assert_consistent(g: &WeightedGraph) {
    let mut from_edges = HashSet::new();
    for e in g.edges() {
        assert!(e.a < e.b, "边端点未规范化: {:?}", e);
        assert!(from_edges.insert((e.a, e.b)));
    }
    assert_eq!(g.edge_count(), from_edges.len());

    let mut from_neighbors = HashSet::new();
    for v in g.all_vertices() {
        let ids: HashSet<VertexId> = v.neighbor_ids().collect();
        let resolved: HashSet<VertexId> = g
            .get_neighbors(v.id().into())
            .expect("顶点必须可查询邻居")
            .iter()
            .map(|n| n.id())
            .collect();
        assert_eq!(ids, resolved, "邻居视图与邻居 ID 不一致");
        assert_eq!(resolved.len(), v.degree());

        for n in v.neighbor_ids() {
            assert_ne!(n, v.id(), "出现自环");
            let other = g.get_node(n.into()).expect("邻居必须在顶点表中");
            assert!(other.has_neighbor(v.id()), "邻居关系不对称");
            from_neighbors.insert((v.id().min(n), v.id().max(n)));
        }
    }
    assert_eq!(from_edges, from_neighbors);

    for a in 0..MAX_ID {
        for b in 0..MAX_ID {
            assert_eq!(g.has_edge(a, b), g.has_edge(b, a));
            assert_eq!(g.get_edge_weight(a, b), g.get_edge_weight(b, a));
        }
    }
}

#[test]
fn test_random_operations_keep_invariants() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut g = WeightedGraph::new();

    for _ in 0..2000 {
        let before = g.mod_count();
        let edges_before = g.edge_count();
        let a = rng.gen_range(0..MAX_ID);
        let b = rng.gen_range(0..MAX_ID);

        match rng.gen_range(0..10) {
            0 | 1 => {
                let existed = g.contains_node(a);
                g.add_node(a).unwrap();
                let expected = if existed { before } else { before + 1 };
                assert_eq!(g.mod_count(), expected);
            }
            2..=5 => {
                let weight = rng.gen_range(-5.0..100.0);
                match g.connect(a, b, weight) {
                    Ok(ConnectOutcome::Created) => {
                        assert_eq!(g.edge_count(), edges_before + 1);
                        assert_eq!(g.mod_count(), before + 1);
                    }
                    Ok(ConnectOutcome::Reweighted) => {
                        assert_eq!(g.edge_count(), edges_before);
                        assert_eq!(g.mod_count(), before + 1);
                    }
                    Ok(ConnectOutcome::Ignored) => {
                        assert_eq!(a, b);
                        assert_eq!(g.mod_count(), before);
                    }
                    Err(e) => {
                        assert!(e.is_not_found());
                        assert_eq!(g.mod_count(), before);
                        continue;
                    }
                }
                if a != b {
                    assert_eq!(g.get_edge_weight(b, a), Some(weight));
                }
            }
            6 | 7 => {
                let removed = g.remove_edge(a, b).unwrap();
                let delta = removed.map(|_| 1).unwrap_or(0);
                assert_eq!(g.edge_count(), edges_before - delta);
                assert_eq!(g.mod_count(), before + delta as u64);
                assert!(!g.has_edge(a, b));
            }
            _ => {
                let degree = g.degree(a);
                match g.remove_node(a) {
                    Some(v) => {
                        let k = degree.unwrap();
                        assert_eq!(i64::from(v.id()), a);
                        assert_eq!(g.edge_count(), edges_before - k);
                        assert_eq!(g.mod_count(), before + k as u64 + 1);
                        assert!(g.all_vertices().all(|o| !o.has_neighbor(v.id())));
                    }
                    None => {
                        assert!(degree.is_none());
                        assert_eq!(g.mod_count(), before);
                    }
                }
            }
        }

        assert!(g.mod_count() >= before);
        assert_consistent(&g);
    }
}

#[test]
fn test_cascade_removes_hub() {
    let mut g = WeightedGraph::new();
    g.add_node(0).unwrap();
    for id in 1..=10 {
        g.add_node(id).unwrap();
        g.connect(0, id, id as f64).unwrap();
    }
    g.connect(1, 2, 0.5).unwrap();
    assert_eq!(g.edge_count(), 11);

    let mc = g.mod_count();
    let hub = g.remove_node(0).unwrap();
    assert_eq!(hub.to_string(), "{key=0}");
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.mod_count(), mc + 11);
    for id in 1..=10 {
        assert!(!g.has_edge(0, id));
        assert!(g.get_neighbors(id).unwrap().iter().all(|v| v.id().as_u32() != 0));
    }
    assert_consistent(&g);
}

#[test]
fn test_stamp_detects_interleaved_mutation() {
    let mut g = WeightedGraph::new();
    for id in 0..4 {
        g.add_node(id).unwrap();
    }
    g.connect(0, 1, 1.0).unwrap();
    g.connect(0, 2, 2.0).unwrap();

    // 收集邻居后更新暂存字段，不属于结构性修改
    let stamp = g.stamp();
    let ids: Vec<i64> = g.neighbor_ids(0).map(i64::from).collect();
    for id in &ids {
        let w = g.get_edge_weight(0, *id).unwrap();
        g.get_node_mut(*id).unwrap().set_tag(w).set_info(Some("0".into()));
    }
    assert!(g.check_stamp(stamp).is_ok());

    g.connect(2, 3, 4.0).unwrap();
    assert!(g.check_stamp(stamp).is_err());
}
