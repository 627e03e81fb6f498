//! WGraph 演示脚本
//!
//! 构建小图，演示重设权重、删边与级联删除顶点。
//! 使用 `RUST_LOG=wgraph=debug` 查看结构性修改日志。

use tracing_subscriber::EnvFilter;
use wgraph::{GraphConfig, WeightedGraph};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("WGraph 演示");
    println!("===========\n");

    let mut g = WeightedGraph::with_config(GraphConfig::new().with_capacity(8, 8));
    for id in [0, 1, 2, 12, 20] {
        g.add_node(id)?;
    }
    g.connect(0, 1, 10.0)?;
    g.connect(0, 2, 20.0)?;
    g.connect(1, 2, 21.0)?;
    g.connect(12, 0, 120.0)?;
    g.connect(1, 20, 201.0)?;

    println!("边: {:?}", g.weights().collect::<Vec<_>>());
    println!("0-1 有边: {}, 1-0 有边: {}", g.has_edge(0, 1), g.has_edge(1, 0));
    println!("0-1 权重: {:?}", g.get_edge_weight(0, 1));

    g.connect(1, 0, 15.5)?;
    println!("重设后 0-1 权重: {:?}", g.get_edge_weight(0, 1));
    g.connect(2, 1, 20.0)?;
    g.connect(1, 2, 30.0)?;
    println!("2-1 权重: {:?}", g.get_edge_weight(2, 1));

    let neighbors: Vec<String> = g
        .get_neighbors(0)
        .unwrap_or_default()
        .iter()
        .map(|v| v.to_string())
        .collect();
    println!("0 的邻居: {:?}", neighbors);

    g.remove_edge(2, 1)?;
    println!("删边后 1-2 权重: {:?}", g.get_edge_weight(1, 2));

    if let Some(v) = g.remove_node(1) {
        println!("已删除顶点 {}", v);
    }
    println!("1-0 有边: {}", g.has_edge(1, 0));
    println!("统计: {}", serde_json::to_string_pretty(&g.stats())?);

    Ok(())
}
