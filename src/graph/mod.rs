//! 图核心模块
//!
//! 定义顶点、边和无向带权图的核心数据结构

mod edge;
mod graph;
mod vertex;

pub use edge::{EdgeKey, EdgeView};
pub use graph::{ConnectOutcome, GraphStats, WeightedGraph};
pub use vertex::{Vertex, VertexMut};
