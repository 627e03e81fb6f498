//! WGraph - 内存无向带权图
//!
//! 提供：
//! - 顶点/边的增删查，两端邻居集合与边表始终一致
//! - 与参数顺序无关且为单射的边规范键
//! - 单调递增的修改计数，用于乐观遍历时检测结构性修改

pub mod config;
pub mod error;
pub mod graph;
pub mod types;

// 重导出常用类型
pub use config::{GraphConfig, SelfLoopPolicy};
pub use error::{Error, Result};
pub use graph::{ConnectOutcome, EdgeKey, EdgeView, GraphStats, Vertex, VertexMut, WeightedGraph};
pub use types::{ModStamp, VertexId};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
