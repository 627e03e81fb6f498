//! 无向带权图
//!
//! 顶点表与边表共同维护：任一边要么同时出现在两端顶点的邻居集合与边表中，
//! 要么都不出现。`edge_count` 始终等于边表大小，`mod_count` 只增不减。

use super::edge::{EdgeKey, EdgeTable, EdgeView};
use super::vertex::{Vertex, VertexMut};
use crate::config::{GraphConfig, SelfLoopPolicy};
use crate::error::{Error, Result};
use crate::types::{ModStamp, VertexId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// `connect` 的执行结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// 新建了一条边
    Created,
    /// 边已存在，仅更新权重
    Reweighted,
    /// 自环，被忽略
    Ignored,
}

/// 图统计快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub mod_count: u64,
    pub max_degree: usize,
    pub total_weight: f64,
}

/// 无向带权图
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    /// 配置
    config: GraphConfig,
    /// 顶点表
    vertices: IndexMap<VertexId, Vertex>,
    /// 边表
    edges: EdgeTable,
    /// 边数
    edge_count: usize,
    /// 结构性修改计数
    mod_count: u64,
}

impl WeightedGraph {
    /// 使用默认配置创建空图
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// 使用指定配置创建空图
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            vertices: IndexMap::with_capacity(config.vertex_capacity),
            edges: EdgeTable::with_capacity(config.edge_capacity),
            edge_count: 0,
            mod_count: 0,
            config,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点，已存在时不做任何修改
    pub fn add_node(&mut self, id: i64) -> Result<VertexId> {
        let id = VertexId::parse(id).map_err(|e| {
            tracing::warn!(node = id, "拒绝添加顶点: ID 无效");
            e
        })?;
        if self.vertices.contains_key(&id) {
            return Ok(id);
        }

        self.vertices.insert(id, Vertex::new(id));
        self.mod_count += 1;
        tracing::debug!(node = %id, mod_count = self.mod_count, "添加顶点");
        Ok(id)
    }

    /// 获取顶点
    pub fn get_node(&self, id: i64) -> Option<&Vertex> {
        let id = VertexId::parse(id).ok()?;
        self.vertices.get(&id)
    }

    /// 获取顶点的可变句柄（仅可修改 info/tag）
    pub fn get_node_mut(&mut self, id: i64) -> Option<VertexMut<'_>> {
        let id = VertexId::parse(id).ok()?;
        self.vertices.get_mut(&id).map(VertexMut::new)
    }

    pub fn contains_node(&self, id: i64) -> bool {
        self.get_node(id).is_some()
    }

    /// 删除顶点并级联删除其所有边
    ///
    /// 每删除一条边 `mod_count` 加一，最后删除顶点本身再加一。
    /// 返回的顶点邻居集合为空。
    pub fn remove_node(&mut self, id: i64) -> Option<Vertex> {
        let id = VertexId::parse(id).ok()?;
        let neighbors = self.vertices.get_mut(&id)?.take_neighbors();

        for other in neighbors {
            if let Some(v) = self.vertices.get_mut(&other) {
                v.unlink(id);
            }
            self.edges.remove(EdgeKey::new(id, other));
            self.edge_count -= 1;
            self.mod_count += 1;
        }

        let removed = self.vertices.swap_remove(&id)?;
        self.mod_count += 1;
        debug_assert_eq!(self.edge_count, self.edges.len());
        tracing::debug!(
            node = %id,
            edge_count = self.edge_count,
            mod_count = self.mod_count,
            "删除顶点"
        );
        Some(removed)
    }

    /// 顶点数量
    pub fn node_count(&self) -> usize {
        self.vertices.len()
    }

    /// 所有顶点（顺序不保证）
    pub fn all_vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    // ==================== 边操作 ====================

    /// 连接两个顶点
    ///
    /// 边不存在时新建并增加 `edge_count`；已存在时仅更新权重。
    /// 两种情况 `mod_count` 都加一。两端顶点必须已存在。
    pub fn connect(&mut self, id1: i64, id2: i64, weight: f64) -> Result<ConnectOutcome> {
        let a = VertexId::parse(id1)?;
        let b = VertexId::parse(id2)?;
        if a == b {
            self.self_loop("connect", a)?;
            return Ok(ConnectOutcome::Ignored);
        }
        self.require_node(a)?;
        self.require_node(b)?;

        let key = EdgeKey::new(a, b);
        if let Some(old) = self.edges.upsert(key, weight) {
            self.mod_count += 1;
            tracing::debug!(a = %a, b = %b, old, weight, mod_count = self.mod_count, "更新边权重");
            return Ok(ConnectOutcome::Reweighted);
        }

        self.link(a, b);
        self.edge_count += 1;
        self.mod_count += 1;
        debug_assert_eq!(self.edge_count, self.edges.len());
        tracing::debug!(a = %a, b = %b, weight, mod_count = self.mod_count, "添加边");
        Ok(ConnectOutcome::Created)
    }

    /// 删除边，返回被删除边的权重；边不存在时不做任何修改
    pub fn remove_edge(&mut self, id1: i64, id2: i64) -> Result<Option<f64>> {
        let (Ok(a), Ok(b)) = (VertexId::parse(id1), VertexId::parse(id2)) else {
            return Ok(None);
        };
        if a == b {
            self.self_loop("remove_edge", a)?;
            return Ok(None);
        }

        let Some(weight) = self.edges.remove(EdgeKey::new(a, b)) else {
            return Ok(None);
        };
        self.unlink(a, b);
        self.edge_count -= 1;
        self.mod_count += 1;
        debug_assert_eq!(self.edge_count, self.edges.len());
        tracing::debug!(a = %a, b = %b, mod_count = self.mod_count, "删除边");
        Ok(Some(weight))
    }

    /// 两顶点之间是否有边（与参数顺序无关）
    pub fn has_edge(&self, id1: i64, id2: i64) -> bool {
        self.edge_key(id1, id2)
            .map(|key| self.edges.contains(key))
            .unwrap_or(false)
    }

    /// 获取边权重，无边时返回 `None`
    pub fn get_edge_weight(&self, id1: i64, id2: i64) -> Option<f64> {
        self.edges.weight(self.edge_key(id1, id2)?)
    }

    /// 获取边权重，无边时返回 `Error::EdgeNotFound`
    pub fn edge_weight(&self, id1: i64, id2: i64) -> Result<f64> {
        let a = VertexId::parse(id1)?;
        let b = VertexId::parse(id2)?;
        self.edges
            .weight(EdgeKey::new(a, b))
            .filter(|_| a != b)
            .ok_or(Error::EdgeNotFound {
                a: a.as_u32(),
                b: b.as_u32(),
            })
    }

    /// 边数量
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// 所有边（每条边只出现一次，`a < b`，顺序不保证）
    pub fn edges(&self) -> impl Iterator<Item = EdgeView> + '_ {
        self.edges.iter()
    }

    /// 所有边权重
    pub fn weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.edges.iter().map(|e| e.weight)
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的邻居；顶点不存在时为 `None`，孤立顶点为空列表
    pub fn get_neighbors(&self, id: i64) -> Option<Vec<&Vertex>> {
        let vertex = self.get_node(id)?;
        Some(
            vertex
                .neighbor_ids()
                .filter_map(|n| self.vertices.get(&n))
                .collect(),
        )
    }

    /// 获取顶点的邻居 ID
    pub fn neighbor_ids(&self, id: i64) -> impl Iterator<Item = VertexId> + '_ {
        self.get_node(id)
            .into_iter()
            .flat_map(|v| v.neighbor_ids())
    }

    /// 顶点度数，顶点不存在时为 `None`
    pub fn degree(&self, id: i64) -> Option<usize> {
        self.get_node(id).map(Vertex::degree)
    }

    // ==================== 修改计数 ====================

    /// 结构性修改计数
    pub fn mod_count(&self) -> u64 {
        self.mod_count
    }

    /// 记录当前修改计数
    pub fn stamp(&self) -> ModStamp {
        ModStamp(self.mod_count)
    }

    /// 检查自 `stamp` 以来图是否发生过结构性修改
    pub fn check_stamp(&self, stamp: ModStamp) -> Result<()> {
        if stamp.0 != self.mod_count {
            return Err(Error::ConcurrentModification {
                expected: stamp.0,
                actual: self.mod_count,
            });
        }
        Ok(())
    }

    /// 统计快照
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            node_count: self.node_count(),
            edge_count: self.edge_count,
            mod_count: self.mod_count,
            max_degree: self.vertices.values().map(Vertex::degree).max().unwrap_or(0),
            total_weight: self.weights().sum(),
        }
    }

    // ==================== 内部辅助 ====================

    fn edge_key(&self, id1: i64, id2: i64) -> Option<EdgeKey> {
        let a = VertexId::parse(id1).ok()?;
        let b = VertexId::parse(id2).ok()?;
        (a != b).then(|| EdgeKey::new(a, b))
    }

    fn require_node(&self, id: VertexId) -> Result<()> {
        if !self.vertices.contains_key(&id) {
            return Err(Error::VertexNotFound(id.as_u32()));
        }
        Ok(())
    }

    fn self_loop(&self, op: &str, id: VertexId) -> Result<()> {
        match self.config.self_loops {
            SelfLoopPolicy::Ignore => {
                tracing::trace!(node = %id, op, "忽略自环");
                Ok(())
            }
            SelfLoopPolicy::Reject => {
                tracing::warn!(node = %id, op, "拒绝自环");
                Err(Error::InvalidArgument(format!(
                    "{}: 不允许顶点 {} 的自环",
                    op, id
                )))
            }
        }
    }

    fn link(&mut self, a: VertexId, b: VertexId) {
        if let Some(v) = self.vertices.get_mut(&a) {
            v.link(b);
        }
        if let Some(v) = self.vertices.get_mut(&b) {
            v.link(a);
        }
    }

    fn unlink(&mut self, a: VertexId, b: VertexId) {
        if let Some(v) = self.vertices.get_mut(&a) {
            v.unlink(b);
        }
        if let Some(v) = self.vertices.get_mut(&b) {
            v.unlink(a);
        }
    }
}

impl Default for WeightedGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// 比较顶点表、边表和边数，不比较 `mod_count`
impl PartialEq for WeightedGraph {
    fn eq(&self, other: &Self) -> bool {
        self.edge_count == other.edge_count
            && self.vertices == other.vertices
            && self.edges == other.edges
    }
}
