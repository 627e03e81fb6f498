//! 顶点定义
//!
//! 顶点只保存邻居 ID 集合，邻居实体统一通过图的顶点表解析

use crate::types::VertexId;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// 顶点
#[derive(Debug, Clone)]
pub struct Vertex {
    /// 顶点 ID
    id: VertexId,
    /// 父节点信息（供外部路径算法使用）
    info: Option<String>,
    /// 距离标记（供外部路径算法松弛使用）
    tag: f64,
    /// 邻居 ID 集合
    neighbors: HashSet<VertexId>,
}

impl Vertex {
    /// 创建新顶点
    pub(crate) fn new(id: VertexId) -> Self {
        Self {
            id,
            info: None,
            tag: f64::INFINITY,
            neighbors: HashSet::new(),
        }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }

    pub fn tag(&self) -> f64 {
        self.tag
    }

    /// 是否与指定顶点相邻
    pub fn has_neighbor(&self, id: VertexId) -> bool {
        self.neighbors.contains(&id)
    }

    /// 邻居 ID（顺序不保证）
    pub fn neighbor_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.neighbors.iter().copied()
    }

    /// 度数
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    pub(crate) fn link(&mut self, other: VertexId) -> bool {
        self.neighbors.insert(other)
    }

    pub(crate) fn unlink(&mut self, other: VertexId) -> bool {
        self.neighbors.remove(&other)
    }

    /// 取出全部邻居，顶点自身邻居集合随之清空
    pub(crate) fn take_neighbors(&mut self) -> HashSet<VertexId> {
        std::mem::take(&mut self.neighbors)
    }
}

/// 比较 ID、标记和信息，不比较邻居
impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.tag.total_cmp(&other.tag) == Ordering::Equal
            && self.info == other.info
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{key={}}}", self.id)
    }
}

/// 顶点的可变句柄
///
/// 只允许修改算法暂存字段；邻居关系只能经由图的操作维护。
/// 这些修改不属于结构性修改，不会增加 `mod_count`。
#[derive(Debug)]
pub struct VertexMut<'a> {
    vertex: &'a mut Vertex,
}

impl<'a> VertexMut<'a> {
    pub(crate) fn new(vertex: &'a mut Vertex) -> Self {
        Self { vertex }
    }

    pub fn id(&self) -> VertexId {
        self.vertex.id
    }

    pub fn info(&self) -> Option<&str> {
        self.vertex.info()
    }

    pub fn tag(&self) -> f64 {
        self.vertex.tag
    }

    /// 设置父节点信息
    pub fn set_info(&mut self, info: Option<String>) -> &mut Self {
        self.vertex.info = info;
        self
    }

    /// 设置距离标记
    pub fn set_tag(&mut self, tag: f64) -> &mut Self {
        self.vertex.tag = tag;
        self
    }
}
