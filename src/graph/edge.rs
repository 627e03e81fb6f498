//! 边定义
//!
//! 无向边由规范键标识：两个端点按 (min, max) 排序后打包进一个 u64，
//! 高 32 位为较小 ID，低 32 位为较大 ID。该映射与参数顺序无关且为单射。

use crate::types::VertexId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// 边的规范键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey(u64);

impl EdgeKey {
    /// 由无序顶点对生成键
    pub fn new(a: VertexId, b: VertexId) -> Self {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        Self(((lo.as_u32() as u64) << 32) | hi.as_u32() as u64)
    }

    /// 解码为 (较小端点, 较大端点)
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (
            VertexId::new((self.0 >> 32) as u32),
            VertexId::new(self.0 as u32),
        )
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// 边视图
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeView {
    /// 较小端点
    pub a: VertexId,
    /// 较大端点
    pub b: VertexId,
    /// 权重
    pub weight: f64,
}

/// 边表：规范键 -> 权重
#[derive(Debug, Clone, Default)]
pub(crate) struct EdgeTable {
    weights: HashMap<EdgeKey, f64>,
}

impl EdgeTable {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            weights: HashMap::with_capacity(capacity),
        }
    }

    pub fn contains(&self, key: EdgeKey) -> bool {
        self.weights.contains_key(&key)
    }

    pub fn weight(&self, key: EdgeKey) -> Option<f64> {
        self.weights.get(&key).copied()
    }

    /// 写入权重，返回旧值（存在即为重设权重）
    pub fn upsert(&mut self, key: EdgeKey, weight: f64) -> Option<f64> {
        self.weights.insert(key, weight)
    }

    pub fn remove(&mut self, key: EdgeKey) -> Option<f64> {
        self.weights.remove(&key)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = EdgeView> + '_ {
        self.weights.iter().map(|(key, &weight)| {
            let (a, b) = key.endpoints();
            EdgeView { a, b, weight }
        })
    }
}

/// 权重按 `total_cmp` 比较：NaN 与自身相等，0.0 与 -0.0 不等
impl PartialEq for EdgeTable {
    fn eq(&self, other: &Self) -> bool {
        self.weights.len() == other.weights.len()
            && self.weights.iter().all(|(key, w)| {
                other
                    .weights
                    .get(key)
                    .is_some_and(|o| w.total_cmp(o) == Ordering::Equal)
            })
    }
}
