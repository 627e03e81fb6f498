//! 通用类型定义

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID（非负，32 位，便于打包为边键）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub u32);

impl VertexId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// 从调用方传入的整数解析顶点 ID，负数或超出范围均视为无效参数
    pub fn parse(raw: i64) -> Result<Self> {
        u32::try_from(raw).map(Self).map_err(|_| {
            Error::InvalidArgument(format!(
                "顶点 ID 必须在 0..={} 范围内, 实际为 {}",
                u32::MAX,
                raw
            ))
        })
    }
}

impl From<u32> for VertexId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl TryFrom<i64> for VertexId {
    type Error = Error;

    fn try_from(raw: i64) -> Result<Self> {
        Self::parse(raw)
    }
}

impl From<VertexId> for i64 {
    fn from(id: VertexId) -> Self {
        i64::from(id.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 修改计数快照，用于乐观遍历时检测结构性修改
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModStamp(pub(crate) u64);

impl ModStamp {
    pub fn mod_count(&self) -> u64 {
        self.0
    }
}
