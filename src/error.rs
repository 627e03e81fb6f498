//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    #[error("顶点不存在: {0}")]
    VertexNotFound(u32),

    #[error("边不存在: ({a}, {b})")]
    EdgeNotFound { a: u32, b: u32 },

    #[error("图在遍历期间被修改: 期望 mod_count {expected}, 实际 {actual}")]
    ConcurrentModification { expected: u64, actual: u64 },

    #[error("配置错误: {0}")]
    Config(String),
}

impl Error {
    /// 是否为“未找到”类错误
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::VertexNotFound(_) | Error::EdgeNotFound { .. })
    }
}
