//! 图配置
//!
//! 自环处理策略与容量预分配

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 自环（同一顶点连边/删边）的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfLoopPolicy {
    /// 静默忽略，不改变任何计数
    #[default]
    Ignore,
    /// 返回 `Error::InvalidArgument`
    Reject,
}

/// 图配置
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// 自环策略
    pub self_loops: SelfLoopPolicy,
    /// 顶点表预分配容量
    pub vertex_capacity: usize,
    /// 边表预分配容量
    pub edge_capacity: usize,
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置自环策略
    pub fn with_self_loops(mut self, policy: SelfLoopPolicy) -> Self {
        self.self_loops = policy;
        self
    }

    /// 设置容量提示
    pub fn with_capacity(mut self, vertices: usize, edges: usize) -> Self {
        self.vertex_capacity = vertices;
        self.edge_capacity = edges;
        self
    }

    /// 从 JSON 字符串解析配置，缺省字段取默认值
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| Error::Config(format!("解析配置失败: {}", e)))
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("序列化配置失败: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let cfg = GraphConfig::default();
        assert_eq!(cfg.self_loops, SelfLoopPolicy::Ignore);
        assert_eq!(cfg.vertex_capacity, 0);
    }

    #[test]
    fn test_config_from_json() {
        let cfg = GraphConfig::from_json_str(r#"{"self_loops": "reject", "vertex_capacity": 64}"#)
            .unwrap();
        assert_eq!(cfg.self_loops, SelfLoopPolicy::Reject);
        assert_eq!(cfg.vertex_capacity, 64);
        assert_eq!(cfg.edge_capacity, 0);

        let again = GraphConfig::from_json_str(&cfg.to_json_string().unwrap()).unwrap();
        assert_eq!(again, cfg);
    }

    #[test]
    fn test_config_bad_json() {
        let err = GraphConfig::from_json_str(r#"{"self_loops": "explode"}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
