//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("顶点已存在: {0}")]
    DuplicateVertex(String),

    #[error("导入错误 (第 {line} 行): {message}")]
    ImportError { line: usize, message: String },

    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("服务器错误: {0}")]
    ServerError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// 用标签的 Debug 形式构造 `VertexNotFound`
    pub fn vertex_not_found<T: std::fmt::Debug>(label: &T) -> Self {
        Error::VertexNotFound(format!("{:?}", label))
    }

    /// 用标签的 Debug 形式构造 `DuplicateVertex`
    pub fn duplicate_vertex<T: std::fmt::Debug>(label: &T) -> Self {
        Error::DuplicateVertex(format!("{:?}", label))
    }

    /// 是否为可忽略的上报型错误（操作被跳过，图状态未改变）
    pub fn is_reported(&self) -> bool {
        matches!(self, Error::DuplicateVertex(_) | Error::VertexNotFound(_))
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        let line = e.position().map(|p| p.line() as usize).unwrap_or(0);
        Error::ImportError {
            line,
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = Error::vertex_not_found(&"a");
        assert_eq!(e.to_string(), "顶点不存在: \"a\"");

        let e = Error::duplicate_vertex(&7);
        assert_eq!(e.to_string(), "顶点已存在: 7");
        assert!(e.is_reported());

        let e = Error::ImportError {
            line: 3,
            message: "字段数量错误".to_string(),
        };
        assert!(!e.is_reported());
        assert_eq!(e.to_string(), "导入错误 (第 3 行): 字段数量错误");
    }
}
