use std::path::PathBuf;

use thiserror::Error;

/// 配置文本无法转换为 [`EndpointConfig`](crate::models::endpoint_config::EndpointConfig)
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("JSON解析错误: {source}")]
    JsonDecode {
        #[source]
        source: serde_json::Error,
    },
    #[error("加载配置文件 '{path}' 时出错: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// JSON错误所在的行列，IO错误没有位置
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            ParseError::JsonDecode { source } => Some((source.line(), source.column())),
            ParseError::Io { .. } => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("配置中缺少API地址")]
    MissingUrl,
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("请求超时")]
    Timeout {
        #[source]
        source: reqwest::Error,
    },
    #[error("连接错误，请检查API地址是否正确且服务正在运行")]
    ConnectionFailure {
        #[source]
        source: reqwest::Error,
    },
    #[error("请求失败: {message}")]
    Other { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout { source: err }
        } else if err.is_connect() {
            TransportError::ConnectionFailure { source: err }
        } else {
            TransportError::Other {
                message: err.to_string(),
            }
        }
    }
}

/// 交互输入来源的错误
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("输入已结束")]
    Closed,
    #[error("读取输入失败: {0}")]
    Io(#[from] std::io::Error),
}
