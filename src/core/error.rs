//! 错误类型
//!
//! PickerError 为致命错误（数据文件缺失/损坏、复核越界等），直接中止会话且不落盘；
//! InjectRefusal 为可恢复的拒绝原因，提示操作者后重新等待输入。

use std::path::PathBuf;

use thiserror::Error;

/// 会话与数据维护过程中的致命错误
#[derive(Error, Debug)]
pub enum PickerError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed word catalog {path}: {reason}")]
    MalformedCatalog { path: PathBuf, reason: String },

    #[error("Amendment position {position} out of range ({len} additions)")]
    AmendmentOutOfRange { position: usize, len: usize },

    #[error("Pool is empty, nothing to draw")]
    EmptyPool,

    #[error("Console error: {0}")]
    Console(#[source] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

impl PickerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

/// 插入自定义词（`c <word>`）被拒绝的原因
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InjectRefusal {
    #[error("'{0}' is not in the word list")]
    UnknownWord(String),

    #[error("'{0}' is already among this session's additions")]
    AlreadyAdded(String),

    #[error("'{0}' was already used (history, pool or solution)")]
    AlreadyUsed(String),
}
