//! Picker - 词库人工筛选工具
//!
//! 模块划分：
//! - **config**: 应用配置加载（TOML + 环境变量）
//! - **core**: 词表、排除索引、筛选会话状态机、复核、主流程
//! - **observability**: 日志初始化
//! - **solution**: 题目维护（从 pool 抽题、归档过期题目）
//! - **store**: 数据文件读写（words.js / history / pool / solution / rejected）
//! - **ui**: 行式控制台（标准输入输出 / 测试脚本）

pub mod config;
pub mod core;
pub mod observability;
pub mod solution;
pub mod store;
pub mod ui;

pub use crate::core::{run_session, PickerError, SessionOutcome};
