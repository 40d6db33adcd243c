//! 持久化层：词表脚本与四个 JSON 数据文件

pub mod persistence;
pub mod records;
pub mod words;

pub use persistence::DataStore;
pub use records::RoundRecord;
pub use words::{load_catalog, parse_catalog};
