//! 应用配置：从 config/default.toml 与环境变量加载
//!
//! 加载顺序：先读 TOML 文件，再用环境变量 `PICKER__*` 覆盖（双下划线表示嵌套，如 `PICKER__DATA__DIR=./data`）。

use std::path::PathBuf;

use serde::Deserialize;

/// 应用配置根（对应 config/default.toml 的顶层）
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub data: DataSection,
    #[serde(default)]
    pub triage: TriageSection,
    #[serde(default)]
    pub solution: SolutionSection,
}

/// [data] 段：数据目录与各文件名
#[derive(Debug, Clone, Deserialize)]
pub struct DataSection {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_words_file")]
    pub words: String,
    #[serde(default = "default_history_file")]
    pub history: String,
    #[serde(default = "default_pool_file")]
    pub pool: String,
    #[serde(default = "default_solution_file")]
    pub solution: String,
    #[serde(default = "default_rejected_file")]
    pub rejected: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_words_file() -> String {
    "words.js".to_string()
}

fn default_history_file() -> String {
    "history.json".to_string()
}

fn default_pool_file() -> String {
    "pool.json".to_string()
}

fn default_solution_file() -> String {
    "solution.json".to_string()
}

fn default_rejected_file() -> String {
    "rejected.json".to_string()
}

impl Default for DataSection {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            words: default_words_file(),
            history: default_history_file(),
            pool: default_pool_file(),
            solution: default_solution_file(),
            rejected: default_rejected_file(),
        }
    }
}

impl DataSection {
    pub fn words_path(&self) -> PathBuf {
        self.dir.join(&self.words)
    }

    pub fn history_path(&self) -> PathBuf {
        self.dir.join(&self.history)
    }

    pub fn pool_path(&self) -> PathBuf {
        self.dir.join(&self.pool)
    }

    pub fn solution_path(&self) -> PathBuf {
        self.dir.join(&self.solution)
    }

    pub fn rejected_path(&self) -> PathBuf {
        self.dir.join(&self.rejected)
    }
}

/// [triage] 段：洗牌种子、是否只演练不落盘
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TriageSection {
    /// 固定种子时候选顺序可复现；未设置则每次运行随机
    pub seed: Option<u64>,
    #[serde(default)]
    pub dry_run: bool,
}

/// [solution] 段：抽题时的过期日期计算
#[derive(Debug, Clone, Deserialize)]
pub struct SolutionSection {
    /// 当前 UTC 时间加上该小时数后取日期，作为新题的过期日
    #[serde(default = "default_lead_hours")]
    pub lead_hours: i64,
    /// 附加在日期后的时区标签
    #[serde(default = "default_zone_label")]
    pub zone_label: String,
}

fn default_lead_hours() -> i64 {
    12
}

fn default_zone_label() -> String {
    "GMT+1".to_string()
}

impl Default for SolutionSection {
    fn default() -> Self {
        Self {
            lead_hours: default_lead_hours(),
            zone_label: default_zone_label(),
        }
    }
}

/// 从 config 目录加载配置，环境变量 PICKER__* 可覆盖
///
/// 1. 按顺序查找 config/default.toml、../config/default.toml、default.toml，找到则作为第一源
/// 2. 若传入 config_path 且文件存在，则追加该文件（可覆盖前面的键）
/// 3. 最后叠加环境变量 PICKER__*（双下划线表示嵌套键）
pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig, config::ConfigError> {
    let mut builder = config::Config::builder();

    let default_names = ["config/default", "../config/default", "default"];
    for name in default_names {
        let path = format!("{}.toml", name);
        if std::path::Path::new(&path).exists() {
            builder = builder.add_source(config::File::with_name(name).required(false));
            break;
        }
    }

    if let Some(ref path) = config_path {
        if path.exists() {
            builder = builder.add_source(config::File::from(path.clone()).required(false));
        }
    }

    builder = builder.add_source(
        config::Environment::with_prefix("PICKER")
            .separator("__")
            .try_parsing(true),
    );

    let c = builder.build()?;
    c.try_deserialize()
}
