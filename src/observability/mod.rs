//! 可观测性
//!
//! 日志写到 stderr，stdout 只留给交互提示与词表输出。

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(default_directive()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn default_directive() -> tracing_subscriber::filter::Directive {
    tracing_subscriber::filter::LevelFilter::INFO.into()
}
