//! 日志初始化
//!
//! 终端被 TUI 占用，日志只能写文件：`<data_dir>/pkdns-lookup/logs/pkdns-lookup.log`

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use pkdns_lookup_core::adapters::APP_DIR_NAME;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志文件名
pub const LOG_FILE_NAME: &str = "pkdns-lookup.log";

/// 日志目录
pub fn log_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR_NAME).join("logs"))
}

/// 构建日志过滤器：`RUST_LOG` 优先，其次是配置中的级别，最后回退到 info
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 初始化日志
///
/// 返回的 guard 必须存活到程序结束，否则缓冲中的日志会丢失。
/// 没有数据目录时不记录日志。
pub fn init_logging(level: &str) -> Result<Option<WorkerGuard>> {
    let Some(dir) = log_dir() else {
        return Ok(None);
    };
    fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    // init 同时安装 log → tracing 的桥接，core 中的 log 宏也会写入这里
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(build_filter(level))
        .try_init()?;

    Ok(Some(guard))
}
