//! 日志初始化
//!
//! 安装 `tracing-subscriber` 的 fmt 订阅者：
//! - 遵循 `RUST_LOG` 环境变量（默认 `info`）
//! - 通过 `tracing-log` 将 `log` crate 的记录转发到 tracing

use tracing_subscriber::EnvFilter;

/// 尝试初始化全局日志
///
/// 如果全局订阅者已经被设置（例如宿主程序自行初始化了日志），返回错误。
pub fn try_init_logger() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_log::LogTracer::init()?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    log::debug!("pan-tilt logger initialized");
    Ok(())
}

/// 初始化全局日志
///
/// 重复调用是安全的：已初始化时静默忽略。
pub fn init_logger() {
    if let Err(e) = try_init_logger() {
        tracing::debug!("Logger already initialized: {}", e);
    }
}
