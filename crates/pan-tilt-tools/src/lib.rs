//! # Pan-Tilt Tools - 共享配置与校验
//!
//! **依赖原则**: 只依赖 `pan-tilt-types`，不依赖 `pan-tilt-driver`
//!
//! ## 包含模块
//!
//! - `config` - 关节布局配置（TOML）
//! - `safety` - 关节安全限制（只读校验，不修改数据）

pub mod config;
pub mod safety;

// 重新导出常用类型
pub use config::{JointConfig, JointLayout, LayoutError};
pub use safety::{JointLimit, LimitViolation, SafetyLimits};
