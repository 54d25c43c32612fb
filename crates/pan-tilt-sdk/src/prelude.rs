//! Prelude - 常用类型的便捷导入
//!
//! ```rust
//! use pan_tilt_sdk::prelude::*;
//! ```

// 数据模型层
pub use crate::types::*;

// 发布层
pub use crate::driver::{BoardSnapshot, DriverError, StatusBoard};

// 工具层
pub use crate::tools::{JointConfig, JointLayout, LayoutError, LimitViolation, SafetyLimits};
