//! 驱动层错误类型定义

use thiserror::Error;

/// 驱动层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    /// 舵机健康索引越界
    #[error("Servo health index {index} out of range (len: {len})")]
    ServoIndexOutOfRange { index: usize, len: usize },
}
