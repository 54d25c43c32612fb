//! # Pan-Tilt Types
//!
//! 云台机构运动与状态数据模型（无硬件依赖）
//!
//! ## 模块
//!
//! - `traj`: 关节目标、轨迹点、期望/实际轨迹反馈
//! - `health`: 单个舵机的健康快照
//! - `status`: 机器人整体状态（模式、三态标志、错误码、舵机健康）
//!
//! ## 值语义
//!
//! 本 crate 中所有类型都是普通的值类型：
//! - **深拷贝**：`Clone` 复制全部字段（包括舵机健康列表），副本之间无共享状态
//! - **无内部同步**：不提供锁；一写多读的并发发布由外部容器负责
//!   （参见 `pan-tilt-driver` 的 `StatusBoard`）
//! - **无校验**：数值范围、状态一致性均由外部生产者/校验器负责
//!
//! ## 示例
//!
//! ```rust
//! use pan_tilt_types::{JointTrajectoryPoint, TrajectoryFeedback, TrajectoryRole};
//!
//! let mut point = JointTrajectoryPoint::new();
//! point.append("pan", 0.5, 0.1);
//! point.append("tilt", -0.2, 0.1);
//! point.set_time_from_start(250);
//!
//! let mut feedback = TrajectoryFeedback::new();
//! feedback[TrajectoryRole::Desired] = point;
//! assert_eq!(feedback.num_points(), 2);
//! assert_eq!(feedback.time_from_start(), 250);
//! ```

pub mod health;
pub mod status;
pub mod traj;

// 重新导出常用类型
pub use health::*;
pub use status::*;
pub use traj::*;
