//! Pan-Tilt SDK
//!
//! 云台机构运动与状态数据的统一入口。
//!
//! # 架构设计
//!
//! 从底层到高层：
//!
//! - **数据模型层** (`types`): 关节目标、轨迹点、轨迹反馈、舵机健康、机器人状态
//! - **发布层** (`driver`): `StatusBoard`，单写多读的无锁快照发布
//! - **工具层** (`tools`): 关节布局配置、安全限制
//!
//! # 快速开始
//!
//! ```rust
//! use pan_tilt_sdk::prelude::*;
//!
//! let layout = JointLayout::pan_tilt();
//! let board = StatusBoard::with_initial(layout.status_template(), TrajectoryFeedback::new());
//!
//! let desired = layout.trajectory_point(&[0.5, -0.2], &[0.1, 0.1], 100).unwrap();
//! board.publish_trajectory(desired, JointTrajectoryPoint::new());
//!
//! assert_eq!(board.feedback().num_points(), 2);
//! assert_eq!(board.status().servo_health.len(), 2);
//! ```

mod logging;
pub mod prelude;

pub use pan_tilt_driver as driver;
pub use pan_tilt_tools as tools;
pub use pan_tilt_types as types;

pub use logging::{init_logger, try_init_logger};

// 数据模型层常用类型
pub use pan_tilt_types::{
    AlarmBits, ErrorCode, JointTarget, JointTrajectoryPoint, RobotMode, RobotStatus, ServoHealth,
    ServoId, TrajectoryFeedback, TrajectoryRole, TriState,
};

// 发布层
pub use pan_tilt_driver::{BoardSnapshot, DriverError, StatusBoard};
