//! 机器人整体状态
//!
//! [`RobotStatus`] 是由外部遥测生产者填充的快照，包含：
//! - 运行模式 [`RobotMode`]
//! - 六个三态标志 [`TriState`]
//! - 错误码 [`ErrorCode`]
//! - 按舵机枚举顺序排列的 [`ServoHealth`] 列表
//!
//! # 状态转换
//!
//! 模式和三态标志不会在本模块内部自主转换，它们只是外部驱动的快照。
//! 本模块不包含状态转换表，也不校验组合的一致性
//! （例如"运动中"蕴含"驱动已上电"由状态生产者保证）。

use crate::health::{ServoHealth, ServoId};
use std::fmt;

/// 机器人运行模式
///
/// 原始值编码：Unknown = -1, Manual = 1, Auto = 2。
/// 任何其它原始值解码为 `Unknown`。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    num_enum::FromPrimitive,
    num_enum::IntoPrimitive,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum RobotMode {
    /// 未知（默认）
    #[default]
    Unknown = -1,
    /// 手动模式
    Manual = 1,
    /// 自动模式
    Auto = 2,
}

impl RobotMode {
    pub fn name(self) -> &'static str {
        match self {
            RobotMode::Unknown => "unknown",
            RobotMode::Manual => "manual",
            RobotMode::Auto => "auto",
        }
    }
}

impl fmt::Display for RobotMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 三态标志
///
/// `Unknown` 是一等结果，不是错误。
///
/// 原始值编码：Unknown = -1, False = 0, True = 1。
/// 任何其它原始值解码为 `Unknown`。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    num_enum::FromPrimitive,
    num_enum::IntoPrimitive,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum TriState {
    /// 未知（默认）
    #[default]
    Unknown = -1,
    False = 0,
    True = 1,
}

impl TriState {
    #[inline]
    pub fn is_known(self) -> bool {
        self != TriState::Unknown
    }

    #[inline]
    pub fn is_true(self) -> bool {
        self == TriState::True
    }

    #[inline]
    pub fn is_false(self) -> bool {
        self == TriState::False
    }

    /// 转换为 `Option<bool>`，`Unknown` 映射为 `None`
    #[inline]
    pub fn as_option(self) -> Option<bool> {
        match self {
            TriState::Unknown => None,
            TriState::False => Some(false),
            TriState::True => Some(true),
        }
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value { TriState::True } else { TriState::False }
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        value.map_or(TriState::Unknown, TriState::from)
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TriState::Unknown => "unknown",
            TriState::False => "false",
            TriState::True => "true",
        };
        f.write_str(s)
    }
}

/// 机器人错误码
///
/// `ErrorCode::OK` 表示无错误；其它值由状态生产者定义，这里视为不透明整数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ErrorCode(pub i32);

impl ErrorCode {
    pub const OK: ErrorCode = ErrorCode(0);

    #[inline]
    pub const fn is_ok(self) -> bool {
        self.0 == Self::OK.0
    }

    #[inline]
    pub const fn code(self) -> i32 {
        self.0
    }
}

impl From<i32> for ErrorCode {
    fn from(value: i32) -> Self {
        ErrorCode(value)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            write!(f, "OK")
        } else {
            write!(f, "E{}", self.0)
        }
    }
}

/// 机器人整体状态快照
///
/// # 值语义
///
/// `Clone` 是深拷贝，包括完整的舵机健康列表；副本之间没有共享状态。
///
/// # 清除
///
/// [`clear`](Self::clear) 只重置模式、三态标志和错误码，
/// **不会**修改 `servo_health`：该列表的生命周期由遥测生产者独立管理。
///
/// ```rust
/// use pan_tilt_types::{ErrorCode, RobotMode, RobotStatus, ServoHealth, TriState};
///
/// let mut status = RobotStatus::default();
/// status.mode = RobotMode::Auto;
/// status.is_calibrated = TriState::True;
/// status.servo_health.push(ServoHealth::new(1, 35.0, 12.0, 0u32));
///
/// status.clear();
/// assert_eq!(status.mode, RobotMode::Unknown);
/// assert_eq!(status.error_code, ErrorCode::OK);
/// assert_eq!(status.servo_health.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RobotStatus {
    /// 运行模式
    pub mode: RobotMode,
    /// 是否已标定
    pub is_calibrated: TriState,
    /// 是否处于急停
    pub is_estopped: TriState,
    /// 驱动是否上电
    pub are_drives_powered: TriState,
    /// 是否可以运动
    pub is_motion_possible: TriState,
    /// 是否正在运动
    pub is_in_motion: TriState,
    /// 是否处于错误状态
    pub is_in_error: TriState,
    /// 错误码
    pub error_code: ErrorCode,
    /// 舵机健康列表（按舵机枚举顺序）
    pub servo_health: Vec<ServoHealth>,
}

impl RobotStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以给定的舵机健康列表创建，其余字段为未知
    pub fn with_servo_health(servo_health: Vec<ServoHealth>) -> Self {
        Self {
            servo_health,
            ..Self::default()
        }
    }

    /// 重置模式、三态标志和错误码；保留舵机健康列表
    pub fn clear(&mut self) {
        self.mode = RobotMode::Unknown;
        self.is_calibrated = TriState::Unknown;
        self.is_estopped = TriState::Unknown;
        self.are_drives_powered = TriState::Unknown;
        self.is_motion_possible = TriState::Unknown;
        self.is_in_motion = TriState::Unknown;
        self.is_in_error = TriState::Unknown;
        self.error_code = ErrorCode::OK;
    }

    /// 全部三态标志（按字段声明顺序）
    pub fn flags(&self) -> [(&'static str, TriState); 6] {
        [
            ("calibrated", self.is_calibrated),
            ("estopped", self.is_estopped),
            ("drives_powered", self.are_drives_powered),
            ("motion_possible", self.is_motion_possible),
            ("in_motion", self.is_in_motion),
            ("in_error", self.is_in_error),
        ]
    }

    /// 按 ID 查找舵机健康快照
    pub fn servo(&self, servo_id: ServoId) -> Option<&ServoHealth> {
        self.servo_health.iter().find(|h| h.servo_id == servo_id)
    }

    /// 存在告警的舵机
    pub fn alarmed_servos(&self) -> impl Iterator<Item = &ServoHealth> {
        self.servo_health.iter().filter(|h| h.is_alarmed())
    }
}
