//! # 关节布局配置
//!
//! 生产者（运动规划器、遥测）与消费者（状态上报、诊断）共享的关节顺序和舵机枚举顺序。
//!
//! ```toml
//! [[joints]]
//! name = "pan"
//! servo_id = 1
//! min_position = -2.6
//! max_position = 2.6
//! max_velocity = 1.5
//!
//! [[joints]]
//! name = "tilt"
//! servo_id = 2
//! ```

use anyhow::{Context, Result};
use pan_tilt_types::{JointTrajectoryPoint, RobotStatus, ServoHealth, ServoId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// 布局校验错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Joint layout has no joints")]
    Empty,

    #[error("Duplicate joint name: {0}")]
    DuplicateJoint(String),

    #[error("Duplicate servo id {servo_id} (joint {joint})")]
    DuplicateServo { joint: String, servo_id: i32 },

    #[error("Invalid servo id {servo_id} for joint {joint}")]
    InvalidServoId { joint: String, servo_id: i32 },

    #[error("Invalid position range for joint {joint}: min {min} > max {max}")]
    InvalidRange { joint: String, min: f64, max: f64 },

    #[error("Invalid {field} for joint {joint}: {value}")]
    InvalidLimit {
        joint: String,
        field: &'static str,
        value: f64,
    },

    #[error("Length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// 单个关节配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointConfig {
    /// 关节名称（布局内唯一）
    pub name: String,

    /// 驱动该关节的舵机 ID
    pub servo_id: i32,

    /// 位置下限（rad）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_position: Option<f64>,

    /// 位置上限（rad）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_position: Option<f64>,

    /// 速度上限（rad/s）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_velocity: Option<f64>,
}

impl JointConfig {
    pub fn new(name: impl Into<String>, servo_id: i32) -> Self {
        Self {
            name: name.into(),
            servo_id,
            min_position: None,
            max_position: None,
            max_velocity: None,
        }
    }
}

/// 关节布局
///
/// `joints` 的顺序即轨迹点中的关节顺序，也是状态中舵机健康列表的顺序。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointLayout {
    pub joints: Vec<JointConfig>,
}

impl JointLayout {
    /// 创建并校验布局
    pub fn new(joints: Vec<JointConfig>) -> Result<Self, LayoutError> {
        let layout = Self { joints };
        layout.validate()?;
        Ok(layout)
    }

    /// 标准双轴云台：pan = 舵机 1，tilt = 舵机 2
    pub fn pan_tilt() -> Self {
        Self {
            joints: vec![JointConfig::new("pan", 1), JointConfig::new("tilt", 2)],
        }
    }

    /// 从 TOML 字符串解析
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let layout: JointLayout = toml::from_str(content).context("解析关节布局失败")?;
        layout.validate()?;
        Ok(layout)
    }

    /// 从文件加载
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("读取关节布局文件失败: {}", path.display()))?;
        let layout = Self::from_toml_str(&content)?;
        debug!(
            "Joint layout loaded from {}: {} joints",
            path.display(),
            layout.joints.len()
        );
        Ok(layout)
    }

    /// 保存到文件
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).context("序列化关节布局失败")?;
        fs::write(path.as_ref(), content).context("写入关节布局文件失败")?;
        Ok(())
    }

    /// 校验布局
    ///
    /// - 至少一个关节
    /// - 关节名称唯一
    /// - 舵机 ID 唯一且不是 `ServoId::NONE`
    /// - 限制值有限，速度上限非负
    /// - 同时给出上下限时 min <= max
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.joints.is_empty() {
            return Err(LayoutError::Empty);
        }

        let mut names = HashSet::new();
        let mut servo_ids = HashSet::new();
        for joint in &self.joints {
            if !names.insert(joint.name.as_str()) {
                return Err(LayoutError::DuplicateJoint(joint.name.clone()));
            }
            if ServoId(joint.servo_id).is_none() {
                return Err(LayoutError::InvalidServoId {
                    joint: joint.name.clone(),
                    servo_id: joint.servo_id,
                });
            }
            if !servo_ids.insert(joint.servo_id) {
                return Err(LayoutError::DuplicateServo {
                    joint: joint.name.clone(),
                    servo_id: joint.servo_id,
                });
            }
            for (field, value) in [
                ("min_position", joint.min_position),
                ("max_position", joint.max_position),
                ("max_velocity", joint.max_velocity),
            ] {
                if let Some(value) = value {
                    if !value.is_finite() {
                        return Err(LayoutError::InvalidLimit {
                            joint: joint.name.clone(),
                            field,
                            value,
                        });
                    }
                }
            }
            if let Some(max_velocity) = joint.max_velocity {
                if max_velocity < 0.0 {
                    return Err(LayoutError::InvalidLimit {
                        joint: joint.name.clone(),
                        field: "max_velocity",
                        value: max_velocity,
                    });
                }
            }
            if let (Some(min), Some(max)) = (joint.min_position, joint.max_position) {
                if min > max {
                    return Err(LayoutError::InvalidRange {
                        joint: joint.name.clone(),
                        min,
                        max,
                    });
                }
            }
        }
        Ok(())
    }

    /// 关节数量
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// 关节在布局中的位置
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.joints.iter().position(|joint| joint.name == name)
    }

    /// 按布局顺序的关节名称
    pub fn joint_names(&self) -> impl Iterator<Item = &str> {
        self.joints.iter().map(|joint| joint.name.as_str())
    }

    /// 按布局顺序的舵机 ID
    pub fn servo_ids(&self) -> impl Iterator<Item = ServoId> + '_ {
        self.joints.iter().map(|joint| ServoId(joint.servo_id))
    }

    /// 按布局顺序构建轨迹点（加速度为 0.0）
    ///
    /// `positions` 和 `velocities` 的长度必须等于关节数量。
    pub fn trajectory_point(
        &self,
        positions: &[f64],
        velocities: &[f64],
        time_from_start: u32,
    ) -> Result<JointTrajectoryPoint, LayoutError> {
        for values in [positions, velocities] {
            if values.len() != self.joints.len() {
                return Err(LayoutError::LengthMismatch {
                    expected: self.joints.len(),
                    actual: values.len(),
                });
            }
        }

        let mut point = JointTrajectoryPoint::with_capacity(self.joints.len());
        for ((joint, &position), &velocity) in self.joints.iter().zip(positions).zip(velocities) {
            point.append(joint.name.as_str(), position, velocity);
        }
        point.set_time_from_start(time_from_start);
        Ok(point)
    }

    /// 按舵机枚举顺序构建状态模板
    ///
    /// 每个舵机一个健康快照（ID 已填，读数为 0），其余字段为未知。
    pub fn status_template(&self) -> RobotStatus {
        RobotStatus::with_servo_health(
            self.servo_ids()
                .map(|servo_id| ServoHealth {
                    servo_id,
                    ..ServoHealth::default()
                })
                .collect(),
        )
    }
}

impl Default for JointLayout {
    fn default() -> Self {
        Self::pan_tilt()
    }
}
