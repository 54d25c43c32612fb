//! # 安全限制
//!
//! 关节位置/速度限制校验。
//!
//! 数据模型本身不做范围校验；本模块是外部校验器，只报告违规，不修改轨迹点。

use crate::config::JointLayout;
use pan_tilt_types::JointTrajectoryPoint;
use thiserror::Error;

/// 单个关节的限制
#[derive(Debug, Clone, PartialEq)]
pub struct JointLimit {
    pub name: String,
    /// 位置下限（rad）
    pub min_position: Option<f64>,
    /// 位置上限（rad）
    pub max_position: Option<f64>,
    /// 速度上限（rad/s，按绝对值比较）
    pub max_velocity: Option<f64>,
}

/// 限制违规
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LimitViolation {
    #[error("Unknown joint: {name}")]
    UnknownJoint { name: String },

    #[error("Joint {name} position {value:.3} below limit {limit:.3}")]
    PositionBelowMin { name: String, value: f64, limit: f64 },

    #[error("Joint {name} position {value:.3} above limit {limit:.3}")]
    PositionAboveMax { name: String, value: f64, limit: f64 },

    #[error("Joint {name} velocity {value:.3} exceeds limit {limit:.3}")]
    VelocityExceeded { name: String, value: f64, limit: f64 },

    #[error("Joint {name} {field} is not finite: {value}")]
    NonFinite {
        name: String,
        field: &'static str,
        value: f64,
    },
}

/// 安全限制集合
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SafetyLimits {
    pub joints: Vec<JointLimit>,
}

impl SafetyLimits {
    /// 从关节布局提取限制
    pub fn from_layout(layout: &JointLayout) -> Self {
        Self {
            joints: layout
                .joints
                .iter()
                .map(|joint| JointLimit {
                    name: joint.name.clone(),
                    min_position: joint.min_position,
                    max_position: joint.max_position,
                    max_velocity: joint.max_velocity,
                })
                .collect(),
        }
    }

    /// 按名称查找限制
    pub fn limit(&self, name: &str) -> Option<&JointLimit> {
        self.joints.iter().find(|limit| limit.name == name)
    }

    /// 检查关节位置是否在限制内
    ///
    /// 未知关节和非有限值（NaN/∞）返回 false。
    pub fn check_position(&self, name: &str, position: f64) -> bool {
        match self.limit(name) {
            Some(limit) => {
                position.is_finite()
                    && limit.min_position.is_none_or(|min| position >= min)
                    && limit.max_position.is_none_or(|max| position <= max)
            }
            None => false,
        }
    }

    /// 检查关节速度是否在限制内
    ///
    /// 未知关节和非有限值（NaN/∞）返回 false。
    pub fn check_velocity(&self, name: &str, velocity: f64) -> bool {
        match self.limit(name) {
            Some(limit) => {
                velocity.is_finite() && limit.max_velocity.is_none_or(|max| velocity.abs() <= max)
            }
            None => false,
        }
    }

    /// 检查轨迹点中的全部关节
    ///
    /// 按轨迹点中的关节顺序返回全部违规；为空表示通过。
    /// 与 [`check_position`](Self::check_position)/[`check_velocity`](Self::check_velocity)
    /// 的判定一致：非有限值总是违规。
    pub fn check_point(&self, point: &JointTrajectoryPoint) -> Vec<LimitViolation> {
        let mut violations = Vec::new();

        for target in point {
            let (name, position, velocity, _) = target.get();
            let Some(limit) = self.limit(name) else {
                violations.push(LimitViolation::UnknownJoint {
                    name: name.to_string(),
                });
                continue;
            };

            if !position.is_finite() {
                violations.push(LimitViolation::NonFinite {
                    name: name.to_string(),
                    field: "position",
                    value: position,
                });
            } else {
                if let Some(min) = limit.min_position {
                    if position < min {
                        violations.push(LimitViolation::PositionBelowMin {
                            name: name.to_string(),
                            value: position,
                            limit: min,
                        });
                    }
                }
                if let Some(max) = limit.max_position {
                    if position > max {
                        violations.push(LimitViolation::PositionAboveMax {
                            name: name.to_string(),
                            value: position,
                            limit: max,
                        });
                    }
                }
            }

            if !velocity.is_finite() {
                violations.push(LimitViolation::NonFinite {
                    name: name.to_string(),
                    field: "velocity",
                    value: velocity,
                });
            } else if let Some(max) = limit.max_velocity {
                if velocity.abs() > max {
                    violations.push(LimitViolation::VelocityExceeded {
                        name: name.to_string(),
                        value: velocity,
                        limit: max,
                    });
                }
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JointConfig;

    fn limits() -> SafetyLimits {
        let mut pan = JointConfig::new("pan", 1);
        pan.min_position = Some(-2.6);
        pan.max_position = Some(2.6);
        pan.max_velocity = Some(1.5);
        let tilt = JointConfig::new("tilt", 2);

        SafetyLimits::from_layout(&JointLayout::new(vec![pan, tilt]).unwrap())
    }

    #[test]
    fn test_position_limit() {
        let limits = limits();

        // 在限制内
        assert!(limits.check_position("pan", 0.0));
        assert!(limits.check_position("pan", 2.6));

        // 超出限制
        assert!(!limits.check_position("pan", 2.7));
        assert!(!limits.check_position("pan", -2.7));

        // 无限制的关节
        assert!(limits.check_position("tilt", 100.0));

        // 未知关节
        assert!(!limits.check_position("roll", 0.0));
    }

    #[test]
    fn test_velocity_limit() {
        let limits = limits();

        assert!(limits.check_velocity("pan", 1.5));
        assert!(limits.check_velocity("pan", -1.0));
        assert!(!limits.check_velocity("pan", -2.0));
        assert!(limits.check_velocity("tilt", 10.0));
    }

    #[test]
    fn test_check_point_passes() {
        let mut point = JointTrajectoryPoint::new();
        point.append("pan", 1.0, 0.5);
        point.append("tilt", -3.0, 4.0);

        assert!(limits().check_point(&point).is_empty());
    }

    #[test]
    fn test_check_point_reports_violations_in_order() {
        let mut point = JointTrajectoryPoint::new();
        point.append("pan", 3.0, -2.0);
        point.append("roll", 0.0, 0.0);

        let violations = limits().check_point(&point);

        assert_eq!(violations.len(), 3);
        assert!(matches!(violations[0], LimitViolation::PositionAboveMax { .. }));
        assert!(matches!(violations[1], LimitViolation::VelocityExceeded { .. }));
        assert_eq!(
            violations[2],
            LimitViolation::UnknownJoint {
                name: "roll".to_string()
            }
        );
        assert_eq!(
            violations[0].to_string(),
            "Joint pan position 3.000 above limit 2.600"
        );
    }

    #[test]
    fn test_check_point_does_not_modify_point() {
        let mut point = JointTrajectoryPoint::new();
        point.append("pan", -5.0, 0.0);
        let before = point.clone();

        let violations = limits().check_point(&point);

        assert!(matches!(violations[0], LimitViolation::PositionBelowMin { .. }));
        assert_eq!(point, before);
    }

    #[test]
    fn test_non_finite_target_is_violation() {
        let limits = limits();
        let mut point = JointTrajectoryPoint::new();
        point.append("pan", f64::NAN, f64::NAN);
        point.append("tilt", f64::INFINITY, 0.0);

        let violations = limits.check_point(&point);

        assert_eq!(violations.len(), 3);
        assert!(matches!(
            violations[0],
            LimitViolation::NonFinite { field: "position", .. }
        ));
        assert!(matches!(
            violations[1],
            LimitViolation::NonFinite { field: "velocity", .. }
        ));
        assert!(matches!(
            violations[2],
            LimitViolation::NonFinite { field: "position", .. }
        ));

        // 与单项检查保持一致
        assert!(!limits.check_position("pan", f64::NAN));
        assert!(!limits.check_velocity("pan", f64::NAN));
        assert!(!limits.check_position("tilt", f64::INFINITY));
    }
}
