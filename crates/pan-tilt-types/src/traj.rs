//! 关节目标与轨迹
//!
//! - [`JointTarget`]: 单个关节的目标位置、速度、加速度
//! - [`JointTrajectoryPoint`]: 共享同一时间偏移的一组关节目标（多关节同步路点）
//! - [`TrajectoryFeedback`]: 期望（Desired）与实际（Actual）两条轨迹点

use std::ops::{Index, IndexMut};

/// 单个关节的运动学目标
///
/// 位置、速度、加速度均为不透明的目标值，不做范围检查。
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JointTarget {
    name: String,
    /// 关节位置（rad）
    position: f64,
    /// 关节速度（rad/s）
    velocity: f64,
    /// 关节加速度（rad/s²），下游目前仅作参考
    acceleration: f64,
}

impl JointTarget {
    /// 创建完整指定的关节目标
    pub fn new(name: impl Into<String>, position: f64, velocity: f64, acceleration: f64) -> Self {
        Self {
            name: name.into(),
            position,
            velocity,
            acceleration,
        }
    }

    /// 一次性读取全部字段
    ///
    /// 返回 `(name, position, velocity, acceleration)`，四个值来自同一次借用，
    /// 因此是一致的快照。
    #[inline]
    pub fn get(&self) -> (&str, f64, f64, f64) {
        (&self.name, self.position, self.velocity, self.acceleration)
    }

    /// 关节名称
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 关节位置（rad）
    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// 关节速度（rad/s）
    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// 关节加速度（rad/s²）
    #[inline]
    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }
}

/// 多关节轨迹点
///
/// 有序的关节目标序列（索引顺序即关节顺序，由生产者和消费者约定），
/// 外加一个时间偏移 `time_from_start`。
///
/// 不按名称排序或去重。
///
/// # 索引访问
///
/// `point[i]` 在 `i >= num_points()` 时会 panic（切片越界检查）。
/// 热路径上需要零开销访问时，先用 [`num_points`](Self::num_points) 校验边界，
/// 再调用 [`get_unchecked`](Self::get_unchecked)。
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JointTrajectoryPoint {
    joints: Vec<JointTarget>,
    /// 时间偏移（最小时间刻度，如毫秒），含义由外部规划器定义
    time_from_start: u32,
}

impl JointTrajectoryPoint {
    /// 创建空轨迹点
    pub fn new() -> Self {
        Self::default()
    }

    /// 预分配容量
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            joints: Vec::with_capacity(capacity),
            time_from_start: 0,
        }
    }

    /// 在末尾追加一个关节目标（加速度为 0.0）
    pub fn append(&mut self, name: impl Into<String>, position: f64, velocity: f64) {
        self.append_with_acceleration(name, position, velocity, 0.0);
    }

    /// 在末尾追加一个关节目标
    pub fn append_with_acceleration(
        &mut self,
        name: impl Into<String>,
        position: f64,
        velocity: f64,
        acceleration: f64,
    ) {
        self.joints.push(JointTarget::new(name, position, velocity, acceleration));
    }

    /// 关节目标数量
    #[inline]
    pub fn num_points(&self) -> usize {
        self.joints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// 时间偏移
    #[inline]
    pub fn time_from_start(&self) -> u32 {
        self.time_from_start
    }

    /// 设置时间偏移
    #[inline]
    pub fn set_time_from_start(&mut self, time_from_start: u32) {
        self.time_from_start = time_from_start;
    }

    /// 带边界检查的读取
    #[inline]
    pub fn get(&self, index: usize) -> Option<&JointTarget> {
        self.joints.get(index)
    }

    /// 带边界检查的可变读取
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut JointTarget> {
        self.joints.get_mut(index)
    }

    /// 无边界检查的读取
    ///
    /// # Safety
    ///
    /// 调用者必须保证 `index < self.num_points()`，否则为未定义行为。
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &JointTarget {
        // SAFETY: 由调用者保证 index 在范围内
        unsafe { self.joints.get_unchecked(index) }
    }

    /// 无边界检查的可变读取
    ///
    /// # Safety
    ///
    /// 调用者必须保证 `index < self.num_points()`，否则为未定义行为。
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut JointTarget {
        // SAFETY: 由调用者保证 index 在范围内
        unsafe { self.joints.get_unchecked_mut(index) }
    }

    /// 按名称查找关节（线性扫描，返回第一个匹配）
    pub fn find(&self, name: &str) -> Option<&JointTarget> {
        self.joints.iter().find(|joint| joint.name == name)
    }

    /// 按关节顺序迭代
    pub fn iter(&self) -> std::slice::Iter<'_, JointTarget> {
        self.joints.iter()
    }

    /// 关节目标切片
    pub fn as_slice(&self) -> &[JointTarget] {
        &self.joints
    }

    /// 清空全部关节目标，并将时间偏移归零
    pub fn clear(&mut self) {
        self.joints.clear();
        self.time_from_start = 0;
    }
}

impl Index<usize> for JointTrajectoryPoint {
    type Output = JointTarget;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.joints[index]
    }
}

impl IndexMut<usize> for JointTrajectoryPoint {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.joints[index]
    }
}

impl<'a> IntoIterator for &'a JointTrajectoryPoint {
    type Item = &'a JointTarget;
    type IntoIter = std::slice::Iter<'a, JointTarget>;

    fn into_iter(self) -> Self::IntoIter {
        self.joints.iter()
    }
}

/// 轨迹反馈中的角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(usize)]
pub enum TrajectoryRole {
    /// 最近一次下发的期望轨迹（默认）
    #[default]
    Desired = 0,
    /// 当前实际轨迹
    Actual = 1,
}

impl TrajectoryRole {
    /// 角色数量
    pub const COUNT: usize = 2;

    /// 所有角色
    pub const ALL: [TrajectoryRole; 2] = [TrajectoryRole::Desired, TrajectoryRole::Actual];

    /// 从索引转换
    ///
    /// 1 映射为 `Actual`，其余任何值（包括越界值）都回落为 `Desired`。
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        match index {
            1 => TrajectoryRole::Actual,
            _ => TrajectoryRole::Desired,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// 期望/实际轨迹反馈
///
/// 固定包含两个独立的 [`JointTrajectoryPoint`]，两者的关节数量和内容可以不同。
///
/// # 回落语义
///
/// - 未限定角色的查询（[`time_from_start`](Self::time_from_start)、
///   [`num_points`](Self::num_points)）总是报告 `Desired`
/// - 按 `usize` 索引时，越界索引回落为 `Desired`，不会 panic
///
/// ```rust
/// use pan_tilt_types::TrajectoryFeedback;
///
/// let mut feedback = TrajectoryFeedback::new();
/// feedback[0].append("pan", 1.0, 0.0);
/// assert_eq!(feedback[7].num_points(), 1); // 回落为 Desired
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrajectoryFeedback {
    trajectory: [JointTrajectoryPoint; TrajectoryRole::COUNT],
}

impl TrajectoryFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由期望和实际轨迹点构建
    pub fn from_parts(desired: JointTrajectoryPoint, actual: JointTrajectoryPoint) -> Self {
        Self {
            trajectory: [desired, actual],
        }
    }

    /// 期望轨迹的时间偏移
    #[inline]
    pub fn time_from_start(&self) -> u32 {
        self.desired().time_from_start()
    }

    /// 期望轨迹的关节数量
    #[inline]
    pub fn num_points(&self) -> usize {
        self.desired().num_points()
    }

    #[inline]
    pub fn desired(&self) -> &JointTrajectoryPoint {
        &self.trajectory[TrajectoryRole::Desired.index()]
    }

    #[inline]
    pub fn desired_mut(&mut self) -> &mut JointTrajectoryPoint {
        &mut self.trajectory[TrajectoryRole::Desired.index()]
    }

    #[inline]
    pub fn actual(&self) -> &JointTrajectoryPoint {
        &self.trajectory[TrajectoryRole::Actual.index()]
    }

    #[inline]
    pub fn actual_mut(&mut self) -> &mut JointTrajectoryPoint {
        &mut self.trajectory[TrajectoryRole::Actual.index()]
    }

    /// 清空两条轨迹
    pub fn clear(&mut self) {
        for point in &mut self.trajectory {
            point.clear();
        }
    }
}

impl Index<TrajectoryRole> for TrajectoryFeedback {
    type Output = JointTrajectoryPoint;

    #[inline]
    fn index(&self, role: TrajectoryRole) -> &Self::Output {
        &self.trajectory[role.index()]
    }
}

impl IndexMut<TrajectoryRole> for TrajectoryFeedback {
    #[inline]
    fn index_mut(&mut self, role: TrajectoryRole) -> &mut Self::Output {
        &mut self.trajectory[role.index()]
    }
}

impl Index<usize> for TrajectoryFeedback {
    type Output = JointTrajectoryPoint;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self[TrajectoryRole::from_index(index)]
    }
}

impl IndexMut<usize> for TrajectoryFeedback {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self[TrajectoryRole::from_index(index)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joint_target_default_is_zeroed() {
        let target = JointTarget::default();
        assert_eq!(target.get(), ("", 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_joint_target_get_returns_all_fields() {
        let target = JointTarget::new("pan", 1.25, -0.5, 0.75);
        let (name, position, velocity, acceleration) = target.get();
        assert_eq!(name, "pan");
        assert_eq!(position, 1.25);
        assert_eq!(velocity, -0.5);
        assert_eq!(acceleration, 0.75);
    }

    #[test]
    fn test_joint_target_clone_is_independent() {
        let original = JointTarget::new("tilt", 0.3, 0.1, 0.0);
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy = JointTarget::new("pan", copy.position() + 1.0, 0.0, 0.0);

        assert_eq!(original.get(), ("tilt", 0.3, 0.1, 0.0));
        assert_eq!(copy.name(), "pan");
    }

    #[test]
    fn test_append_keeps_order_and_default_acceleration() {
        let mut point = JointTrajectoryPoint::new();
        point.append("pan", 0.1, 0.2);
        point.append_with_acceleration("tilt", -0.3, 0.4, 2.5);

        assert_eq!(point.num_points(), 2);
        assert_eq!(point[0].get(), ("pan", 0.1, 0.2, 0.0));
        assert_eq!(point[1].get(), ("tilt", -0.3, 0.4, 2.5));
    }

    #[test]
    fn test_append_does_not_deduplicate_names() {
        let mut point = JointTrajectoryPoint::new();
        point.append("pan", 0.1, 0.0);
        point.append("pan", 0.2, 0.0);

        assert_eq!(point.num_points(), 2);
        // find 返回第一个匹配
        assert_eq!(point.find("pan").map(JointTarget::position), Some(0.1));
    }

    #[test]
    fn test_index_mut_replaces_target() {
        let mut point = JointTrajectoryPoint::new();
        point.append("pan", 0.0, 0.0);
        point[0] = JointTarget::new("pan", 1.0, 0.5, 0.0);

        assert_eq!(point[0].position(), 1.0);
        assert_eq!(point[0].velocity(), 0.5);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let mut point = JointTrajectoryPoint::new();
        point.append("pan", 0.0, 0.0);
        let _ = &point[1];
    }

    #[test]
    fn test_checked_get_out_of_range() {
        let mut point = JointTrajectoryPoint::new();
        point.append("pan", 0.0, 0.0);

        assert!(point.get(0).is_some());
        assert!(point.get(1).is_none());
        assert!(point.get_mut(5).is_none());
    }

    #[test]
    fn test_get_unchecked_within_bounds() {
        let mut point = JointTrajectoryPoint::with_capacity(2);
        point.append("pan", 0.4, 0.0);
        point.append("tilt", 0.8, 0.0);

        for i in 0..point.num_points() {
            // SAFETY: i < num_points()
            let target = unsafe { point.get_unchecked(i) };
            assert_eq!(target.name(), if i == 0 { "pan" } else { "tilt" });
        }

        // SAFETY: 1 < num_points()
        unsafe {
            *point.get_unchecked_mut(1) = JointTarget::new("tilt", -0.8, 0.0, 0.0);
        }
        assert_eq!(point[1].position(), -0.8);
    }

    #[test]
    fn test_time_from_start_accessors() {
        let mut point = JointTrajectoryPoint::new();
        assert_eq!(point.time_from_start(), 0);

        point.set_time_from_start(1500);
        assert_eq!(point.time_from_start(), 1500);
    }

    #[test]
    fn test_clear_erases_everything() {
        let mut point = JointTrajectoryPoint::new();
        point.append("pan", 0.1, 0.0);
        point.append("tilt", 0.2, 0.0);
        point.set_time_from_start(42);

        point.clear();

        assert_eq!(point.num_points(), 0);
        assert!(point.is_empty());
        assert_eq!(point.time_from_start(), 0);
    }

    #[test]
    fn test_iteration_follows_append_order() {
        let mut point = JointTrajectoryPoint::new();
        for name in ["a", "b", "c"] {
            point.append(name, 0.0, 0.0);
        }

        let names: Vec<&str> = point.iter().map(JointTarget::name).collect();
        assert_eq!(names, ["a", "b", "c"]);

        let count = (&point).into_iter().count();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_role_from_index_fallback() {
        assert_eq!(TrajectoryRole::from_index(0), TrajectoryRole::Desired);
        assert_eq!(TrajectoryRole::from_index(1), TrajectoryRole::Actual);
        assert_eq!(TrajectoryRole::from_index(2), TrajectoryRole::Desired);
        assert_eq!(TrajectoryRole::from_index(usize::MAX), TrajectoryRole::Desired);
    }

    fn sample_feedback() -> TrajectoryFeedback {
        let mut desired = JointTrajectoryPoint::new();
        desired.append("pan", 0.1, 0.0);
        desired.append("tilt", 0.2, 0.0);
        desired.append("roll", 0.3, 0.0);
        desired.set_time_from_start(100);

        let mut actual = JointTrajectoryPoint::new();
        actual.append("pan", 0.09, 0.0);
        actual.set_time_from_start(95);

        TrajectoryFeedback::from_parts(desired, actual)
    }

    #[test]
    fn test_feedback_unqualified_queries_report_desired() {
        let feedback = sample_feedback();
        assert_eq!(feedback.num_points(), 3);
        assert_eq!(feedback.time_from_start(), 100);
    }

    #[test]
    fn test_feedback_indexing() {
        let feedback = sample_feedback();

        assert_eq!(feedback[1].num_points(), 1);
        assert_eq!(&feedback[1], feedback.actual());
        assert_eq!(&feedback[TrajectoryRole::Actual], feedback.actual());

        // 越界索引回落为 Desired
        assert_eq!(&feedback[7], &feedback[0]);
        assert_eq!(&feedback[7], feedback.desired());
    }

    #[test]
    fn test_feedback_index_mut_fallback_writes_desired() {
        let mut feedback = TrajectoryFeedback::new();
        feedback[99].append("pan", 1.0, 0.0);

        assert_eq!(feedback.desired().num_points(), 1);
        assert!(feedback.actual().is_empty());
    }

    #[test]
    fn test_feedback_clear_clears_both_roles() {
        let mut feedback = sample_feedback();
        feedback.clear();

        for role in TrajectoryRole::ALL {
            assert_eq!(feedback[role].num_points(), 0);
            assert_eq!(feedback[role].time_from_start(), 0);
        }
    }

    #[test]
    fn test_feedback_clone_is_deep() {
        let original = sample_feedback();
        let mut copy = original.clone();
        copy.actual_mut().append("tilt", 0.0, 0.0);
        copy.desired_mut().clear();

        assert_eq!(original.num_points(), 3);
        assert_eq!(original.actual().num_points(), 1);
    }
}
