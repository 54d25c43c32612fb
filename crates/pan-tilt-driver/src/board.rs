//! 状态看板
//!
//! 持有最新的 [`RobotStatus`] 与 [`TrajectoryFeedback`] 快照。

use crate::error::DriverError;
use arc_swap::ArcSwap;
use pan_tilt_types::{JointTrajectoryPoint, RobotStatus, ServoHealth, TrajectoryFeedback};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{trace, warn};

/// 状态与轨迹反馈的组合快照
///
/// 两个字段分别来自两次 `ArcSwap::load`，各自完整，但彼此之间不是同一时刻发布的。
#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    pub status: Arc<RobotStatus>,
    pub feedback: Arc<TrajectoryFeedback>,
    /// 读取时的发布计数
    pub generation: u64,
}

/// 状态看板
///
/// # 线程安全
///
/// - 发布：整体替换（`ArcSwap::store`），对读者原子可见
/// - 读取：Wait-Free（`ArcSwap::load`），返回 `Arc` 快照
/// - 修改：`update_*` 使用 `rcu`，闭包作用于私有副本后整体发布；
///   存在并发写者时闭包可能被重复调用
///
/// 设计为单写多读。多个写者同样安全，但其先后顺序不确定。
///
/// # 示例
///
/// ```rust
/// use pan_tilt_driver::StatusBoard;
/// use pan_tilt_types::{RobotMode, RobotStatus, TriState};
///
/// let board = StatusBoard::new();
///
/// let mut status = RobotStatus::new();
/// status.mode = RobotMode::Auto;
/// board.publish_status(status);
///
/// board.update_status(|s| s.is_in_motion = TriState::True);
///
/// let current = board.status();
/// assert_eq!(current.mode, RobotMode::Auto);
/// assert!(current.is_in_motion.is_true());
/// ```
#[derive(Debug)]
pub struct StatusBoard {
    status: ArcSwap<RobotStatus>,
    feedback: ArcSwap<TrajectoryFeedback>,
    generation: AtomicU64,
}

impl StatusBoard {
    /// 创建空看板（默认状态、空反馈）
    pub fn new() -> Self {
        Self::with_initial(RobotStatus::default(), TrajectoryFeedback::default())
    }

    /// 以初始快照创建
    pub fn with_initial(status: RobotStatus, feedback: TrajectoryFeedback) -> Self {
        Self {
            status: ArcSwap::from_pointee(status),
            feedback: ArcSwap::from_pointee(feedback),
            generation: AtomicU64::new(0),
        }
    }

    /// 发布计数
    ///
    /// 每次成功发布（状态或反馈）后递增，读者可据此判断是否有新快照。
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    fn bump(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::AcqRel) + 1
    }

    // ==================== RobotStatus ====================

    /// 整体发布新的状态快照
    pub fn publish_status(&self, status: RobotStatus) {
        self.status.store(Arc::new(status));
        let generation = self.bump();
        trace!("RobotStatus published: generation={}", generation);
    }

    /// 当前状态快照（无锁）
    pub fn status(&self) -> Arc<RobotStatus> {
        self.status.load_full()
    }

    /// 当前状态的深拷贝
    pub fn status_snapshot(&self) -> RobotStatus {
        self.status.load().as_ref().clone()
    }

    /// 以 read-copy-update 方式修改状态
    ///
    /// 闭包作用于当前快照的副本，完成后整体发布。
    /// 之前通过 [`status`](Self::status) 取得的 `Arc` 不受影响。
    pub fn update_status<F>(&self, mut f: F)
    where
        F: FnMut(&mut RobotStatus),
    {
        self.status.rcu(|old| {
            let mut new = (**old).clone();
            f(&mut new);
            Arc::new(new)
        });
        let generation = self.bump();
        trace!("RobotStatus updated: generation={}", generation);
    }

    /// 清除状态标志（保留舵机健康列表）并发布
    pub fn clear_status(&self) {
        self.update_status(RobotStatus::clear);
    }

    /// 整体替换一个舵机的健康快照
    ///
    /// # 错误
    ///
    /// `index` 超出当前舵机健康列表长度时返回 [`DriverError::ServoIndexOutOfRange`]，
    /// 看板保持不变。
    pub fn replace_servo_health(
        &self,
        index: usize,
        health: ServoHealth,
    ) -> Result<(), DriverError> {
        let mut outcome = Ok(());
        // 边界检查与写入在同一次 rcu 中完成，避免与缩短列表的写者竞争
        self.status.rcu(|old| {
            let len = old.servo_health.len();
            if index >= len {
                outcome = Err(DriverError::ServoIndexOutOfRange { index, len });
                return Arc::clone(old);
            }
            outcome = Ok(());
            let mut new = (**old).clone();
            new.servo_health[index] = health.clone();
            Arc::new(new)
        });

        match outcome {
            Ok(()) => {
                let generation = self.bump();
                trace!(
                    "Servo health replaced: index={}, generation={}",
                    index, generation
                );
                Ok(())
            }
            Err(err) => {
                warn!("Rejected servo health update: {}", err);
                Err(err)
            }
        }
    }

    // ==================== TrajectoryFeedback ====================

    /// 整体发布新的轨迹反馈
    pub fn publish_feedback(&self, feedback: TrajectoryFeedback) {
        let desired_points = feedback.num_points();
        self.feedback.store(Arc::new(feedback));
        let generation = self.bump();
        trace!(
            "TrajectoryFeedback published: generation={}, desired_points={}",
            generation, desired_points
        );
    }

    /// 以期望和实际轨迹点发布反馈
    pub fn publish_trajectory(&self, desired: JointTrajectoryPoint, actual: JointTrajectoryPoint) {
        self.publish_feedback(TrajectoryFeedback::from_parts(desired, actual));
    }

    /// 当前轨迹反馈（无锁）
    pub fn feedback(&self) -> Arc<TrajectoryFeedback> {
        self.feedback.load_full()
    }

    /// 当前轨迹反馈的深拷贝
    pub fn feedback_snapshot(&self) -> TrajectoryFeedback {
        self.feedback.load().as_ref().clone()
    }

    /// 以 read-copy-update 方式修改轨迹反馈
    pub fn update_feedback<F>(&self, mut f: F)
    where
        F: FnMut(&mut TrajectoryFeedback),
    {
        self.feedback.rcu(|old| {
            let mut new = (**old).clone();
            f(&mut new);
            Arc::new(new)
        });
        let generation = self.bump();
        trace!("TrajectoryFeedback updated: generation={}", generation);
    }

    // ==================== 组合 ====================

    /// 同时读取状态和反馈
    pub fn capture_snapshot(&self) -> BoardSnapshot {
        let generation = self.generation();
        BoardSnapshot {
            status: self.status(),
            feedback: self.feedback(),
            generation,
        }
    }
}

impl Default for StatusBoard {
    fn default() -> Self {
        Self::new()
    }
}
