//! 状态发布层
//!
//! `pan-tilt-types` 中的数据类型不做任何内部同步。本 crate 提供外部容器
//! [`StatusBoard`]，用于在一个写线程（控制循环/遥测生产者）和多个读线程
//! （状态上报、诊断）之间发布快照：
//!
//! - 整体替换（ArcSwap 无锁发布）：读者要么看到旧快照，要么看到新快照，不会看到撕裂的混合状态
//! - 读取为 Wait-Free（`ArcSwap::load`）
//! - 局部修改通过 read-copy-update 完成，旧快照保持不变

mod board;
mod error;

pub use board::{BoardSnapshot, StatusBoard};
pub use error::DriverError;
