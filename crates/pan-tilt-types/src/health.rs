//! 舵机健康快照

use std::fmt;

/// 舵机总线 ID
///
/// 具体编码由外部舵机总线驱动定义，这里视为不透明整数。
/// `ServoId::NONE` 表示未设置。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ServoId(pub i32);

impl ServoId {
    /// 未设置
    pub const NONE: ServoId = ServoId(-1);

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }

    #[inline]
    pub const fn is_some(self) -> bool {
        !self.is_none()
    }

    /// 转换为 `Option`，`NONE` 映射为 `None`
    #[inline]
    pub const fn get(self) -> Option<i32> {
        if self.is_none() { None } else { Some(self.0) }
    }
}

impl Default for ServoId {
    fn default() -> Self {
        Self::NONE
    }
}

impl From<i32> for ServoId {
    fn from(value: i32) -> Self {
        ServoId(value)
    }
}

impl fmt::Display for ServoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(id) => write!(f, "{}", id),
            None => write!(f, "none"),
        }
    }
}

/// 舵机告警位掩码
///
/// 位定义由外部舵机总线驱动给出，这里只区分"无告警"与"有告警"。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AlarmBits(pub u32);

impl AlarmBits {
    /// 无告警
    pub const NONE: AlarmBits = AlarmBits(0);

    #[inline]
    pub const fn is_clear(self) -> bool {
        self.0 == Self::NONE.0
    }

    /// 是否包含 `bits` 中的全部位
    #[inline]
    pub const fn contains(self, bits: u32) -> bool {
        self.0 & bits == bits
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl From<u32> for AlarmBits {
    fn from(value: u32) -> Self {
        AlarmBits(value)
    }
}

impl fmt::Display for AlarmBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

/// 单个舵机的健康快照
///
/// 透明的时间点快照：字段直接由持有者读写，没有跨字段校验。
/// 更新时整体替换，不做部分修改。
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServoHealth {
    /// 舵机 ID
    pub servo_id: ServoId,
    /// 温度（工程单位）
    pub temperature: f64,
    /// 电压（工程单位）
    pub voltage: f64,
    /// 告警位掩码
    pub alarms: AlarmBits,
}

impl ServoHealth {
    /// 创建健康快照
    pub fn new(
        servo_id: impl Into<ServoId>,
        temperature: f64,
        voltage: f64,
        alarms: impl Into<AlarmBits>,
    ) -> Self {
        Self {
            servo_id: servo_id.into(),
            temperature,
            voltage,
            alarms: alarms.into(),
        }
    }

    /// 是否存在告警
    #[inline]
    pub fn is_alarmed(&self) -> bool {
        !self.alarms.is_clear()
    }
}
