// ==========================================
// 医院护理排班系统 - 班次策略配置
// ==========================================
// 职责: 夜班缺省时长与各班别起止时刻
// 说明: 这些数值在源数据中并无依据可推导, 因此作为
//       可配置策略对待, 缺省值取运营方使用的常规时刻
// ==========================================

use crate::domain::types::ShiftCategory;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

// ==========================================
// ClockPair - 起止时刻（整点小时）
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockPair {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl ClockPair {
    pub const fn new(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    /// 结束时刻是否落在次日（跨午夜）
    pub fn crosses_midnight(&self) -> bool {
        self.end_hour <= self.start_hour
    }
}

// ==========================================
// ShiftPolicy - 班次策略
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftPolicy {
    /// 夜班缺省时长（小时）; 夜班记号不携带可靠的结束时刻
    pub night_duration_hours: f64,

    // ===== 日历导出使用的各班别起止时刻 =====
    pub morning: ClockPair,
    pub interim: ClockPair,
    pub afternoon: ClockPair,
    pub night: ClockPair,
}

impl Default for ShiftPolicy {
    fn default() -> Self {
        Self {
            night_duration_hours: 10.0,
            morning: ClockPair::new(8, 16),
            interim: ClockPair::new(10, 19),
            afternoon: ClockPair::new(14, 22),
            night: ClockPair::new(22, 8),
        }
    }
}

impl ShiftPolicy {
    /// 工作班别对应的起止时刻; 非工作类别返回 None
    pub fn clock_pair(&self, category: ShiftCategory) -> Option<ClockPair> {
        match category {
            ShiftCategory::Morning => Some(self.morning),
            ShiftCategory::Interim => Some(self.interim),
            ShiftCategory::Afternoon => Some(self.afternoon),
            ShiftCategory::Night => Some(self.night),
            _ => None,
        }
    }

    /// 从 JSON 文件加载策略
    ///
    /// 文件不存在或解析失败时退回缺省值（记录 warn, 不中断启动）。
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(policy) => policy,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "班次策略文件解析失败, 使用缺省策略");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "班次策略文件读取失败, 使用缺省策略");
                Self::default()
            }
        }
    }
}
