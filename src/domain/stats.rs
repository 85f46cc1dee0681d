// ==========================================
// 医院护理排班系统 - 统计模型
// ==========================================
// 职责: 个人与团队统计的输出结构
// ==========================================

use crate::domain::types::Month;
use serde::{Deserialize, Serialize};

// ==========================================
// StaffStats - 个人月度统计
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaffStats {
    pub shift_count: u32,   // 工作班次数
    pub total_hours: f64,   // 估算总工时
    pub night_count: u32,   // 夜班数
    pub weekend_count: u32, // 周末班次数（周六/周日）
}

// ==========================================
// CoverageSummary - 团队日覆盖统计
// ==========================================
// per_day[i] = 第 i+1 天在班人数（仅工作班次, 不含信息行）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageSummary {
    pub month: Month,
    pub year: i32,
    pub staff_total: usize,
    pub mean_per_day: f64,
    pub per_day: Vec<u32>,
}
