// ==========================================
// 医院护理排班系统 - 导入结果模型
// ==========================================
// 职责: 单次导入的批次信息与逐表处理结果
// ==========================================

use crate::domain::types::Month;
use serde::{Deserialize, Serialize};

// ==========================================
// SkipReason - 表格被跳过的原因
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkipReason {
    NoMonthLabel,   // 表标签未命中任何规范月份名
    NoHeaderFound,  // 未找到日标题行
    NoRecordsFound, // 标题行之下没有有效的人员记录
}

// ==========================================
// SkippedTable - 被跳过的表
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedTable {
    pub label: String,
    pub reason: SkipReason,
}

// ==========================================
// ImportSummary - 导入汇总
// ==========================================
// 一次导入操作的完整结果; applied 为空且 declined 为空时
// 导入层会直接返回错误, 不会产出该汇总
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    pub batch_id: String,          // 批次标识 (UUID v4)
    pub source: String,            // 导入来源标签（文件名）
    pub applied: Vec<Month>,       // 已落库的月份
    pub declined: Vec<Month>,      // 用户拒绝覆盖的月份（非错误）
    pub skipped: Vec<SkippedTable>, // 被跳过的表及原因
}

impl ImportSummary {
    pub fn applied_any(&self) -> bool {
        !self.applied.is_empty()
    }
}
