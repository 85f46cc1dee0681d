// ==========================================
// 医院护理排班系统 - 月份标签解析
// ==========================================
// 职责: 从工作表名/文件名等自由文本解析规范月份
// ==========================================

use crate::domain::types::Month;

/// 在自由文本标签中解析规范月份名
///
/// 大小写不敏感的子串匹配; 按日历顺序返回第一个命中的月份。
/// 未命中返回 None, 调用方必须显式处理（不猜测缺省月份）。
pub fn resolve_month_label(label: &str) -> Option<Month> {
    let lower = label.to_lowercase();
    Month::ALL
        .into_iter()
        .find(|month| lower.contains(&month.name().to_lowercase()))
}
