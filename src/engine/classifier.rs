// ==========================================
// 医院护理排班系统 - 班次分类器
// ==========================================
// 职责: 原始班次记号 → 语义类别 + 估算时长
// 约定: (记号, 策略) 的纯函数, 相同输入恒定输出;
//       无法解析的记号降级为 Unknown, 从不报错
// ==========================================

use crate::config::ShiftPolicy;
use crate::domain::types::ShiftCategory;
use serde::Serialize;

/// 折休词表（精确匹配修剪后的记号）
pub const OFF_TOKENS: &[&str] = &["F", "Fr", "Folga", "-"];

/// 假期词表（生日假/请假等, 同样不计工时）
pub const HOLIDAY_TOKENS: &[&str] = &["Aniv", "Lf", "Hol"];

/// 夜班标记字符
const NIGHT_MARKER: char = 'N';

// ==========================================
// Classification - 分类结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub category: ShiftCategory,
    pub duration_hours: f64,
}

impl Classification {
    fn new(category: ShiftCategory, duration_hours: f64) -> Self {
        Self {
            category,
            duration_hours,
        }
    }
}

/// 分类一个班次记号
///
/// # 规则（按优先级）
/// 1. 空白或折休词表 → Off, 0h
/// 2. 假期词表 → Holiday, 0h（Aniv 含字母 N, 必须先于夜班规则）
/// 3. 记号含夜班标记 N → Night, 时长取策略缺省值
///    （夜班跨午夜, 记号即使带时段其 止-起 也为负, 不可用）
/// 4. 时段记号 "起-止"（逗号小数, 可带尾随单位字母）
///    → 时长 = 止 - 起; 类别按开始时刻:
///      < 10 → Morning, 10..13 → Interim, >= 13 → Afternoon
/// 5. 其余 → Unknown, 0h
pub fn classify(token: &str, policy: &ShiftPolicy) -> Classification {
    let token = token.trim();

    if token.is_empty() || OFF_TOKENS.contains(&token) {
        return Classification::new(ShiftCategory::Off, 0.0);
    }
    if HOLIDAY_TOKENS.contains(&token) {
        return Classification::new(ShiftCategory::Holiday, 0.0);
    }

    if token.to_uppercase().contains(NIGHT_MARKER) {
        return Classification::new(ShiftCategory::Night, policy.night_duration_hours);
    }

    if let Some((start, end)) = parse_range(token) {
        let category = if start < 10.0 {
            ShiftCategory::Morning
        } else if start < 13.0 {
            ShiftCategory::Interim
        } else {
            ShiftCategory::Afternoon
        };
        return Classification::new(category, end - start);
    }

    Classification::new(ShiftCategory::Unknown, 0.0)
}

/// 解析 "8-16" / "7,5-15,5" / "9-17h" 形式的时段记号
fn parse_range(token: &str) -> Option<(f64, f64)> {
    let mut halves = token.splitn(2, '-');
    let start = parse_hour(halves.next()?)?;
    let end = parse_hour(halves.next()?)?;
    Some((start, end))
}

/// 解析单边时刻: 十进制逗号归一为点, 剥离尾随单位字母
fn parse_hour(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    let trimmed = normalized.trim_end_matches(|c: char| c.is_alphabetic());
    trimmed.parse().ok()
}
