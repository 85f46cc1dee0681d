// ==========================================
// 医院护理排班系统 - 领域类型定义
// ==========================================
// 职责: 班次类别与月份的基础枚举
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 班次类别 (Shift Category)
// ==========================================
// 分类规则见 engine/classifier.rs
// 序列化格式: SCREAMING_SNAKE_CASE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftCategory {
    Morning,   // 早班 (开始时间 < 10h)
    Interim,   // 中间班 (10h <= 开始 < 13h)
    Afternoon, // 下午班 (开始时间 >= 13h)
    Night,     // 夜班 (记号含 N)
    Off,       // 折休 (F / Fr / Folga / "-" / 空白)
    Holiday,   // 假期 (Aniv / Lf / Hol)
    Unknown,   // 无法解析的记号
}

impl ShiftCategory {
    /// 是否计入工作班次（工时、班次数、周末数均只统计工作班次）
    pub fn is_working(self) -> bool {
        matches!(
            self,
            ShiftCategory::Morning
                | ShiftCategory::Interim
                | ShiftCategory::Afternoon
                | ShiftCategory::Night
        )
    }
}

impl fmt::Display for ShiftCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftCategory::Morning => write!(f, "MORNING"),
            ShiftCategory::Interim => write!(f, "INTERIM"),
            ShiftCategory::Afternoon => write!(f, "AFTERNOON"),
            ShiftCategory::Night => write!(f, "NIGHT"),
            ShiftCategory::Off => write!(f, "OFF"),
            ShiftCategory::Holiday => write!(f, "HOLIDAY"),
            ShiftCategory::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

// ==========================================
// 月份 (Month)
// ==========================================
// 排班表使用葡萄牙语月份名作为规范词表,
// 快照 JSON 与工作表/文件名匹配均以这十二个名称为准
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Month {
    Janeiro,
    Fevereiro,
    #[serde(rename = "Março")]
    Marco,
    Abril,
    Maio,
    Junho,
    Julho,
    Agosto,
    Setembro,
    Outubro,
    Novembro,
    Dezembro,
}

impl Month {
    /// 按日历顺序排列的全部月份
    pub const ALL: [Month; 12] = [
        Month::Janeiro,
        Month::Fevereiro,
        Month::Marco,
        Month::Abril,
        Month::Maio,
        Month::Junho,
        Month::Julho,
        Month::Agosto,
        Month::Setembro,
        Month::Outubro,
        Month::Novembro,
        Month::Dezembro,
    ];

    /// 规范月份名（与快照键一致）
    pub fn name(self) -> &'static str {
        match self {
            Month::Janeiro => "Janeiro",
            Month::Fevereiro => "Fevereiro",
            Month::Marco => "Março",
            Month::Abril => "Abril",
            Month::Maio => "Maio",
            Month::Junho => "Junho",
            Month::Julho => "Julho",
            Month::Agosto => "Agosto",
            Month::Setembro => "Setembro",
            Month::Outubro => "Outubro",
            Month::Novembro => "Novembro",
            Month::Dezembro => "Dezembro",
        }
    }

    /// 月份序号（1-12）
    pub fn number(self) -> u32 {
        Month::ALL.iter().position(|m| *m == self).unwrap_or(0) as u32 + 1
    }

    /// 按序号取月份（1-12）
    pub fn from_number(n: u32) -> Option<Month> {
        if (1..=12).contains(&n) {
            Some(Month::ALL[(n - 1) as usize])
        } else {
            None
        }
    }

    /// 指定年份下本月的实际天数
    pub fn days_in(self, year: i32) -> u32 {
        match self {
            Month::Janeiro
            | Month::Marco
            | Month::Maio
            | Month::Julho
            | Month::Agosto
            | Month::Outubro
            | Month::Dezembro => 31,
            Month::Abril | Month::Junho | Month::Setembro | Month::Novembro => 30,
            Month::Fevereiro => {
                // 闰年判定交给 chrono
                if chrono::NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                    29
                } else {
                    28
                }
            }
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_category_is_working() {
        assert!(ShiftCategory::Morning.is_working());
        assert!(ShiftCategory::Night.is_working());
        assert!(!ShiftCategory::Off.is_working());
        assert!(!ShiftCategory::Holiday.is_working());
        assert!(!ShiftCategory::Unknown.is_working());
    }

    #[test]
    fn test_month_numbering() {
        assert_eq!(Month::Janeiro.number(), 1);
        assert_eq!(Month::Dezembro.number(), 12);
        assert_eq!(Month::from_number(8), Some(Month::Agosto));
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }

    #[test]
    fn test_month_days_in() {
        assert_eq!(Month::Janeiro.days_in(2026), 31);
        assert_eq!(Month::Abril.days_in(2026), 30);
        // 平年/闰年二月
        assert_eq!(Month::Fevereiro.days_in(2026), 28);
        assert_eq!(Month::Fevereiro.days_in(2024), 29);
    }

    #[test]
    fn test_month_serde_canonical_name() {
        // 快照键必须是规范葡语名称（含 Março 的重音）
        let json = serde_json::to_string(&Month::Marco).unwrap();
        assert_eq!(json, "\"Março\"");
        let back: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Month::Marco);
    }

    #[test]
    fn test_month_ordering_is_calendar_order() {
        assert!(Month::Janeiro < Month::Fevereiro);
        assert!(Month::Novembro < Month::Dezembro);
    }
}
