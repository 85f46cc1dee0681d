// ==========================================
// 医院护理排班系统 - 统计引擎
// ==========================================
// 职责: 个人月度统计与团队日覆盖
// 约定: 只遍历当月实际天数（shifts 恒有 1..=31 条目）
// ==========================================

use crate::config::ShiftPolicy;
use crate::domain::roster::StaffRecord;
use crate::domain::stats::{CoverageSummary, StaffStats};
use crate::domain::types::{Month, ShiftCategory};
use crate::engine::classifier::classify;
use chrono::{Datelike, NaiveDate, Weekday};

/// 某日是否周末（周六/周日）
pub fn is_weekend(year: i32, month: Month, day: u32) -> bool {
    NaiveDate::from_ymd_opt(year, month.number(), day)
        .map(|date| matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
        .unwrap_or(false)
}

/// 个人月度统计
///
/// 只统计工作班次（Morning/Interim/Afternoon/Night）:
/// 班次数、估算工时（来自分类器时长）、夜班数、周末班次数。
pub fn staff_stats(
    record: &StaffRecord,
    month: Month,
    year: i32,
    policy: &ShiftPolicy,
) -> StaffStats {
    let mut stats = StaffStats {
        shift_count: 0,
        total_hours: 0.0,
        night_count: 0,
        weekend_count: 0,
    };

    for day in 1..=month.days_in(year) {
        let classification = classify(record.shift_on(day), policy);
        if !classification.category.is_working() {
            continue;
        }

        stats.shift_count += 1;
        stats.total_hours += classification.duration_hours;
        if classification.category == ShiftCategory::Night {
            stats.night_count += 1;
        }
        if is_weekend(year, month, day) {
            stats.weekend_count += 1;
        }
    }

    stats
}

/// 团队日覆盖统计
///
/// 信息行（is_support）不是真实人员, 不计入覆盖。
pub fn coverage(
    roster: &[StaffRecord],
    month: Month,
    year: i32,
    policy: &ShiftPolicy,
) -> CoverageSummary {
    let days = month.days_in(year);
    let mut per_day = vec![0u32; days as usize];
    let mut staff_total = 0usize;

    for record in roster {
        if record.is_support {
            continue;
        }
        staff_total += 1;

        for day in 1..=days {
            if classify(record.shift_on(day), policy).category.is_working() {
                per_day[(day - 1) as usize] += 1;
            }
        }
    }

    let mean_per_day = if days > 0 {
        per_day.iter().sum::<u32>() as f64 / days as f64
    } else {
        0.0
    };

    CoverageSummary {
        month,
        year,
        staff_total,
        mean_per_day,
        per_day,
    }
}
