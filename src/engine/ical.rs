// ==========================================
// 医院护理排班系统 - 日历导出
// ==========================================
// 职责: 生成单人单月的 iCalendar 文档
// 约定: 每个工作班次一条 VEVENT; 起止时刻取该班别的
//       策略时刻对, 夜班结束日期为次日
// ==========================================

use crate::config::ShiftPolicy;
use crate::domain::roster::StaffRecord;
use crate::domain::types::Month;
use crate::engine::classifier::classify;
use chrono::NaiveDate;

const CALENDAR_HEADER: &str = "BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:-//RosterPlanner//PT\n";
const CALENDAR_FOOTER: &str = "END:VCALENDAR\n";

/// 生成某护士某月的 iCalendar 文档
///
/// 折休/假期/无法解析的记号不产出事件。
pub fn staff_calendar(
    record: &StaffRecord,
    month: Month,
    year: i32,
    policy: &ShiftPolicy,
) -> String {
    let mut ics = String::from(CALENDAR_HEADER);

    for day in 1..=month.days_in(year) {
        let token = record.shift_on(day);
        let classification = classify(token, policy);
        if !classification.category.is_working() {
            continue;
        }
        let Some(pair) = policy.clock_pair(classification.category) else {
            continue;
        };
        let Some(start_date) = NaiveDate::from_ymd_opt(year, month.number(), day) else {
            continue;
        };

        // 跨午夜班次的结束日期落在次日
        let end_date = if pair.crosses_midnight() {
            start_date.succ_opt().unwrap_or(start_date)
        } else {
            start_date
        };

        ics.push_str("BEGIN:VEVENT\n");
        ics.push_str(&format!("SUMMARY:Turno {}\n", token.trim()));
        ics.push_str(&format!(
            "DTSTART:{}T{:02}0000\n",
            start_date.format("%Y%m%d"),
            pair.start_hour
        ));
        ics.push_str(&format!(
            "DTEND:{}T{:02}0000\n",
            end_date.format("%Y%m%d"),
            pair.end_hour
        ));
        ics.push_str(&format!("DESCRIPTION:Turno - {}\n", month.name()));
        ics.push_str("END:VEVENT\n");
    }

    ics.push_str(CALENDAR_FOOTER);
    ics
}
