// ==========================================
// 医院护理排班系统 - 串行日期还原
// ==========================================
// 背景: 操作者输入的时段记号（如 "8-16"）形似日期,
//       会被电子表格引擎转成内部日期序号（如 45885）
// ==========================================

use chrono::{Datelike, Duration, NaiveDate};

/// 串行日期阈值
///
/// 超过该值的数字单元格视为被误转的日期序号
/// （40000 约对应 2009 年之后, 真实班次时刻不可能到达该量级）。
pub const SERIAL_DATE_THRESHOLD: f64 = 40000.0;

/// 数字单元格是否疑似串行日期
pub fn looks_like_serial(value: f64) -> bool {
    value > SERIAL_DATE_THRESHOLD
}

/// 串行序号 → 日历日期（纪元 1899-12-30）
fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_signed(Duration::days(serial.trunc() as i64))
}

/// 将串行日期还原为操作者原本输入的 "月-日" 记号
///
/// 例: 45885 → 2025-08-16 → "8-16"。
///
/// 这是有损的尽力还原: 假定当时的区域设置按 "月-日" 读入;
/// 若实际为 "日-月" 顺序, 还原结果的两段会颠倒。
pub fn repair_serial_token(serial: f64) -> Option<String> {
    let date = serial_to_date(serial)?;
    Some(format!("{}-{}", date.month(), date.day()))
}
