// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 构造原始表格、排班工作簿与临时存储
// ==========================================

#![allow(dead_code)]

use nurse_roster_planner::{CellValue, NamedTable, YearStore};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// 文本单元格
pub fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

/// 数字单元格
pub fn num(n: f64) -> CellValue {
    CellValue::Number(n)
}

/// 日标题行: ["Nome", ""] + 1..=31
pub fn header_row() -> Vec<CellValue> {
    let mut row = vec![text("Nome"), CellValue::Empty];
    for day in 1..=31 {
        row.push(num(day as f64));
    }
    row
}

/// 人员行: [id, 姓名] + 班次记号（从 1 日起）
pub fn staff_row(id: f64, name: &str, tokens: &[&str]) -> Vec<CellValue> {
    let mut row = vec![num(id), text(name)];
    for token in tokens {
        if token.is_empty() {
            row.push(CellValue::Empty);
        } else {
            row.push(text(token));
        }
    }
    row
}

/// 一张最小的月度排班表
pub fn month_sheet(label: &str, staff: &[(f64, &str, &[&str])]) -> NamedTable {
    let mut rows = vec![header_row()];
    for (id, name, tokens) in staff {
        rows.push(staff_row(*id, name, tokens));
    }
    NamedTable {
        label: label.to_string(),
        rows,
    }
}

/// 创建临时快照存储
///
/// # 返回
/// - TempDir: 临时目录（需要保持存活）
/// - PathBuf: 快照文件路径
/// - 共享存储实例
pub fn create_test_store() -> (TempDir, PathBuf, Arc<Mutex<YearStore>>) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("year_data.json");
    let store = YearStore::open(&path).expect("Failed to open YearStore");
    (dir, path, Arc::new(Mutex::new(store)))
}
