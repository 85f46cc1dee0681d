// ==========================================
// YearStore 集成测试
// ==========================================
// 测试目标: 提取产物经快照往返后逐字段一致
// ==========================================

mod test_helpers;

use nurse_roster_planner::{extract_roster, Month, YearStore};
use test_helpers::{header_row, num, text};

#[test]
fn test_extracted_roster_snapshot_roundtrip() {
    // 构造一张带各种记号形态的表
    let mut rows = vec![header_row()];

    let mut lead = vec![num(91019.0), text("Joselin Freitas*")];
    lead.push(text("8-16"));
    lead.push(text("F"));
    lead.push(num(45885.0)); // 串行日期, 提取时还原为 "8-16"
    rows.push(lead);

    let mut support = vec![nurse_roster_planner::CellValue::Empty, text("CONSULTA")];
    support.push(num(3.0));
    rows.push(support);

    let roster = extract_roster(&rows).expect("extract");
    assert_eq!(roster.len(), 2);
    assert!(roster[0].is_lead);
    assert!(roster[1].is_support);

    // 写入快照并重新载入
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("year_data.json");

    let mut store = YearStore::open(&path).expect("open");
    store.replace(Month::Agosto, roster.clone());
    store.persist().expect("persist");

    let reloaded = YearStore::open(&path).expect("reopen");
    let reloaded_roster = reloaded.roster(Month::Agosto);

    // 每条记录（含完整 shifts 映射）必须一致
    assert_eq!(reloaded_roster, roster.as_slice());
    assert_eq!(reloaded_roster[0].shift_on(3), "8-16");
    assert_eq!(reloaded_roster[0].shifts.len(), 31);

    // 再持久化一次, 快照字节不变（序列化确定性）
    let first = std::fs::read_to_string(&path).expect("read");
    reloaded.persist().expect("persist again");
    let second = std::fs::read_to_string(&path).expect("read");
    assert_eq!(first, second);
}
