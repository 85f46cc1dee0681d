// ==========================================
// WorkbookImporter 集成测试
// ==========================================
// 测试目标: 验证完整的排班导入流程
//           （表格 → 月份解析 → 提取 → 确认 → 合并 → 持久化）
// ==========================================

mod test_helpers;

use nurse_roster_planner::importer::{ImportError, WorkbookImporter, WorkbookImporterImpl};
use nurse_roster_planner::{
    logging, AlwaysOverwrite, CsvLoader, Month, NamedTable, NeverOverwrite, SkipReason,
    TableLoader, YearStore,
};
use std::io::Write;
use std::path::Path;
use test_helpers::{create_test_store, month_sheet, text};

/// 返回固定表格的加载器（隔离文件 I/O）
struct FixedLoader {
    tables: Vec<NamedTable>,
}

impl TableLoader for FixedLoader {
    fn load(
        &self,
        _path: &Path,
    ) -> Result<Vec<NamedTable>, ImportError> {
        Ok(self.tables.clone())
    }
}

#[tokio::test]
async fn test_import_multi_sheet_workbook() {
    logging::init_test();

    let tables = vec![
        month_sheet(
            "Escala Janeiro",
            &[
                (91019.0, "Joselin Freitas*", &["8-16", "F", "8-16"][..]),
                (91020.0, "Joana Cardoso", &["F", "14-22", "10-18"][..]),
            ],
        ),
        month_sheet(
            "Fevereiro 2026",
            &[(91021.0, "Sara Fernandes", &["N", "F"][..])],
        ),
        NamedTable {
            label: "Resumo".to_string(),
            rows: vec![vec![text("observações gerais")]],
        },
    ];

    let (_dir, path, store) = create_test_store();
    let importer = WorkbookImporterImpl::new(Box::new(FixedLoader { tables }), store.clone());

    let summary = importer
        .import_workbook(Path::new("escala_2026.xlsx"), &AlwaysOverwrite)
        .await
        .expect("import should succeed");

    assert_eq!(summary.applied, vec![Month::Janeiro, Month::Fevereiro]);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].reason, SkipReason::NoMonthLabel);

    // 负责人标记已剥离并置位
    {
        let store = store.lock().unwrap();
        let roster = store.roster(Month::Janeiro);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name, "Joselin Freitas");
        assert!(roster[0].is_lead);
        assert_eq!(roster[0].id, "91019");
        assert_eq!(roster[0].shift_on(2), "F");
    }

    // 快照已持久化, 重新打开后内容一致
    let reloaded = YearStore::open(&path).expect("reload snapshot");
    assert_eq!(reloaded.months(), vec![Month::Janeiro, Month::Fevereiro]);
    assert_eq!(
        reloaded.roster(Month::Janeiro),
        store.lock().unwrap().roster(Month::Janeiro)
    );
}

#[tokio::test]
async fn test_import_declined_month_untouched_on_disk() {
    logging::init_test();

    let (_dir, path, store) = create_test_store();

    // 第一次导入: 一月落库
    let first = WorkbookImporterImpl::new(
        Box::new(FixedLoader {
            tables: vec![month_sheet(
                "Janeiro",
                &[(91019.0, "Ana Silva", &["8-16"][..])],
            )],
        }),
        store.clone(),
    );
    first
        .import_workbook(Path::new("escala.xlsx"), &AlwaysOverwrite)
        .await
        .expect("first import");

    let snapshot_before = std::fs::read_to_string(&path).expect("read snapshot");

    // 第二次导入同月, 拒绝覆盖 → 内存与快照均不变
    let second = WorkbookImporterImpl::new(
        Box::new(FixedLoader {
            tables: vec![month_sheet(
                "Janeiro",
                &[(91030.0, "Sofia Abreu", &["14-22"][..])],
            )],
        }),
        store.clone(),
    );
    let summary = second
        .import_workbook(Path::new("escala_v2.xlsx"), &NeverOverwrite)
        .await
        .expect("second import");

    assert!(summary.applied.is_empty());
    assert_eq!(summary.declined, vec![Month::Janeiro]);

    let snapshot_after = std::fs::read_to_string(&path).expect("read snapshot");
    assert_eq!(snapshot_before, snapshot_after);
    assert_eq!(store.lock().unwrap().roster(Month::Janeiro)[0].name, "Ana Silva");
}

#[tokio::test]
async fn test_import_mixed_confirmation_per_month() {
    logging::init_test();

    let (_dir, _path, store) = create_test_store();

    // 预置一月
    let seed = WorkbookImporterImpl::new(
        Box::new(FixedLoader {
            tables: vec![month_sheet(
                "Janeiro",
                &[(91019.0, "Ana Silva", &["8-16"][..])],
            )],
        }),
        store.clone(),
    );
    seed.import_workbook(Path::new("seed.xlsx"), &AlwaysOverwrite)
        .await
        .expect("seed import");

    // 新工作簿带一月（已有数据, 将被拒绝）和三月（新月份, 无需确认）
    let importer = WorkbookImporterImpl::new(
        Box::new(FixedLoader {
            tables: vec![
                month_sheet("Janeiro", &[(91030.0, "Sofia Abreu", &["14-22"][..])]),
                month_sheet("Março", &[(91031.0, "Mariana Costa", &["10-18"][..])]),
            ],
        }),
        store.clone(),
    );
    let summary = importer
        .import_workbook(Path::new("escala.xlsx"), &NeverOverwrite)
        .await
        .expect("import");

    // 拒绝只影响一月, 三月照常落库
    assert_eq!(summary.declined, vec![Month::Janeiro]);
    assert_eq!(summary.applied, vec![Month::Marco]);

    let store = store.lock().unwrap();
    assert_eq!(store.roster(Month::Janeiro)[0].name, "Ana Silva");
    assert_eq!(store.roster(Month::Marco)[0].name, "Mariana Costa");
}

#[tokio::test]
async fn test_import_csv_file_with_month_in_name() {
    logging::init_test();

    // CSV 单表, 表标签取文件主名 → 月份从文件名解析
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("Dezembro.csv");
    {
        let mut file = std::fs::File::create(&csv_path).expect("create csv");
        let mut header = "Nome,".to_string();
        for day in 1..=31 {
            header.push_str(&format!(",{}", day));
        }
        writeln!(file, "{}", header).expect("write header");
        writeln!(file, "Ana Silva,,8-16,F,8-16").expect("write staff row");
    }

    let (_store_dir, _path, store) = create_test_store();
    let importer = WorkbookImporterImpl::new(Box::new(CsvLoader), store.clone());

    let summary = importer
        .import_workbook(&csv_path, &AlwaysOverwrite)
        .await
        .expect("csv import");

    assert_eq!(summary.applied, vec![Month::Dezembro]);

    let store = store.lock().unwrap();
    let roster = store.roster(Month::Dezembro);
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].name, "Ana Silva");
    assert_eq!(roster[0].shift_on(1), "8-16");
    assert_eq!(roster[0].shift_on(2), "F");
    assert_eq!(roster[0].shift_on(3), "8-16");
}

#[tokio::test]
async fn test_import_without_any_month_is_rejected() {
    logging::init_test();

    let (_dir, path, store) = create_test_store();
    let importer = WorkbookImporterImpl::new(
        Box::new(FixedLoader {
            tables: vec![month_sheet(
                "Folha1",
                &[(91019.0, "Ana Silva", &["8-16"][..])],
            )],
        }),
        store.clone(),
    );

    let result = importer
        .import_workbook(Path::new("turnos.xlsx"), &AlwaysOverwrite)
        .await;

    assert!(matches!(result, Err(ImportError::MonthUnresolved { .. })));
    // 整个导入被拒绝, 不写任何数据
    assert!(store.lock().unwrap().months().is_empty());
    assert!(!path.exists());
}
