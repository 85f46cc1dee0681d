// ==========================================
// 医院护理排班系统 - 核心库
// ==========================================
// 技术栈: Rust + JSON 快照
// 系统定位: 排班数据提取、统计与导出（渲染层另行对接）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 存储层 - 快照持久化
pub mod store;

// 引擎层 - 分类/统计/导出
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 班次策略
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 状态装配
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{Month, ShiftCategory};

// 领域实体
pub use domain::{
    CellValue, CoverageSummary, ImportSummary, NamedTable, RawTable, Roster, SkipReason,
    SkippedTable, StaffRecord, StaffStats, YearData,
};

// 引擎
pub use engine::{classify, staff_calendar, staff_stats, Classification};

// 导入
pub use importer::{
    extract_roster, resolve_month_label, CsvLoader, ExcelLoader, ImportError, TableLoader,
    UniversalLoader, WorkbookImporter, WorkbookImporterImpl,
};

// 存储
pub use store::{AlwaysOverwrite, NeverOverwrite, OverwritePrompt, StoreError, YearStore};

// 配置
pub use config::{ClockPair, ShiftPolicy};

// API
pub use api::{ApiError, ImportApi, RosterApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "医院护理排班系统";

// ==========================================
// 预编译检查
// ==========================================

// 确保编译时所有模块可见
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
