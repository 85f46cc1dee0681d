// ==========================================
// 医院护理排班系统 - 领域层
// ==========================================
// 职责: 排班领域的实体与基础类型
// ==========================================

// 模块声明
pub mod import;
pub mod roster;
pub mod stats;
pub mod types;

// 重导出核心类型
pub use import::{ImportSummary, SkipReason, SkippedTable};
pub use roster::{CellValue, DayColumnMap, NamedTable, RawTable, Roster, StaffRecord, YearData};
pub use stats::{CoverageSummary, StaffStats};
pub use types::{Month, ShiftCategory};
