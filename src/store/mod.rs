// ==========================================
// 医院护理排班系统 - 存储层
// ==========================================
// 职责: 全年排班数据的内存持有与快照持久化
// ==========================================

pub mod error;
pub mod year_store;

pub use error::StoreError;
pub use year_store::{AlwaysOverwrite, NeverOverwrite, OverwritePrompt, YearStore};
