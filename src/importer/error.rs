// ==========================================
// 医院护理排班系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
///
/// 四类业务失败（NoHeaderFound / NoRecordsFound / MonthUnresolved /
/// 覆盖被拒）中, 覆盖被拒不是错误, 由 ImportSummary.declined 表达。
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 提取错误 =====
    #[error("未找到日标题行 (表: {table})")]
    NoHeaderFound { table: String },

    #[error("标题行之下未找到有效人员记录 (表: {table})")]
    NoRecordsFound { table: String },

    // ===== 月份解析错误 =====
    #[error("无法从任何表标签或来源名识别月份: {source_label}")]
    MonthUnresolved { source_label: String },

    // ===== 内部错误 =====
    #[error("内部状态锁获取失败: {0}")]
    LockPoisoned(String),

    #[error(transparent)]
    Store(#[from] crate::store::StoreError),
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

// ==========================================
// ExtractError - 纯提取层错误
// ==========================================
// extract_roster 只区分这两种失败; 表标签等上下文
// 由导入编排层补充后转为 ImportError
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    #[error("未找到日标题行")]
    NoHeaderFound,

    #[error("未找到有效人员记录")]
    NoRecordsFound,
}
