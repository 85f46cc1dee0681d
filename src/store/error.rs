// ==========================================
// 医院护理排班系统 - 存储层错误类型
// ==========================================

use thiserror::Error;

/// 存储层错误类型
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("快照读取失败: {0}")]
    SnapshotRead(String),

    #[error("快照解析失败: {0}")]
    SnapshotParse(String),

    #[error("快照写入失败: {0}")]
    SnapshotWrite(String),
}

/// Result 类型别名
pub type StoreResult<T> = Result<T, StoreError>;
