// ==========================================
// 医院护理排班系统 - API 层错误类型
// ==========================================
// 职责: 将导入层/存储层错误转换为面向调用方的错误
// ==========================================

use crate::importer::ImportError;
use crate::store::StoreError;
use thiserror::Error;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== 业务错误 =====
    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ===== 下层错误 =====
    #[error("导入失败: {0}")]
    Import(#[from] ImportError),

    #[error("存储错误: {0}")]
    Store(#[from] StoreError),

    // ===== 内部错误 =====
    #[error("内部状态锁获取失败: {0}")]
    StateLock(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_error_conversion() {
        let import_err = ImportError::MonthUnresolved {
            source_label: "turnos.xlsx".to_string(),
        };
        let api_err: ApiError = import_err.into();
        assert!(matches!(api_err, ApiError::Import(_)));
        assert!(api_err.to_string().contains("turnos.xlsx"));
    }
}
