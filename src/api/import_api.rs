// ==========================================
// 医院护理排班系统 - 导入 API
// ==========================================
// 职责: 包装导入编排, 产出用户可读摘要
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::import::ImportSummary;
use crate::domain::types::Month;
use crate::i18n::{t, t_with_args};
use crate::importer::{TableLoader, WorkbookImporter, WorkbookImporterImpl};
use crate::store::{OverwritePrompt, YearStore};
use std::path::Path;
use std::sync::{Arc, Mutex};

// ==========================================
// ImportApi - 导入接口
// ==========================================
pub struct ImportApi {
    importer: WorkbookImporterImpl,
}

impl ImportApi {
    /// 创建导入 API
    ///
    /// # 参数
    /// - loader: 表格加载器（通常为 UniversalLoader）
    /// - store: 全年排班存储（共享）
    pub fn new(loader: Box<dyn TableLoader>, store: Arc<Mutex<YearStore>>) -> Self {
        Self {
            importer: WorkbookImporterImpl::new(loader, store),
        }
    }

    /// 从本地文件导入排班数据
    pub async fn import_from_file(
        &self,
        path: &Path,
        prompt: &dyn OverwritePrompt,
    ) -> ApiResult<ImportSummary> {
        let summary = self.importer.import_workbook(path, prompt).await?;
        Ok(summary)
    }

    /// 导入结果的用户可读摘要（经 i18n）
    pub fn summary_message(summary: &ImportSummary) -> String {
        let mut parts = Vec::new();

        if !summary.applied.is_empty() {
            let months = join_months(&summary.applied);
            parts.push(t_with_args("import.applied", &[("months", months.as_str())]));
        }
        if !summary.declined.is_empty() {
            let months = join_months(&summary.declined);
            parts.push(t_with_args("import.declined", &[("months", months.as_str())]));
        }
        if parts.is_empty() {
            parts.push(t("import.no_data"));
        }

        parts.join("\n")
    }
}

fn join_months(months: &[Month]) -> String {
    months
        .iter()
        .map(|m| m.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_months() {
        assert_eq!(
            join_months(&[Month::Janeiro, Month::Marco]),
            "Janeiro, Março"
        );
        assert_eq!(join_months(&[]), "");
    }

    #[test]
    fn test_summary_message_lists_applied_months() {
        let summary = ImportSummary {
            batch_id: "b-1".to_string(),
            source: "escala.xlsx".to_string(),
            applied: vec![Month::Janeiro],
            declined: vec![Month::Fevereiro],
            skipped: Vec::new(),
        };

        let message = ImportApi::summary_message(&summary);
        assert!(message.contains("Janeiro"));
        assert!(message.contains("Fevereiro"));
    }
}
