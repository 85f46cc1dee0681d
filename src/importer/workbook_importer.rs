// ==========================================
// 医院护理排班系统 - 排班数据导入器实现
// ==========================================
// 职责: 整合导入流程, 从文件到存储
// 流程: 解析 → 月份解析 → 提取 → 覆盖确认 → 合并 → 持久化
// ==========================================

use crate::domain::import::{ImportSummary, SkipReason, SkippedTable};
use crate::domain::roster::{NamedTable, Roster};
use crate::domain::types::Month;
use crate::importer::error::{ExtractError, ImportError, ImportResult};
use crate::importer::extractor::extract_roster;
use crate::importer::month_resolver::resolve_month_label;
use crate::importer::table_loader::TableLoader;
use crate::store::{OverwritePrompt, YearStore};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{info, instrument, warn};
use uuid::Uuid;

// ==========================================
// WorkbookImporter Trait
// ==========================================
// 用途: 排班导入主接口
// 实现者: WorkbookImporterImpl
#[async_trait]
pub trait WorkbookImporter: Send + Sync {
    /// 导入一个排班工作簿
    ///
    /// # 参数
    /// - path: 本地文件路径（.xlsx/.xls/.csv）
    /// - prompt: 月份已有数据时的覆盖确认接口
    ///
    /// # 返回
    /// - Ok(ImportSummary): 逐月落库/拒绝与逐表跳过明细
    /// - Err: 文件错误, 或整个工作簿没有任何可用数据
    ///
    /// # 串行约定
    /// 一次导入从解析到持久化整体完成后才接受下一次;
    /// 重叠导入由调用方禁止（存储以 Mutex 持有即满足）。
    async fn import_workbook(
        &self,
        path: &Path,
        prompt: &dyn OverwritePrompt,
    ) -> ImportResult<ImportSummary>;
}

// ==========================================
// WorkbookImporterImpl - 排班导入器实现
// ==========================================
pub struct WorkbookImporterImpl {
    loader: Box<dyn TableLoader>,
    store: Arc<Mutex<YearStore>>,
}

impl WorkbookImporterImpl {
    /// 创建新的导入器实例
    ///
    /// # 参数
    /// - loader: 表格加载器
    /// - store: 全年排班存储（共享）
    pub fn new(loader: Box<dyn TableLoader>, store: Arc<Mutex<YearStore>>) -> Self {
        Self { loader, store }
    }

    /// 从一批命名表格收集 (月份, 排班) 候选
    ///
    /// 表标签未命中月份、或提取失败的表记入 skipped;
    /// 没有任何候选时按文件名回退解析月份并取第一张表。
    /// 同一月份被多张表命中时后表覆盖前表。
    fn collect_candidates(
        tables: &[NamedTable],
        source_label: &str,
        skipped: &mut Vec<SkippedTable>,
    ) -> BTreeMap<Month, Roster> {
        let mut candidates: BTreeMap<Month, Roster> = BTreeMap::new();

        for table in tables {
            match resolve_month_label(&table.label) {
                Some(month) => match extract_roster(&table.rows) {
                    Ok(roster) => {
                        if candidates.insert(month, roster).is_some() {
                            warn!(%month, table = %table.label, "月份重复, 后表覆盖前表");
                        }
                    }
                    Err(e) => skipped.push(SkippedTable {
                        label: table.label.clone(),
                        reason: skip_reason(e),
                    }),
                },
                None => skipped.push(SkippedTable {
                    label: table.label.clone(),
                    reason: SkipReason::NoMonthLabel,
                }),
            }
        }

        // 回退: 表标签都没命中时, 用导入来源名（文件名）解析月份,
        // 并假定第一张表属于该月
        if candidates.is_empty() {
            if let (Some(month), Some(first)) =
                (resolve_month_label(source_label), tables.first())
            {
                match extract_roster(&first.rows) {
                    Ok(roster) => {
                        info!(%month, source = %source_label, "按文件名回退解析月份");
                        skipped.retain(|s| {
                            !(s.label == first.label && s.reason == SkipReason::NoMonthLabel)
                        });
                        candidates.insert(month, roster);
                    }
                    Err(e) => {
                        // 覆盖第一张表原先的 NoMonthLabel 记录, 保留更具体的原因
                        if let Some(entry) =
                            skipped.iter_mut().find(|s| s.label == first.label)
                        {
                            entry.reason = skip_reason(e);
                        }
                    }
                }
            }
        }

        candidates
    }
}

fn skip_reason(e: ExtractError) -> SkipReason {
    match e {
        ExtractError::NoHeaderFound => SkipReason::NoHeaderFound,
        ExtractError::NoRecordsFound => SkipReason::NoRecordsFound,
    }
}

/// 没有任何候选时聚合整体失败原因
///
/// 优先报告提取失败（说明确实找到了疑似排班表）,
/// 否则报告月份未识别。
fn aggregate_failure(skipped: &[SkippedTable], source_label: &str) -> ImportError {
    if let Some(s) = skipped
        .iter()
        .find(|s| s.reason == SkipReason::NoHeaderFound)
    {
        return ImportError::NoHeaderFound {
            table: s.label.clone(),
        };
    }
    if let Some(s) = skipped
        .iter()
        .find(|s| s.reason == SkipReason::NoRecordsFound)
    {
        return ImportError::NoRecordsFound {
            table: s.label.clone(),
        };
    }
    ImportError::MonthUnresolved {
        source_label: source_label.to_string(),
    }
}

#[async_trait]
impl WorkbookImporter for WorkbookImporterImpl {
    #[instrument(skip(self, path, prompt), fields(batch_id))]
    async fn import_workbook(
        &self,
        path: &Path,
        prompt: &dyn OverwritePrompt,
    ) -> ImportResult<ImportSummary> {
        let batch_id = Uuid::new_v4().to_string();
        let source_label = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        info!(batch_id = %batch_id, source = %source_label, "开始导入排班数据");

        let tables = self.loader.load(path)?;
        let mut skipped = Vec::new();
        let candidates = Self::collect_candidates(&tables, &source_label, &mut skipped);

        if candidates.is_empty() {
            let err = aggregate_failure(&skipped, &source_label);
            warn!(batch_id = %batch_id, error = %err, "本次导入无可用数据");
            return Err(err);
        }

        // 逐月确认与合并; 持久化一次覆盖本批全部落库月份
        let mut applied = Vec::new();
        let mut declined = Vec::new();
        {
            let mut store = self
                .store
                .lock()
                .map_err(|e| ImportError::LockPoisoned(e.to_string()))?;

            for (month, roster) in candidates {
                if store.has_data(month) && !prompt.confirm_overwrite(month) {
                    info!(%month, "用户拒绝覆盖, 该月保持不变");
                    declined.push(month);
                    continue;
                }
                store.replace(month, roster);
                applied.push(month);
            }

            if !applied.is_empty() {
                store.persist()?;
            }
        }

        info!(
            batch_id = %batch_id,
            applied = applied.len(),
            declined = declined.len(),
            skipped = skipped.len(),
            "导入完成"
        );

        Ok(ImportSummary {
            batch_id,
            source: source_label,
            applied,
            declined,
            skipped,
        })
    }
}
