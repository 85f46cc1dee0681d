// ==========================================
// 医院护理排班系统 - 全年排班存储
// ==========================================
// 职责: 月份 → 排班 的内存映射与整快照持久化
// 约定: 整月替换, 不做字段级修补; 快照写入为
//       "写临时文件 + 原子改名" 的最后写者胜出
// ==========================================

use crate::domain::roster::{Roster, StaffRecord, YearData};
use crate::domain::types::Month;
use crate::store::error::{StoreError, StoreResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

// ==========================================
// OverwritePrompt - 覆盖确认接口
// ==========================================
// 目标月份已有非空数据时, 合并前必须经该接口确认;
// 拒绝只影响该月, 同批其余月份各自独立确认
pub trait OverwritePrompt: Send + Sync {
    /// 是否允许覆盖该月已有数据
    fn confirm_overwrite(&self, month: Month) -> bool;
}

/// 全部允许覆盖（自动化导入/测试）
pub struct AlwaysOverwrite;

impl OverwritePrompt for AlwaysOverwrite {
    fn confirm_overwrite(&self, _month: Month) -> bool {
        true
    }
}

/// 全部拒绝覆盖
pub struct NeverOverwrite;

impl OverwritePrompt for NeverOverwrite {
    fn confirm_overwrite(&self, _month: Month) -> bool {
        false
    }
}

// ==========================================
// YearStore - 全年排班存储
// ==========================================
pub struct YearStore {
    snapshot_path: PathBuf,
    data: YearData,
}

impl YearStore {
    /// 打开存储: 快照存在则载入, 否则从空数据开始
    ///
    /// # 参数
    /// - path: 快照文件路径（JSON）
    pub fn open<P: Into<PathBuf>>(path: P) -> StoreResult<Self> {
        let snapshot_path = path.into();
        let data = if snapshot_path.exists() {
            let data = Self::read_snapshot(&snapshot_path)?;
            info!(
                path = %snapshot_path.display(),
                months = data.len(),
                "已从快照载入排班数据"
            );
            data
        } else {
            debug!(path = %snapshot_path.display(), "快照不存在, 从空数据启动");
            YearData::new()
        };

        Ok(Self {
            snapshot_path,
            data,
        })
    }

    fn read_snapshot(path: &Path) -> StoreResult<YearData> {
        let text =
            fs::read_to_string(path).map_err(|e| StoreError::SnapshotRead(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| StoreError::SnapshotParse(e.to_string()))
    }

    /// 某月的当前排班; 从未填充过的月份返回空切片
    pub fn roster(&self, month: Month) -> &[StaffRecord] {
        self.data
            .get(&month)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 已有非空排班的月份（日历顺序）
    pub fn months(&self) -> Vec<Month> {
        self.data
            .iter()
            .filter(|(_, roster)| !roster.is_empty())
            .map(|(month, _)| *month)
            .collect()
    }

    /// 该月是否已有非空数据（覆盖确认的触发条件）
    pub fn has_data(&self, month: Month) -> bool {
        self.data
            .get(&month)
            .map(|roster| !roster.is_empty())
            .unwrap_or(false)
    }

    /// 整月替换该月排班（仅内存; 持久化由 persist 完成）
    pub fn replace(&mut self, month: Month, roster: Roster) {
        self.data.insert(month, roster);
    }

    /// 完整 YearData 视图（渲染层按月取数的补充）
    pub fn year_data(&self) -> &YearData {
        &self.data
    }

    /// 快照文件路径
    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    /// 持久化完整快照
    ///
    /// 写临时文件后改名替换, 快照要么是旧的完整内容、
    /// 要么是新的完整内容, 不存在半写状态。
    pub fn persist(&self) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| StoreError::SnapshotWrite(e.to_string()))?;

        if let Some(parent) = self.snapshot_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| StoreError::SnapshotWrite(e.to_string()))?;
            }
        }

        let tmp_path = self.snapshot_path.with_extension("tmp");
        fs::write(&tmp_path, json).map_err(|e| StoreError::SnapshotWrite(e.to_string()))?;
        fs::rename(&tmp_path, &self.snapshot_path)
            .map_err(|e| StoreError::SnapshotWrite(e.to_string()))?;

        debug!(path = %self.snapshot_path.display(), months = self.data.len(), "快照已持久化");
        Ok(())
    }
}
