// ==========================================
// 医院护理排班系统 - 排班查询 API
// ==========================================
// 职责: 按月取排班、个人统计、团队覆盖与日历导出
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::ShiftPolicy;
use crate::domain::roster::{Roster, StaffRecord, YearData};
use crate::domain::stats::{CoverageSummary, StaffStats};
use crate::domain::types::Month;
use crate::engine::{ical, stats};
use crate::store::YearStore;
use std::sync::{Arc, Mutex, MutexGuard};

// ==========================================
// RosterApi - 排班查询接口
// ==========================================
pub struct RosterApi {
    store: Arc<Mutex<YearStore>>,
    policy: ShiftPolicy,
}

impl RosterApi {
    pub fn new(store: Arc<Mutex<YearStore>>, policy: ShiftPolicy) -> Self {
        Self { store, policy }
    }

    fn store(&self) -> ApiResult<MutexGuard<'_, YearStore>> {
        self.store
            .lock()
            .map_err(|e| ApiError::StateLock(e.to_string()))
    }

    /// 已有数据的月份（日历顺序）
    pub fn months(&self) -> ApiResult<Vec<Month>> {
        Ok(self.store()?.months())
    }

    /// 某月的当前排班（从未填充过的月份返回空）
    pub fn roster(&self, month: Month) -> ApiResult<Roster> {
        Ok(self.store()?.roster(month).to_vec())
    }

    /// 完整全年数据（渲染层年视图）
    pub fn year_data(&self) -> ApiResult<YearData> {
        Ok(self.store()?.year_data().clone())
    }

    /// 某月可选择的护士姓名（信息行除外, 保持表内顺序）
    pub fn staff_names(&self, month: Month) -> ApiResult<Vec<String>> {
        Ok(self
            .store()?
            .roster(month)
            .iter()
            .filter(|record| !record.is_support)
            .map(|record| record.name.clone())
            .collect())
    }

    /// 个人月度统计
    pub fn staff_stats(&self, month: Month, year: i32, name: &str) -> ApiResult<StaffStats> {
        let store = self.store()?;
        let record = find_staff(store.roster(month), month, name)?;
        Ok(stats::staff_stats(record, month, year, &self.policy))
    }

    /// 团队日覆盖统计
    pub fn coverage(&self, month: Month, year: i32) -> ApiResult<CoverageSummary> {
        let store = self.store()?;
        Ok(stats::coverage(store.roster(month), month, year, &self.policy))
    }

    /// 某护士某月的 iCalendar 文档
    pub fn staff_calendar(&self, month: Month, year: i32, name: &str) -> ApiResult<String> {
        let store = self.store()?;
        let record = find_staff(store.roster(month), month, name)?;
        Ok(ical::staff_calendar(record, month, year, &self.policy))
    }
}

fn find_staff<'a>(
    roster: &'a [StaffRecord],
    month: Month,
    name: &str,
) -> ApiResult<&'a StaffRecord> {
    roster
        .iter()
        .find(|record| record.name == name)
        .ok_or_else(|| ApiError::NotFound(format!("护士 {} ({})", name, month)))
}
