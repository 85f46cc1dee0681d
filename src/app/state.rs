// ==========================================
// 医院护理排班系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和 API 实例
// ==========================================

use crate::api::{ImportApi, RosterApi};
use crate::config::ShiftPolicy;
use crate::importer::UniversalLoader;
use crate::store::YearStore;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// 应用状态
///
/// 持有共享存储与两个 API 实例; 存储以 Mutex 包裹,
/// 导入操作因此天然串行（一次导入完成前不会开始下一次）。
pub struct AppState {
    /// 快照文件路径
    pub data_path: String,

    /// 导入 API
    pub import_api: Arc<ImportApi>,

    /// 排班查询 API
    pub roster_api: Arc<RosterApi>,
}

impl AppState {
    /// 创建新的 AppState 实例
    ///
    /// # 参数
    /// - data_path: 快照文件路径
    ///
    /// # 返回
    /// - Ok(AppState): 应用状态实例
    /// - Err(String): 初始化错误
    pub fn new(data_path: String) -> Result<Self, String> {
        let store = YearStore::open(&data_path)
            .map_err(|e| format!("无法打开排班存储: {}", e))?;
        let store = Arc::new(Mutex::new(store));

        // 班次策略与快照同目录, 文件缺失时用缺省值
        let policy_path = Path::new(&data_path)
            .parent()
            .map(|dir| dir.join("shift_policy.json"))
            .unwrap_or_else(|| PathBuf::from("shift_policy.json"));
        let policy = ShiftPolicy::load_or_default(policy_path);

        let import_api = Arc::new(ImportApi::new(Box::new(UniversalLoader), store.clone()));
        let roster_api = Arc::new(RosterApi::new(store, policy));

        Ok(Self {
            data_path,
            import_api,
            roster_api,
        })
    }
}

/// 缺省快照路径
///
/// 优先级: 环境变量 NURSE_ROSTER_DATA_PATH > 用户数据目录 > 当前目录。
/// 开发构建使用独立目录, 避免污染生产数据。
pub fn get_default_data_path() -> String {
    if let Ok(path) = std::env::var("NURSE_ROSTER_DATA_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./year_data.json");

    if let Some(data_dir) = dirs::data_dir() {
        #[cfg(debug_assertions)]
        {
            path = data_dir.join("nurse-roster-planner-dev");
        }

        #[cfg(not(debug_assertions))]
        {
            path = data_dir.join("nurse-roster-planner");
        }

        path = path.join("year_data.json");
    }

    path.to_string_lossy().to_string()
}
