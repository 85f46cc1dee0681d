// ==========================================
// 医院护理排班系统 - API 层
// ==========================================
// 职责: 渲染层可直接调用的业务接口
// ==========================================

pub mod error;
pub mod import_api;
pub mod roster_api;

pub use error::{ApiError, ApiResult};
pub use import_api::ImportApi;
pub use roster_api::RosterApi;
