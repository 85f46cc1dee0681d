// ==========================================
// 医院护理排班系统 - 应用层
// ==========================================
// 职责: 应用状态装配与终端交互
// ==========================================

pub mod prompt;
pub mod state;

pub use prompt::ConsolePrompt;
pub use state::{get_default_data_path, AppState};
