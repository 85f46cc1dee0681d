// ==========================================
// 医院护理排班系统 - 终端主入口
// ==========================================
// 用法: nurse-roster-planner [排班文件.xlsx|.csv]
// 行为: 无参数时列出已载入的月份; 传入文件时执行导入
//       （已有月份数据会逐月在终端征询覆盖确认）
// ==========================================

use nurse_roster_planner::app::{get_default_data_path, AppState, ConsolePrompt};
use nurse_roster_planner::{logging, ImportApi};
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", nurse_roster_planner::APP_NAME);
    tracing::info!("系统版本: {}", nurse_roster_planner::VERSION);
    tracing::info!("==================================================");

    // 获取快照路径并装配应用状态
    let data_path = get_default_data_path();
    tracing::info!("使用快照: {}", data_path);

    let state = AppState::new(data_path).map_err(anyhow::Error::msg)?;

    // 传入文件时执行一次导入
    if let Some(file) = std::env::args().nth(1) {
        match state
            .import_api
            .import_from_file(Path::new(&file), &ConsolePrompt)
            .await
        {
            Ok(summary) => {
                println!("{}", ImportApi::summary_message(&summary));
                for skipped in &summary.skipped {
                    println!("  (跳过 {}: {:?})", skipped.label, skipped.reason);
                }
            }
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    }

    // 已载入月份概览
    let months = state.roster_api.months()?;
    if months.is_empty() {
        println!("尚无排班数据。");
        println!("用法: nurse-roster-planner <排班文件.xlsx|.csv>");
        println!("文件名或工作表名需包含月份名（如 'Dezembro.xlsx'）。");
    } else {
        for month in months {
            let roster = state.roster_api.roster(month)?;
            println!("{}: {} 条记录", month, roster.len());
        }
    }

    Ok(())
}
