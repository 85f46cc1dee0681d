// ==========================================
// 医院护理排班系统 - 终端覆盖确认
// ==========================================

use crate::domain::types::Month;
use crate::i18n::t_with_args;
use crate::store::OverwritePrompt;
use std::io::{self, BufRead, Write};

/// 终端覆盖确认: 逐月向标准输入征询 y/N
pub struct ConsolePrompt;

impl OverwritePrompt for ConsolePrompt {
    fn confirm_overwrite(&self, month: Month) -> bool {
        let question = t_with_args("import.overwrite_prompt", &[("month", month.name())]);
        print!("{} [y/N] ", question);
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "s" | "sim")
    }
}
