// ==========================================
// 医院护理排班系统 - 排班提取器
// ==========================================
// 职责: 从任意人工排版的原始表格中定位日标题行、
//       识别人员行, 产出规范化排班记录
// 结构: find_header_row / extract_records 为纯函数,
//       由 extract_roster 组合, 不依赖任何共享状态
// ==========================================

use crate::domain::roster::{CellValue, DayColumnMap, RawTable, Roster, StaffRecord};
use crate::importer::error::ExtractError;
use crate::importer::serial_date;
use std::collections::BTreeMap;
use tracing::debug;

/// 标题行扫描上限（行数）
pub const HEADER_SCAN_LIMIT: usize = 50;

/// 标题行判定阈值: 一行中不同日标记的数量须大于该值
///
/// 真实排班表的非标题行也常出现短数字串（汇总列等）,
/// 要求超过 10 个不同日标记才能可靠区分真正的日期轴。
pub const HEADER_DAY_THRESHOLD: usize = 10;

/// 负责人标记字符（出现在姓名记号中）
const LEAD_MARKER: char = '*';

/// 无标识列时的占位标识
const PLACEHOLDER_ID: &str = "Unknown";

/// 忽略词表: 这些大写值是表头/汇总/比例标签, 不是姓名
const IGNORE_VOCABULARY: &[&str] = &[
    "NAME",
    "NOME",
    "TURNO",
    "CATEGORIA",
    "TOTAL",
    "HORAS",
    "BANCO",
    "SOMA",
    "SALDO",
    "RUBRICA",
    "RACIO",
    "RÁCIO",
    "INTERMÉDIO",
    "RESP.",
    "RATIO",
    "STAFF",
];

/// 支援词表: 命中则作为信息行（科室/地点标签混入姓名列）
const SUPPORT_VOCABULARY: &[&str] = &[
    "MANHÃ",
    "TARDE",
    "NOITE",
    "9T38",
    "GASTRO HPM",
    "GASTROHPM",
    "UROLOGIA",
    "BLOCO",
    "CONSULTA",
    "CARDIO",
    "SERVIÇO",
    "COLEGA",
    "APOIO",
    "IR",
    "PISO -1",
];

// ==========================================
// 日标题行定位
// ==========================================

/// 单元格是否恰为 1..=31 的日标记
///
/// 仅当修剪后的渲染文本与该整数的十进制形式完全一致才接受,
/// 以排除 "13.5" 之类恰能按整数截断解析的数字噪声。
fn day_marker(cell: &CellValue) -> Option<u32> {
    let rendered = cell.render();
    let trimmed = rendered.trim();
    let value: i64 = trimmed.parse().ok()?;
    if (1..=31).contains(&value) && trimmed == value.to_string() {
        Some(value as u32)
    } else {
        None
    }
}

/// 在表格前 HEADER_SCAN_LIMIT 行内定位日标题行
///
/// # 返回
/// - Some((行下标, 日列映射)): 自上而下第一个日标记数超过阈值的行
/// - None: 扫描窗口内无满足阈值的行
///
/// 同一日期号出现在多列时保留最左列,
/// 防止右侧的"下月预览"列覆盖本月日期列。
pub fn find_header_row(table: &RawTable) -> Option<(usize, DayColumnMap)> {
    for (row_idx, row) in table.iter().take(HEADER_SCAN_LIMIT).enumerate() {
        let mut columns: DayColumnMap = BTreeMap::new();

        for (col_idx, cell) in row.iter().enumerate() {
            if let Some(day) = day_marker(cell) {
                columns.entry(day).or_insert(col_idx);
            }
        }

        if columns.len() > HEADER_DAY_THRESHOLD {
            return Some((row_idx, columns));
        }
    }
    None
}

// ==========================================
// 人员行识别
// ==========================================

struct NameCandidate {
    name: String,
    is_lead: bool,
    is_support: bool,
}

/// 在最小日列左侧的身份区中寻找姓名候选
///
/// 取第一个长度大于 2 的字符串单元格, 其大写修剪值不在忽略词表内;
/// 命中支援词表的按信息行标记, 负责人标记从存储姓名中剥离。
fn detect_name(row: &[CellValue], name_zone_end: usize) -> Option<NameCandidate> {
    for cell in row.iter().take(name_zone_end) {
        let Some(text) = cell.as_text() else {
            continue;
        };
        if text.chars().count() <= 2 {
            continue;
        }

        let clean = text.trim();
        let upper = clean.to_uppercase();
        if IGNORE_VOCABULARY.contains(&upper.as_str()) {
            continue;
        }

        let is_lead = clean.contains(LEAD_MARKER);
        let name = clean
            .replace(LEAD_MARKER, "")
            .trim()
            .to_string();
        let is_support = SUPPORT_VOCABULARY.contains(&upper.as_str());

        return Some(NameCandidate {
            name,
            is_lead,
            is_support,
        });
    }
    None
}

/// 单元格 → 班次记号
///
/// 数字超过串行阈值时先做串行日期还原; 文本记号原样保留。
fn cell_to_token(cell: &CellValue) -> String {
    if let Some(n) = cell.as_number() {
        if serial_date::looks_like_serial(n) {
            if let Some(repaired) = serial_date::repair_serial_token(n) {
                return repaired;
            }
        }
    }
    cell.render()
}

/// 从标题行之下的各行提取人员记录
///
/// 每条记录的 shifts 覆盖 1..=31 全部日期（无映射列或缺失单元格
/// 存空串）; 没有任何班次数据的行不产出记录。
pub fn extract_records(
    table: &RawTable,
    header_idx: usize,
    day_columns: &DayColumnMap,
) -> Roster {
    let Some(name_zone_end) = day_columns.values().copied().min() else {
        return Vec::new();
    };

    let mut roster = Vec::new();

    for row in table.iter().skip(header_idx + 1) {
        if row.is_empty() {
            continue;
        }
        let Some(candidate) = detect_name(row, name_zone_end) else {
            continue;
        };

        // 标识列: 第 0 列非空则取其渲染值, 否则用占位符
        let id = row
            .first()
            .map(|cell| cell.render())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| PLACEHOLDER_ID.to_string());

        let mut shifts: BTreeMap<u32, String> = BTreeMap::new();
        let mut has_data = false;

        for day in 1..=31u32 {
            let token = match day_columns.get(&day).and_then(|&col| row.get(col)) {
                Some(cell) if !cell.is_empty() => cell_to_token(cell),
                _ => String::new(),
            };
            if !token.trim().is_empty() {
                has_data = true;
            }
            shifts.insert(day, token);
        }

        if has_data {
            roster.push(StaffRecord {
                id,
                name: candidate.name,
                is_lead: candidate.is_lead,
                is_support: candidate.is_support,
                shifts,
            });
        }
    }

    roster
}

// ==========================================
// 组合入口
// ==========================================

/// 从原始表格提取一个月的排班
///
/// # 返回
/// - Ok(Roster): 至少含一条人员记录
/// - Err(NoHeaderFound / NoRecordsFound): 可恢复失败, 调用方按
///   "本次导入无可用数据" 处理; 任何畸形输入都不会 panic
pub fn extract_roster(table: &RawTable) -> Result<Roster, ExtractError> {
    let Some((header_idx, day_columns)) = find_header_row(table) else {
        return Err(ExtractError::NoHeaderFound);
    };

    debug!(
        header_row = header_idx,
        day_count = day_columns.len(),
        "定位到日标题行"
    );

    let roster = extract_records(table, header_idx, &day_columns);
    if roster.is_empty() {
        return Err(ExtractError::NoRecordsFound);
    }
    Ok(roster)
}
