// ==========================================
// 医院护理排班系统 - 排班领域模型
// ==========================================
// 职责: 原始表格与规范化排班记录的数据结构
// 用途: 导入层写入, 引擎层只读
// ==========================================

use crate::domain::types::Month;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// CellValue - 原始单元格值
// ==========================================
// 表格加载器产出的异构单元格: 数字 / 文本 / 空
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Empty,
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// 按电子表格惯例渲染为文本
    ///
    /// 整数值不带小数部分（1.0 → "1"），其余数字按十进制输出。
    /// 日标题识别与班次记号均以该渲染结果为准。
    pub fn render(&self) -> String {
        match self {
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 9.0e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Text(s) => s.clone(),
            CellValue::Empty => String::new(),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

// ==========================================
// RawTable / NamedTable
// ==========================================

/// 原始表格: 行的序列, 不假定矩形（各行长度可不同）
pub type RawTable = Vec<Vec<CellValue>>;

/// 带标签的原始表格（标签 = 工作表名等自由文本）
#[derive(Debug, Clone)]
pub struct NamedTable {
    pub label: String,
    pub rows: RawTable,
}

// ==========================================
// DayColumnMap - 日列映射
// ==========================================
// 键: 月内日期 (1-31), 值: 表格列下标
// 不变式: 由单一标题行构建; 同一日期号出现多列时取最左列
pub type DayColumnMap = BTreeMap<u32, usize>;

// ==========================================
// StaffRecord - 护士排班记录
// ==========================================
// 不变式: shifts 对 1..=31 每一天都有条目（可能为空串）,
// 与当月实际天数无关; 调用方按当月天数裁剪
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffRecord {
    // ===== 身份 =====
    pub id: String,   // 标识列取值; 缺失时为占位符
    pub name: String, // 去掉首尾空白与标记字符后的姓名

    // ===== 行分类 =====
    #[serde(default)]
    pub is_lead: bool, // 原始姓名含负责人标记 (*)
    #[serde(default)]
    pub is_support: bool, // 姓名命中科室/支援词表（信息行, 非真实人员）

    // ===== 班次 =====
    pub shifts: BTreeMap<u32, String>, // 日 (1-31) → 原始班次记号; 空串 = 无数据
}

impl StaffRecord {
    /// 某天的原始班次记号（无数据返回空串）
    pub fn shift_on(&self, day: u32) -> &str {
        self.shifts.get(&day).map(String::as_str).unwrap_or("")
    }
}

// ==========================================
// Roster / YearData
// ==========================================

/// 一个日历月的排班: 护士记录的有序序列
pub type Roster = Vec<StaffRecord>;

/// 全年数据: 月份 → 该月排班
///
/// 生命周期: 启动时从快照载入（若存在）, 导入成功后整月替换并持久化。
pub type YearData = BTreeMap<Month, Roster>;
