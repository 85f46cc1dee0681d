// ==========================================
// 医院护理排班系统 - 表格加载器实现
// ==========================================
// 职责: 将本地电子表格文件物化为原始表格序列
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// ==========================================

use crate::domain::roster::{CellValue, NamedTable, RawTable};
use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

// ==========================================
// TableLoader Trait
// ==========================================
// 用途: 提取核心与文件 I/O 的边界
// 实现者: ExcelLoader, CsvLoader, UniversalLoader
pub trait TableLoader: Send + Sync {
    /// 解析文件为带标签的原始表格序列（每个工作表一张）
    ///
    /// # 参数
    /// - path: 本地文件路径
    ///
    /// # 返回
    /// - Ok(Vec<NamedTable>): 带标签的原始表格
    /// - Err: 文件缺失、格式不支持或解析失败
    fn load(&self, path: &Path) -> ImportResult<Vec<NamedTable>>;
}

// ==========================================
// Excel Loader 实现
// ==========================================
pub struct ExcelLoader;

impl TableLoader for ExcelLoader {
    fn load(&self, path: &Path) -> ImportResult<Vec<NamedTable>> {
        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 打开工作簿（按内容自动识别 .xlsx/.xls）
        let mut workbook = open_workbook_auto(path)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let sheet_names = workbook.sheet_names().to_owned();
        let mut tables = Vec::with_capacity(sheet_names.len());

        for sheet_name in sheet_names {
            let range = workbook
                .worksheet_range(&sheet_name)
                .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

            let rows: RawTable = range
                .rows()
                .map(|row| row.iter().map(convert_cell).collect())
                .collect();

            tables.push(NamedTable {
                label: sheet_name,
                rows,
            });
        }

        Ok(tables)
    }
}

/// calamine 单元格 → 领域单元格
///
/// 日期格式单元格保留其串行值（交给提取器做串行还原）;
/// 错误单元格按空处理。
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => {
            if s.trim().is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(s.clone())
            }
        }
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Empty,
    }
}

// ==========================================
// CSV Loader 实现
// ==========================================
// CSV 只有单表, 表标签取文件主名（月份回退解析因此也覆盖 CSV）
//
// 字段类型归一: CSV 导出会把数字列写成文本（"91019.0"、"1.0"）,
// 这里把可按数字解析的字段还原为数字单元格, 与 Excel 路径保持
// 一致（日标题识别、标识列与串行还原因此对两种来源同样生效）。
pub struct CsvLoader;

fn convert_csv_field(field: &str) -> CellValue {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return CellValue::Empty;
    }
    if let Ok(n) = trimmed.parse::<f64>() {
        if n.is_finite() {
            return CellValue::Number(n);
        }
    }
    CellValue::Text(trimmed.to_string())
}

impl TableLoader for CsvLoader {
    fn load(&self, path: &Path) -> ImportResult<Vec<NamedTable>> {
        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        if let Some(ext) = path.extension() {
            let ext = ext.to_string_lossy().to_lowercase();
            if ext != "csv" {
                return Err(ImportError::UnsupportedFormat(ext));
            }
        }

        let file =
            File::open(path).map_err(|e| ImportError::CsvParseError(e.to_string()))?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let mut rows: RawTable = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| ImportError::CsvParseError(e.to_string()))?;
            rows.push(record.iter().map(convert_csv_field).collect());
        }

        let label = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(vec![NamedTable { label, rows }])
    }
}

// ==========================================
// 通用加载器（根据扩展名自动选择）
// ==========================================
pub struct UniversalLoader;

impl TableLoader for UniversalLoader {
    fn load(&self, path: &Path) -> ImportResult<Vec<NamedTable>> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvLoader.load(path),
            "xlsx" | "xls" => ExcelLoader.load(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_csv_loader_basic() {
        // 构造一个最小的排班 CSV
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Nome,,1,2,3").unwrap();
        writeln!(temp_file, "Ana Silva,,8-16,F,8-16").unwrap();

        let tables = CsvLoader.load(temp_file.path()).unwrap();
        assert_eq!(tables.len(), 1);

        let rows = &tables[0].rows;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], CellValue::Text("Nome".to_string()));
        assert_eq!(rows[0][1], CellValue::Empty);
        assert_eq!(rows[1][2], CellValue::Text("8-16".to_string()));
        // 数字列还原为数字单元格（Excel 的 CSV 导出写作 "1.0"）
        assert_eq!(rows[0][2], CellValue::Number(1.0));
    }

    #[test]
    fn test_csv_numeric_field_normalization() {
        assert_eq!(convert_csv_field("91019.0"), CellValue::Number(91019.0));
        assert_eq!(convert_csv_field("1.0"), CellValue::Number(1.0));
        assert_eq!(convert_csv_field("8-16"), CellValue::Text("8-16".to_string()));
        // 折休记号 "-" 不是数字
        assert_eq!(convert_csv_field("-"), CellValue::Text("-".to_string()));
        assert_eq!(convert_csv_field("  "), CellValue::Empty);
    }

    #[test]
    fn test_csv_loader_file_not_found() {
        let result = CsvLoader.load(Path::new("nao_existe.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_universal_loader_rejects_unknown_extension() {
        let result = UniversalLoader.load(Path::new("escala.pdf"));
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_convert_cell_date_keeps_serial() {
        // 字符串/空白转换
        assert_eq!(convert_cell(&Data::Empty), CellValue::Empty);
        assert_eq!(
            convert_cell(&Data::String("   ".to_string())),
            CellValue::Empty
        );
        assert_eq!(
            convert_cell(&Data::String("F".to_string())),
            CellValue::Text("F".to_string())
        );
        assert_eq!(convert_cell(&Data::Float(45885.0)), CellValue::Number(45885.0));
        assert_eq!(convert_cell(&Data::Int(8)), CellValue::Number(8.0));
    }
}
