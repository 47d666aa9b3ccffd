// ==========================================
// 员工名册管理系统 - 源文件解析器实现
// ==========================================
// 职责: 整源读入后切分为输入单元(一行 / 一个 employee 元素)
// 红线: 此层不做字段校验;形状缺陷单元以错误值形式向下游透传,
//       仅"无法切分单元"的结构性缺陷中止整源
// 支持: CSV (.csv) / XML (.xml)
// ==========================================

use crate::domain::SourcePosition;
use crate::importer::employee_importer_trait::FileParser;
use crate::importer::error::{ImportError, ImportResult};
use csv::ReaderBuilder;
use roxmltree::{Document, ParsingOptions};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

// CSV 期望列序(6 列含姓/名拆分,5 列为合并姓名)
const CSV_FIELDS_SPLIT_NAME: [&str; 6] =
    ["first_name", "last_name", "email", "company", "position", "salary"];
const CSV_FIELDS_JOINED_NAME: [&str; 5] = ["name", "email", "company", "position", "salary"];

// XML 可接受的根元素名(大小写不敏感)
const ACCEPTED_ROOTS: [&str; 2] = ["employees", "staff"];

// XML employee 元素的必需子元素
const REQUIRED_CHILDREN: [&str; 5] = ["name", "email", "company", "position", "salary"];

// ==========================================
// ParsedUnit - 切分后的输入单元
// ==========================================
// fields 为 Err 表示单元形状缺陷(字段数不匹配 / 缺少子元素),
// 由编排器逐单元记录,不影响后续单元
#[derive(Debug)]
pub struct ParsedUnit {
    pub position: SourcePosition,
    pub fields: ImportResult<HashMap<String, String>>,
}

// ==========================================
// SourceFormat - 源格式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Xml,
}

impl SourceFormat {
    /// 按扩展名识别源格式(大小写不敏感)
    pub fn from_extension<P: AsRef<Path>>(path: P) -> ImportResult<SourceFormat> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => Ok(SourceFormat::Csv),
            "xml" => Ok(SourceFormat::Xml),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Csv => write!(f, "CSV"),
            SourceFormat::Xml => write!(f, "XML"),
        }
    }
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_units(&self, content: &str) -> ImportResult<Vec<ParsedUnit>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 行长度不一致由单元级错误处理,不在读取层中止
            .from_reader(content.as_bytes());

        let mut units = Vec::new();
        let mut first_data_row_seen = false;

        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            let line = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(idx + 1);

            let values: Vec<&str> = record.iter().collect();

            // 跳过完全空白的行(不计成功也不计失败)
            if values.iter().all(|v| v.trim().is_empty()) {
                continue;
            }

            // 可选表头行: 首个非空白行若含字面 email 列名则静默跳过
            if !first_data_row_seen {
                first_data_row_seen = true;
                if values.iter().any(|v| v.trim().eq_ignore_ascii_case("email")) {
                    continue;
                }
            }

            units.push(ParsedUnit {
                position: SourcePosition::Line(line),
                fields: Self::name_fields(&values),
            });
        }

        Ok(units)
    }
}

impl CsvParser {
    /// 按列序为原始值命名
    ///
    /// # 返回
    /// - Ok(map): 6 列(姓名拆分,合并为 name)或 5 列(合并姓名)
    /// - Err(FieldCountMismatch): 其他列数,作为形状缺陷单元透传
    fn name_fields(values: &[&str]) -> ImportResult<HashMap<String, String>> {
        let mut map = HashMap::new();

        match values.len() {
            6 => {
                for (key, value) in CSV_FIELDS_SPLIT_NAME.iter().zip(values) {
                    map.insert((*key).to_string(), value.trim().to_string());
                }
                // 姓名拆分列 → 合并 name(空段忽略)
                let first = map.remove("first_name").unwrap_or_default();
                let last = map.remove("last_name").unwrap_or_default();
                let name = [first, last]
                    .iter()
                    .filter(|part| !part.is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(" ");
                map.insert("name".to_string(), name);
            }
            5 => {
                for (key, value) in CSV_FIELDS_JOINED_NAME.iter().zip(values) {
                    map.insert((*key).to_string(), value.trim().to_string());
                }
            }
            actual => return Err(ImportError::FieldCountMismatch { actual }),
        }

        Ok(map)
    }
}

// ==========================================
// XML Parser 实现
// ==========================================
pub struct XmlParser;

impl FileParser for XmlParser {
    fn parse_units(&self, content: &str) -> ImportResult<Vec<ParsedUnit>> {
        // 安全红线: 禁用 DTD,含 DOCTYPE/外部实体引用的文档在解析期即失败
        let mut options = ParsingOptions::default();
        options.allow_dtd = false;

        let document = Document::parse_with_options(content, options)?;

        // 根元素不符属结构性缺陷: 文档无法按员工集合切分,整源中止
        let root = document.root_element();
        let root_name = root.tag_name().name();
        if !ACCEPTED_ROOTS
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(root_name))
        {
            return Err(ImportError::UnexpectedRootElement {
                found: root_name.to_string(),
            });
        }

        // 按文档序枚举 employee 子元素,序号 1 起
        let mut units = Vec::new();
        let employees = root
            .children()
            .filter(|node| node.is_element())
            .filter(|node| node.tag_name().name().eq_ignore_ascii_case("employee"));

        for (idx, employee) in employees.enumerate() {
            let mut map = HashMap::new();
            for child in employee.children().filter(|node| node.is_element()) {
                let key = child.tag_name().name().to_lowercase();
                let value = child.text().unwrap_or("").trim().to_string();
                map.insert(key, value);
            }

            // 缺少必需子元素: 仅该单元记错,不影响其余单元
            let fields = match REQUIRED_CHILDREN
                .iter()
                .find(|required| !map.contains_key(**required))
            {
                Some(missing) => Err(ImportError::MissingElement {
                    element: (*missing).to_string(),
                }),
                None => Ok(map),
            };

            units.push(ParsedUnit {
                position: SourcePosition::Element(idx + 1),
                fields,
            });
        }

        Ok(units)
    }
}
