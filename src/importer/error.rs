// ==========================================
// 员工名册管理系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 分类: 整源结构性错误 / 单元形状错误 / 单元校验错误
// ==========================================

use crate::registry::RegistryError;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 结构性错误(整源致命,中止本次导入)=====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .csv/.xml）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    #[error("XML 解析失败: {0}")]
    XmlParseError(String),

    #[error("根元素不符: 期望 employees/staff, 实际 {found}")]
    UnexpectedRootElement { found: String },

    // ===== 单元形状错误(逐单元记录,不中止)=====
    #[error("字段数不匹配: 期望 5 或 6, 实际 {actual}")]
    FieldCountMismatch { actual: usize },

    #[error("缺少子元素: {element}")]
    MissingElement { element: String },

    // ===== 单元校验错误(逐单元记录,不中止)=====
    #[error("必填字段为空: {field}")]
    RequiredFieldMissing { field: String },

    #[error("邮箱格式错误: {value}")]
    InvalidEmailFormat { value: String },

    #[error("未知岗位: {token}")]
    UnknownPosition { token: String },

    #[error("薪资解析失败: {value}")]
    InvalidSalary { value: String },

    #[error("薪资为负数: {value}")]
    NegativeSalary { value: f64 },

    // 仅在 Reject 底薪策略下产生
    #[error("薪资低于岗位下限: {value} < {floor}")]
    SalaryBelowFloor { value: f64, floor: f64 },

    // ===== 唯一性冲突(逐单元记录,与校验错误可区分)=====
    #[error("邮箱重复: {0}")]
    DuplicateEmail(String),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<roxmltree::Error>
impl From<roxmltree::Error> for ImportError {
    fn from(err: roxmltree::Error) -> Self {
        ImportError::XmlParseError(err.to_string())
    }
}

// 实现 From<RegistryError>
impl From<RegistryError> for ImportError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::DuplicateEmail(email) => ImportError::DuplicateEmail(email),
            other => ImportError::InternalError(other.to_string()),
        }
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
