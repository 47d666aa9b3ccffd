// ==========================================
// 员工名册管理系统 - 导入层
// ==========================================
// 职责: 外部员工数据批量导入,生成名册记录与导入汇总
// 支持: CSV, XML
// 红线: 故障隔离按单元;整源仅在不可切分时中止
// ==========================================

// 模块声明
pub mod employee_importer_impl;
pub mod employee_importer_trait;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod validator;

// 重导出核心类型
pub use employee_importer_impl::EmployeeImporterImpl;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper as FieldMapperImpl;
pub use file_parser::{CsvParser, ParsedUnit, SourceFormat, XmlParser};
pub use validator::EmployeeValidator as EmployeeValidatorImpl;

// 重导出 Trait 接口
pub use employee_importer_trait::{EmployeeImporter, EmployeeValidator, FieldMapper, FileParser};
