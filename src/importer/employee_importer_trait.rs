// ==========================================
// 员工名册管理系统 - 导入 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口(不包含实现)
// 流程: 整源读入 → 单元切分 → 字段映射 → 校验构造 → 入册 → 汇总
// ==========================================

use crate::domain::{Employee, ImportSummary, RawEmployeeRecord, SourcePosition};
use crate::importer::error::ImportResult;
use crate::importer::file_parser::ParsedUnit;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

// ==========================================
// EmployeeImporter Trait
// ==========================================
// 用途: 员工导入主接口
// 实现者: EmployeeImporterImpl
#[async_trait]
pub trait EmployeeImporter: Send + Sync {
    /// 从 CSV 文件导入员工数据
    ///
    /// # 返回
    /// - Ok(ImportSummary): 成功数 + 逐单元错误(单元失败不中止)
    /// - Err: 仅结构性失败(文件不可读)
    async fn import_from_csv<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<ImportSummary>;

    /// 从 XML 文件导入员工数据
    ///
    /// # 返回
    /// - Ok(ImportSummary): 成功数 + 逐单元错误
    /// - Err: 仅结构性失败(文件不可读 / 文档不可解析 / 根元素不符)
    async fn import_from_xml<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<ImportSummary>;

    /// 按扩展名自动选择解析器导入
    ///
    /// # 返回
    /// - Err(UnsupportedFormat): 既非 .csv 也非 .xml
    async fn import_from_file<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<ImportSummary>;

    /// 批量导入多个文件(并发执行)
    ///
    /// # 说明
    /// - 每个文件的导入相互独立,单文件结构性失败不影响其他文件
    /// - 名册插入由存储内部串行化,并发导入同一名册安全
    async fn batch_import<P: AsRef<Path> + Send + Sync>(
        &self,
        file_paths: Vec<P>,
    ) -> Vec<Result<ImportSummary, String>>;
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 整源文本 → 输入单元序列(有限,不可重放)
// 实现者: CsvParser, XmlParser
// 约束: 形状缺陷单元以 Err 字段透传;仅无法切分时整体返回 Err
pub trait FileParser: Send + Sync {
    fn parse_units(&self, content: &str) -> ImportResult<Vec<ParsedUnit>>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 命名字段 → 导入中间结构(去空白/空值归一,无校验)
// 实现者: FieldMapper
pub trait FieldMapper: Send + Sync {
    fn map_to_raw_employee(
        &self,
        fields: HashMap<String, String>,
        source_position: SourcePosition,
    ) -> RawEmployeeRecord;
}

// ==========================================
// EmployeeValidator Trait
// ==========================================
// 用途: 校验并构造员工(纯函数,不触达名册)
// 实现者: EmployeeValidator
pub trait EmployeeValidator: Send + Sync {
    fn build_employee(&self, record: &RawEmployeeRecord) -> ImportResult<Employee>;
}
