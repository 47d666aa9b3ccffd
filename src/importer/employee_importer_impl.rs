// ==========================================
// 员工名册管理系统 - 员工导入器实现
// ==========================================
// 职责: 整合导入流程,从源文本到名册
// 流程: 读取 → 切分 → 映射 → 校验构造 → 入册 → 汇总
// 红线: 故障隔离按单元而非按阶段;单元失败记一条错误后继续,
//       仅结构性失败(源不可读/不可切分)中止并上抛
// ==========================================

use crate::domain::ImportSummary;
use crate::importer::employee_importer_trait::{
    EmployeeImporter, EmployeeValidator, FieldMapper, FileParser,
};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::SourceFormat;
use crate::registry::{EmployeeRegistry, RegistryError};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, info_span, warn};
use uuid::Uuid;

// ==========================================
// EmployeeImporterImpl - 员工导入器实现
// ==========================================
pub struct EmployeeImporterImpl<R>
where
    R: EmployeeRegistry,
{
    // 名册(生命周期由调用方持有)
    registry: Arc<R>,

    // 导入组件
    csv_parser: Box<dyn FileParser>,
    xml_parser: Box<dyn FileParser>,
    field_mapper: Box<dyn FieldMapper>,
    validator: Box<dyn EmployeeValidator>,
}

impl<R> EmployeeImporterImpl<R>
where
    R: EmployeeRegistry,
{
    /// 创建新的 EmployeeImporter 实例
    ///
    /// # 参数
    /// - registry: 员工名册
    /// - csv_parser / xml_parser: 单元切分器
    /// - field_mapper: 字段映射器
    /// - validator: 记录校验与构造器
    pub fn new(
        registry: Arc<R>,
        csv_parser: Box<dyn FileParser>,
        xml_parser: Box<dyn FileParser>,
        field_mapper: Box<dyn FieldMapper>,
        validator: Box<dyn EmployeeValidator>,
    ) -> Self {
        Self {
            registry,
            csv_parser,
            xml_parser,
            field_mapper,
            validator,
        }
    }

    /// 导入已读入的源文本(同步核心,单遍,无重试)
    ///
    /// # 返回
    /// - Ok(ImportSummary): 含成功数与按源顺序的逐单元错误
    /// - Err: 仅结构性失败(文档不可解析 / 根元素不符)
    pub fn import_text(&self, content: &str, format: SourceFormat) -> ImportResult<ImportSummary> {
        let batch_id = Uuid::new_v4();
        let span = info_span!("import", batch_id = %batch_id, format = %format);
        let _guard = span.enter();

        info!(bytes = content.len(), "开始导入员工数据");

        // === 步骤 1: 单元切分(结构性失败在此上抛) ===
        debug!("步骤 1: 单元切分");
        let parser = match format {
            SourceFormat::Csv => &self.csv_parser,
            SourceFormat::Xml => &self.xml_parser,
        };
        let units = parser.parse_units(content).map_err(|e| {
            error!(error = %e, "源切分失败,中止本次导入");
            e
        })?;
        debug!(units = units.len(), "单元切分完成");

        // === 步骤 2: 逐单元 映射 → 校验构造 → 入册 ===
        let mut summary = ImportSummary::new();
        for unit in units {
            let position = unit.position;

            // 形状缺陷单元: 记错误后处理下一单元
            let fields = match unit.fields {
                Ok(fields) => fields,
                Err(e) => {
                    warn!(position = %position, error = %e, "单元形状缺陷");
                    summary.record_error(format!("{}: {}", position, e));
                    continue;
                }
            };

            let record = self.field_mapper.map_to_raw_employee(fields, position);

            let employee = match self.validator.build_employee(&record) {
                Ok(employee) => employee,
                Err(e) => {
                    warn!(position = %position, error = %e, "单元校验失败");
                    summary.record_error(format!("{}: {}", position, e));
                    continue;
                }
            };

            // 入册: 判重在名册写锁内完成,批内重复与既有记录重复同样处理,
            // 首次出现者保留,后续重复记错误
            match self.registry.add(employee) {
                Ok(()) => summary.record_imported(),
                Err(RegistryError::DuplicateEmail(email)) => {
                    warn!(position = %position, email = %email, "邮箱重复,单元被拒");
                    summary.record_error(format!(
                        "{}: {}",
                        position,
                        ImportError::DuplicateEmail(email)
                    ));
                }
                Err(e) => {
                    error!(position = %position, error = %e, "入册失败");
                    summary.record_error(format!("{}: {}", position, ImportError::from(e)));
                }
            }
        }

        info!(
            imported = summary.imported_count,
            failed = summary.errors.len(),
            "员工数据导入完成"
        );
        if let Ok(report) = summary.to_json() {
            debug!(report = %report, "导入报告");
        }

        Ok(summary)
    }

    /// 读取文件全文(结构性失败: 文件不存在 / 不可读)
    async fn read_source<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<String> {
        let path = file_path.as_ref();
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }
        Ok(tokio::fs::read_to_string(path).await?)
    }
}

#[async_trait::async_trait]
impl<R> EmployeeImporter for EmployeeImporterImpl<R>
where
    R: EmployeeRegistry,
{
    async fn import_from_csv<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<ImportSummary> {
        let content = self.read_source(file_path).await?;
        self.import_text(&content, SourceFormat::Csv)
    }

    async fn import_from_xml<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<ImportSummary> {
        let content = self.read_source(file_path).await?;
        self.import_text(&content, SourceFormat::Xml)
    }

    async fn import_from_file<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<ImportSummary> {
        let format = SourceFormat::from_extension(file_path.as_ref())?;
        let content = self.read_source(file_path).await?;
        self.import_text(&content, format)
    }

    async fn batch_import<P: AsRef<Path> + Send + Sync>(
        &self,
        file_paths: Vec<P>,
    ) -> Vec<Result<ImportSummary, String>> {
        use futures::future::join_all;

        info!(count = file_paths.len(), "开始批量导入文件");

        let import_tasks = file_paths.into_iter().map(|path| {
            let path_str = path.as_ref().display().to_string();
            async move {
                match self.import_from_file(path).await {
                    Ok(summary) => {
                        info!(
                            file = %path_str,
                            imported = summary.imported_count,
                            "文件导入完成"
                        );
                        Ok(summary)
                    }
                    Err(e) => {
                        // 单文件结构性失败折入该文件的错误槽,不影响其他文件
                        error!(file = %path_str, error = %e, "文件导入失败");
                        Err(format!("文件 {} 导入失败: {}", path_str, e))
                    }
                }
            }
        });

        let results = join_all(import_tasks).await;

        info!(
            total = results.len(),
            success = results.iter().filter(|r| r.is_ok()).count(),
            failed = results.iter().filter(|r| r.is_err()).count(),
            "批量导入完成"
        );

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::field_mapper::FieldMapper as FieldMapperImpl;
    use crate::importer::file_parser::{CsvParser, XmlParser};
    use crate::importer::validator::EmployeeValidator as EmployeeValidatorImpl;
    use crate::registry::InMemoryEmployeeRegistry;

    fn create_test_importer(
        registry: Arc<InMemoryEmployeeRegistry>,
    ) -> EmployeeImporterImpl<InMemoryEmployeeRegistry> {
        EmployeeImporterImpl::new(
            registry,
            Box::new(CsvParser),
            Box::new(XmlParser),
            Box::new(FieldMapperImpl),
            Box::new(EmployeeValidatorImpl::default()),
        )
    }

    #[test]
    fn test_import_text_all_valid() {
        let registry = Arc::new(InMemoryEmployeeRegistry::new());
        let importer = create_test_importer(registry.clone());

        let content = "name,email,company,position,salary\n\
                       John,Doe,john@x.com,TechCorp,PROGRAMMER,9000\n\
                       Jane,Smith,jane@x.com,TechCorp,MANAGER,15000\n";
        let summary = importer.import_text(content, SourceFormat::Csv).unwrap();

        assert_eq!(summary.imported_count, 2);
        assert!(summary.errors.is_empty());
        assert_eq!(registry.count().unwrap(), 2);
    }

    #[test]
    fn test_import_text_unit_failures_do_not_abort() {
        let registry = Arc::new(InMemoryEmployeeRegistry::new());
        let importer = create_test_importer(registry.clone());

        let content = "John,Doe,john@x.com,TechCorp,PROGRAMMER,9000\n\
                       Jane,Smith,,TechCorp,MANAGER,15000\n\
                       Bob,Wilson,bob@x.com,TechCorp,BAD_ROLE,5000\n\
                       Alice,Brown,alice@x.com,TechCorp,PROGRAMMER,-1000\n";
        let summary = importer.import_text(content, SourceFormat::Csv).unwrap();

        assert_eq!(summary.imported_count, 1);
        assert_eq!(summary.errors.len(), 3);
        // 错误按源顺序,且带行号前缀
        assert!(summary.errors[0].starts_with("第 2 行:"));
        assert!(summary.errors[1].contains("BAD_ROLE"));
        assert!(summary.errors[2].contains("-1000"));
        assert_eq!(registry.count().unwrap(), 1);
    }

    #[test]
    fn test_import_text_duplicate_within_batch() {
        let registry = Arc::new(InMemoryEmployeeRegistry::new());
        let importer = create_test_importer(registry.clone());

        let content = "John,Doe,john@x.com,TechCorp,PROGRAMMER,9000\n\
                       Johnny,Doe, John@X.com ,OtherCorp,MANAGER,15000\n";
        let summary = importer.import_text(content, SourceFormat::Csv).unwrap();

        // 首次出现者保留,重复单元记错误且不覆盖
        assert_eq!(summary.imported_count, 1);
        assert_eq!(summary.errors.len(), 1);
        assert!(summary.errors[0].contains("邮箱重复"));

        let kept = registry.find_by_email("john@x.com").unwrap().unwrap();
        assert_eq!(kept.company, "TechCorp");
    }

    #[test]
    fn test_import_text_structural_failure_is_err() {
        let registry = Arc::new(InMemoryEmployeeRegistry::new());
        let importer = create_test_importer(registry.clone());

        let content = "<departments></departments>";
        let result = importer.import_text(content, SourceFormat::Xml);

        assert!(matches!(
            result,
            Err(ImportError::UnexpectedRootElement { .. })
        ));
        assert_eq!(registry.count().unwrap(), 0);
    }
}
