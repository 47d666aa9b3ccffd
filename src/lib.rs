// ==========================================
// 员工名册管理系统 - 核心库
// ==========================================
// 系统定位: 员工名册批量导入子系统
// 流程: 整源读入 → 单元切分 → 字段映射 → 校验构造 → 入册 → 汇总
// 红线: 单元故障隔离;名册以规范化邮箱为唯一键
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 名册层 - 键控存储
pub mod registry;

// 导入层 - 外部数据
pub mod importer;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{EmploymentStatus, Position, SalaryFloorPolicy};

// 领域实体
pub use domain::{EmailKey, Employee, ImportSummary, RawEmployeeRecord, SourcePosition};

// 名册
pub use registry::{EmployeeRegistry, InMemoryEmployeeRegistry, RegistryError, RegistryResult};

// 导入器
pub use importer::{
    CsvParser, EmployeeImporter, EmployeeImporterImpl, ImportError, ImportResult, SourceFormat,
    XmlParser,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "员工名册管理系统";
