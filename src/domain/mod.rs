// ==========================================
// 员工名册管理系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含数据访问逻辑,不含导入流程逻辑
// ==========================================

pub mod employee;
pub mod types;

// 重导出核心类型
pub use employee::{EmailKey, Employee, ImportSummary, RawEmployeeRecord, SourcePosition};
pub use types::{EmploymentStatus, Position, SalaryFloorPolicy};
