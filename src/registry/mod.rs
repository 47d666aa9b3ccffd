// ==========================================
// 员工名册管理系统 - 名册层
// ==========================================
// 职责: 按规范化邮箱键控的员工存储,维护唯一性不变量
// 红线: 名册不含业务规则,判重必须在存储内部原子完成
// ==========================================

pub mod employee_registry;
pub mod error;
pub mod memory_registry;

// 重导出核心类型
pub use employee_registry::EmployeeRegistry;
pub use error::{RegistryError, RegistryResult};
pub use memory_registry::InMemoryEmployeeRegistry;
