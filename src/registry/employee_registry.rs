// ==========================================
// 员工名册管理系统 - 名册 Trait
// ==========================================
// 职责: 定义按规范化邮箱键控的员工集合接口(不包含实现)
// 红线: 名册不含业务规则,只维护"每个规范化邮箱至多一名员工"不变量
// ==========================================

use crate::domain::Employee;
use crate::registry::error::RegistryResult;

// ==========================================
// EmployeeRegistry Trait
// ==========================================
// 用途: 员工名册主接口
// 实现者: InMemoryEmployeeRegistry
// 约束: 实现必须在内部完成判重与插入的原子化,调用方不得预检
pub trait EmployeeRegistry: Send + Sync {
    /// 新增员工
    ///
    /// # 返回
    /// - Ok(()): 规范化邮箱未被占用,已插入
    /// - Err(DuplicateEmail): 键已存在,名册状态不变(非 upsert)
    fn add(&self, employee: Employee) -> RegistryResult<()>;

    /// 按邮箱查找(大小写不敏感,入参先去空白)
    ///
    /// # 返回
    /// - Ok(Some(employee)): 命中
    /// - Ok(None): 未找到
    /// - Err(BlankEmailKey): 空白入参
    fn find_by_email(&self, email: &str) -> RegistryResult<Option<Employee>>;

    /// 按邮箱移除
    ///
    /// # 返回
    /// - Ok(Some(employee)): 已移除,返回被移除的员工
    /// - Ok(None): 未找到
    fn remove(&self, email: &str) -> RegistryResult<Option<Employee>>;

    /// 邮箱是否已占用(等价于 find_by_email(email) 命中)
    fn exists(&self, email: &str) -> RegistryResult<bool>;

    /// 全部员工(顺序未定义,由调用方自行排序)
    fn list(&self) -> RegistryResult<Vec<Employee>>;

    /// 名册员工数
    fn count(&self) -> RegistryResult<usize>;
}
