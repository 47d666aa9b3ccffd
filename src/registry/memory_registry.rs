// ==========================================
// 员工名册管理系统 - 内存名册实现
// ==========================================
// 职责: RwLock<HashMap> 键控存储,键为规范化邮箱
// 约束: 判重在写锁内完成,检查与插入之间无竞态窗口;
//       导入运行期之外若与其他调用方共享,同样安全
// ==========================================

use crate::domain::{EmailKey, Employee};
use crate::registry::employee_registry::EmployeeRegistry;
use crate::registry::error::{RegistryError, RegistryResult};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::RwLock;

// ==========================================
// InMemoryEmployeeRegistry
// ==========================================
// 生命周期由调用方持有(构造、传入、销毁),不使用进程级全局状态
pub struct InMemoryEmployeeRegistry {
    entries: RwLock<HashMap<EmailKey, Employee>>,
}

impl InMemoryEmployeeRegistry {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// 入参邮箱 → 规范化键,空白输入报调用方错误
    fn key_of(email: &str) -> RegistryResult<EmailKey> {
        EmailKey::new(email).ok_or(RegistryError::BlankEmailKey)
    }
}

impl Default for InMemoryEmployeeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeRegistry for InMemoryEmployeeRegistry {
    fn add(&self, employee: Employee) -> RegistryResult<()> {
        let key = employee.email_key();
        let mut entries = self
            .entries
            .write()
            .map_err(|e| RegistryError::LockError(e.to_string()))?;

        // 判重与插入在同一把写锁内完成
        match entries.entry(key) {
            Entry::Occupied(occupied) => {
                Err(RegistryError::DuplicateEmail(occupied.key().to_string()))
            }
            Entry::Vacant(vacant) => {
                vacant.insert(employee);
                Ok(())
            }
        }
    }

    fn find_by_email(&self, email: &str) -> RegistryResult<Option<Employee>> {
        let key = Self::key_of(email)?;
        let entries = self
            .entries
            .read()
            .map_err(|e| RegistryError::LockError(e.to_string()))?;
        Ok(entries.get(&key).cloned())
    }

    fn remove(&self, email: &str) -> RegistryResult<Option<Employee>> {
        let key = Self::key_of(email)?;
        let mut entries = self
            .entries
            .write()
            .map_err(|e| RegistryError::LockError(e.to_string()))?;
        Ok(entries.remove(&key))
    }

    fn exists(&self, email: &str) -> RegistryResult<bool> {
        Ok(self.find_by_email(email)?.is_some())
    }

    fn list(&self) -> RegistryResult<Vec<Employee>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| RegistryError::LockError(e.to_string()))?;
        Ok(entries.values().cloned().collect())
    }

    fn count(&self) -> RegistryResult<usize> {
        let entries = self
            .entries
            .read()
            .map_err(|e| RegistryError::LockError(e.to_string()))?;
        Ok(entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmploymentStatus, Position};
    use chrono::Utc;

    fn create_test_employee(email: &str, salary: f64) -> Employee {
        Employee {
            name: "张三".to_string(),
            email: EmailKey::new(email).unwrap().as_str().to_string(),
            company: "TechCorp".to_string(),
            position: Position::Programmer,
            salary,
            status: EmploymentStatus::Active,
            department_id: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_and_find() {
        let registry = InMemoryEmployeeRegistry::new();
        registry
            .add(create_test_employee("jan@x.com", 9000.0))
            .unwrap();

        let found = registry.find_by_email("jan@x.com").unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().salary, 9000.0);
    }

    #[test]
    fn test_add_duplicate_fails_without_mutation() {
        let registry = InMemoryEmployeeRegistry::new();
        registry
            .add(create_test_employee("jan@x.com", 9000.0))
            .unwrap();

        // 同键再插入: 失败且不覆盖首条
        let result = registry.add(create_test_employee("jan@x.com", 99999.0));
        assert!(matches!(result, Err(RegistryError::DuplicateEmail(_))));

        let kept = registry.find_by_email("jan@x.com").unwrap().unwrap();
        assert_eq!(kept.salary, 9000.0);
        assert_eq!(registry.count().unwrap(), 1);
    }

    #[test]
    fn test_find_case_and_whitespace_insensitive() {
        let registry = InMemoryEmployeeRegistry::new();
        registry
            .add(create_test_employee("jan@x.com", 9000.0))
            .unwrap();

        assert!(registry.find_by_email(" Jan@X.com ").unwrap().is_some());
        assert!(registry.exists("JAN@X.COM").unwrap());
    }

    #[test]
    fn test_blank_input_is_caller_error() {
        let registry = InMemoryEmployeeRegistry::new();
        assert!(matches!(
            registry.find_by_email("   "),
            Err(RegistryError::BlankEmailKey)
        ));
        assert!(matches!(
            registry.remove(""),
            Err(RegistryError::BlankEmailKey)
        ));
    }

    #[test]
    fn test_remove() {
        let registry = InMemoryEmployeeRegistry::new();
        registry
            .add(create_test_employee("jan@x.com", 9000.0))
            .unwrap();

        let removed = registry.remove("JAN@x.com").unwrap();
        assert!(removed.is_some());
        assert_eq!(registry.count().unwrap(), 0);

        // 再次移除: 未找到
        assert!(registry.remove("jan@x.com").unwrap().is_none());
    }

    #[test]
    fn test_list_returns_all() {
        let registry = InMemoryEmployeeRegistry::new();
        registry
            .add(create_test_employee("a@x.com", 9000.0))
            .unwrap();
        registry
            .add(create_test_employee("b@x.com", 9000.0))
            .unwrap();

        let mut emails: Vec<String> = registry
            .list()
            .unwrap()
            .into_iter()
            .map(|e| e.email)
            .collect();
        emails.sort();
        assert_eq!(emails, vec!["a@x.com", "b@x.com"]);
    }
}
