// ==========================================
// 员工名册管理系统 - 记录校验与构造器实现
// ==========================================
// 依据: 员工数据字典 - 导入校验规则
// 职责: RawEmployeeRecord → Employee,规则按序短路
// 红线: 纯函数式,无副作用,不触达名册;底薪下限按显式策略处理
// ==========================================

use crate::domain::{
    Employee, EmploymentStatus, Position, RawEmployeeRecord, SalaryFloorPolicy,
};
use crate::importer::employee_importer_trait::EmployeeValidator as EmployeeValidatorTrait;
use crate::importer::error::{ImportError, ImportResult};
use chrono::Utc;
use regex::Regex;
use tracing::debug;

// 常规 local@domain.tld 形式;不追求 RFC 全集
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

pub struct EmployeeValidator {
    email_re: Regex,
    floor_policy: SalaryFloorPolicy,
}

impl EmployeeValidator {
    /// 创建校验器(邮箱正则仅编译一次)
    pub fn new(floor_policy: SalaryFloorPolicy) -> Self {
        Self {
            // 模式为编译期常量,构造不可能失败
            email_re: Regex::new(EMAIL_PATTERN).expect("邮箱正则应可编译"),
            floor_policy,
        }
    }
}

impl Default for EmployeeValidator {
    fn default() -> Self {
        Self::new(SalaryFloorPolicy::default())
    }
}

impl EmployeeValidatorTrait for EmployeeValidator {
    /// 校验并构造员工
    ///
    /// # 规则(按序短路)
    /// 1. name / email / company 去空白后非空
    /// 2. 邮箱匹配常规 local@domain.tld 形式
    /// 3. 岗位 token 命中查找表
    /// 4. 薪资可解析且非负;低于岗位底薪按策略抬升(Clamp)或拒绝(Reject)
    /// 5. 状态 token 宽松解析,无法识别回落 ACTIVE
    fn build_employee(&self, record: &RawEmployeeRecord) -> ImportResult<Employee> {
        // 规则 1: 必填字段
        let name = self.required(&record.name, "name")?;
        let email_raw = self.required(&record.email, "email")?;
        let company = self.required(&record.company, "company")?;

        // 规则 2: 邮箱格式(在规范化前校验,规范化不改变匹配结果)
        if !self.email_re.is_match(&email_raw) {
            return Err(ImportError::InvalidEmailFormat { value: email_raw });
        }
        let email = email_raw.trim().to_lowercase();

        // 规则 3: 岗位
        let position_token = record.position.clone().unwrap_or_default();
        let position = Position::parse(&position_token).ok_or(ImportError::UnknownPosition {
            token: position_token,
        })?;

        // 规则 4: 薪资
        let salary_raw = record.salary.clone().unwrap_or_default();
        let salary: f64 = salary_raw
            .trim()
            .parse()
            .map_err(|_| ImportError::InvalidSalary {
                value: salary_raw.clone(),
            })?;
        if salary < 0.0 {
            return Err(ImportError::NegativeSalary { value: salary });
        }
        let salary = self.apply_floor(salary, position)?;

        // 规则 5: 状态(仅扩展来源携带,无法识别不阻断记录)
        let status = EmploymentStatus::parse_lenient(record.status.as_deref());

        Ok(Employee {
            name,
            email,
            company,
            position,
            salary,
            status,
            department_id: record.department_id.clone(),
            created_at: Utc::now(),
        })
    }
}

impl EmployeeValidator {
    /// 必填字段: 去空白后非空
    fn required(&self, value: &Option<String>, field: &str) -> ImportResult<String> {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .ok_or_else(|| ImportError::RequiredFieldMissing {
                field: field.to_string(),
            })
    }

    /// 底薪下限处理
    ///
    /// Clamp: 低于下限抬升至下限("员工薪资不低于岗位下限",业务策略而非校验失败);
    /// 已达下限的值保持不变,重复应用幂等
    fn apply_floor(&self, salary: f64, position: Position) -> ImportResult<f64> {
        let floor = position.base_salary();
        if salary >= floor {
            return Ok(salary);
        }

        match self.floor_policy {
            SalaryFloorPolicy::Clamp => {
                debug!(
                    position = %position,
                    supplied = salary,
                    floor = floor,
                    "薪资低于岗位下限,抬升至下限"
                );
                Ok(floor)
            }
            SalaryFloorPolicy::Reject => Err(ImportError::SalaryBelowFloor {
                value: salary,
                floor,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SourcePosition;

    fn create_test_record() -> RawEmployeeRecord {
        RawEmployeeRecord {
            name: Some("John Doe".to_string()),
            email: Some("john@x.com".to_string()),
            company: Some("TechCorp".to_string()),
            position: Some("PROGRAMMER".to_string()),
            salary: Some("9000".to_string()),
            status: None,
            department_id: None,
            source_position: SourcePosition::Line(2),
        }
    }

    #[test]
    fn test_build_employee_valid() {
        let validator = EmployeeValidator::default();
        let employee = validator.build_employee(&create_test_record()).unwrap();

        assert_eq!(employee.name, "John Doe");
        assert_eq!(employee.email, "john@x.com");
        assert_eq!(employee.position, Position::Programmer);
        assert_eq!(employee.salary, 9000.0);
        assert_eq!(employee.status, EmploymentStatus::Active);
    }

    #[test]
    fn test_required_field_missing() {
        let validator = EmployeeValidator::default();
        let mut record = create_test_record();
        record.email = None;

        let result = validator.build_employee(&record);
        assert!(matches!(
            result,
            Err(ImportError::RequiredFieldMissing { ref field }) if field == "email"
        ));
    }

    #[test]
    fn test_invalid_email_format() {
        let validator = EmployeeValidator::default();
        for bad in ["not-an-email", "a@b", "a@@x.com", "a b@x.com"] {
            let mut record = create_test_record();
            record.email = Some(bad.to_string());
            assert!(
                matches!(
                    validator.build_employee(&record),
                    Err(ImportError::InvalidEmailFormat { .. })
                ),
                "应拒绝: {}",
                bad
            );
        }
    }

    #[test]
    fn test_email_normalized_to_lowercase() {
        let validator = EmployeeValidator::default();
        let mut record = create_test_record();
        record.email = Some("Jan@X.Com".to_string());

        let employee = validator.build_employee(&record).unwrap();
        assert_eq!(employee.email, "jan@x.com");
    }

    #[test]
    fn test_unknown_position_names_token() {
        let validator = EmployeeValidator::default();
        let mut record = create_test_record();
        record.position = Some("BAD_ROLE".to_string());

        let result = validator.build_employee(&record);
        assert!(matches!(
            result,
            Err(ImportError::UnknownPosition { ref token }) if token == "BAD_ROLE"
        ));
    }

    #[test]
    fn test_salary_unparseable() {
        let validator = EmployeeValidator::default();
        let mut record = create_test_record();
        record.salary = Some("lots".to_string());

        assert!(matches!(
            validator.build_employee(&record),
            Err(ImportError::InvalidSalary { .. })
        ));
    }

    #[test]
    fn test_salary_negative() {
        let validator = EmployeeValidator::default();
        let mut record = create_test_record();
        record.salary = Some("-1000".to_string());

        assert!(matches!(
            validator.build_employee(&record),
            Err(ImportError::NegativeSalary { .. })
        ));
    }

    #[test]
    fn test_salary_clamped_to_floor() {
        let validator = EmployeeValidator::default();
        let mut record = create_test_record();
        record.position = Some("MANAGER".to_string());
        record.salary = Some("0".to_string());

        let employee = validator.build_employee(&record).unwrap();
        assert_eq!(employee.salary, Position::Manager.base_salary());
    }

    #[test]
    fn test_salary_above_floor_unchanged() {
        // 下限规则幂等: 达标值不被修改
        let validator = EmployeeValidator::default();
        let mut record = create_test_record();
        record.position = Some("MANAGER".to_string());
        record.salary = Some("15000".to_string());

        let employee = validator.build_employee(&record).unwrap();
        assert_eq!(employee.salary, 15000.0);
    }

    #[test]
    fn test_reject_policy_errors_below_floor() {
        let validator = EmployeeValidator::new(SalaryFloorPolicy::Reject);
        let mut record = create_test_record();
        record.position = Some("MANAGER".to_string());
        record.salary = Some("5000".to_string());

        assert!(matches!(
            validator.build_employee(&record),
            Err(ImportError::SalaryBelowFloor { .. })
        ));
    }

    #[test]
    fn test_status_lenient_default() {
        let validator = EmployeeValidator::default();
        let mut record = create_test_record();
        record.status = Some("whatever".to_string());

        let employee = validator.build_employee(&record).unwrap();
        assert_eq!(employee.status, EmploymentStatus::Active);
    }
}
