// ==========================================
// 员工名册管理系统 - 字段映射器实现
// ==========================================
// 职责: 命名原始字段 → RawEmployeeRecord(去空白 + 空值归一 + 列名别名)
// 红线: 不做格式/业务校验,类型解析留给校验器
// ==========================================

use crate::domain::{RawEmployeeRecord, SourcePosition};
use crate::importer::employee_importer_trait::FieldMapper as FieldMapperTrait;
use std::collections::HashMap;

pub struct FieldMapper;

impl FieldMapperTrait for FieldMapper {
    fn map_to_raw_employee(
        &self,
        fields: HashMap<String, String>,
        source_position: SourcePosition,
    ) -> RawEmployeeRecord {
        RawEmployeeRecord {
            name: self.get_string(&fields, "name"),
            email: self.get_string(&fields, "email"),
            company: self.get_string(&fields, "company"),
            position: self.get_string(&fields, "position"),
            salary: self.get_string(&fields, "salary"),
            status: self.get_string(&fields, "status"),
            department_id: self.get_string(&fields, "department_id"),
            source_position,
        }
    }
}

impl FieldMapper {
    /// 提取字符串字段(去空白,空值归一为 None),支持列名/元素名别名
    fn get_string(&self, fields: &HashMap<String, String>, key: &str) -> Option<String> {
        let aliases: Vec<&str> = match key {
            "name" => vec!["name", "full_name"],
            "email" => vec!["email", "e_mail", "mail"],
            "status" => vec!["status", "employment_status"],
            "department_id" => vec!["department_id", "department"],
            _ => vec![key],
        };

        for alias in aliases {
            if let Some(value) = fields.get(alias) {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
        None
    }
}
