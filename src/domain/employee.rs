// ==========================================
// 员工名册管理系统 - 员工领域模型
// ==========================================
// 依据: 员工数据字典 - employee 主数据
// 红线: 员工身份以规范化邮箱为唯一键,结构相等不参与身份判定
// 用途: 导入层构造,名册只读;导入管道内构造后不再修改
// ==========================================

use crate::domain::types::{EmploymentStatus, Position};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// EmailKey - 规范化邮箱键
// ==========================================
// 名册唯一键: 去前后空白 + 小写
// 红线: 名册只按此键判重,不比较员工其余字段
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailKey(String);

impl EmailKey {
    /// 从原始输入构造规范化键
    ///
    /// # 返回
    /// - Some(EmailKey): 去空白后非空
    /// - None: 空白输入,调用方应作为入参错误处理而非"未找到"
    pub fn new(raw: &str) -> Option<EmailKey> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(EmailKey(normalized))
        }
    }

    /// 规范化后的邮箱文本
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ==========================================
// Employee - 员工主数据
// ==========================================
// 生命周期: 每条校验通过的输入单元构造一次,入册后导入管道不再修改
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,                  // 姓名(非空,已去空白)
    pub email: String,                 // 邮箱(非空,已规范化,身份键)
    pub company: String,               // 公司(非空,已去空白)
    pub position: Position,            // 岗位
    pub salary: f64,                   // 薪资(>= 0 且 >= 岗位底薪)
    pub status: EmploymentStatus,      // 雇佣状态(缺省 ACTIVE)
    pub department_id: Option<String>, // 部门引用(可空,此层不做完整性约束)

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>, // 记录构造时间
}

impl Employee {
    /// 名册身份键(邮箱在构造时已规范化,此处不可能为空)
    pub fn email_key(&self) -> EmailKey {
        EmailKey(self.email.clone())
    }
}

// ==========================================
// SourcePosition - 输入单元的源位置
// ==========================================
// 用途: 错误信息前缀(按源顺序定位失败单元)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourcePosition {
    Line(usize),    // CSV 物理行号(1 起)
    Element(usize), // XML employee 元素序号(1 起)
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourcePosition::Line(n) => write!(f, "第 {} 行", n),
            SourcePosition::Element(n) => write!(f, "第 {} 个 employee 元素", n),
        }
    }
}

// ==========================================
// RawEmployeeRecord - 导入中间结构体
// ==========================================
// 用途: 导入管道中间产物(单元切分 → 字段映射 → 此结构)
// 生命周期: 仅在导入流程内;所有字段为已去空白的原始文本,空值归一为 None
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEmployeeRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub salary: Option<String>,
    pub status: Option<String>,
    pub department_id: Option<String>,

    // 元信息
    pub source_position: SourcePosition, // 源位置(用于错误信息)
}

// ==========================================
// ImportSummary - 导入汇总
// ==========================================
// 每次导入调用新建;只累加;管道唯一输出
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    pub imported_count: usize, // 成功入册数(单调递增)
    pub errors: Vec<String>,   // 失败单元错误(源顺序,每条带源位置前缀)
}

impl ImportSummary {
    pub fn new() -> Self {
        Self {
            imported_count: 0,
            errors: Vec::new(),
        }
    }

    /// 记录一条成功入册
    pub fn record_imported(&mut self) {
        self.imported_count += 1;
    }

    /// 记录一条失败单元(已带源位置前缀的完整消息)
    pub fn record_error(&mut self, message: String) {
        self.errors.push(message);
    }

    /// 全部单元均成功
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// 序列化为 JSON(供调用方留存导入报告)
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Default for ImportSummary {
    fn default() -> Self {
        Self::new()
    }
}
