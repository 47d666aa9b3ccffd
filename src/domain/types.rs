// ==========================================
// 员工名册管理系统 - 领域类型定义
// ==========================================
// 依据: 员工数据字典 - 岗位体系与雇佣状态
// 红线: 岗位底薪与层级在编译期固定,运行期不可变
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 岗位 (Position)
// ==========================================
// 每个岗位携带两个不变量:
// - base_salary: 该岗位允许的最低薪资(底薪下限)
// - rank: 层级序号,1 = 最高层级,用于分组/排序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    Director,   // 总监
    Manager,    // 经理
    Programmer, // 程序员
    Tester,     // 测试工程师
    Intern,     // 实习生
}

// 显式查找表: token → 岗位
// 红线: 不依赖运行时反射式的枚举名解析,未知 token 返回 None 由调用方报错
const POSITION_LOOKUP: &[(&str, Position)] = &[
    ("DIRECTOR", Position::Director),
    ("MANAGER", Position::Manager),
    ("PROGRAMMER", Position::Programmer),
    ("TESTER", Position::Tester),
    ("INTERN", Position::Intern),
];

impl Position {
    /// 岗位底薪下限
    pub fn base_salary(&self) -> f64 {
        match self {
            Position::Director => 20000.0,
            Position::Manager => 12000.0,
            Position::Programmer => 7000.0,
            Position::Tester => 6000.0,
            Position::Intern => 3000.0,
        }
    }

    /// 层级序号(1 = 最高层级)
    pub fn rank(&self) -> u8 {
        match self {
            Position::Director => 1,
            Position::Manager => 2,
            Position::Programmer => 3,
            Position::Tester => 4,
            Position::Intern => 5,
        }
    }

    /// 从 token 解析岗位(大小写不敏感,前后空白忽略)
    ///
    /// # 返回
    /// - Some(Position): 命中查找表
    /// - None: 未知 token,由调用方构造带原始 token 的错误
    pub fn parse(token: &str) -> Option<Position> {
        let trimmed = token.trim();
        POSITION_LOOKUP
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
            .map(|(_, position)| *position)
    }

    /// 全部岗位(按层级序)
    pub fn all() -> &'static [Position] {
        const ALL: &[Position] = &[
            Position::Director,
            Position::Manager,
            Position::Programmer,
            Position::Tester,
            Position::Intern,
        ];
        ALL
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Director => write!(f, "DIRECTOR"),
            Position::Manager => write!(f, "MANAGER"),
            Position::Programmer => write!(f, "PROGRAMMER"),
            Position::Tester => write!(f, "TESTER"),
            Position::Intern => write!(f, "INTERN"),
        }
    }
}

// ==========================================
// 雇佣状态 (Employment Status)
// ==========================================
// 无附加数据,来源缺省时取 ACTIVE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentStatus {
    Active,     // 在职
    OnLeave,    // 休假
    Terminated, // 离职
}

impl Default for EmploymentStatus {
    fn default() -> Self {
        EmploymentStatus::Active
    }
}

impl EmploymentStatus {
    /// 宽松解析: 无法识别的 token(含缺省)一律回落 ACTIVE,不阻断整条记录
    pub fn parse_lenient(token: Option<&str>) -> EmploymentStatus {
        match token.map(|t| t.trim().to_uppercase()) {
            Some(ref t) if t == "ACTIVE" => EmploymentStatus::Active,
            Some(ref t) if t == "ON_LEAVE" || t == "ONLEAVE" => EmploymentStatus::OnLeave,
            Some(ref t) if t == "TERMINATED" => EmploymentStatus::Terminated,
            _ => EmploymentStatus::Active,
        }
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmploymentStatus::Active => write!(f, "ACTIVE"),
            EmploymentStatus::OnLeave => write!(f, "ON_LEAVE"),
            EmploymentStatus::Terminated => write!(f, "TERMINATED"),
        }
    }
}

// ==========================================
// 底薪下限策略 (Salary Floor Policy)
// ==========================================
// 显式命名的策略选择,由校验器构造时注入:
// - Clamp: 低于底薪抬升至底薪(主策略,"员工薪资不低于岗位下限")
// - Reject: 低于底薪按校验错误拒绝(备选配置)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SalaryFloorPolicy {
    Clamp,
    Reject,
}

impl Default for SalaryFloorPolicy {
    fn default() -> Self {
        SalaryFloorPolicy::Clamp
    }
}
