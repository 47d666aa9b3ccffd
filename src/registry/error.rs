// ==========================================
// 员工名册管理系统 - 名册层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 名册层错误类型
#[derive(Error, Debug)]
pub enum RegistryError {
    // ===== 唯一性约束 =====
    #[error("邮箱已存在: {0}")]
    DuplicateEmail(String),

    // ===== 入参错误 =====
    // 空白邮箱是调用方错误,不是"未找到"
    #[error("无效的邮箱入参: 为空或全空白")]
    BlankEmailKey,

    // ===== 并发控制 =====
    #[error("名册锁获取失败: {0}")]
    LockError(String),
}

/// Result 类型别名
pub type RegistryResult<T> = Result<T, RegistryError>;
