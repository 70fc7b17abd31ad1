//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use std::fmt::Display;

use letterdesk::guard::is_exempt;
use letterdesk::step::{IntakeStep, is_intake_entry, normalize_path};

pub const NEW_PATIENT_PATH: &str = "/c/new-patient";
pub const EXPIRED_PATH: &str = "/c/expired";
const INVITE_PREFIX: &str = "/invite/";
const MAGIC_PREFIX: &str = "/magic/";

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    /// intake 步骤页（经过守卫）
    Intake(IntakeStep),
    /// 为其他患者新建案件
    NewPatient,
    /// 邀请链接落地页
    Invite(String),
    /// 魔法链接落地页
    Magic(String),
    /// 会话过期
    Expired,
    /// intake 之后的页面，由各自页面管理访问控制
    Exempt(String),
    /// 页面未找到
    NotFound,
}

impl Default for AppRoute {
    fn default() -> Self {
        Self::Intake(IntakeStep::Upload)
    }
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let path = normalize_path(path);
        if is_intake_entry(path) {
            return Self::default();
        }
        if let Some(step) = IntakeStep::from_path(path) {
            return Self::Intake(step);
        }
        if let Some(token) = link_token(path, INVITE_PREFIX) {
            return Self::Invite(token);
        }
        if let Some(token) = link_token(path, MAGIC_PREFIX) {
            return Self::Magic(token);
        }
        match path {
            NEW_PATIENT_PATH => Self::NewPatient,
            EXPIRED_PATH => Self::Expired,
            _ if is_exempt(path) => Self::Exempt(path.to_string()),
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Intake(step) => step.to_path().to_string(),
            Self::NewPatient => NEW_PATIENT_PATH.to_string(),
            Self::Invite(token) => format!("{}{}", INVITE_PREFIX, token),
            Self::Magic(token) => format!("{}{}", MAGIC_PREFIX, token),
            Self::Expired => EXPIRED_PATH.to_string(),
            Self::Exempt(path) => path.clone(),
            Self::NotFound => "/404".to_string(),
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

fn link_token(path: &str, prefix: &str) -> Option<String> {
    path.strip_prefix(prefix)
        .filter(|token| !token.is_empty() && !token.contains('/'))
        .map(str::to_string)
}
