//! 会话上下文
//!
//! 持有 API 客户端、令牌存储和导航守卫，通过 Context 在组件间共享。
//! 服务对象包含 `Rc`，放在本地 arena 里以满足 Context 的 Send 约束。

use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use letterdesk::config::{VAR_API_BASE, VAR_FAIL_OPEN, VAR_MAX_STATEMENT_LEN, VAR_MIN_STATEMENT_LEN};
use letterdesk::guard::{GuardPolicy, NavigationGuard};
use letterdesk::{IntakeApi, IntakeConfig, Resolution, StepResolver, TokenStore};

use crate::web::{BrowserStorage, GlooHttpClient};

pub type Api = IntakeApi<GlooHttpClient>;
pub type Tokens = TokenStore<BrowserStorage>;
pub type Guard = NavigationGuard<GlooHttpClient, BrowserStorage>;

/// 构建期注入的配置（trunk 构建时的环境变量）
fn build_var(name: &str) -> Option<String> {
    let value = match name {
        VAR_API_BASE => option_env!("LETTERDESK_API_BASE"),
        VAR_FAIL_OPEN => option_env!("LETTERDESK_FAIL_OPEN"),
        VAR_MAX_STATEMENT_LEN => option_env!("LETTERDESK_MAX_STATEMENT_LEN"),
        VAR_MIN_STATEMENT_LEN => option_env!("LETTERDESK_MIN_STATEMENT_LEN"),
        _ => None,
    };
    value.map(str::to_string)
}

struct Services {
    config: IntakeConfig,
    api: Rc<Api>,
    tokens: Tokens,
    guard: Guard,
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    services: StoredValue<Services, LocalStorage>,
    /// 最近一次守卫解析的结果，页面用来显示患者姓名等
    resolution: RwSignal<Option<Resolution>>,
}

impl SessionContext {
    pub fn new(config: IntakeConfig) -> Self {
        let api = Rc::new(IntakeApi::new(&config.api_base, GlooHttpClient));
        let tokens = TokenStore::new(BrowserStorage);
        let guard = NavigationGuard::new(
            StepResolver::new(Rc::clone(&api)),
            tokens.clone(),
            GuardPolicy {
                fail_open: config.fail_open,
            },
        );

        Self {
            services: StoredValue::new_local(Services {
                config,
                api,
                tokens,
                guard,
            }),
            resolution: RwSignal::new(None),
        }
    }

    pub fn config(&self) -> IntakeConfig {
        self.services.with_value(|s| s.config.clone())
    }

    pub fn api(&self) -> Rc<Api> {
        self.services.with_value(|s| Rc::clone(&s.api))
    }

    pub fn tokens(&self) -> Tokens {
        self.services.with_value(|s| s.tokens.clone())
    }

    pub fn guard(&self) -> Guard {
        self.services.with_value(|s| s.guard.clone())
    }

    pub fn resolution(&self) -> RwSignal<Option<Resolution>> {
        self.resolution
    }

    pub fn patient_name(&self) -> Signal<Option<String>> {
        let resolution = self.resolution;
        Signal::derive(move || resolution.get().and_then(|r| r.patient_name))
    }
}

/// 创建会话上下文并提供给子组件
pub fn provide_session() -> SessionContext {
    let ctx = SessionContext::new(IntakeConfig::from_lookup(build_var));
    provide_context(ctx);
    ctx
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}
