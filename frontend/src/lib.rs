//! LetterDesk 客户 intake 前端
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `session`: 会话上下文（令牌、API、守卫）
//! - `guard`: intake 守卫组件
//! - `components`: UI 组件层

mod components {
    pub mod case_picker;
    pub mod expired;
    pub mod pages {
        pub mod card_verification;
        pub mod exempt;
        pub mod link_landing;
        pub mod new_patient;
        pub mod statement;
        pub mod upload;
        pub mod verification;
    }
}
mod guard;
mod session;

use crate::components::expired::ExpiredScreen;
use crate::components::pages::card_verification::CardVerificationPage;
use crate::components::pages::exempt::ExemptPage;
use crate::components::pages::link_landing::LinkLandingPage;
use crate::components::pages::new_patient::NewPatientPage;
use crate::components::pages::statement::StatementPage;
use crate::components::pages::upload::UploadPage;
use crate::components::pages::verification::VerificationPage;
use crate::guard::IntakeGuard;
use crate::session::provide_session;

use leptos::prelude::*;
use letterdesk::guard::ExpiredReason;
use letterdesk::onboarding::LinkKind;
use letterdesk::step::IntakeStep;

// 浏览器适配层：为核心库的存储、HTTP、任务调度抽象提供实现
pub mod web {
    pub mod console;
    mod http;
    pub mod route;
    pub mod router;
    mod storage;
    mod task;

    pub use http::GlooHttpClient;
    pub use storage::BrowserStorage;
    pub use task::LocalSpawner;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

fn intake_page(step: IntakeStep) -> AnyView {
    match step {
        IntakeStep::Upload => view! { <UploadPage /> }.into_any(),
        IntakeStep::Statement => view! { <StatementPage /> }.into_any(),
        IntakeStep::Verification => view! { <VerificationPage /> }.into_any(),
        IntakeStep::CardVerification => view! { <CardVerificationPage /> }.into_any(),
    }
}

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件；intake 步骤页统一包在守卫里。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Intake(step) => view! {
            <IntakeGuard step=step>
                {move || intake_page(step)}
            </IntakeGuard>
        }
        .into_any(),
        AppRoute::NewPatient => view! { <NewPatientPage /> }.into_any(),
        AppRoute::Invite(token) => {
            view! { <LinkLandingPage kind=LinkKind::Invite link_token=token /> }.into_any()
        }
        AppRoute::Magic(token) => {
            view! { <LinkLandingPage kind=LinkKind::Magic link_token=token /> }.into_any()
        }
        AppRoute::Expired => view! { <ExpiredScreen reason=ExpiredReason::TokenExpired /> }.into_any(),
        AppRoute::Exempt(path) => view! { <ExemptPage path=path /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建会话上下文（令牌、API、守卫）
    provide_session();

    view! {
        // 2. 路由器组件：intake 页面由 IntakeGuard 守卫
        <Router>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
