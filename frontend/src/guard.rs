//! IntakeGuard 组件
//!
//! 挂载时评估一次守卫：Checking 显示加载中，Redirecting 用 replace 跳转，
//! BlockedExpired 显示过期页面，Ready 才渲染子组件。卸载时作废进行中的评估。

use leptos::prelude::*;
use leptos::task::spawn_local;
use letterdesk::guard::{GuardState, PageContext};
use letterdesk::step::IntakeStep;

use crate::components::expired::ExpiredScreen;
use crate::session::use_session;
use crate::web::router::use_router;

#[component]
pub fn IntakeGuard(step: IntakeStep, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let (state, set_state) = signal(GuardState::Checking);

    let page = PageContext::from_url(step.to_path(), &router.query().get_untracked())
        .unwrap_or_else(|| PageContext::new(step));

    let guard = session.guard();
    let handle = StoredValue::new_local(guard.clone());
    on_cleanup(move || {
        handle.try_with_value(|g| g.cancel());
    });

    spawn_local(async move {
        // 被更新的评估或卸载取代时不再写状态
        let Some(outcome) = guard.evaluate_current(&page).await else {
            return;
        };
        session.resolution().set(outcome.resolution);
        if let GuardState::Redirecting(target) = &outcome.state {
            router.replace(target);
        }
        set_state.set(outcome.state);
    });

    move || match state.get() {
        GuardState::Checking | GuardState::Redirecting(_) => view! {
            <div class="flex items-center justify-center min-h-screen">
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </div>
        }
        .into_any(),
        GuardState::Ready => children().into_any(),
        GuardState::BlockedExpired(reason) => view! { <ExpiredScreen reason=reason /> }.into_any(),
    }
}
