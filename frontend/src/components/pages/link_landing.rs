use leptos::prelude::*;
use leptos::task::spawn_local;
use letterdesk::guard::ExpiredReason;
use letterdesk::onboarding::{LinkKind, LinkOnboarding};

use crate::components::expired::ExpiredScreen;
use crate::session::use_session;
use crate::web::router::use_router;

#[derive(Clone)]
enum LandingState {
    Checking,
    Expired,
    Failed(String),
}

/// 邀请 / 魔法链接落地：校验后用 replace 跳到首个步骤
#[component]
pub fn LinkLandingPage(kind: LinkKind, link_token: String) -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let (state, set_state) = signal(LandingState::Checking);

    spawn_local(async move {
        let onboarding = LinkOnboarding::new(session.api(), session.tokens());
        match onboarding.accept(kind, &link_token).await {
            Ok(landing) => router.replace(&landing.redirect_to),
            Err(e) if e.is_session_expired() => set_state.set(LandingState::Expired),
            Err(e) => {
                tracing::warn!(error = %e, ?kind, "link validation failed");
                set_state.set(LandingState::Failed(e.message().to_string()));
            }
        }
    });

    move || match state.get() {
        LandingState::Checking => view! {
            <div class="flex items-center justify-center min-h-screen">
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </div>
        }
        .into_any(),
        LandingState::Expired => {
            view! { <ExpiredScreen reason=ExpiredReason::TokenExpired /> }.into_any()
        }
        LandingState::Failed(msg) => view! {
            <div class="hero min-h-screen bg-base-200">
                <div class="hero-content text-center">
                    <div class="max-w-md">
                        <h1 class="text-3xl font-bold">"This link could not be opened"</h1>
                        <p class="py-6 text-base-content/70">{msg}</p>
                    </div>
                </div>
            </div>
        }
        .into_any(),
    }
}
