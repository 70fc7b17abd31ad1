use leptos::prelude::*;
use letterdesk::guard::ExpiredReason;

/// 会话过期 / 无令牌 / 无法确认进度时的阻断页面
#[component]
pub fn ExpiredScreen(reason: ExpiredReason) -> impl IntoView {
    let (title, detail) = match reason {
        ExpiredReason::TokenExpired => (
            "Your secure link has expired",
            "Please use the most recent link we emailed you, or ask your firm to send a new one.",
        ),
        ExpiredReason::MissingToken => (
            "We could not find your session",
            "Open this page from the secure link in your email to continue.",
        ),
        ExpiredReason::Unverified => (
            "We could not confirm your progress",
            "Please check your connection and reload the page.",
        ),
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <h1 class="text-3xl font-bold">{title}</h1>
                    <p class="py-6 text-base-content/70">{detail}</p>
                </div>
            </div>
        </div>
    }
}
