use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::session::use_session;
use crate::web::route::EXPIRED_PATH;
use crate::web::router::use_router;

/// 跳转到外部支付页面（整页跳转，离开单页应用）
fn open_checkout(url: &str) -> bool {
    web_sys::window()
        .map(|w| w.location().set_href(url).is_ok())
        .unwrap_or(false)
}

#[component]
pub fn CardVerificationPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_continue = move |_| {
        let Some(token) = session.tokens().get() else {
            router.replace(EXPIRED_PATH);
            return;
        };
        let api = session.api();
        set_is_submitting.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            match api.card_verification(&token).await {
                Ok(checkout) => {
                    if open_checkout(&checkout.checkout_url) {
                        return;
                    }
                    set_error_msg.set(Some("Could not open the secure card page.".to_string()));
                }
                Err(e) if e.is_session_expired() => router.replace(EXPIRED_PATH),
                Err(e) => set_error_msg.set(Some(e.message().to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-2xl mx-auto card bg-base-100 shadow-xl">
                <div class="card-body space-y-4">
                    <h1 class="card-title text-2xl">"Verify your card"</h1>
                    <p class="text-base-content/70">
                        "We place a temporary hold to verify your card. You will not be charged until your letter is ready."
                    </p>
                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_msg.get().unwrap_or_default()}</span>
                        </div>
                    </Show>
                    <div class="card-actions justify-end">
                        <button class="btn btn-primary" disabled=move || is_submitting.get() on:click=on_continue>
                            {move || if is_submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "Opening..." }.into_any()
                            } else {
                                "Continue to secure checkout".into_any()
                            }}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
