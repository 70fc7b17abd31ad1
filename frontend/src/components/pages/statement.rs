//! 陈述页
//!
//! 首次渲染同步显示本地草稿，再向服务端拉取已保存的陈述对账。
//! 内容来自本地草稿时显示“已恢复”提示，5 秒后自动消失。

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use letterdesk::draft::{DraftCache, RestoredNotice, StatementDraft};
use letterdesk::guard::ExpiredReason;
use letterdesk::statement::{StatementService, statement_len};
use letterdesk::step::IntakeStep;
use letterdesk_shared::Timestamp;

use crate::components::expired::ExpiredScreen;
use crate::session::use_session;
use crate::web::router::use_router;
use crate::web::route::EXPIRED_PATH;
use crate::web::{BrowserStorage, LocalSpawner};

#[component]
pub fn StatementPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let config = session.config();

    let Some(token) = session.tokens().get() else {
        return view! { <ExpiredScreen reason=ExpiredReason::MissingToken /> }.into_any();
    };

    let draft = Rc::new(StatementDraft::new(
        DraftCache::new(BrowserStorage, config.max_statement_len),
        token.clone(),
    ));
    let initial = draft.initial_view();

    let (text, set_text) = signal(initial.text);
    let (notice, set_notice) = signal(Option::<RestoredNotice>::None);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let draft_handle = StoredValue::new_local(Rc::clone(&draft));
    let notice_timer = StoredValue::new_local(Option::<Timeout>::None);

    // 与服务端对账
    {
        let api = session.api();
        let token = token.clone();
        let ticket = draft.begin_sync();
        spawn_local(async move {
            let server = match api.status(&token).await {
                Ok(status) => status.statement().map(str::to_string),
                Err(e) => {
                    tracing::warn!(error = %e, "saved statement unavailable, keeping local draft");
                    None
                }
            };
            let Some(view) = draft.settle(&ticket, server.as_deref()) else {
                return;
            };
            set_text.set(view.text);
            if view.show_restored_notice {
                let restored = RestoredNotice::new(Timestamp::now());
                let timer = Timeout::new(restored.ttl().as_millis() as u32, move || {
                    // 到期与手动关闭相同
                    set_notice.update(|n| {
                        if let Some(n) = n {
                            n.dismiss();
                        }
                    });
                });
                set_notice.set(Some(restored));
                notice_timer.set_value(Some(timer));
            }
        });
    }

    on_cleanup(move || {
        draft_handle.try_with_value(|d| d.cancel());
        // drop 即取消定时器
        notice_timer.try_update_value(|t| t.take());
    });

    let notice_visible =
        move || notice.with(|n| n.is_some_and(|n| n.is_visible_at(Timestamp::now())));

    let dismiss_notice = move |_| {
        set_notice.update(|n| {
            if let Some(n) = n {
                n.dismiss();
            }
        });
        notice_timer.update_value(|t| {
            t.take();
        });
    };

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        if let Err(e) = draft_handle.with_value(|d| d.edit(&value)) {
            tracing::debug!(error = %e, "draft not saved");
        }
        set_text.set(value);
    };

    let max_len = config.max_statement_len;
    let min_len = config.min_statement_len;
    let char_count = move || text.with(|t| statement_len(t));
    let over_limit = move || char_count() > max_len;

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let service = StatementService::new(session.api(), LocalSpawner, &session.config());
        let token = token.clone();
        let statement = text.get_untracked();
        set_is_submitting.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            match service.submit(&token, &statement).await {
                Ok(()) => {
                    draft_handle.try_with_value(|d| d.discard());
                    router.navigate(IntakeStep::Verification.to_path());
                }
                Err(e) if e.is_session_expired() => router.replace(EXPIRED_PATH),
                Err(e) => set_error_msg.set(Some(e.message().to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-3xl mx-auto space-y-6">
                <h1 class="text-2xl font-bold">"Tell us what happened"</h1>

                <Show when=notice_visible>
                    <div role="status" class="alert alert-info text-sm py-2">
                        <span>"We restored the draft you were working on."</span>
                        <button class="btn btn-ghost btn-xs" on:click=dismiss_notice>"Dismiss"</button>
                    </div>
                </Show>

                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="alert alert-error text-sm py-2">
                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <form class="card bg-base-100 shadow-xl" on:submit=on_submit>
                    <div class="card-body">
                        <textarea
                            class="textarea textarea-bordered min-h-64"
                            class:textarea-error=over_limit
                            prop:value=text
                            on:input=on_input
                        ></textarea>
                        <div
                            class="text-sm text-right"
                            class:text-base-content=move || !over_limit()
                            class:text-error=over_limit
                        >
                            {move || format!("{} / {}", char_count(), max_len)}
                        </div>
                        <Show when=over_limit>
                            <p class="text-sm text-error">
                                "Your statement is over the limit. Changes past the limit are not saved."
                            </p>
                        </Show>
                        <div class="card-actions justify-between mt-4">
                            <button
                                type="button"
                                class="btn btn-outline"
                                on:click=move |_| router.navigate(IntakeStep::Upload.to_path())
                            >
                                "Back to documents"
                            </button>
                            <button
                                class="btn btn-primary"
                                disabled=move || is_submitting.get() || char_count() < min_len || over_limit()
                            >
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any()
                                } else {
                                    "Save and continue".into_any()
                                }}
                            </button>
                        </div>
                    </div>
                </form>
            </div>
        </div>
    }
    .into_any()
}
