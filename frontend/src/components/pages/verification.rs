use leptos::prelude::*;
use leptos::task::spawn_local;
use letterdesk::step::IntakeStep;

use crate::session::use_session;
use crate::web::route::EXPIRED_PATH;
use crate::web::router::use_router;

#[component]
pub fn VerificationPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (confirmed, set_confirmed) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_confirm = move |_| {
        let Some(token) = session.tokens().get() else {
            router.replace(EXPIRED_PATH);
            return;
        };
        let api = session.api();
        set_is_submitting.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            match api.confirm_verification(&token).await {
                Ok(()) => router.navigate(IntakeStep::CardVerification.to_path()),
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
                    <h1 class="card-title text-2xl">"Confirm your details"</h1>
                    <p>
                        "Patient: "
                        <strong>{move || session.patient_name().get().unwrap_or_else(|| "your case".to_string())}</strong>
                    </p>
                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_msg.get().unwrap_or_default()}</span>
                        </div>
                    </Show>
                    <label class="label cursor-pointer justify-start gap-3">
                        <input
                            type="checkbox"
                            class="checkbox checkbox-primary"
                            prop:checked=confirmed
                            on:change=move |ev| set_confirmed.set(event_target_checked(&ev))
                        />
                        <span class="label-text">
                            "I confirm the documents and statement I provided are accurate."
                        </span>
                    </label>
                    <div class="card-actions justify-between">
                        <button
                            class="btn btn-outline"
                            on:click=move |_| router.navigate(&format!("{}?edit=1", IntakeStep::Statement.to_path()))
                        >
                            "Edit statement"
                        </button>
                        <button
                            class="btn btn-primary"
                            disabled=move || !confirmed.get() || is_submitting.get()
                            on:click=on_confirm
                        >
                            "Confirm"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
