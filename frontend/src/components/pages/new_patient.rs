use leptos::prelude::*;
use leptos::task::spawn_local;
use letterdesk::cases::CaseSwitcher;
use letterdesk::step::RequiredStep;
use letterdesk_shared::protocol::NewCaseRequest;

use crate::session::use_session;
use crate::web::route::EXPIRED_PATH;
use crate::web::router::use_router;

#[component]
pub fn NewPatientPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (patient_name, set_patient_name) = signal(String::new());
    let (date_of_birth, set_date_of_birth) = signal(String::new());
    let (relationship, set_relationship) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let relationship = relationship.get();
        let req = NewCaseRequest {
            patient_name: patient_name.get().trim().to_string(),
            date_of_birth: date_of_birth.get(),
            relationship: (!relationship.trim().is_empty()).then_some(relationship),
        };
        let switcher = CaseSwitcher::new(session.api(), session.tokens());
        set_is_submitting.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            match switcher.create(&req).await {
                Ok(created) => {
                    router.navigate(&RequiredStep::landing_path(created.next_step.as_deref()));
                }
                Err(e) if e.is_session_expired() => router.replace(EXPIRED_PATH),
                Err(e) => set_error_msg.set(Some(e.message().to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Add another patient"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>
                        <div class="form-control">
                            <label class="label" for="patient_name">
                                <span class="label-text">"Patient name"</span>
                            </label>
                            <input
                                id="patient_name"
                                type="text"
                                class="input input-bordered"
                                prop:value=patient_name
                                on:input=move |ev| set_patient_name.set(event_target_value(&ev))
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="date_of_birth">
                                <span class="label-text">"Date of birth"</span>
                            </label>
                            <input
                                id="date_of_birth"
                                type="date"
                                class="input input-bordered"
                                prop:value=date_of_birth
                                on:input=move |ev| set_date_of_birth.set(event_target_value(&ev))
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="relationship">
                                <span class="label-text">"Relationship to you (optional)"</span>
                            </label>
                            <input
                                id="relationship"
                                type="text"
                                class="input input-bordered"
                                prop:value=relationship
                                on:input=move |ev| set_relationship.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                "Create case"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
