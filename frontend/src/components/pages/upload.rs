use leptos::prelude::*;
use leptos::task::spawn_local;
use letterdesk::step::IntakeStep;
use letterdesk_shared::{CaseFile, FileStatus};

use crate::components::case_picker::CasePicker;
use crate::session::use_session;
use crate::web::router::use_router;

fn status_badge(status: FileStatus) -> (&'static str, &'static str) {
    match status {
        FileStatus::Uploaded => ("badge badge-success", "Uploaded"),
        FileStatus::Pending | FileStatus::Processing => ("badge badge-info", "Processing"),
        FileStatus::Rejected => ("badge badge-error", "Rejected"),
        FileStatus::Deleted => ("badge badge-ghost", "Removed"),
        FileStatus::Unknown => ("badge badge-ghost", "Unknown"),
    }
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (files, set_files) = signal(Vec::<CaseFile>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let load_files = move || {
        let Some(token) = session.tokens().get() else {
            return;
        };
        let api = session.api();
        set_loading.set(true);
        spawn_local(async move {
            match api.files(&token).await {
                Ok(list) => {
                    set_files.set(list.files);
                    set_error_msg.set(None);
                }
                Err(e) => set_error_msg.set(Some(format!("Could not load your documents: {}", e.message()))),
            }
            set_loading.set(false);
        });
    };
    load_files();

    let counted = move || files.with(|f| f.iter().filter(|f| f.status.is_counted()).count());

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-3xl mx-auto space-y-6">
                <div class="flex justify-between items-center">
                    <h1 class="text-2xl font-bold">
                        "Your documents"
                        {move || session.patient_name().get().map(|n| format!(" for {}", n))}
                    </h1>
                    <CasePicker />
                </div>

                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="alert alert-error text-sm py-2">
                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <Show
                            when=move || !loading.get()
                            fallback=|| view! { <span class="loading loading-spinner"></span> }
                        >
                            <Show
                                when=move || !files.with(Vec::is_empty)
                                fallback=|| view! {
                                    <p class="text-base-content/70">
                                        "No documents yet. Upload at least one document to continue."
                                    </p>
                                }
                            >
                                <ul class="divide-y">
                                    <For
                                        each=move || files.get().into_iter().enumerate()
                                        key=|(i, f)| f.id.clone().unwrap_or_else(|| i.to_string())
                                        children=move |(_, f)| {
                                            let (class, label) = status_badge(f.status);
                                            view! {
                                                <li class="flex justify-between py-2">
                                                    <span>{f.file_name.unwrap_or_else(|| "Untitled document".to_string())}</span>
                                                    <span class=class>{label}</span>
                                                </li>
                                            }
                                        }
                                    />
                                </ul>
                            </Show>
                        </Show>
                        <div class="card-actions justify-end mt-4">
                            <button class="btn btn-outline" on:click=move |_| load_files()>
                                "Refresh"
                            </button>
                            <button
                                class="btn btn-primary"
                                disabled=move || counted() == 0
                                on:click=move |_| router.navigate(IntakeStep::Statement.to_path())
                            >
                                "Continue"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
