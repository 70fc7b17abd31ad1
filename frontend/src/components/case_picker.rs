use leptos::prelude::*;
use leptos::task::spawn_local;
use letterdesk::cases::CaseSwitcher;
use letterdesk::step::RequiredStep;
use letterdesk_shared::CaseList;

use crate::session::use_session;
use crate::web::route::{EXPIRED_PATH, NEW_PATIENT_PATH};
use crate::web::router::use_router;

/// 多案件客户的案件切换器；只有一个案件时只显示新建入口
#[component]
pub fn CasePicker() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let switcher = move || CaseSwitcher::new(session.api(), session.tokens());

    let (cases, set_cases) = signal(CaseList::default());
    let (active, set_active) = signal(Option::<String>::None);

    spawn_local(async move {
        let switcher = switcher();
        match switcher.list().await {
            Ok(list) => {
                set_active.set(switcher.active(&list).map(|c| c.case_id.clone()));
                set_cases.set(list);
            }
            Err(e) => tracing::warn!(error = %e, "case list unavailable"),
        }
    });

    // 后端确认切换后重新进入 intake，守卫按新案件评估
    let on_change = move |ev: leptos::ev::Event| {
        let case_id = event_target_value(&ev);
        let list = cases.get_untracked();
        let switcher = switcher();
        spawn_local(async move {
            match switcher.switch(&list, &case_id).await {
                Ok(switched) => {
                    set_active.set(Some(switched.case_id));
                    router.navigate(&RequiredStep::landing_path(switched.next_step.as_deref()));
                }
                Err(e) if e.is_session_expired() => router.replace(EXPIRED_PATH),
                Err(e) => {
                    tracing::warn!(error = %e, "case switch rejected");
                    // 恢复下拉框显示原来的案件
                    set_active.set(active.get_untracked());
                }
            }
        });
    };

    view! {
        <div class="flex items-center gap-2">
            <Show when=move || cases.with(|l| l.cases.len() > 1)>
                <select class="select select-bordered select-sm" on:change=on_change>
                    <For
                        each=move || cases.get().cases
                        key=|c| c.case_id.clone()
                        children=move |c| {
                            let id = c.case_id.clone();
                            let selected = move || active.get().as_deref() == Some(id.as_str());
                            let label = c.patient_name.clone().unwrap_or_else(|| c.case_id.clone());
                            view! {
                                <option value=c.case_id.clone() selected=selected>{label}</option>
                            }
                        }
                    />
                </select>
            </Show>
            <button class="btn btn-ghost btn-sm" on:click=move |_| router.navigate(NEW_PATIENT_PATH)>
                "Add another patient"
            </button>
        </div>
    }
}
