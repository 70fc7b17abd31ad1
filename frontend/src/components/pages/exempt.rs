use leptos::prelude::*;

/// intake 之后的页面（门户、信件、支付等）在本应用之外实现，这里只占位
#[component]
pub fn ExemptPage(path: String) -> impl IntoView {
    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <h1 class="text-3xl font-bold">"Your intake is complete"</h1>
                    <p class="py-6 text-base-content/70">
                        "This section (" <code>{path}</code> ") opens in your client portal."
                    </p>
                </div>
            </div>
        </div>
    }
}
