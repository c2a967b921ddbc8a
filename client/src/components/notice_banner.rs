//! Dismissible success banner.

use leptos::prelude::*;

use crate::state::dashboard::DashboardState;

#[component]
pub fn NoticeBanner(dashboard: RwSignal<DashboardState>) -> impl IntoView {
    view! {
        <Show when=move || dashboard.with(|d| d.notice.is_some())>
            <div class="notice" role="status">
                <span>{move || dashboard.with(|d| d.notice.clone().unwrap_or_default())}</span>
                <button
                    class="notice__dismiss"
                    title="Dismiss"
                    on:click=move |_| dashboard.update(|d| d.notice = None)
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
