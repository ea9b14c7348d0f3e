//! Error Banner Component
//!
//! Shows the last load/create failure with a dismiss button.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_app_context();

    move || {
        ctx.state.with(|s| s.error.clone()).map(|message| view! {
            <div class="error-banner" role="alert">
                <span class="error-text">{message}</span>
                <button
                    type="button"
                    class="dismiss-btn"
                    on:click=move |_| ctx.state.update(|s| s.dismiss_error())
                >
                    "×"
                </button>
            </div>
        })
    }
}
