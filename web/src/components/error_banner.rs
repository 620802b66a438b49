//! Last action failure, if any.

use leptos::prelude::*;

use crate::state::panel::PanelContext;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let error = expect_context::<PanelContext>().error;
    view! {
        <Show when=move || error.with(Option::is_some)>
            <div class="error-banner" role="alert">
                {move || error.get().unwrap_or_default()}
                <button class="dismiss" on:click=move |_| error.set(None)>"Dismiss"</button>
            </div>
        </Show>
    }
}
