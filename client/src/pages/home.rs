//! Landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home">
            <h1 class="h3">"Theme Switch"</h1>
            <p class="text-body-secondary">
                "Use the button in the top bar to switch between light and dark. "
                "Your choice is remembered in this browser."
            </p>
        </section>
    }
}
