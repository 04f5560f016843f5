//! Navigation Component
//!
//! Header bar with the brand and the logged-in user's name.

use leptos::*;

use crate::state::use_global_state;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_global_state();

    view! {
        <nav class="bg-green-700 flex items-center justify-between p-4 w-full">
            <div class="flex items-center gap-3">
                <span class="text-2xl font-bold text-white">"EcoMaps"</span>
            </div>
            {move || {
                state.display_name().map(|name| view! {
                    <span class="text-white">"Bem-vindo, " {name}</span>
                })
            }}
        </nav>
    }
}
