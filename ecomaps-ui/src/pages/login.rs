//! Login Page
//!
//! Email-only login. Any non-blank value starts a session; the route gate
//! then moves on to the dashboard.

use leptos::*;

use crate::components::Nav;
use crate::state::use_global_state;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_global_state();
    let (email, set_email) = create_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        state.login(&email.get_untracked());
    };

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-green-50">
            <Nav />
            <form
                class="bg-white shadow-xl p-8 rounded-xl flex flex-col gap-4 w-full max-w-md mt-12"
                on:submit=on_submit
            >
                <h2 class="text-green-800 text-2xl font-bold mb-2 text-center">
                    "Bem-vindo ao EcoMaps"
                </h2>
                <input
                    type="email"
                    placeholder="Seu e-mail"
                    class="p-2 rounded border border-gray-300 focus:outline-green-500"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <button
                    class="bg-green-700 hover:bg-green-800 text-white font-semibold py-2 rounded transition"
                    type="submit"
                >
                    "Entrar"
                </button>
            </form>
        </div>
    }
}
