//! Registration Modal
//!
//! Form opened by a map click. Saving appends a point to the global list;
//! cancelling drops the picked coordinate.

use leptos::*;

use crate::model::Material;
use crate::state::{use_global_state, PendingPoint, RegistrationError, RegistrationForm};

/// "Cadastrar Ponto" modal
#[component]
pub fn RegistrationModal(pending: RwSignal<PendingPoint>) -> impl IntoView {
    let state = use_global_state();
    let form = create_rw_signal(RegistrationForm::default());
    let error = create_rw_signal(None::<RegistrationError>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let mut current = pending.get_untracked();
        match form.with_untracked(|form| state.save_pending(&mut current, form)) {
            Ok(_) => pending.set(current),
            Err(e) => {
                log::warn!("registration rejected: {}", e);
                error.set(Some(e));
            }
        }
    };

    let on_cancel = move |_| pending.update(PendingPoint::cancel);

    view! {
        <div class="fixed inset-0 bg-black/30 flex items-center justify-center z-50">
            <form
                class="bg-white rounded-lg p-6 shadow-lg w-full max-w-sm"
                on:submit=on_submit
            >
                <h3 class="font-bold mb-2 text-green-800">"Cadastrar Ponto"</h3>
                <p class="text-xs text-gray-500 mb-2">
                    {move || pending.with(|p| p.location().map(|at| at.to_string()))}
                </p>
                <input
                    name="nome"
                    class="border p-2 rounded w-full mb-2"
                    placeholder="Nome do local"
                    required
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <input
                    name="endereco"
                    class="border p-2 rounded w-full mb-2"
                    placeholder="Endereço"
                    required
                    prop:value=move || form.with(|f| f.address.clone())
                    on:input=move |ev| form.update(|f| f.address = event_target_value(&ev))
                />
                <label class="block mb-1 font-semibold">"Materiais:"</label>
                <div class="grid grid-cols-2 gap-1 mb-2">
                    {Material::CATALOG
                        .into_iter()
                        .map(|material| view! { <MaterialCheckbox material=material form=form /> })
                        .collect_view()}
                </div>
                <input
                    name="horario"
                    class="border p-2 rounded w-full mb-2"
                    placeholder="Horário de funcionamento"
                    prop:value=move || form.with(|f| f.hours.clone())
                    on:input=move |ev| form.update(|f| f.hours = event_target_value(&ev))
                />
                {move || error.get().map(|e| view! {
                    <p class="text-sm text-red-600 mb-2">{e.to_string()}</p>
                })}
                <div class="flex gap-2 mt-4">
                    <button
                        type="submit"
                        class="bg-green-700 text-white py-2 px-4 rounded hover:bg-green-800"
                    >
                        "Salvar"
                    </button>
                    <button
                        type="button"
                        class="bg-gray-300 text-gray-800 py-2 px-4 rounded"
                        on:click=on_cancel
                    >
                        "Cancelar"
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn MaterialCheckbox(material: Material, form: RwSignal<RegistrationForm>) -> impl IntoView {
    view! {
        <label class="text-xs">
            <input
                type="checkbox"
                name="materiais"
                class="mr-1"
                value=material.slug()
                prop:checked=move || form.with(|f| f.has_material(material))
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    form.update(|f| f.set_material(material, checked));
                }
            />
            {material.label()}
        </label>
    }
}
