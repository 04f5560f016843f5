//! Point List Component
//!
//! Registered points in insertion order, each linking to its detail page.

use leptos::*;
use leptos_router::*;

use crate::model::CollectionPoint;
use crate::state::use_global_state;

/// List panel of all registered points
#[component]
pub fn PointList() -> impl IntoView {
    let state = use_global_state();
    let points = move || state.points.with(|points| points.iter().cloned().collect::<Vec<_>>());

    view! {
        <Show when=move || state.points.with(|points| points.is_empty())>
            <p class="text-gray-400">"Nenhum ponto cadastrado ainda."</p>
        </Show>
        <ul class="flex flex-col gap-4">
            <For
                each=points
                key=|point| point.id
                children=move |point| view! { <PointListItem point=point /> }
            />
        </ul>
    }
}

#[component]
fn PointListItem(point: CollectionPoint) -> impl IntoView {
    let href = point.id.detail_path();
    let materials = point.materials_label();

    view! {
        <li class="border rounded-lg p-2 flex flex-col shadow-sm">
            <span class="font-bold">{point.name}</span>
            <span class="text-xs">{point.address}</span>
            <span class="text-xs text-gray-600">"Materiais: " {materials}</span>
            <A href=href class="text-green-700 underline text-sm mt-1">
                "Ver detalhes"
            </A>
        </li>
    }
}
