//! Status badge pill.

use leptos::prelude::*;
use portal::DisplayClass;
use portal::status::{classify_status, status_label};

/// Badge for a record status tag, classified through the shared table.
#[component]
pub fn StatusBadge(#[prop(into)] tag: String) -> impl IntoView {
    let class = classify_status(&tag);
    let label = status_label(&tag);
    view! { <Badge variant=class label=label/> }
}

/// Badge with an explicit class, for scales other than record status.
#[component]
pub fn Badge(variant: DisplayClass, #[prop(into)] label: String) -> impl IntoView {
    view! { <span class=format!("badge badge--{}", variant.as_str())>{label}</span> }
}
