//! Title block at the top of each dashboard page.

use leptos::prelude::*;

/// Page title with optional description and trailing action buttons.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div>
                <h1 class="page-header__title">{title}</h1>
                {description.map(|d| view! { <p class="page-header__description">{d}</p> })}
            </div>
            {children.map(|actions| view! { <div class="page-header__actions">{actions()}</div> })}
        </div>
    }
}
