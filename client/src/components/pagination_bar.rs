//! Footer under paginated tables.

use leptos::prelude::*;

use crate::util::pagination::{PAGE_SIZES, Pagination};

/// Summary text, optional page-size select, and the page button strip.
#[component]
pub fn PaginationBar(
    #[prop(into)] pagination: Signal<Pagination>,
    on_change: Callback<Pagination>,
    #[prop(optional)] page_sizes: bool,
) -> impl IntoView {
    let go = move |next: Pagination| on_change.run(next);

    view! {
        <div class="pagination">
            <p class="pagination__summary">{move || pagination.get().summary()}</p>
            <div class="pagination__controls">
                <Show when=move || page_sizes>
                    <select
                        class="pagination__size"
                        aria-label="Rows per page"
                        on:change=move |ev| {
                            if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                                go(pagination.get_untracked().with_page_size(size));
                            }
                        }
                    >
                        {PAGE_SIZES
                            .into_iter()
                            .map(|size| {
                                view! {
                                    <option value=size.to_string() selected=move || pagination.get().page_size == size>
                                        {format!("{size} per page")}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </Show>
                <nav class="pagination__pages" aria-label="Pagination">
                    <button
                        type="button"
                        class="pagination__step"
                        aria-label="Previous"
                        disabled=move || !pagination.get().has_previous()
                        on:click=move |_| go(pagination.get_untracked().previous())
                    >
                        "‹"
                    </button>
                    <For each=move || pagination.get().page_buttons() key=|page| *page let:page>
                        <button
                            type="button"
                            class="pagination__page"
                            class:pagination__page--current=move || pagination.get().page == page
                            on:click=move |_| go(pagination.get_untracked().with_page(page))
                        >
                            {page}
                        </button>
                    </For>
                    <button
                        type="button"
                        class="pagination__step"
                        aria-label="Next"
                        disabled=move || !pagination.get().has_next()
                        on:click=move |_| go(pagination.get_untracked().next())
                    >
                        "›"
                    </button>
                </nav>
            </div>
        </div>
    }
}
