//! Sugar-history records table with search, date filters, sorting,
//! pagination and add / edit / delete modals.
//!
//! DESIGN
//! ======
//! The page keeps the selected user's full record list locally and derives
//! the visible page from it through the pure pipeline in
//! [`crate::util::records`]. Service calls only run for fetches and
//! mutations; a successful mutation patches the local list instead of
//! refetching.

#[cfg(test)]
#[path = "sugar_history_test.rs"]
mod sugar_history_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::loader::Loader;
use crate::components::page_header::PageHeader;
use crate::components::pagination_bar::PaginationBar;
use crate::components::record_modal::RecordModal;
use crate::components::toast_host::{notify, use_toasts};
use crate::services::sugar::{RECORD_OWNERS, RecordDraft, SugarRecord, SugarService, ValidationStatus};
use crate::state::toast::ToastKind;
use crate::util::format::{date_input_value, format_amount, format_scan_time, parse_date_input};
use crate::util::pagination::Pagination;
use crate::util::records::{FilterField, RecordFilter, SortDirection, SortKey, TableState, filter_and_sort};
use crate::util::validation::RecordForm;

/// Which dialog, if any, is open.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Modal {
    #[default]
    Closed,
    Add,
    Edit(SugarRecord),
    Delete(SugarRecord),
}

/// Swap in `updated` for the record with the same id. Returns whether it was found.
pub fn replace_record(records: &mut [SugarRecord], updated: SugarRecord) -> bool {
    match records.iter_mut().find(|r| r.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

fn status_badge(status: ValidationStatus) -> impl IntoView {
    let (class, mark) = match status {
        ValidationStatus::Valid => ("badge badge--success", "✓"),
        ValidationStatus::Invalid => ("badge badge--error", "✕"),
    };
    view! { <span class=class>{mark} " " {status.label()}</span> }
}

#[component]
pub fn SugarHistoryPage() -> impl IntoView {
    let sugar = expect_context::<SugarService>();
    let toasts = use_toasts();

    let selected_user = RwSignal::new(RECORD_OWNERS[0].id.to_owned());
    let records = RwSignal::new(Vec::<SugarRecord>::new());
    let loading = RwSignal::new(true);
    let table = RwSignal::new(TableState::default());
    let modal = RwSignal::new(Modal::Closed);
    let saving = RwSignal::new(false);

    let filter = Memo::new(move |_| table.with(|t| t.filter.clone()));
    let sort = Memo::new(move |_| table.with(|t| t.sort));
    let visible = Memo::new(move |_| records.with(|all| filter.with(|f| filter_and_sort(all, f, sort.get()))));
    let pagination = Memo::new(move |_| table.with(|t| t.pagination(visible.with(Vec::len))));
    let page_rows = move || visible.with(|rows| pagination.get().slice(rows).to_vec());

    // Reload whenever another user is selected.
    Effect::new({
        let sugar = sugar.clone();
        move || {
            let user_id = selected_user.get();
            let sugar = sugar.clone();
            loading.set(true);
            leptos::task::spawn_local(async move {
                let data = sugar.fetch_history(&user_id).await;
                // A slower response for a previously selected user is dropped.
                if selected_user.get_untracked() == user_id {
                    records.set(data);
                    table.update(TableState::records_changed);
                    loading.set(false);
                }
            });
        }
    });

    let on_save = Callback::new({
        let sugar = sugar.clone();
        move |draft: RecordDraft| {
            let sugar = sugar.clone();
            let user_id = selected_user.get_untracked();
            let target = modal.get_untracked();
            saving.set(true);
            leptos::task::spawn_local(async move {
                match target {
                    Modal::Edit(existing) => match sugar.update_record(&user_id, &existing.id, draft).await {
                        Ok(updated) => {
                            records.update(|all| {
                                replace_record(all, updated);
                            });
                            table.update(TableState::records_changed);
                            notify(toasts, ToastKind::Success, "Record updated successfully");
                            modal.set(Modal::Closed);
                        }
                        Err(e) => notify(toasts, ToastKind::Error, format!("Failed to update record: {e}")),
                    },
                    _ => {
                        let created = sugar.add_record(&user_id, draft).await;
                        records.update(|all| all.insert(0, created));
                        table.update(TableState::records_changed);
                        notify(toasts, ToastKind::Success, "Record added successfully");
                        modal.set(Modal::Closed);
                    }
                }
                saving.set(false);
            });
        }
    });

    let on_delete = Callback::new(move |()| {
        let Modal::Delete(record) = modal.get_untracked() else {
            return;
        };
        let sugar = sugar.clone();
        saving.set(true);
        leptos::task::spawn_local(async move {
            sugar.delete_record(&record.id).await;
            records.update(|all| all.retain(|r| r.id != record.id));
            table.update(TableState::records_changed);
            notify(toasts, ToastKind::Success, "Record deleted successfully");
            modal.set(Modal::Closed);
            saving.set(false);
        });
    });
    let close_modal = Callback::new(move |()| modal.set(Modal::Closed));

    let header_cell = move |key: SortKey| {
        let arrow_class = move |direction: SortDirection| {
            if sort.get().is_active(key, direction) { "sort-arrow sort-arrow--active" } else { "sort-arrow" }
        };
        view! {
            <th scope="col">
                <button type="button" class="th-sort" on:click=move |_| table.update(|t| t.request_sort(key))>
                    {key.label()}
                    <span class="sort-arrows" aria-hidden="true">
                        <span class=move || arrow_class(SortDirection::Asc)>"▲"</span>
                        <span class=move || arrow_class(SortDirection::Desc)>"▼"</span>
                    </span>
                </button>
            </th>
        }
    };

    let row = move |record: SugarRecord| {
        let edit_target = record.clone();
        let delete_target = record.clone();
        let teaspoons = record.teaspoon_label();
        let scanned = format_scan_time(&record.scan_time);
        view! {
            <tr>
                <td class="cell--strong">{record.scan_id}</td>
                <td>{record.food_name}</td>
                <td>{format_amount(record.sugar_per_package)}</td>
                <td>{record.package_count}</td>
                <td>{format_amount(record.total_sugar)}</td>
                <td>{teaspoons}</td>
                <td>{scanned}</td>
                <td>{status_badge(record.validation_status)}</td>
                <td class="cell--actions">
                    <button
                        type="button"
                        class="icon-btn"
                        title="Edit"
                        on:click=move |_| modal.set(Modal::Edit(edit_target.clone()))
                    >
                        "✎"
                        <span class="sr-only">"Edit"</span>
                    </button>
                    <button
                        type="button"
                        class="icon-btn icon-btn--danger"
                        title="Delete"
                        on:click=move |_| modal.set(Modal::Delete(delete_target.clone()))
                    >
                        "🗑"
                        <span class="sr-only">"Delete"</span>
                    </button>
                </td>
            </tr>
        }
    };

    let date_input = move |field: FilterField| {
        let current = move || {
            filter.with(|f| match field {
                FilterField::From => f.from,
                FilterField::To => f.to,
                FilterField::Search => None,
            })
        };
        let label = if field == FilterField::From { "From date" } else { "To date" };
        view! {
            <input
                type="date"
                class="field__input"
                aria-label=label
                prop:value=move || current().map(date_input_value).unwrap_or_default()
                on:change=move |ev| {
                    let value = parse_date_input(&event_target_value(&ev));
                    table.update(|t| {
                        t.edit_filter(|f| match field {
                            FilterField::From => f.from = value,
                            FilterField::To => f.to = value,
                            FilterField::Search => {}
                        });
                    });
                }
            />
        }
    };

    view! {
        <PageHeader title="Sugar Consumption History" description="View and manage sugar consumption records">
            <button type="button" class="btn btn--primary" on:click=move |_| modal.set(Modal::Add)>
                "+ Add New Record"
            </button>
        </PageHeader>

        <section class="card filters">
            <div class="filters__grid">
                <label class="field">
                    <span class="field__label">"Select User"</span>
                    <select
                        class="field__input"
                        on:change=move |ev| selected_user.set(event_target_value(&ev))
                    >
                        {RECORD_OWNERS
                            .iter()
                            .map(|owner| {
                                let id = owner.id;
                                view! {
                                    <option value=id selected=move || selected_user.get() == id>
                                        {owner.option_label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label class="field">
                    <span class="field__label">"Search Food Items"</span>
                    <input
                        type="search"
                        class="field__input"
                        placeholder="Search by food name or ID..."
                        prop:value=move || filter.with(|f| f.search.clone())
                        on:input=move |ev| table.update(|t| t.edit_filter(|f| f.search = event_target_value(&ev)))
                    />
                </label>
                <div class="field">
                    <span class="field__label">"Date Range"</span>
                    <div class="field__pair">
                        {date_input(FilterField::From)}
                        {date_input(FilterField::To)}
                    </div>
                </div>
            </div>
            <div class="chips">
                {move || {
                    filter
                        .with(RecordFilter::chips)
                        .into_iter()
                        .map(|(field, text)| {
                            view! {
                                <span class="chip">
                                    {text}
                                    <button
                                        type="button"
                                        class="chip__remove"
                                        aria-label="Remove filter"
                                        on:click=move |_| {
                                            table.update(|t| t.edit_filter(|f| *f = std::mem::take(f).cleared(field)));
                                        }
                                    >
                                        "✕"
                                    </button>
                                </span>
                            }
                        })
                        .collect_view()
                }}
                <Show when=move || filter.with(RecordFilter::is_active)>
                    <button
                        type="button"
                        class="chip chip--action"
                        on:click=move |_| table.update(|t| t.edit_filter(|f| *f = RecordFilter::default()))
                    >
                        "Clear All Filters"
                    </button>
                </Show>
            </div>
        </section>

        <section class="card table-card">
            <Show when=move || !loading.get() fallback=|| view! { <div class="table-card__loading"><Loader/></div> }>
                <div class="table-scroll">
                    <table class="data-table">
                        <thead>
                            <tr>
                                {SortKey::ALL.into_iter().map(header_cell).collect_view()}
                                <th scope="col">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = page_rows();
                                if rows.is_empty() {
                                    view! {
                                        <tr>
                                            <td class="data-table__empty" colspan="9">"No records found"</td>
                                        </tr>
                                    }
                                        .into_any()
                                } else {
                                    rows.into_iter().map(row).collect_view().into_any()
                                }
                            }}
                        </tbody>
                    </table>
                </div>
                <Show when=move || visible.with(|v| !v.is_empty())>
                    <PaginationBar
                        pagination=pagination
                        page_sizes=true
                        on_change=Callback::new(move |next: Pagination| table.update(|t| t.set_pagination(next)))
                    />
                </Show>
            </Show>
        </section>

        {move || match modal.get() {
            Modal::Closed => ().into_any(),
            Modal::Add => view! {
                <RecordModal title="Add New Sugar Record" saving=saving on_save=on_save on_close=close_modal/>
            }
                .into_any(),
            Modal::Edit(record) => view! {
                <RecordModal
                    title="Edit Sugar Record"
                    initial=RecordForm::from_record(&record)
                    saving=saving
                    on_save=on_save
                    on_close=close_modal
                />
            }
                .into_any(),
            Modal::Delete(record) => view! {
                <ConfirmDialog
                    title="Delete Record"
                    subject=record.food_name
                    busy=saving
                    on_confirm=on_delete
                    on_cancel=close_modal
                />
            }
                .into_any(),
        }}
    }
}
