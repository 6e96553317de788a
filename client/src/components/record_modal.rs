//! Add / edit form for a sugar record.
//!
//! DESIGN
//! ======
//! The modal owns the raw field text and validates on submit. Saving is the
//! caller's job: it receives a typed [`RecordDraft`], runs the service call,
//! and closes the modal once the call succeeds.

use leptos::prelude::*;

use crate::services::sugar::{RecordDraft, teaspoons, total_sugar};
use crate::util::format::format_amount;
use crate::util::validation::{RecordForm, RecordFormErrors, validate_record_form};

#[component]
fn FieldError(message: Signal<Option<&'static str>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="field__error">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}

#[component]
pub fn RecordModal(
    #[prop(into)] title: String,
    #[prop(optional)] initial: RecordForm,
    #[prop(into)] saving: Signal<bool>,
    on_save: Callback<RecordDraft>,
    on_close: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(initial);
    let errors = RwSignal::new(RecordFormErrors::default());

    let food_error = Signal::derive(move || errors.get().food_name);
    let sugar_error = Signal::derive(move || errors.get().sugar_per_package);
    let count_error = Signal::derive(move || errors.get().package_count);

    // Live total for the current inputs, blank until both parse.
    let preview = move || {
        let f = form.get();
        let per = f.sugar_per_package.trim().parse::<f64>().ok()?;
        let count = f.package_count.trim().parse::<u32>().ok()?;
        let total = total_sugar(per, count);
        Some(format!("{} g total, {:.1} teaspoons", format_amount(total), teaspoons(total)))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        match validate_record_form(&form.get_untracked()) {
            Ok(draft) => {
                errors.set(RecordFormErrors::default());
                on_save.run(draft);
            }
            Err(e) => errors.set(e),
        }
    };
    let close = move || {
        if !saving.get_untracked() {
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div
                class="dialog dialog--form"
                role="dialog"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        close();
                    }
                }
            >
                <h2>{title}</h2>
                <form class="record-form" on:submit=on_submit novalidate>
                    <label class="field">
                        <span class="field__label">"Food Name"</span>
                        <input
                            type="text"
                            class="field__input"
                            class:field__input--invalid=move || food_error.get().is_some()
                            prop:value=move || form.get().food_name
                            on:input=move |ev| form.update(|f| f.food_name = event_target_value(&ev))
                        />
                        <FieldError message=food_error/>
                    </label>
                    <label class="field">
                        <span class="field__label">"Sugar Per Package (grams)"</span>
                        <input
                            type="number"
                            step="0.1"
                            min="0"
                            class="field__input"
                            class:field__input--invalid=move || sugar_error.get().is_some()
                            prop:value=move || form.get().sugar_per_package
                            on:input=move |ev| form.update(|f| f.sugar_per_package = event_target_value(&ev))
                        />
                        <FieldError message=sugar_error/>
                    </label>
                    <label class="field">
                        <span class="field__label">"Number of Packages"</span>
                        <input
                            type="number"
                            min="1"
                            step="1"
                            class="field__input"
                            class:field__input--invalid=move || count_error.get().is_some()
                            prop:value=move || form.get().package_count
                            on:input=move |ev| form.update(|f| f.package_count = event_target_value(&ev))
                        />
                        <FieldError message=count_error/>
                    </label>
                    <p class="record-form__preview">{move || preview().unwrap_or_default()}</p>
                    <div class="dialog__actions">
                        <button type="button" class="btn" disabled=move || saving.get() on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
