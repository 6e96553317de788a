//! Destructive-action confirmation.

#[cfg(test)]
#[path = "confirm_dialog_test.rs"]
mod confirm_dialog_test;

use leptos::prelude::*;

/// Run `cancel` unless the confirmed action is still in flight.
/// Returns whether the dialog was dismissed.
pub fn dismiss(busy: bool, cancel: impl FnOnce()) -> bool {
    if busy {
        return false;
    }
    cancel();
    true
}

/// Modal asking the user to confirm deleting `subject`.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] subject: String,
    #[prop(into)] busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" && dismiss(busy.get_untracked(), || on_cancel.run(())) {
            ev.prevent_default();
        }
    };

    view! {
        <div
            class="dialog-backdrop"
            on:click=move |_| {
                dismiss(busy.get_untracked(), || on_cancel.run(()));
            }
        >
            <div
                class="dialog dialog--danger"
                role="alertdialog"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2>{title}</h2>
                <p class="dialog__body">
                    "Are you sure you want to delete the record for "
                    <strong>{subject}</strong>
                    "? This action cannot be undone."
                </p>
                <div class="dialog__actions">
                    <button
                        type="button"
                        class="btn"
                        disabled=move || busy.get()
                        on:click=move |_| {
                            dismiss(busy.get_untracked(), || on_cancel.run(()));
                        }
                    >
                        "Cancel"
                    </button>
                    <button
                        type="button"
                        class="btn btn--danger"
                        disabled=move || busy.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        {move || if busy.get() { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
