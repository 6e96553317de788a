//! Sign-in page backed by the mock auth service.
//!
//! A stored session skips straight to the dashboard. Demo credentials are
//! listed under the form and fill it in when clicked.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::toast_host::use_toasts;
use crate::services::auth::DEMO_CREDENTIALS;
use crate::state::auth::AuthState;
use crate::util::auth::install_authed_redirect;
use crate::util::validation::validate_login;

/// Role caption for each demo account row.
pub fn demo_rows() -> Vec<(&'static str, &'static str, &'static str)> {
    DEMO_CREDENTIALS
        .iter()
        .zip(["Admin", "User"])
        .map(|(&(email, password), label)| (label, email, password))
        .collect()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = use_toasts();
    let navigate = use_navigate();
    install_authed_redirect(auth, navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(value) => value,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        let password_value = password.get_untracked();
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            use crate::components::toast_host::notify;
            use crate::state::toast::ToastKind;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::services::auth::login(&email_value, &password_value).await {
                    Ok(user) => {
                        crate::util::storage::save_session(&user);
                        auth.set(AuthState::restored(Some(user)));
                        notify(toasts, ToastKind::Success, "Login successful");
                        navigate(crate::util::auth::HOME_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        error.set(Some(e.to_string()));
                        notify(toasts, ToastKind::Error, e.to_string());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, toasts, &navigate);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <a href="/" class="login-card__brand">
                    <span class="brand-mark" aria-hidden="true">"◆"</span>
                    <span class="brand-name">"ScanSek"</span>
                </a>
                <h1>"Sign in to your account"</h1>
                <form class="login-form" on:submit=on_submit novalidate>
                    <label class="field">
                        <span class="field__label">"Email address"</span>
                        <input
                            class="field__input"
                            type="email"
                            autocomplete="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Password"</span>
                        <input
                            class="field__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="login-form__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <div class="login-demo">
                    <p class="login-demo__title">"Demo accounts"</p>
                    {demo_rows()
                        .into_iter()
                        .map(|(label, demo_email, demo_password)| {
                            view! {
                                <button
                                    type="button"
                                    class="login-demo__row"
                                    on:click=move |_| {
                                        email.set(demo_email.to_owned());
                                        password.set(demo_password.to_owned());
                                        error.set(None);
                                    }
                                >
                                    <strong>{label}</strong>
                                    <span>{format!("{demo_email} / {demo_password}")}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
