//! Admin user directory: search, verification toggle and password resets.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::components::loader::Loader;
use crate::components::page_header::PageHeader;
use crate::components::pagination_bar::PaginationBar;
use crate::components::toast_host::{notify, use_toasts};
use crate::services::users::{UserAccount, UserService};
use crate::state::auth::AuthState;
use crate::state::toast::ToastKind;
use crate::util::auth::can_manage_users;
use crate::util::format::{avatar_initial, format_long_date};
use crate::util::pagination::Pagination;

/// The directory table never offers other page sizes.
pub const USERS_PAGE_SIZE: usize = 10;

/// Accounts matching `term`, in directory order.
pub fn search_users(accounts: &[UserAccount], term: &str) -> Vec<UserAccount> {
    accounts.iter().filter(|u| u.matches_search(term)).cloned().collect()
}

/// Swap in `updated` for the account with the same id.
pub fn replace_account(accounts: &mut [UserAccount], updated: UserAccount) -> bool {
    match accounts.iter_mut().find(|u| u.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Toast text after a verification change.
pub fn verification_message(verified: bool) -> &'static str {
    if verified { "User verified successfully" } else { "User unverified successfully" }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <PageHeader title="User Management" description="View and manage user accounts"/>
        <Show
            when=move || auth.with(can_manage_users)
            fallback=|| {
                view! {
                    <section class="card notice">
                        <h2 class="notice__title">"Access restricted"</h2>
                        <p>"Only administrators can manage user accounts."</p>
                    </section>
                }
            }
        >
            <UserDirectory/>
        </Show>
    }
}

#[component]
fn UserDirectory() -> impl IntoView {
    let service = expect_context::<UserService>();
    let toasts = use_toasts();

    let accounts = RwSignal::new(Vec::<UserAccount>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());
    let page = RwSignal::new(1_usize);

    Effect::new({
        let service = service.clone();
        move || {
            let service = service.clone();
            leptos::task::spawn_local(async move {
                accounts.set(service.fetch_users().await);
                loading.set(false);
            });
        }
    });

    let visible = Memo::new(move |_| accounts.with(|all| search.with(|term| search_users(all, term))));
    let pagination = Memo::new(move |_| Pagination::new(USERS_PAGE_SIZE, visible.with(Vec::len)).with_page(page.get()));

    let toggle_verified = {
        let service = service.clone();
        move |user_id: String, verified: bool| {
            let service = service.clone();
            leptos::task::spawn_local(async move {
                match service.set_verified(&user_id, verified).await {
                    Ok(updated) => {
                        accounts.update(|all| {
                            replace_account(all, updated);
                        });
                        notify(toasts, ToastKind::Success, verification_message(verified));
                    }
                    Err(_) => notify(toasts, ToastKind::Error, "Failed to update user verification status"),
                }
            });
        }
    };
    let reset_password = move |user_id: String, email: String| {
        let service = service.clone();
        leptos::task::spawn_local(async move {
            match service.reset_password(&user_id).await {
                Ok(()) => notify(toasts, ToastKind::Success, format!("Password reset email sent to {email}")),
                Err(_) => notify(toasts, ToastKind::Error, "Failed to reset password"),
            }
        });
    };

    let row = move |user: UserAccount| {
        let toggle = toggle_verified.clone();
        let reset = reset_password.clone();
        let (badge_class, badge_text) = if user.is_verified {
            ("badge badge--success", "✓ Verified")
        } else {
            ("badge badge--warning", "✕ Unverified")
        };
        let (toggle_class, toggle_text) = if user.is_verified {
            ("btn btn--small btn--danger-soft", "Unverify")
        } else {
            ("btn btn--small btn--success-soft", "Verify")
        };
        let toggle_id = user.id.clone();
        let target = !user.is_verified;
        let reset_id = user.id.clone();
        let reset_email = user.email.clone();
        view! {
            <tr>
                <td class="cell--strong">{user.id.clone()}</td>
                <td>
                    <span class="avatar avatar--small">{avatar_initial(&user.username)}</span>
                    {user.username}
                </td>
                <td>{user.email}</td>
                <td><span class=badge_class>{badge_text}</span></td>
                <td>{format_long_date(&user.registered_at)}</td>
                <td class="cell--actions">
                    <button type="button" class=toggle_class on:click=move |_| toggle(toggle_id.clone(), target)>
                        {toggle_text}
                    </button>
                    <button
                        type="button"
                        class="btn btn--small btn--outline"
                        on:click=move |_| reset(reset_id.clone(), reset_email.clone())
                    >
                        "↻ Reset Password"
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <section class="card filters">
            <input
                type="search"
                class="field__input"
                placeholder="Search by name, email, or ID..."
                prop:value=move || search.get()
                on:input=move |ev| {
                    search.set(event_target_value(&ev));
                    page.set(1);
                }
            />
        </section>

        <section class="card table-card">
            <Show when=move || !loading.get() fallback=|| view! { <div class="table-card__loading"><Loader/></div> }>
                <div class="table-scroll">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th scope="col">"User ID"</th>
                                <th scope="col">"Username"</th>
                                <th scope="col">"Email"</th>
                                <th scope="col">"Verification Status"</th>
                                <th scope="col">"Registration Date"</th>
                                <th scope="col">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                let row = row.clone();
                                move || {
                                    let rows = visible.with(|all| pagination.get().slice(all).to_vec());
                                    if rows.is_empty() {
                                        view! {
                                            <tr>
                                                <td class="data-table__empty" colspan="6">"No users found"</td>
                                            </tr>
                                        }
                                            .into_any()
                                    } else {
                                        rows.into_iter().map(row.clone()).collect_view().into_any()
                                    }
                                }
                            }
                        </tbody>
                    </table>
                </div>
                <Show when=move || { pagination.get().page_count() > 1 }>
                    <PaginationBar
                        pagination=pagination
                        on_change=Callback::new(move |next: Pagination| page.set(next.page))
                    />
                </Show>
            </Show>
        </section>
    }
}
