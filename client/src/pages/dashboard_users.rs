//! Admin-only users table.

use leptos::prelude::*;

use crate::components::dashboard_shell::RoleGate;
use crate::components::skeletons::TableSkeleton;
use crate::net::api;
use crate::state::query::QueryKey;
use crate::util::auth::can_administer;
use crate::util::format::format_date;
use crate::util::query::use_query;

#[component]
pub fn DashboardUsersPage() -> impl IntoView {
    view! {
        <RoleGate allow=can_administer>
            <UsersTable/>
        </RoleGate>
    }
}

#[component]
fn UsersTable() -> impl IntoView {
    let users = use_query(QueryKey::users, |_| api::list_users());

    view! {
        <div class="manage">
            <header class="page-header">
                <h1 class="page-header__title">"Manage Users"</h1>
            </header>
            <div class="card">
                <Suspense fallback=move || view! { <TableSkeleton cols=4/> }>
                    {move || {
                        users
                            .get()
                            .map(|result| match result {
                                Ok(list) => {
                                    view! {
                                        <table class="data-table">
                                            <thead>
                                                <tr>
                                                    <th>"Name"</th>
                                                    <th>"Email"</th>
                                                    <th>"Role"</th>
                                                    <th>"Joined Date"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {list
                                                    .into_iter()
                                                    .map(|user| {
                                                        let joined = format_date(user.created_at.as_deref());
                                                        view! {
                                                            <tr>
                                                                <td>{user.name}</td>
                                                                <td>{user.email}</td>
                                                                <td>
                                                                    <span class="badge">{user.role.label()}</span>
                                                                </td>
                                                                <td>{joined}</td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </tbody>
                                        </table>
                                    }
                                        .into_any()
                                }
                                Err(e) => {
                                    view! { <p class="manage__error">{e.user_message("Failed to load users")}</p> }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>
        </div>
    }
}
