use super::*;
use crate::services::auth::{Role, authenticate};

#[test]
fn demo_rows_pair_roles_with_credentials() {
    let rows = demo_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], ("Admin", "admin@scansek.com", "admin123"));
    assert_eq!(rows[1].0, "User");
}

#[test]
fn demo_rows_sign_in_with_matching_role() {
    let roles: Vec<_> = demo_rows()
        .into_iter()
        .map(|(_, email, password)| authenticate(email, password).unwrap().role)
        .collect();
    assert_eq!(roles, [Role::Admin, Role::User]);
}
