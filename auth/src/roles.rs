//! Role requirement matching.

use std::collections::HashSet;

/// Returns true when every role in `required_roles` is present in
/// `user_roles`.
///
/// Both slices are treated as sets: order and duplicates are irrelevant,
/// and an empty requirement is satisfied by any role list.
pub fn has_required_roles(user_roles: &[String], required_roles: &[String]) -> bool {
    let granted: HashSet<&str> = user_roles.iter().map(String::as_str).collect();
    required_roles
        .iter()
        .all(|role| granted.contains(role.as_str()))
}
