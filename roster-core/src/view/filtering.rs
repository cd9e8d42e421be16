use roster_model::User;

use super::ViewParams;

/// Keep the users passing search, status and role filters, in cache order.
pub fn filter_users<'a>(users: &'a [User], params: &ViewParams) -> Vec<&'a User> {
    let needle = params.search.to_lowercase();
    let status = params.status.status();
    let role = params.role.role();

    users
        .iter()
        .filter(|user| needle.is_empty() || matches_search(user, &needle))
        .filter(|user| status.is_none_or(|status| user.status == status))
        .filter(|user| role.is_none_or(|role| user.role == role))
        .collect()
}

/// `needle` must already be lowercased.
pub fn matches_search(user: &User, needle: &str) -> bool {
    user.name.to_lowercase().contains(needle)
        || user.email.to_lowercase().contains(needle)
}
