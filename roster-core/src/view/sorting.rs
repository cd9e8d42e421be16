use std::cmp::Ordering;

use roster_model::{SortDirection, SortKey, User};

/// Case-insensitive lexicographic comparison used by every column.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn key_text(user: &User, key: SortKey) -> &str {
    match key {
        SortKey::Name => &user.name,
        SortKey::Email => &user.email,
        SortKey::Role => &user.role,
        SortKey::Status => user.status.as_str(),
    }
}

/// Compare two users by `key`; `Descending` reverses the comparison itself
/// so equal keys still compare equal.
pub fn compare_users(
    a: &User,
    b: &User,
    key: SortKey,
    direction: SortDirection,
) -> Ordering {
    let ord = compare_text(key_text(a, key), key_text(b, key));
    match direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

/// Stable in-place sort; ties keep their prior relative order.
pub fn sort_users(users: &mut [&User], key: SortKey, direction: SortDirection) {
    users.sort_by(|a, b| compare_users(a, b, key, direction));
}
