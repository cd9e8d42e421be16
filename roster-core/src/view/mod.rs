//! Derived view over the cached user collection.
//!
//! Everything here is a pure function of (cache, parameters): nothing is
//! memoized and the view is rebuilt from scratch on every call.

pub mod filtering;
pub mod sorting;

use roster_model::{
    Role, RoleFilter, SortDirection, SortKey, StatusFilter, User,
};

/// Search/filter/sort settings controlling the user table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewParams {
    pub search: String,
    pub status: StatusFilter,
    pub role: RoleFilter,
    pub sort_key: SortKey,
    pub direction: SortDirection,
}

impl ViewParams {
    pub fn with_sort(sort_key: SortKey, direction: SortDirection) -> Self {
        Self {
            sort_key,
            direction,
            ..Self::default()
        }
    }

    /// Column header click: the active column flips direction, any other
    /// column becomes active in ascending order.
    pub fn click_header(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.direction = self.direction.toggled();
        } else {
            self.sort_key = key;
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Filter then stable-sort `users` according to `params`.
pub fn derive_view<'a>(users: &'a [User], params: &ViewParams) -> Vec<&'a User> {
    let mut view = filtering::filter_users(users, params);
    sorting::sort_users(&mut view, params.sort_key, params.direction);
    view
}

/// Roles ordered by name, case-insensitively; ties keep cache order.
pub fn sorted_roles(roles: &[Role]) -> Vec<&Role> {
    let mut sorted: Vec<&Role> = roles.iter().collect();
    sorted.sort_by(|a, b| sorting::compare_text(&a.name, &b.name));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::{RecordId, UserStatus};

    fn user(id: &str, name: &str, email: &str, role: &str, status: UserStatus) -> User {
        User {
            id: RecordId::new(id).unwrap(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
            status,
        }
    }

    fn names<'a>(view: &[&'a User]) -> Vec<&'a str> {
        view.iter().map(|u| u.name.as_str()).collect()
    }

    fn sample() -> Vec<User> {
        vec![
            user("1", "Bob", "b@x.com", "Admin", UserStatus::Active),
            user("2", "alice", "a@x.com", "Viewer", UserStatus::Inactive),
            user("3", "Carol", "carol@corp.io", "Editor", UserStatus::Active),
            user("4", "dave", "d@x.com", "Viewer", UserStatus::Active),
        ]
    }

    #[test]
    fn search_matches_name_or_email_case_insensitively() {
        let users = vec![
            user("1", "Bob", "b@x.com", "Admin", UserStatus::Active),
            user("2", "alice", "a@x.com", "Viewer", UserStatus::Inactive),
        ];
        let params = ViewParams {
            search: "a".into(),
            ..ViewParams::default()
        };
        // Neither "Bob" nor "b@x.com" contains an 'a'.
        let view = derive_view(&users, &params);
        assert_eq!(names(&view), vec!["alice"]);

        let params = ViewParams::default();
        assert_eq!(names(&derive_view(&users, &params)), vec!["alice", "Bob"]);

        let params = ViewParams {
            search: "X.COM".into(),
            ..ViewParams::default()
        };
        assert_eq!(names(&derive_view(&users, &params)), vec!["alice", "Bob"]);
    }

    #[test]
    fn filters_compose() {
        let users = sample();
        let params = ViewParams {
            status: StatusFilter::Active,
            role: RoleFilter::Named("Viewer".into()),
            ..ViewParams::default()
        };
        assert_eq!(names(&derive_view(&users, &params)), vec!["dave"]);

        // Role filter is an exact match.
        let params = ViewParams {
            role: RoleFilter::Named("viewer".into()),
            ..ViewParams::default()
        };
        assert!(derive_view(&users, &params).is_empty());
    }

    #[test]
    fn sort_is_case_insensitive_and_direction_reverses_comparison() {
        let users = sample();
        let mut params = ViewParams::default();
        assert_eq!(
            names(&derive_view(&users, &params)),
            vec!["alice", "Bob", "Carol", "dave"]
        );

        params.click_header(SortKey::Name);
        assert_eq!(params.direction, SortDirection::Descending);
        assert_eq!(
            names(&derive_view(&users, &params)),
            vec!["dave", "Carol", "Bob", "alice"]
        );

        params.click_header(SortKey::Name);
        assert_eq!(params.direction, SortDirection::Ascending);
    }

    #[test]
    fn ties_keep_cache_order_in_both_directions() {
        let users = sample();
        let mut params = ViewParams::with_sort(SortKey::Status, SortDirection::Ascending);
        assert_eq!(
            names(&derive_view(&users, &params)),
            vec!["Bob", "Carol", "dave", "alice"]
        );

        params.direction = SortDirection::Descending;
        // Reversed comparison, not a reversed array: actives keep Bob, Carol, dave.
        assert_eq!(
            names(&derive_view(&users, &params)),
            vec!["alice", "Bob", "Carol", "dave"]
        );
    }

    #[test]
    fn clicking_another_header_resets_to_ascending() {
        let mut params = ViewParams::with_sort(SortKey::Name, SortDirection::Descending);
        params.click_header(SortKey::Email);
        assert_eq!(params.sort_key, SortKey::Email);
        assert_eq!(params.direction, SortDirection::Ascending);
    }

    #[test]
    fn recomputation_is_deterministic() {
        let users = sample();
        let params = ViewParams {
            search: "x.com".into(),
            sort_key: SortKey::Role,
            ..ViewParams::default()
        };
        let first: Vec<RecordId> =
            derive_view(&users, &params).iter().map(|u| u.id.clone()).collect();
        let second: Vec<RecordId> =
            derive_view(&users, &params).iter().map(|u| u.id.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn roles_sort_by_name() {
        let roles = vec![
            Role {
                id: RecordId::new("r1").unwrap(),
                name: "viewer".into(),
                permissions: serde_json::Value::Null,
            },
            Role {
                id: RecordId::new("r2").unwrap(),
                name: "Admin".into(),
                permissions: serde_json::Value::Null,
            },
        ];
        let sorted: Vec<&str> =
            sorted_roles(&roles).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(sorted, vec!["Admin", "viewer"]);
    }
}
