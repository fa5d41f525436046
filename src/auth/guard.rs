use uuid::Uuid;

use crate::middleware::auth::AuthUser;

/// Ownership check: a caller may only touch their own user record.
///
/// Compares the id claimed by the verified token against the resource id from
/// the request path. An unauthenticated context (no verified identity) is an
/// ordinary denial, never an error. Pure predicate, no side effects.
pub fn owns_resource(auth: Option<&AuthUser>, resource_id: Uuid) -> bool {
    match auth {
        Some(user) => user.user_id == resource_id,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth_user(user_id: Uuid) -> AuthUser {
        AuthUser {
            user_id,
            username: "ada".to_string(),
        }
    }

    #[test]
    fn matching_ids_pass() {
        let id = Uuid::new_v4();
        assert!(owns_resource(Some(&auth_user(id)), id));
    }

    #[test]
    fn mismatched_ids_fail_both_ways() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert!(!owns_resource(Some(&auth_user(a)), b));
        assert!(!owns_resource(Some(&auth_user(b)), a));
    }

    #[test]
    fn missing_identity_is_denied_not_an_error() {
        assert!(!owns_resource(None, Uuid::new_v4()));
    }
}
