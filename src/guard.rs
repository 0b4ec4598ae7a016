use foodiebaba_boundary::{Identity, UserRole};

/// What a page requires from the current identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    None,
    Authenticated,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectToLogin,
    RedirectToHome,
}

/// Decides whether `identity` may view a page that requires `capability`.
#[must_use]
pub fn decide(capability: Capability, identity: Option<&Identity>) -> Decision {
    match (capability, identity) {
        (Capability::None, _) => Decision::Allow,
        (_, None) => Decision::RedirectToLogin,
        (Capability::Authenticated, Some(_)) => Decision::Allow,
        (Capability::Admin, Some(identity)) => match identity.role {
            UserRole::Admin => Decision::Allow,
            UserRole::User => Decision::RedirectToHome,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(role: UserRole) -> Identity {
        Identity {
            username: "a".into(),
            role,
            token: "t".into(),
        }
    }

    #[test]
    fn public_pages_are_always_allowed() {
        let user = identity(UserRole::User);
        let admin = identity(UserRole::Admin);
        for identity in [None, Some(&user), Some(&admin)] {
            assert_eq!(decide(Capability::None, identity), Decision::Allow);
        }
    }

    #[test]
    fn authenticated_pages() {
        assert_eq!(
            decide(Capability::Authenticated, None),
            Decision::RedirectToLogin
        );
        assert_eq!(
            decide(Capability::Authenticated, Some(&identity(UserRole::User))),
            Decision::Allow
        );
        assert_eq!(
            decide(Capability::Authenticated, Some(&identity(UserRole::Admin))),
            Decision::Allow
        );
    }

    #[test]
    fn admin_pages() {
        assert_eq!(decide(Capability::Admin, None), Decision::RedirectToLogin);
        assert_eq!(
            decide(Capability::Admin, Some(&identity(UserRole::User))),
            Decision::RedirectToHome
        );
        assert_eq!(
            decide(Capability::Admin, Some(&identity(UserRole::Admin))),
            Decision::Allow
        );
    }
}
