//! Role-based authorization

use crate::claims::Claims;
use crate::error::AuthError;

/// Why an authorization decision came out the way it did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthzReason {
    Ok,
    RoleMismatch,
}

/// Outcome of gating a set of claims against a required role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthzDecision {
    pub allowed: bool,
    pub reason: AuthzReason,
}

impl AuthzDecision {
    /// Fold the decision into the failure taxonomy for handlers that
    /// short-circuit with `?`.
    pub fn into_result(self) -> Result<(), AuthError> {
        if self.allowed {
            Ok(())
        } else {
            Err(AuthError::RoleMismatch)
        }
    }
}

/// Decide whether the given claims satisfy the required role.
///
/// Membership is an exact, case-sensitive string match; there is no
/// role hierarchy. `None` means the endpoint requires authentication
/// only, so any successfully decoded claims pass. Pure function, no
/// I/O, deterministic.
pub fn authorize(claims: &Claims, required_role: Option<&str>) -> AuthzDecision {
    match required_role {
        Some(role) if !claims.has_role(role) => AuthzDecision {
            allowed: false,
            reason: AuthzReason::RoleMismatch,
        },
        _ => AuthzDecision {
            allowed: true,
            reason: AuthzReason::Ok,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn claims_with_roles(roles: &[&str]) -> Claims {
        Claims::new(
            "alice",
            roles.iter().map(|r| r.to_string()).collect(),
            Utc::now(),
            Duration::hours(1),
        )
    }

    #[test]
    fn test_matching_role_is_allowed() {
        let decision = authorize(&claims_with_roles(&["ADMIN"]), Some("ADMIN"));

        assert!(decision.allowed);
        assert_eq!(decision.reason, AuthzReason::Ok);
        assert!(decision.into_result().is_ok());
    }

    #[test]
    fn test_missing_role_is_mismatch() {
        let decision = authorize(&claims_with_roles(&["USER"]), Some("ADMIN"));

        assert!(!decision.allowed);
        assert_eq!(decision.reason, AuthzReason::RoleMismatch);
        assert_eq!(
            decision.into_result().unwrap_err(),
            AuthError::RoleMismatch
        );
    }

    #[test]
    fn test_no_required_role_only_needs_authentication() {
        let decision = authorize(&claims_with_roles(&[]), None);

        assert!(decision.allowed);
    }

    #[test]
    fn test_role_match_is_exact() {
        assert!(!authorize(&claims_with_roles(&["admin"]), Some("ADMIN")).allowed);
        assert!(!authorize(&claims_with_roles(&["ADMINISTRATOR"]), Some("ADMIN")).allowed);
    }
}
