use serde::Serialize;

use crate::models::user::UserAccount;

/// Onboarding gate states. `Checking` is the only non-terminal state; a
/// single evaluation moves it to the highest-priority outstanding step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingState {
    Checking,
    NeedsUserType,
    NeedsName,
    NeedsCity,
    Complete,
}

impl OnboardingState {
    /// Resolves `Checking` against an account snapshot. Priority is strict:
    /// user type, then name, then city. Terminal states stay put.
    pub fn advance(self, account: Option<&UserAccount>) -> OnboardingState {
        match self {
            OnboardingState::Checking => evaluate(account),
            terminal => terminal,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != OnboardingState::Checking
    }

    /// Page the router sends the user to while in this state.
    pub fn route(self) -> Option<&'static str> {
        match self {
            OnboardingState::Checking => None,
            OnboardingState::NeedsUserType => Some("/onboarding/user-type"),
            OnboardingState::NeedsName => Some("/onboarding/name"),
            OnboardingState::NeedsCity => Some("/onboarding/city"),
            OnboardingState::Complete => Some("/feed"),
        }
    }
}

fn evaluate(account: Option<&UserAccount>) -> OnboardingState {
    let Some(account) = account else {
        return OnboardingState::NeedsUserType;
    };

    if account.user_type.is_none() {
        OnboardingState::NeedsUserType
    } else if !has_text(&account.full_name) {
        OnboardingState::NeedsName
    } else if !has_text(&account.city) {
        OnboardingState::NeedsCity
    } else {
        OnboardingState::Complete
    }
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserType;
    use uuid::Uuid;

    fn account(
        user_type: Option<UserType>,
        name: Option<&str>,
        city: Option<&str>,
    ) -> UserAccount {
        UserAccount {
            id: Uuid::new_v4(),
            user_type,
            full_name: name.map(str::to_string),
            city: city.map(str::to_string),
        }
    }

    #[test]
    fn test_complete_account_reaches_feed() {
        let acc = account(Some(UserType::Candidate), Some("Ana"), Some("Santos"));
        let state = OnboardingState::Checking.advance(Some(&acc));
        assert_eq!(state, OnboardingState::Complete);
        assert_eq!(state.route(), Some("/feed"));
    }

    #[test]
    fn test_user_type_outranks_everything() {
        let acc = account(None, None, None);
        assert_eq!(
            OnboardingState::Checking.advance(Some(&acc)),
            OnboardingState::NeedsUserType
        );
        let acc = account(None, Some("Ana"), Some("Santos"));
        assert_eq!(
            OnboardingState::Checking.advance(Some(&acc)),
            OnboardingState::NeedsUserType
        );
    }

    #[test]
    fn test_name_outranks_city() {
        let acc = account(Some(UserType::Recruiter), Some(" "), None);
        let state = OnboardingState::Checking.advance(Some(&acc));
        assert_eq!(state, OnboardingState::NeedsName);
        assert_eq!(state.route(), Some("/onboarding/name"));
    }

    #[test]
    fn test_city_is_last_gate() {
        let acc = account(Some(UserType::Candidate), Some("Ana"), None);
        assert_eq!(
            OnboardingState::Checking.advance(Some(&acc)),
            OnboardingState::NeedsCity
        );
    }

    #[test]
    fn test_missing_account_needs_user_type() {
        assert_eq!(
            OnboardingState::Checking.advance(None),
            OnboardingState::NeedsUserType
        );
    }

    #[test]
    fn test_terminal_states_do_not_move() {
        let acc = account(Some(UserType::Candidate), Some("Ana"), Some("Santos"));
        for state in [
            OnboardingState::NeedsUserType,
            OnboardingState::NeedsName,
            OnboardingState::NeedsCity,
            OnboardingState::Complete,
        ] {
            assert!(state.is_terminal());
            assert_eq!(state.advance(Some(&acc)), state);
        }
        assert!(!OnboardingState::Checking.is_terminal());
        assert_eq!(OnboardingState::Checking.route(), None);
    }
}
