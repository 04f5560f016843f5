//! Session
//!
//! The logged-in user marker. There is no credential check: a session is
//! simply the email typed on the login screen, kept until the page reloads.

/// Current user session
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    email: Option<String>,
}

impl Session {
    /// Start a session for `email`. Returns false and leaves the session
    /// untouched when the value is blank.
    pub fn login(&mut self, email: &str) -> bool {
        let email = email.trim();
        if email.is_empty() {
            return false;
        }
        self.email = Some(email.to_string());
        true
    }

    pub fn is_logged_in(&self) -> bool {
        self.email.is_some()
    }

    /// Local part of the email, shown in the navigation bar
    pub fn display_name(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(|email| email.split('@').next().unwrap_or(email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_sets_email() {
        let mut session = Session::default();
        assert!(!session.is_logged_in());

        assert!(session.login("user@example.com"));
        assert!(session.is_logged_in());
        assert_eq!(session, Session { email: Some("user@example.com".into()) });
        assert_eq!(session.display_name(), Some("user"));
    }

    #[test]
    fn test_blank_login_is_ignored() {
        let mut session = Session::default();
        assert!(!session.login(""));
        assert!(!session.login("   "));
        assert!(!session.is_logged_in());
        assert_eq!(session.display_name(), None);
    }

    #[test]
    fn test_display_name_without_at_sign() {
        let mut session = Session::default();
        session.login("maria");
        assert_eq!(session.display_name(), Some("maria"));
    }
}
