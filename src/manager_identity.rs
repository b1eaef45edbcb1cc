use serde::Serialize;

/// What the dashboard needs from whoever handles login
pub trait IdentityProvider {
    fn is_authenticated(&self) -> bool;
    fn display_name(&self) -> Option<&str>;

    /// Returns where to redirect the user to start a login, None if login is not configured
    fn begin_login(&self) -> Option<String>;
    fn log_out(&mut self);
}

/// Single user session backed by an external login page that calls back with the user's name.
/// One session is shared by every client and the callback is not verified, so this only stands in
/// for a real identity provider on a single user dashboard.
pub struct LocalSession {
    login_url: Option<String>,
    user: Option<String>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Profile {
    pub authenticated: bool,
    pub name: Option<String>,
    pub search_visible: bool,
}

impl LocalSession {
    /// Creates a logged out session
    ///
    /// # Arguments
    ///
    /// * 'login_url' - external login page, None disables login and leaves search always visible
    pub fn new(login_url: Option<String>) -> Self {
        LocalSession { login_url, user: None }
    }

    /// Records the user reported back by the login page
    ///
    /// # Arguments
    ///
    /// * 'name' - display name of the user
    pub fn complete_login(&mut self, name: &str) {
        self.user = Some(name.to_string());
    }

    pub fn profile(&self) -> Profile {
        Profile {
            authenticated: self.is_authenticated(),
            name: self.display_name().map(str::to_string),
            search_visible: self.login_url.is_none() || self.is_authenticated(),
        }
    }
}

impl IdentityProvider for LocalSession {
    fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    fn display_name(&self) -> Option<&str> {
        self.user.as_deref()
    }

    fn begin_login(&self) -> Option<String> {
        self.login_url.clone()
    }

    fn log_out(&mut self) {
        self.user = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_hidden_until_login() {
        let mut s = LocalSession::new(Some("https://login.example.com/authorize".to_string()));
        assert!(!s.profile().search_visible);
        assert_eq!(s.begin_login().as_deref(), Some("https://login.example.com/authorize"));

        s.complete_login("Ankush");
        assert_eq!(s.profile(), Profile {
            authenticated: true,
            name: Some("Ankush".to_string()),
            search_visible: true,
        });

        s.log_out();
        assert!(!s.is_authenticated());
        assert!(!s.profile().search_visible);
    }

    #[test]
    fn test_no_login_configured() {
        let s = LocalSession::new(None);
        assert!(s.begin_login().is_none());
        assert!(s.profile().search_visible);
        assert!(!s.profile().authenticated);
    }
}
