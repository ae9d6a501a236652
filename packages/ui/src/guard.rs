//! Route protection.
//!
//! A protected view renders only while the session holds a token. The check is
//! made once per navigation; removing the token elsewhere (another tab) is not
//! noticed until the next navigation or the next rejected request.

use store::Session;

/// Path of the public sign-in view.
pub const SIGN_IN_PATH: &str = "/login";

/// Outcome of the guard for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Render the protected view.
    Granted,
    /// Send the user to the public entry point instead.
    Redirect { to: &'static str },
}

impl Access {
    pub fn is_granted(&self) -> bool {
        matches!(self, Access::Granted)
    }
}

/// Decide whether a protected view may render.
pub fn check_access(session: &Session) -> Access {
    if session.is_authenticated() {
        Access::Granted
    } else {
        Access::Redirect { to: SIGN_IN_PATH }
    }
}
