//! Access gate consulted by the interactive shell before any pricing runs
//!
//! The pricing engine never calls this; identity checks belong to whatever
//! provider is plugged in at the shell.

/// Token accepted by the mock authenticator when none is configured
pub const DEFAULT_ACCESS_TOKEN: &str = "ACTUARY123";

/// Decides whether a presented token grants access
pub trait Authenticator {
    fn authenticate(&self, token: &str) -> bool;
}

/// Mock gate comparing against a single fixed token
#[derive(Debug, Clone)]
pub struct StaticTokenAuthenticator {
    expected: String,
}

impl StaticTokenAuthenticator {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Default for StaticTokenAuthenticator {
    fn default() -> Self {
        Self::new(DEFAULT_ACCESS_TOKEN)
    }
}

impl Authenticator for StaticTokenAuthenticator {
    fn authenticate(&self, token: &str) -> bool {
        token == self.expected
    }
}

impl<F> Authenticator for F
where
    F: Fn(&str) -> bool,
{
    fn authenticate(&self, token: &str) -> bool {
        self(token)
    }
}
