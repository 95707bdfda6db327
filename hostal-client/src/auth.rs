//! Auth token capability
//!
//! The session token lives wherever the embedding application keeps it
//! (a cookie jar, a keychain, a test fixture). Backend-calling code
//! receives the capability explicitly and never reads ambient state.

/// Source of the bearer token attached to administrative calls
///
/// Returning `None` means "no session": the call goes out without an
/// `Authorization` header and a 401 response becomes
/// [`crate::ClientError::Unauthorized`], which callers treat as a
/// redirect to the login entry point.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Fixed token, for CLIs and tests
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// No session at all (public booking flow)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

impl TokenProvider for NoToken {
    fn token(&self) -> Option<String> {
        None
    }
}

impl<F> TokenProvider for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn token(&self) -> Option<String> {
        self()
    }
}
