/// AuthHeaderProvider port supplying the credentials the repository sends
///
/// The engine never inspects the value; it is passed through verbatim as the
/// `Authorization` header.
pub trait AuthHeaderProvider: Send + Sync {
    /// Returns the full header value (e.g. `Bearer abc`), or `None` when
    /// requests should go out unauthenticated.
    fn authorization_header(&self) -> Option<String>;
}
