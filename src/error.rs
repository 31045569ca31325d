/// Domain-specific error types for the marketplace client library.
#[derive(Debug, thiserror::Error)]
pub enum MarketError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The request never produced a response (DNS, connect, TLS, ...).
    #[error("Network operation failed: {0}")]
    Network(String),

    /// A call that requires authentication was attempted with no stored
    /// credential. Raised locally, before any network I/O.
    #[error("No authentication token found. Please log in again.")]
    AuthRequired,

    /// The identity provider rejected a sign-in/sign-up/sign-out call.
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// The durable credential slot could not be read or written.
    #[error("Credential storage failed: {0}")]
    Storage(String),

    /// A response body could not be decoded into the expected shape.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias.
pub type MarketResult<T> = Result<T, MarketError>;

/// Coded identity-provider failures, mapped to user-facing messages.
///
/// The provider reports failures as opaque codes; callers should never see
/// those codes, only the messages below.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("Invalid email or password. Please check your credentials.")]
    InvalidCredential,

    #[error("No account found with this email address.")]
    UserNotFound,

    #[error("Incorrect password.")]
    WrongPassword,

    #[error("Too many failed attempts. Please try again later.")]
    TooManyRequests,

    #[error("An account with this email already exists.")]
    EmailAlreadyInUse,

    #[error("Password is too weak. Please choose a stronger password.")]
    WeakPassword,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Email/password authentication is not enabled.")]
    ProviderDisabled,

    #[error("Authentication is not properly configured.")]
    Misconfigured,

    /// The provider could not be reached or returned an unrecognized code.
    #[error("Authentication service unavailable: {0}")]
    Unavailable(String),
}
