//! Application constants.

/// Base URL of the Cantor REST API.
pub const API_BASE: &str = match option_env!("CANTOR_API_BASE") {
    Some(base) => base,
    None => "http://localhost:3000",
};

/// Local storage key the session credential is persisted under.
pub const CREDENTIAL_KEY: &str = "accessToken";
