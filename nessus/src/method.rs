//! HTTP methods used by the scanner API.

use strum::{Display, EnumString};

/// HTTP methods issued against the scanner API.
///
/// The management API only needs reads and actions, so the set is limited
/// to the verbs the client actually sends.
///
/// ## Examples
///
/// ```rust
/// use nessus_client::RestMethod;
///
/// assert_eq!(RestMethod::Post.to_string(), "POST");
///
/// let parsed: RestMethod = "GET".parse().unwrap();
/// assert_eq!(parsed, RestMethod::Get);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource.
    Get,
    /// HTTP POST - Create a resource or trigger an action.
    Post,
}

impl RestMethod {
    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}
