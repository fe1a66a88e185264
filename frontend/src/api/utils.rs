use gloo_net::http::{Request, RequestBuilder};
use gloo_storage::{LocalStorage, Storage};
use log::debug;

use crate::config::Config;

/// Adds the stored bearer token to `builder`. Signed-out sessions send the
/// request without one.
pub fn with_bearer_token(builder: RequestBuilder) -> RequestBuilder {
    match LocalStorage::get::<String>(Config::auth_token_key()) {
        Ok(token) => builder.header("Authorization", &bearer(&token)),
        Err(_) => {
            debug!("No auth token stored; sending request anonymously");
            builder
        }
    }
}

pub fn authenticated_put(url: &str) -> RequestBuilder {
    with_bearer_token(Request::put(url))
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_prefixes_token() {
        assert_eq!(bearer("abc.def"), "Bearer abc.def");
    }
}
