pub struct Config;

impl Config {
    pub fn api_base_url() -> String {
        // Relative URLs: the page is served from the same origin that proxies
        // the book service and the user data API.
        "".to_string()
    }

    /// Book records, addressed as `{books_path}/{id}`
    pub fn books_path() -> &'static str {
        "/api/books"
    }

    /// Remote copy of the signed-in user's shopping list
    pub fn user_data_path() -> &'static str {
        "/api/user/shopping-list"
    }

    /// Local storage key holding the bearer token written by the sign-in flow
    pub fn auth_token_key() -> &'static str {
        "auth-token"
    }
}
