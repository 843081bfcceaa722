pub mod header {
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

pub mod status {
    pub const OK: u16 = 200;
    pub const OK_TEXT: &str = "OK";
    pub const NO_CONTENT: u16 = 204;
    pub const NO_CONTENT_TEXT: &str = "No Content";
}

pub const APPLICATION_JSON: &str = "application/json";
pub const WILDCARD_ORIGIN: &str = "*";
/// The only request header exempt from allow-listing.
pub const SIMPLE_HEADER: &str = "content-type";
pub const DEFAULT_CLIENT_ORIGIN: &str = "http://client.example.com";
