mod allowed_headers;
mod allowed_methods;
mod config;
pub mod constants;
mod cors;
mod header_builder;
mod headers;
mod origin;
mod request;
mod result;
mod session;
mod util;

pub use config::{ConfigError, PolicyConfig, PolicyPatch};
pub use cors::{CorsPolicy, evaluate};
pub use headers::Headers;
pub use origin::OriginDecision;
pub use request::RequestDescriptor;
pub use result::{CorsRejection, DecidedResponse, ResponseBody, ResponseDescriptor};
pub use session::{ClientRequest, ClientRequestPatch, SessionError, SimulationSession};
pub use util::{equals_ignore_case, normalize_lower};
