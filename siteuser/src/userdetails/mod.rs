mod errors;
mod service;
mod types;

pub use errors::UserDetailsError;
pub use service::UserDetailsService;
pub use types::UserDetails;
