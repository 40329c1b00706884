//! Bearer token authentication

mod jwt;

pub use jwt::{Claims, JwtService};
