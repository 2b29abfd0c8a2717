//! Authentication implementations.

mod jwt;

pub use jwt::{Claims, JwtConfig, JwtTokenService};
