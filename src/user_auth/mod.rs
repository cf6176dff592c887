//! Registration, login and JWT bearer-token verification.

pub mod handlers;
pub mod middleware;
pub mod service;

pub use service::{AuthResponse, AuthService, Claims, LoginRequest, RegisterRequest};
