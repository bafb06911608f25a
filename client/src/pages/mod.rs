//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (requests, navigation) and
//! delegates rendering details to `components`.

pub mod dashboard;
pub mod landing;
pub mod signin;
pub mod signup;
