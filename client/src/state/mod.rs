//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `auth`, `form`, `transactions`) so
//! pages depend on small focused models and the async flows stay testable
//! without a browser.

pub mod auth;
pub mod form;
pub mod session;
pub mod transactions;
