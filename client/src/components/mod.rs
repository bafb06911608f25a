//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form and list surfaces while pages own routing and
//! request orchestration.

pub mod form_field;
pub mod transaction_list;
