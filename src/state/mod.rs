//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `subscription`) so individual
//! components can depend on small focused models. Each state struct is a
//! plain value held in an `RwSignal` provided via context; mutation goes
//! through the transition methods only, never field-by-field from
//! components.

pub mod auth;
pub mod subscription;
