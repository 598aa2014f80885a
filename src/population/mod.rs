//! Population management
//!
//! This module provides individuals with stable identities and the fitness
//! records produced for them each generation.

pub mod individual;
pub mod record;

pub mod prelude {
    pub use super::individual::*;
    pub use super::record::*;
}
