//! Fitness evaluation
//!
//! This module defines the fitness provider contract and the policy for
//! ratings that cannot be interpreted.

pub mod traits;

pub mod prelude {
    pub use super::traits::*;
}
