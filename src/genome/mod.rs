//! Genome representation
//!
//! Individuals in a run carry a fixed-length [`BitString`](bit_string::BitString).

pub mod bit_string;

pub mod prelude {
    pub use super::bit_string::*;
}
