//! Journey reconstruction.
//!
//! Pairs each rider's IN and OUT taps into journeys. Taps are consumed in
//! log order and never re-sorted, so the output depends on the order the
//! log was written in.

mod reconstruct;

pub use reconstruct::{ReconstructError, Reconstructor, reconstruct_journeys};
