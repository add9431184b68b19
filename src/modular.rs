//! Modular-reduction accelerators, each precomputed once from a fixed
//! modulus and reused across many reductions.

mod barrett;
mod monty;

pub use self::{barrett::BarrettParams, monty::MontyParams};
