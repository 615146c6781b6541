//! Parrots with species-specific speed and cry.
//!
//! A [`Parrot`] is one of three variants. Its behavior is a plain `match`
//! over the variant, see [`parrot::speed`] and [`parrot::cry`]. A [`Flock`]
//! is an ordered list of parrots that can be read from and written to JSON
//! or CBOR.

pub mod error;
pub mod flock;
pub mod parrot;

pub use error::{ParrotError, Result};
pub use flock::Flock;
pub use parrot::{cry, speed, Parrot, Variant, BASE_SPEED, LOAD_FACTOR, MAX_SPEED};
