//! Basic alphanumeric and special-character string randomness. ASCII sets.
//! Not fast, and not cryptographically secure.
//!
//! The crate draws characters uniformly at random from fixed character sets
//! (digits, uppercase, lowercase, password special characters) and combines
//! them into strings of arbitrary length. Mixed-class strings pick a class
//! uniformly per position, so classes are weighted equally regardless of
//! their size.
//!
//! # Examples
//!
//! ```
//! let pin = randomex::digits(4);
//! assert_eq!(pin.len(), 4);
//!
//! let password = randomex::random(16);
//! assert_eq!(password.len(), 16);
//! ```
//!
//! Tests that need reproducible output can inject a seeded source:
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use randomex::StringGen;
//!
//! let mut generator = StringGen::with_rng(StdRng::seed_from_u64(7));
//! let password = generator.random(16);
//! ```

pub mod charset;
pub mod error;

mod generator;

pub use crate::error::{Error, Result};
pub use crate::generator::{
    build, build_from, digit, digits, from_set, lower, lowers, random, special, specials, upper,
    uppers, CharGen, StringGen,
};
