use rand::{rngs::ThreadRng, Rng};

use crate::charset;
use crate::error::{Error, Result};

/// A single-character generator: draws one character, uniformly at random,
/// from one fixed character set. Used to assemble the generator list that
/// [`StringGen::build_from`] mixes classes from.
pub type CharGen<R> = fn(&mut StringGen<R>) -> char;

/// A string generator that owns its random source.
///
/// The source is an explicit field rather than a process-wide global, so
/// tests can inject a seeded rng via [`StringGen::with_rng`] and concurrent
/// callers can each own an independent source. [`StringGen::new`] uses the
/// thread-local rng, which is what the free functions in this module use too.
pub struct StringGen<R: Rng> {
    rng: R,
}

impl StringGen<ThreadRng> {
    /// Creates a generator backed by the thread-local random source.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for StringGen<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> StringGen<R> {
    /// Creates a generator backed by the supplied random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform pick from a fixed ASCII set. The sets in [`charset`] are
    /// statically non-empty, so indexing cannot fail.
    fn pick(&mut self, set: &str) -> char {
        let bytes = set.as_bytes();
        bytes[self.rng.random_range(0..bytes.len())] as char
    }

    fn repeat(&mut self, set: &str, length: usize) -> String {
        (0..length).map(|_| self.pick(set)).collect()
    }

    /// Returns a random digit.
    pub fn digit(&mut self) -> char {
        self.pick(charset::DIGITS)
    }

    /// Returns a string of random digits of `length`.
    pub fn digits(&mut self, length: usize) -> String {
        self.repeat(charset::DIGITS, length)
    }

    /// Returns a random uppercase letter.
    pub fn upper(&mut self) -> char {
        self.pick(charset::UPPERCASE)
    }

    /// Returns a string of random uppercase letters of `length`.
    pub fn uppers(&mut self, length: usize) -> String {
        self.repeat(charset::UPPERCASE, length)
    }

    /// Returns a random lowercase letter.
    pub fn lower(&mut self) -> char {
        self.pick(charset::LOWERCASE)
    }

    /// Returns a string of random lowercase letters of `length`.
    pub fn lowers(&mut self, length: usize) -> String {
        self.repeat(charset::LOWERCASE, length)
    }

    /// Returns a random password special character.
    pub fn special(&mut self) -> char {
        self.pick(charset::SPECIAL)
    }

    /// Returns a string of random special characters of `length`.
    pub fn specials(&mut self, length: usize) -> String {
        self.repeat(charset::SPECIAL, length)
    }

    /// Returns a single random character from the supplied set.
    ///
    /// Returns [`Error::EmptySelection`] if the set is empty.
    pub fn from_set(&mut self, set: &str) -> Result<char> {
        let chars: Vec<char> = set.chars().collect();
        if chars.is_empty() {
            return Err(Error::EmptySelection);
        }
        Ok(chars[self.rng.random_range(0..chars.len())])
    }

    /// Builds a string of `length` characters by picking, at each position,
    /// one generator uniformly at random from `generators` and invoking it.
    ///
    /// Selection is uniform over the generator list, not over the union of
    /// the underlying characters: a class with 10 characters gets the same
    /// per-position weight as a class with 33, so individual characters from
    /// small classes come up more often than characters from large ones.
    ///
    /// A `length` of zero returns an empty string. A non-zero `length` with
    /// an empty generator list returns [`Error::EmptySelection`].
    pub fn build_from(&mut self, length: usize, generators: &[CharGen<R>]) -> Result<String> {
        if length == 0 {
            return Ok(String::new());
        }
        if generators.is_empty() {
            return Err(Error::EmptySelection);
        }
        let mut out = String::with_capacity(length);
        for _ in 0..length {
            let generator = generators[self.rng.random_range(0..generators.len())];
            out.push(generator(self));
        }
        Ok(out)
    }

    /// Builds a string of `length` characters from the selected classes.
    ///
    /// Each `true` flag adds the matching class generator, in the order
    /// lowercase, uppercase, digits, special. Class weighting follows
    /// [`StringGen::build_from`]. All flags `false` with a non-zero `length`
    /// returns [`Error::EmptySelection`].
    pub fn build(
        &mut self,
        lower: bool,
        upper: bool,
        digits: bool,
        special: bool,
        length: usize,
    ) -> Result<String> {
        let mut generators: Vec<CharGen<R>> = Vec::with_capacity(4);
        if lower {
            generators.push(Self::lower);
        }
        if upper {
            generators.push(Self::upper);
        }
        if digits {
            generators.push(Self::digit);
        }
        if special {
            generators.push(Self::special);
        }
        self.build_from(length, &generators)
    }

    /// Shorthand for [`StringGen::build`] with all four classes selected.
    pub fn random(&mut self, length: usize) -> String {
        // All four classes are selected, so the empty selection error
        // cannot occur.
        self.build(true, true, true, true, length)
            .unwrap_or_default()
    }
}

/// Returns a random digit.
pub fn digit() -> char {
    StringGen::new().digit()
}

/// Returns a string of random digits of `length`.
pub fn digits(length: usize) -> String {
    StringGen::new().digits(length)
}

/// Returns a random uppercase letter.
pub fn upper() -> char {
    StringGen::new().upper()
}

/// Returns a string of random uppercase letters of `length`.
pub fn uppers(length: usize) -> String {
    StringGen::new().uppers(length)
}

/// Returns a random lowercase letter.
pub fn lower() -> char {
    StringGen::new().lower()
}

/// Returns a string of random lowercase letters of `length`.
pub fn lowers(length: usize) -> String {
    StringGen::new().lowers(length)
}

/// Returns a random password special character.
pub fn special() -> char {
    StringGen::new().special()
}

/// Returns a string of random special characters of `length`.
pub fn specials(length: usize) -> String {
    StringGen::new().specials(length)
}

/// Returns a single random character from the supplied set.
pub fn from_set(set: &str) -> Result<char> {
    StringGen::new().from_set(set)
}

/// Builds a string of `length` characters by mixing the supplied generators,
/// see [`StringGen::build_from`].
pub fn build_from(length: usize, generators: &[CharGen<ThreadRng>]) -> Result<String> {
    StringGen::new().build_from(length, generators)
}

/// Builds a string of `length` characters from the selected classes,
/// see [`StringGen::build`].
pub fn build(
    lower: bool,
    upper: bool,
    digits: bool,
    special: bool,
    length: usize,
) -> Result<String> {
    StringGen::new().build(lower, upper, digits, special, length)
}

/// Returns a random string of `length` drawn from all four classes.
pub fn random(length: usize) -> String {
    StringGen::new().random(length)
}

#[cfg(test)]
#[path = "tests/generator.rs"]
mod generator_test;
