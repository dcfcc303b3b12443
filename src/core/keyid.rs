use std::fmt;

use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::{debug, trace};

use super::alphabet::Alphabet;
use super::checksum;
use super::clock::{Clock, SystemClock, SEED_FIELDS};
use super::error::{KeyIdError, Result};

/// Total key id length, check symbol included. Never below [`KeyLength::MIN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeyLength(usize);

impl KeyLength {
    pub const DEFAULT: Self = Self(32);
    pub const MIN: Self = Self(16);

    /// Normalize a requested length: absent or zero means the default,
    /// anything shorter than the minimum is raised to it.
    pub fn from_requested(requested: Option<i64>) -> Self {
        match requested {
            None | Some(0) => Self::DEFAULT,
            Some(n) if n < Self::MIN.0 as i64 => Self::MIN,
            Some(n) => Self(usize::try_from(n).unwrap_or(usize::MAX)),
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for KeyLength {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for KeyLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generator and validator for key ids of one configured length.
///
/// The instance owns its length, its random source and its clock. Changing
/// the length takes `&mut self` and only affects later calls; callers that
/// share an instance across threads must synchronize it themselves.
#[derive(Debug, Clone)]
pub struct KeyId<R = ThreadRng, C = SystemClock> {
    alphabet: Alphabet,
    length: KeyLength,
    rng: R,
    clock: C,
}

impl KeyId {
    /// Thread-local randomness and the local wall clock.
    pub fn new() -> Self {
        Self::with_sources(rand::thread_rng(), SystemClock)
    }
}

impl Default for KeyId {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, C> KeyId<R, C> {
    pub fn with_sources(rng: R, clock: C) -> Self {
        Self {
            alphabet: Alphabet::new(),
            length: KeyLength::DEFAULT,
            rng,
            clock,
        }
    }

    pub fn length(&self) -> usize {
        self.length.get()
    }

    pub fn set_length(&mut self, requested: Option<i64>) {
        self.length = KeyLength::from_requested(requested);
    }

    /// Check a candidate key id. Malformed input is `false`, never an error.
    pub fn validate(&self, candidate: &str) -> bool {
        let length = self.length.get();
        // The alphabet is ASCII, so any byte length mismatch is a rejection.
        if candidate.len() != length {
            trace!(expected = length, actual = candidate.len(), "key id has wrong length");
            return false;
        }

        let codes = match self.alphabet.decode(candidate) {
            Ok(codes) => codes,
            Err(e) => {
                trace!(error = %e, "key id has a symbol outside the alphabet");
                return false;
            }
        };

        let valid = checksum::verify(&codes);
        if !valid {
            trace!(residue = checksum::checksum(&codes), "key id failed its checksum");
        }
        valid
    }

    /// Append the check symbol to `length - 1` caller-chosen data symbols.
    pub fn seal(&self, data: &str) -> Result<String> {
        let expected = self.length.get() - 1;
        let actual = data.chars().count();
        if actual != expected {
            return Err(KeyIdError::DataLength { expected, actual });
        }

        let codes = self.alphabet.decode(data)?;
        let check = checksum::check_code(&codes)
            .ok_or_else(|| KeyIdError::Unsealable(checksum::weighted_sum(&codes)))?;

        let mut id = String::with_capacity(data.len() + 1);
        id.push_str(data);
        id.push(self.alphabet.symbol(check));
        Ok(id)
    }
}

impl<R: Rng, C: Clock> KeyId<R, C> {
    /// Generate a key id of the configured length.
    ///
    /// With `unique` set, the first seven data symbols come from the clock
    /// (one read per call) and the rest from the random source.
    pub fn generate(&mut self, unique: bool) -> String {
        let length = self.length.get();
        let radix = self.alphabet.radix();
        let seed = unique.then(|| self.clock.seed());

        let rng = &mut self.rng;
        let mut data: Vec<u8> = (0..length - 1)
            .map(|i| match seed {
                Some(seed) if i < SEED_FIELDS => (seed.fields()[i] % radix) as u8,
                _ => rng.gen_range(0..radix) as u8,
            })
            .collect();

        // Odd lengths double the check position, which cannot reach an odd
        // residue. Nudging the last data code (random, weight 1) fixes parity.
        let check = loop {
            if let Some(code) = checksum::check_code(&data) {
                break code;
            }
            if let Some(last) = data.last_mut() {
                *last = ((u32::from(*last) + 1) % radix) as u8;
            }
        };
        data.push(check);

        debug!(length, unique, "generated key id");
        data.iter().map(|&code| self.alphabet.symbol(code)).collect()
    }
}
