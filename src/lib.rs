//! Short opaque identifiers guarded by a Luhn mod 63 check symbol.
//!
//! ```
//! use keyid::KeyId;
//!
//! let mut key = KeyId::new();
//! let id = key.generate(false);
//! assert_eq!(id.len(), 32);
//! assert!(key.validate(&id));
//! ```

pub mod core;
pub mod util;

pub use crate::core::alphabet::{Alphabet, POOL, RADIX};
pub use crate::core::clock::{Clock, FixedClock, SystemClock, UniqueSeed, SEED_FIELDS};
pub use crate::core::error::KeyIdError;
pub use crate::core::keyid::{KeyId, KeyLength};
pub use crate::core::model::{GeneratedKey, KeyMode, ValidationReport};
