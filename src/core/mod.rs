pub mod alphabet;
pub mod checksum;
pub mod clock;
pub mod error;
pub mod keyid;
pub mod model;
