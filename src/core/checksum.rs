//! Luhn mod N over key alphabet codes.
//!
//! Positions are weighted from the start of the string: even (0-based)
//! indices are doubled, odd indices count once. A doubled product is folded
//! back into range by adding its base-`RADIX` digits. Reversing the parity
//! would invalidate every id issued so far.

use super::alphabet::RADIX;

fn weight(index: usize) -> u32 {
    if index % 2 == 0 {
        2
    } else {
        1
    }
}

fn fold(product: u32) -> u32 {
    product / RADIX + product % RADIX
}

/// Sum of the folded, weighted codes.
pub fn weighted_sum(codes: &[u8]) -> u32 {
    codes
        .iter()
        .enumerate()
        .map(|(i, &code)| fold(weight(i) * u32::from(code)))
        .sum()
}

/// Weighted sum reduced modulo the radix.
pub fn checksum(codes: &[u8]) -> u32 {
    weighted_sum(codes) % RADIX
}

/// True when a complete sequence (data plus check code) sums to 0 mod radix.
pub fn verify(codes: &[u8]) -> bool {
    checksum(codes) == 0
}

/// Check code to append after `data` so that [`verify`] holds.
///
/// When the check position is odd the code is `(RADIX - sum) mod RADIX`.
/// When it is even the check code is doubled, and a doubled code only folds
/// to even residues, so `None` is returned for an odd target.
pub fn check_code(data: &[u8]) -> Option<u8> {
    let target = (RADIX - checksum(data)) % RADIX;
    if weight(data.len()) == 1 {
        Some(target as u8)
    } else if target % 2 == 0 {
        Some((target / 2) as u8)
    } else {
        None
    }
}
