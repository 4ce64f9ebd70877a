//! Additive two-share splitting for paper backup
//!
//! A private key S is written down as two numbers A and B with A + B = S,
//! using plain integer addition (no modular reduction). A is drawn uniformly
//! from [0, S] with a cryptographically secure generator, and B = S - A.
//! Holding one share alone does not give the key; holding both gives it back
//! exactly.
//!
//! Note the blinding range is [0, S], not the full 256-bit space, so the
//! spread of a share depends on the size of S.

use alloy_primitives::U256;
use rand::{rngs::OsRng, CryptoRng, RngCore};

use crate::error::{CryptoError, CryptoResult};
use crate::scalar::{PrivateScalar, SCALAR_LENGTH};

/// Number of hex digits in a rendered scalar
const HEX_WIDTH: usize = SCALAR_LENGTH * 2;

/// Two additive shares of a private key
#[derive(Debug)]
pub struct AdditiveShares {
    a: PrivateScalar,
    b: PrivateScalar,
}

impl AdditiveShares {
    /// First share, uniform over [0, S]
    pub fn a(&self) -> &PrivateScalar {
        &self.a
    }

    /// Second share, S - A
    pub fn b(&self) -> &PrivateScalar {
        &self.b
    }

    /// Add the shares back together
    pub fn combine(&self) -> CryptoResult<U256> {
        combine(&self.a.to_u256(), &self.b.to_u256())
    }
}

/// Split a scalar into two fresh additive shares using the OS CSPRNG
pub fn split(scalar: &PrivateScalar) -> AdditiveShares {
    split_with_rng(scalar, &mut OsRng)
}

/// Split a scalar into two additive shares drawing randomness from `rng`
pub fn split_with_rng<R: CryptoRng + RngCore>(
    scalar: &PrivateScalar,
    rng: &mut R,
) -> AdditiveShares {
    let s = scalar.to_u256();
    let a = uniform_at_most(s, rng);
    // a <= s, so this never underflows
    let b = s - a;

    AdditiveShares {
        a: PrivateScalar::from_u256(a),
        b: PrivateScalar::from_u256(b),
    }
}

/// Uniform value in [0, bound] by rejection sampling over bound's bit width
fn uniform_at_most<R: CryptoRng + RngCore>(bound: U256, rng: &mut R) -> U256 {
    if bound == U256::ZERO {
        return U256::ZERO;
    }

    let mask = U256::MAX >> (256 - bound.bit_len());
    let mut bytes = [0u8; SCALAR_LENGTH];
    loop {
        rng.fill_bytes(&mut bytes);
        let candidate = U256::from_be_bytes(bytes) & mask;
        if candidate <= bound {
            return candidate;
        }
    }
}

/// Reconstruct a key from two shares
///
/// # Errors
///
/// [`CryptoError::ShareOverflow`] if the sum does not fit in 256 bits.
pub fn combine(a: &U256, b: &U256) -> CryptoResult<U256> {
    a.checked_add(*b).ok_or(CryptoError::ShareOverflow)
}

/// Render a value as 64 uppercase hex digits
///
/// With `grouped`, byte pairs are separated by single spaces to make manual
/// transcription easier.
pub fn render_hex(value: &U256, grouped: bool) -> String {
    let hex = hex::encode_upper(value.to_be_bytes::<SCALAR_LENGTH>());
    if !grouped {
        return hex;
    }

    let pairs: Vec<&str> = (0..hex.len())
        .step_by(2)
        .map(|i| &hex[i..i + 2])
        .collect();
    pairs.join(" ")
}

/// Parse hex produced by [`render_hex`] (grouped or not) back to an integer
///
/// Whitespace is ignored, either case is accepted, an optional `0x` prefix is
/// allowed.
pub fn parse_hex(text: &str) -> CryptoResult<U256> {
    let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(&digits);

    if digits.is_empty() {
        return Err(CryptoError::InvalidHex("empty value".to_string()));
    }
    if digits.len() > HEX_WIDTH {
        return Err(CryptoError::InvalidHex(format!(
            "expected at most {} hex digits, got {}",
            HEX_WIDTH,
            digits.len()
        )));
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CryptoError::InvalidHex("non-hex character".to_string()));
    }

    let padded = format!("{:0>width$}", digits, width = HEX_WIDTH);
    let mut bytes = [0u8; SCALAR_LENGTH];
    hex::decode_to_slice(&padded, &mut bytes)
        .map_err(|e| CryptoError::InvalidHex(e.to_string()))?;
    Ok(U256::from_be_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_split_sums_to_scalar() {
        let scalar = PrivateScalar::from_bytes([0x7A; 32]);
        for _ in 0..32 {
            let shares = split(&scalar);
            assert!(shares.a().to_u256() <= scalar.to_u256());
            assert_eq!(shares.combine().unwrap(), scalar.to_u256());
        }
    }

    #[test]
    fn test_split_is_fresh_each_time() {
        let scalar = PrivateScalar::from_bytes([0x7A; 32]);
        let first = split(&scalar);
        let second = split(&scalar);
        // Collision probability is about 2^-255
        assert_ne!(first.a(), second.a());
    }

    #[test]
    fn test_split_zero() {
        let scalar = PrivateScalar::from_bytes([0u8; 32]);
        let shares = split(&scalar);
        assert!(shares.a().is_zero());
        assert!(shares.b().is_zero());
    }

    #[test]
    fn test_split_one_covers_both_ends() {
        let scalar = PrivateScalar::from_be_slice(&[1]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 2];
        for _ in 0..200 {
            let shares = split_with_rng(&scalar, &mut rng);
            let a = shares.a().to_u256();
            assert!(a <= U256::from(1u64));
            seen[a.to::<u64>() as usize] = true;
        }
        assert_eq!(seen, [true, true]);
    }

    #[test]
    fn test_small_range_is_roughly_uniform() {
        // S = 4: five outcomes, each should show up about 1/5 of the time
        let scalar = PrivateScalar::from_be_slice(&[4]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0u32; 5];
        for _ in 0..5000 {
            let a = split_with_rng(&scalar, &mut rng).a().to_u256();
            counts[a.to::<u64>() as usize] += 1;
        }
        for count in counts {
            assert!((800..1200).contains(&count), "skewed counts: {:?}", counts);
        }
    }

    #[test]
    fn test_combine_overflow() {
        assert_eq!(
            combine(&U256::MAX, &U256::from(1u64)),
            Err(CryptoError::ShareOverflow)
        );
    }

    #[test]
    fn test_render_ungrouped() {
        let rendered = render_hex(&U256::from(0xABCu64), false);
        assert_eq!(rendered.len(), 64);
        assert!(rendered.starts_with("000000"));
        assert!(rendered.ends_with("0ABC"));
    }

    #[test]
    fn test_render_grouped() {
        let rendered = render_hex(&U256::from(0xABCu64), true);
        let pairs: Vec<&str> = rendered.split(' ').collect();
        assert_eq!(pairs.len(), 32);
        assert!(pairs.iter().all(|p| p.len() == 2));
        assert_eq!(pairs[30], "0A");
        assert_eq!(pairs[31], "BC");
    }

    #[test]
    fn test_render_max() {
        assert_eq!(render_hex(&U256::MAX, false), "F".repeat(64));
    }

    #[test]
    fn test_parse_inverts_render() {
        let value = U256::from(0x1234_5678_9ABC_DEF0u64) << 100;
        assert_eq!(parse_hex(&render_hex(&value, false)).unwrap(), value);
        assert_eq!(parse_hex(&render_hex(&value, true)).unwrap(), value);
    }

    #[test]
    fn test_parse_accepts_short_and_prefixed() {
        assert_eq!(parse_hex("ff").unwrap(), U256::from(255u64));
        assert_eq!(parse_hex("0xFF").unwrap(), U256::from(255u64));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_hex("").is_err());
        assert!(parse_hex("   ").is_err());
        assert!(parse_hex("GG").is_err());
        assert!(parse_hex(&"1".repeat(65)).is_err());
    }
}
