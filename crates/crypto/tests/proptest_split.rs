//! Property-based tests for additive splitting and hex rendering
//!
//! Uses proptest to check the split law and the render/parse inverse across
//! many randomly generated scalars.

use proptest::prelude::*;
use splitkey_crypto::{combine, parse_hex, render_hex, split, PrivateScalar, U256};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: A + B == S, 0 <= A <= S, B == S - A
    #[test]
    fn prop_split_sums_to_scalar(bytes in any::<[u8; 32]>()) {
        let scalar = PrivateScalar::from_bytes(bytes);
        let s = scalar.to_u256();

        let shares = split(&scalar);
        let a = shares.a().to_u256();
        let b = shares.b().to_u256();

        prop_assert!(a <= s);
        prop_assert_eq!(b, s - a);
        prop_assert_eq!(combine(&a, &b).unwrap(), s);
    }

    /// Property: small scalars never produce shares wider than the scalar
    #[test]
    fn prop_split_small_scalars(value in 0u64..1024) {
        let scalar = PrivateScalar::from_u256(U256::from(value));
        let shares = split(&scalar);

        prop_assert!(shares.a().to_u256() <= U256::from(value));
        prop_assert!(shares.b().to_u256() <= U256::from(value));
        prop_assert_eq!(shares.combine().unwrap(), U256::from(value));
    }

    /// Property: parsing the rendered hex gives back the original value
    #[test]
    fn prop_render_parse_inverse(bytes in any::<[u8; 32]>(), grouped in any::<bool>()) {
        let value = U256::from_be_bytes(bytes);
        let rendered = render_hex(&value, grouped);
        prop_assert_eq!(parse_hex(&rendered).unwrap(), value);
    }

    /// Property: ungrouped output is 64 uppercase hex digits
    #[test]
    fn prop_render_ungrouped_shape(bytes in any::<[u8; 32]>()) {
        let rendered = render_hex(&U256::from_be_bytes(bytes), false);
        prop_assert_eq!(rendered.len(), 64);
        prop_assert!(rendered.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }

    /// Property: grouped output is 32 space-separated byte pairs
    #[test]
    fn prop_render_grouped_shape(bytes in any::<[u8; 32]>()) {
        let rendered = render_hex(&U256::from_be_bytes(bytes), true);
        let pairs: Vec<&str> = rendered.split(' ').collect();
        prop_assert_eq!(pairs.len(), 32);
        prop_assert!(pairs.iter().all(|p| p.len() == 2));
        prop_assert_eq!(pairs.concat(), render_hex(&U256::from_be_bytes(bytes), false));
    }
}
