//! `serde_with` adapters for `0x` prefixed hex encodings.

use {
    alloy_primitives::Address,
    serde::{Deserialize, Deserializer, Serializer, de},
    serde_with::{DeserializeAs, SerializeAs},
    std::borrow::Cow,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    #[error("missing \"0x\" prefix")]
    MissingPrefix,
    #[error("invalid character {0:?}, only hex digits are allowed")]
    InvalidDigit(char),
    #[error("odd number of hex digits")]
    OddLength,
    #[error("expected {expected} hex digits but got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Strips the mandatory `0x` prefix and checks that the remainder consists of
/// an even number of hex digits of any case.
fn digits(s: &str) -> Result<&str, HexError> {
    let digits = s.strip_prefix("0x").ok_or(HexError::MissingPrefix)?;
    if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(HexError::InvalidDigit(c));
    }
    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength);
    }
    Ok(digits)
}

/// Decodes a `0x` prefixed hex string of arbitrary length.
pub fn decode(s: &str) -> Result<Vec<u8>, HexError> {
    let digits = digits(s)?;
    const_hex::decode(digits).map_err(|_| HexError::OddLength)
}

/// Decodes a `0x` prefixed hex string of exactly `N` bytes.
pub fn decode_array<const N: usize>(s: &str) -> Result<[u8; N], HexError> {
    let digits = digits(s)?;
    if digits.len() != N * 2 {
        return Err(HexError::InvalidLength {
            expected: N * 2,
            actual: digits.len(),
        });
    }
    let mut buffer = [0; N];
    const_hex::decode_to_slice(digits, &mut buffer).map_err(|_| HexError::OddLength)?;
    Ok(buffer)
}

/// Parses a 20 byte address. No checksum validation is performed so any
/// letter case is accepted.
pub fn parse_address(s: &str) -> Result<Address, HexError> {
    decode_array::<20>(s).map(Address::from)
}

fn deserialize_str<'de, D, T>(
    deserializer: D,
    what: &str,
    parse: impl FnOnce(&str) -> Result<T, HexError>,
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
{
    let s = Cow::<str>::deserialize(deserializer)?;
    parse(&s).map_err(|err| de::Error::custom(format!("failed to decode {s:?} as {what}: {err}")))
}

/// Serialize and deserialize binary data as a `0x` prefixed hex string.
#[derive(Debug)]
pub struct Hex;

impl<'de> DeserializeAs<'de, Vec<u8>> for Hex {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        deserialize_str(deserializer, "a hex string", decode)
    }
}

impl SerializeAs<Vec<u8>> for Hex {
    fn serialize_as<S: Serializer>(source: &Vec<u8>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&const_hex::encode_prefixed(source))
    }
}

impl<'de, const N: usize> DeserializeAs<'de, [u8; N]> for Hex {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<[u8; N], D::Error> {
        deserialize_str(deserializer, &format!("{N} hex encoded bytes"), decode_array::<N>)
    }
}

impl<const N: usize> SerializeAs<[u8; N]> for Hex {
    fn serialize_as<S: Serializer>(source: &[u8; N], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&const_hex::encode_prefixed(source))
    }
}

/// Serialize and deserialize an [`Address`] as a `0x` prefixed string of 40
/// hex digits. Addresses are always emitted in lower case.
#[derive(Debug)]
pub struct HexAddress;

impl<'de> DeserializeAs<'de, Address> for HexAddress {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<Address, D::Error> {
        deserialize_str(deserializer, "an address", parse_address)
    }
}

impl SerializeAs<Address> for HexAddress {
    fn serialize_as<S: Serializer>(source: &Address, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&const_hex::encode_prefixed(source.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use {super::*, serde::Serialize, serde_with::serde_as};

    #[serde_as]
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Wrapper(#[serde_as(as = "HexAddress")] Address);

    #[test]
    fn address_accepts_any_case() {
        let lower = parse_address("0x6810e776880c02933d47db1b9fc05908e5386b96").unwrap();
        let upper = parse_address("0x6810E776880C02933D47DB1B9FC05908E5386B96").unwrap();
        let mixed = parse_address("0x6810e776880C02933D47dB1b9fC05908e5386b96").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
    }

    #[test]
    fn address_rejects_malformed_input() {
        assert_eq!(
            parse_address("6810e776880c02933d47db1b9fc05908e5386b96"),
            Err(HexError::MissingPrefix)
        );
        assert_eq!(
            parse_address("0x6810e776880c02933d47db1b9fc05908e5386b"),
            Err(HexError::InvalidLength {
                expected: 40,
                actual: 38
            })
        );
        assert_eq!(
            parse_address("0x6810e776880c02933d47db1b9fc05908e5386b9600"),
            Err(HexError::InvalidLength {
                expected: 40,
                actual: 42
            })
        );
        assert_eq!(
            parse_address("0x6810e776880c02933d47db1b9fc05908e5386bzz"),
            Err(HexError::InvalidDigit('z'))
        );
        assert_eq!(
            parse_address("0x0x10e776880c02933d47db1b9fc05908e5386b96"),
            Err(HexError::InvalidDigit('x'))
        );
    }

    #[test]
    fn address_is_emitted_in_lower_case() {
        let address: Wrapper =
            serde_json::from_str(r#""0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2""#).unwrap();
        assert_eq!(
            serde_json::to_string(&address).unwrap(),
            r#""0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2""#
        );
    }

    #[test]
    fn bytes() {
        assert_eq!(decode("0x"), Ok(vec![]));
        assert_eq!(decode("0xdeadBEEF"), Ok(vec![0xde, 0xad, 0xbe, 0xef]));
        assert_eq!(decode("0xabc"), Err(HexError::OddLength));
        assert_eq!(decode("deadbeef"), Err(HexError::MissingPrefix));
        assert_eq!(decode_array::<2>("0x0102"), Ok([1, 2]));
        assert!(decode_array::<2>("0x010203").is_err());
    }
}
