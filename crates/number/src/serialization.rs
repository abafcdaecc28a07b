use {
    alloy_primitives::U256,
    num::BigUint,
    serde::{Deserializer, Serializer, de},
    serde_with::{DeserializeAs, SerializeAs},
    std::fmt,
};

/// Reasons a string is not a canonical unsigned decimal integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseDecimalError {
    #[error("empty string")]
    Empty,
    #[error("leading zeros are not allowed")]
    LeadingZero,
    #[error("invalid character {0:?}, only decimal digits are allowed")]
    InvalidDigit(char),
    #[error("value does not fit into 256 bits")]
    Overflow,
}

/// Checks that `s` is made of decimal digits only, without a sign, separators
/// or leading zeros. The literal `"0"` is the only string that may start with
/// a zero.
fn validate(s: &str) -> Result<(), ParseDecimalError> {
    if let Some(c) = s.chars().find(|c| !c.is_ascii_digit()) {
        return Err(ParseDecimalError::InvalidDigit(c));
    }
    match s.as_bytes() {
        [] => Err(ParseDecimalError::Empty),
        [b'0', _, ..] => Err(ParseDecimalError::LeadingZero),
        _ => Ok(()),
    }
}

/// Parses a canonical decimal string into a [`U256`].
pub fn parse_u256(s: &str) -> Result<U256, ParseDecimalError> {
    validate(s)?;
    U256::from_str_radix(s, 10).map_err(|_| ParseDecimalError::Overflow)
}

/// Parses a canonical decimal string into an unbounded [`BigUint`].
pub fn parse_big_uint(s: &str) -> Result<BigUint, ParseDecimalError> {
    validate(s)?;
    BigUint::parse_bytes(s.as_bytes(), 10).ok_or(ParseDecimalError::Empty)
}

/// Serialize and deserialize [`U256`] as a decimal string.
///
/// Unlike the `Deserialize` implementation of [`U256`] this rejects hex
/// strings, JSON numbers and non-canonical decimals.
#[derive(Debug)]
pub struct DecimalU256;

impl<'de> DeserializeAs<'de, U256> for DecimalU256 {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        struct Visitor;

        impl de::Visitor<'_> for Visitor {
            type Value = U256;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a 256-bit unsigned integer as a decimal string")
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                parse_u256(s).map_err(|err| {
                    de::Error::custom(format!("failed to decode {s:?} as a 256-bit number: {err}"))
                })
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

impl SerializeAs<U256> for DecimalU256 {
    fn serialize_as<S: Serializer>(source: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&source.to_string())
    }
}

/// Serialize and deserialize [`BigUint`] as a decimal string.
#[derive(Debug)]
pub struct DecimalBigUint;

impl<'de> DeserializeAs<'de, BigUint> for DecimalBigUint {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        struct Visitor;

        impl de::Visitor<'_> for Visitor {
            type Value = BigUint;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "an unsigned integer as a decimal string")
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                parse_big_uint(s).map_err(|err| {
                    de::Error::custom(format!("failed to decode {s:?} as an unsigned integer: {err}"))
                })
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

impl SerializeAs<BigUint> for DecimalBigUint {
    fn serialize_as<S: Serializer>(source: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&source.to_str_radix(10))
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        serde::{Deserialize, Serialize},
        serde_with::serde_as,
    };

    #[serde_as]
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Amount(#[serde_as(as = "DecimalU256")] U256);

    #[serde_as]
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Big(#[serde_as(as = "DecimalBigUint")] BigUint);

    #[test]
    fn parses_canonical_decimals() {
        assert_eq!(parse_u256("0"), Ok(U256::ZERO));
        assert_eq!(parse_u256("1"), Ok(U256::from(1)));
        assert_eq!(
            parse_u256(
                "115792089237316195423570985008687907853269984665640564039457584007913129639935"
            ),
            Ok(U256::MAX)
        );
    }

    #[test]
    fn rejects_non_canonical_decimals() {
        assert_eq!(parse_u256(""), Err(ParseDecimalError::Empty));
        assert_eq!(parse_u256("00"), Err(ParseDecimalError::LeadingZero));
        assert_eq!(parse_u256("0123"), Err(ParseDecimalError::LeadingZero));
        assert_eq!(parse_u256("-1"), Err(ParseDecimalError::InvalidDigit('-')));
        assert_eq!(parse_u256("+1"), Err(ParseDecimalError::InvalidDigit('+')));
        assert_eq!(parse_u256("1_000"), Err(ParseDecimalError::InvalidDigit('_')));
        assert_eq!(parse_u256("1,000"), Err(ParseDecimalError::InvalidDigit(',')));
        assert_eq!(parse_u256(" 1"), Err(ParseDecimalError::InvalidDigit(' ')));
        assert_eq!(parse_u256("0x10"), Err(ParseDecimalError::InvalidDigit('x')));
        assert_eq!(parse_u256("1.5"), Err(ParseDecimalError::InvalidDigit('.')));
    }

    #[test]
    fn rejects_overflow() {
        assert_eq!(
            parse_u256(
                "115792089237316195423570985008687907853269984665640564039457584007913129639936"
            ),
            Err(ParseDecimalError::Overflow)
        );
        // The unbounded variant has no such limit.
        assert!(
            parse_big_uint(
                "115792089237316195423570985008687907853269984665640564039457584007913129639936"
            )
            .is_ok()
        );
    }

    #[test]
    fn json_representation() {
        let amount: Amount = serde_json::from_str(r#""10""#).unwrap();
        assert_eq!(amount, Amount(U256::from(10)));
        assert_eq!(serde_json::to_string(&amount).unwrap(), r#""10""#);

        assert!(serde_json::from_str::<Amount>("10").is_err());
        assert!(serde_json::from_str::<Amount>(r#""0x10""#).is_err());
        assert!(serde_json::from_str::<Amount>(r#""010""#).is_err());

        let big: Big = serde_json::from_str(r#""123456789012345678901234567890""#).unwrap();
        assert_eq!(
            serde_json::to_string(&big).unwrap(),
            r#""123456789012345678901234567890""#
        );
        assert!(serde_json::from_str::<Big>(r#""-1""#).is_err());
    }
}
