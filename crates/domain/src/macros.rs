//! Macro for implementing string conversions for closed wire enums
//!
//! PayPal encodes many small enumerations as fixed strings on the wire
//! (`"add"`, `"ACCOUNT"`, ...). This macro derives the string representation,
//! `Display`, `FromStr` and serde support from a single variant table so the
//! same spelling is used everywhere.
//!
//! # Example
//!
//! ```rust
//! use paypal_sdk_domain::impl_wire_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Anchor {
//!     Application,
//!     Account,
//! }
//!
//! impl_wire_enum_conversions!(Anchor {
//!     Application => "APPLICATION",
//!     Account => "ACCOUNT",
//! });
//!
//! assert_eq!(Anchor::Account.to_string(), "ACCOUNT");
//! assert_eq!("application".parse::<Anchor>().unwrap(), Anchor::Application);
//! ```

/// Implements `as_str`, `Display`, `FromStr`, `Serialize` and `Deserialize`
/// for a closed wire enum.
///
/// # Features
///
/// - Case-insensitive parsing (`"ACCOUNT"`, `"account"` and `"Account"` all
///   parse)
/// - Output always uses the exact wire spelling given in the table
/// - Deserialization rejects values outside the table
#[macro_export]
macro_rules! impl_wire_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Wire spelling of this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }

        impl serde::Serialize for $enum_name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $enum_name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> ::std::result::Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}
