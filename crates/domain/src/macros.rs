//! Macro for implementing Display and FromStr for configuration enums
//!
//! Configuration enums are read from TOML/JSON through serde and from
//! environment variables through `FromStr`; this macro keeps the string forms
//! in one place.
//!
//! # Example
//!
//! ```rust
//! use apptcal_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Weekpart {
//!     Weekday,
//!     Weekend,
//! }
//!
//! impl_domain_enum_conversions!(Weekpart {
//!     Weekday => "weekday",
//!     Weekend => "weekend",
//! });
//! ```

/// Implements Display and FromStr traits for configuration enums
///
/// - Display writes the lowercase string form
/// - FromStr parses case-insensitively and names the enum on failure
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
