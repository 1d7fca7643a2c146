//! Macro for implementing Display and FromStr for label enums
//!
//! Platform readings (battery state, orientation, connection type) and
//! attribute keys all carry a fixed lowercase wire label. This macro provides
//! both directions of the conversion from a single mapping table.
//!
//! # Example
//!
//! ```rust
//! use devicedata_domain::impl_domain_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum PowerSource {
//!     Battery,
//!     Mains,
//! }
//!
//! impl_domain_label_conversions!(PowerSource {
//!     Battery => "battery",
//!     Mains => "mains",
//! });
//!
//! assert_eq!(PowerSource::Mains.to_string(), "mains");
//! assert_eq!("BATTERY".parse::<PowerSource>().unwrap(), PowerSource::Battery);
//! ```

/// Implements Display and FromStr for label enums
///
/// Generates:
/// - `as_label()`: the `&'static str` label of a variant
/// - Display: writes the label
/// - FromStr: case-insensitive parse of the label
///
/// Labels must be lowercase for parsing to round-trip.
#[macro_export]
macro_rules! impl_domain_label_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Wire label for this variant.
            #[must_use]
            pub const fn as_label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_label())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
