//! Macro for implementing Display and FromStr for keyword enums
//!
//! Generates both conversions from a single variant table. Parsing trims
//! surrounding whitespace and ignores case; extra spellings can be listed
//! after the canonical one with `|`.
//!
//! # Example
//!
//! ```rust
//! use eventdesk_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Visibility {
//!     Public,
//!     Private,
//! }
//!
//! impl_domain_status_conversions!(Visibility {
//!     Public => "public" | "0",
//!     Private => "private" | "1",
//! });
//!
//! assert_eq!("PUBLIC".parse::<Visibility>(), Ok(Visibility::Public));
//! assert_eq!("1".parse::<Visibility>(), Ok(Visibility::Private));
//! assert_eq!(Visibility::NAMES, &["public", "private"]);
//! ```

/// Implements Display and FromStr for keyword enums
///
/// This macro generates:
/// - Display: the canonical lowercase keyword
/// - FromStr: case-insensitive match against the keyword or any alias
/// - `NAMES`: the canonical keywords in declaration order
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal $(| $alias:literal)*),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical keywords in declaration order.
            pub const NAMES: &'static [&'static str] = &[$($str),+];
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str $(| $alias)* => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestStatus {
        Pending,
        Completed,
        Failed,
    }

    impl_domain_status_conversions!(TestStatus {
        Pending => "pending" | "0",
        Completed => "completed" | "done",
        Failed => "failed",
    });

    #[test]
    fn test_display_conversion() {
        assert_eq!(TestStatus::Pending.to_string(), "pending");
        assert_eq!(TestStatus::Completed.to_string(), "completed");
        assert_eq!(TestStatus::Failed.to_string(), "failed");
    }

    #[test]
    fn test_fromstr_mixed_case() {
        assert_eq!(TestStatus::from_str("PENDING").unwrap(), TestStatus::Pending);
        assert_eq!(TestStatus::from_str("CompLeted").unwrap(), TestStatus::Completed);
        assert_eq!(TestStatus::from_str(" failed ").unwrap(), TestStatus::Failed);
    }

    #[test]
    fn test_fromstr_aliases() {
        assert_eq!(TestStatus::from_str("0").unwrap(), TestStatus::Pending);
        assert_eq!(TestStatus::from_str("DONE").unwrap(), TestStatus::Completed);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestStatus::from_str("invalid");
        assert_eq!(result.unwrap_err(), "Invalid TestStatus: invalid");
        assert!(TestStatus::from_str("").is_err());
    }

    mod with_local_result_alias {
        #[allow(dead_code)]
        type Result<T> = std::result::Result<T, ()>;

        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub(super) enum Shade {
            Light,
            Dark,
        }

        impl_domain_status_conversions!(Shade {
            Light => "light",
            Dark => "dark",
        });
    }

    #[test]
    fn test_expands_where_result_is_shadowed() {
        use with_local_result_alias::Shade;

        assert_eq!("DARK".parse::<Shade>(), Ok(Shade::Dark));
        assert_eq!(Shade::Light.to_string(), "light");
    }

    #[test]
    fn test_names_in_declaration_order() {
        assert_eq!(TestStatus::NAMES, &["pending", "completed", "failed"]);
    }
}
