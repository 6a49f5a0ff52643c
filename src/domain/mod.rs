// src/domain/mod.rs
use thiserror::Error;

/// A closed set of lowercase labels that round-trip through forms,
/// JSON and SQLite text columns.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::domain::UnknownLabel;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                match raw {
                    $($label => Ok($name::$variant),)+
                    other => Err(crate::domain::UnknownLabel {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

pub mod feed;
pub mod filter;
pub mod listing;
pub mod new_listing;
pub mod role;
pub mod sort;
pub mod stats;
pub mod status;
pub mod user;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} {value:?}")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub value: String,
}
