//! Ordered level catalogs for the nine stat axes.
//!
//! Each axis has a closed, totally-ordered set of named power gradations.
//! The ordinal position (weakest = 0) is the only numeric signal the scoring
//! engine reads; labels are the domain's canonical display strings and the
//! wire encoding for character documents.

use core::fmt;

mod attack_potency;
mod durability;
mod intelligence;
mod lifting_strength;
mod range;
mod speed;
mod stamina;
mod striking_strength;
mod tier;

pub use attack_potency::AttackPotencyLevel;
pub use durability::DurabilityLevel;
pub use intelligence::IntelligenceLevel;
pub use lifting_strength::LiftingStrengthLevel;
pub use range::RangeLevel;
pub use speed::SpeedLevel;
pub use stamina::StaminaLevel;
pub use striking_strength::StrikingStrengthLevel;
pub use tier::TierLevel;

/// A leveled axis: a fixed ordered ladder of named gradations.
///
/// Implementations are plain `#[repr(u8)]` enums whose declaration order is
/// the ranking order, so `ordinal` is a cast and `from_ordinal` an indexed
/// table lookup.
pub trait Level: Copy + Eq + Ord + fmt::Debug + 'static {
    /// Number of levels on this axis.
    const COUNT: usize;

    /// Position in the ladder, weakest = 0.
    fn ordinal(self) -> usize;

    /// Inverse of [`Level::ordinal`]. `None` when out of range.
    fn from_ordinal(ordinal: usize) -> Option<Self>;

    /// Canonical display label.
    fn label(self) -> &'static str;

    /// The weakest level on this axis.
    fn floor() -> Self {
        // Every ladder is non-empty; ordinal 0 always exists.
        Self::from_ordinal(0).unwrap_or_else(|| unreachable!())
    }

    /// The strongest level on this axis.
    fn ceiling() -> Self {
        Self::from_ordinal(Self::COUNT - 1).unwrap_or_else(|| unreachable!())
    }
}

/// Declares one level catalog: the enum (serde-encoded by label), its ordered
/// `ALL` table, a static phf label lookup, `Display`, and the [`Level`] impl.
macro_rules! level_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $lookup:ident {
            $( $variant:ident => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[repr(u8)]
        pub enum $name {
            $( #[serde(rename = $label)] $variant, )+
        }

        static $lookup: phf::Map<&'static str, $name> = phf::phf_map! {
            $( $label => $name::$variant, )+
        };

        impl $name {
            /// Every level in ranking order, weakest first.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// Total number of levels on this axis.
            pub const COUNT: usize = Self::ALL.len();

            /// Look up a level by its display label.
            #[inline]
            pub fn from_label(s: &str) -> Option<Self> {
                $lookup.get(s).copied()
            }
        }

        impl $crate::levels::Level for $name {
            const COUNT: usize = Self::ALL.len();

            #[inline]
            fn ordinal(self) -> usize {
                self as usize
            }

            #[inline]
            fn from_ordinal(ordinal: usize) -> Option<Self> {
                Self::ALL.get(ordinal).copied()
            }

            fn label(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str($crate::levels::Level::label(*self))
            }
        }
    };
}

pub(crate) use level_enum;
