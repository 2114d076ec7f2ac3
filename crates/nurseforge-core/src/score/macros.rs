//! Declarative macros for reducing score type boilerplate.
//!
//! These macros generate the trait implementations that all field-based
//! score types share: arithmetic ops, ordering and summation.

/// Generates `PartialOrd`, `Add`, `Sub`, `Neg` and `Sum` for a field-based score type.
///
/// The constructor must accept fields in the order they are listed.
///
/// # Usage
/// ```ignore
/// impl_score_ops!(HardSoftScore { hard, soft } => of);
/// impl_score_ops!(Cost { scaled } => of_scaled);
/// ```
macro_rules! impl_score_ops {
    ($type:ident { $($field:ident),+ } => $ctor:ident) => {
        impl PartialOrd for $type {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl std::ops::Add for $type {
            type Output = Self;

            fn add(self, other: Self) -> Self {
                $type::$ctor( $(self.$field + other.$field),+ )
            }
        }

        impl std::ops::Sub for $type {
            type Output = Self;

            fn sub(self, other: Self) -> Self {
                $type::$ctor( $(self.$field - other.$field),+ )
            }
        }

        impl std::ops::Neg for $type {
            type Output = Self;

            fn neg(self) -> Self {
                $type::$ctor( $(-self.$field),+ )
            }
        }

        impl std::iter::Sum for $type {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(<$type as $crate::score::Score>::zero(), |acc, s| acc + s)
            }
        }
    };
}
