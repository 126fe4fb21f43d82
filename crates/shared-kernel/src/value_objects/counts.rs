// crates/shared-kernel/src/value_objects/counts.rs
use std::fmt;

use serde::Serialize;

macro_rules! count_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
        #[serde(transparent)]
        pub struct $name(usize);

        impl $name {
            pub const ZERO: Self = Self(0);

            #[inline]
            pub const fn new(value: usize) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn value(self) -> usize {
                self.0
            }
        }

        impl PartialEq<usize> for $name {
            fn eq(&self, other: &usize) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

count_newtype!(
    /// Number of newline-delimited segments in a text.
    LineCount
);

count_newtype!(
    /// Number of whitespace-delimited tokens in a text.
    WordCount
);

count_newtype!(
    /// Number of values that survived numeric parsing.
    ValueCount
);
