//! Fixed-arity coordinate points
//!
//! Plain hashable values for sparse lattices. Arithmetic such as offsetting by a
//! neighbour delta is left to the caller.

use num_traits::Zero;
use std::fmt::{self, Display};

macro_rules! point {
    ($(#[$meta:meta])* $name:ident, ($($tuple:ident),+), $($field:ident),+) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
        pub struct $name<T> {
            $(pub $field: T,)+
        }

        impl<T> $name<T> {
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<T: Zero> $name<T> {
            /// The origin
            pub fn zero() -> Self {
                Self { $($field: T::zero()),+ }
            }
        }

        impl<T> From<($($tuple),+)> for $name<T> {
            fn from(($($field),+): ($($tuple),+)) -> Self {
                Self { $($field),+ }
            }
        }

        impl<T> From<$name<T>> for ($($tuple),+) {
            fn from(point: $name<T>) -> Self {
                ($(point.$field),+)
            }
        }

        impl<T: Display> Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let coordinates = [$(self.$field.to_string()),+];
                write!(f, "({})", coordinates.join(", "))
            }
        }
    };
}

point!(
    /// A 2D point
    Point2, (T, T), x, y
);
point!(
    /// A 3D point
    Point3, (T, T, T), x, y, z
);
point!(
    /// A 4D point
    Point4, (T, T, T, T), x, y, z, w
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_structural_equality_and_hashing() {
        let mut seen = HashSet::new();
        seen.insert(Point3::new(1, -2, 3));
        assert!(seen.contains(&Point3::new(1, -2, 3)));
        assert!(!seen.contains(&Point3::new(1, 2, 3)));
    }

    #[test]
    fn test_zero_and_tuples() {
        assert_eq!(Point2::<i64>::zero(), Point2::new(0, 0));
        assert_eq!(Point4::from((1, 2, 3, 4)), Point4::new(1, 2, 3, 4));
        let (x, y): (u8, u8) = Point2::new(5, 6).into();
        assert_eq!((x, y), (5, 6));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point3::new(1, 0, -1).to_string(), "(1, 0, -1)");
    }
}
