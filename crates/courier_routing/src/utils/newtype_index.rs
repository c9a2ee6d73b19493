/// Declares a dense `usize` index into a `Vec<$t>` / `[$t]` table.
///
/// Trailing types declare side tables of the same length keyed by the same
/// index, e.g. per-center masses next to the `Vec<Center>` they describe.
#[macro_export]
macro_rules! define_index_newtype {
    ($name:ident, $t:ident $(, $side:ty)*) => {
        #[derive(
            serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        pub struct $name(usize);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}#{}", stringify!($t), self.0)
            }
        }

        impl $name {
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            pub const fn get(&self) -> usize {
                self.0
            }

            /// Every index of a table holding `len` entries, in table order.
            pub fn all(len: usize) -> impl Iterator<Item = Self> {
                (0..len).map(Self)
            }
        }

        $crate::define_index_newtype!(@table $name, $t);
        $($crate::define_index_newtype!(@table $name, $side);)*
    };

    (@table $name:ident, $t:ty) => {
        impl std::ops::Index<$name> for Vec<$t> {
            type Output = $t;
            fn index(&self, index: $name) -> &Self::Output {
                &self[index.0]
            }
        }

        impl std::ops::IndexMut<$name> for Vec<$t> {
            fn index_mut(&mut self, index: $name) -> &mut Self::Output {
                &mut self[index.0]
            }
        }

        impl std::ops::Index<$name> for [$t] {
            type Output = $t;
            fn index(&self, index: $name) -> &Self::Output {
                &self[index.0]
            }
        }
    };
}
