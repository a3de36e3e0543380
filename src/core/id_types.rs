//! The `define_id_types` macro.

/// Defines newtypes that consist of a single integer-valued ID.
///
/// You specify for each such type its name, the int type for the contained ID,
/// and the number of distinct values of the type.
#[macro_export]
macro_rules! define_id_types {
    (
        $(
            $(#[$outer:meta])*
            $type_name:ident : $int_type:ty[$count:expr];
        )*
    ) => {
        $(
            #[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
            $(#[$outer])*
            pub struct $type_name($int_type);

            impl $type_name {
                /// The number of distinct values this type may take on.
                pub const COUNT: usize = $count;

                /// Makes a new value given its ID, if it's in range.
                pub const fn new(id: $int_type) -> Option<Self> {
                    if id >= 0 && id < $count {
                        Some($type_name(id))
                    } else {
                        None
                    }
                }

                /// Returns this value's ID.
                pub const fn get(self) -> $int_type {
                    self.0
                }

                /// Returns this value's ordinal number, which starts at 1.
                pub const fn ordinal(self) -> $int_type {
                    self.0 + 1
                }

                /// Returns this value's ID in a form suitable for use as an
                /// array index.
                pub const fn index(self) -> usize {
                    self.0 as usize
                }

                /// Iterates all distinct values, in ascending ID order.
                pub fn all() -> impl Iterator<Item = Self> {
                    (0..$count).map(|id| $type_name(id as $int_type))
                }
            }

            impl TryFrom<$int_type> for $type_name {
                type Error = &'static str;
                fn try_from(value: $int_type) -> Result<Self, Self::Error> {
                    $type_name::new(value).ok_or("ID out of bounds")
                }
            }

            impl TryFrom<usize> for $type_name {
                type Error = &'static str;
                fn try_from(value: usize) -> Result<Self, Self::Error> {
                    if value < $count {
                        Ok($type_name(value as $int_type))
                    } else {
                        Err("index out of bounds")
                    }
                }
            }

            impl From<$type_name> for $int_type {
                fn from(id: $type_name) -> Self {
                    id.get()
                }
            }

            impl From<$type_name> for usize {
                fn from(id: $type_name) -> Self {
                    id.index()
                }
            }
        )*
    };
}
