// Declares a C-compatible enum whose ordinals are fixed by the runtime.
//
// Every enum declared here is zero-based and contiguous, which makes the
// all-zero bit pattern a valid value and lets the derived serde index match
// the C ordinal.
macro_rules! gvr_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $c_name:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal => $c_const:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[repr(i32)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant = $value,
            )+
        }

        impl $name {
            /// Every value, in ordinal order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Number of values. Mirrors the header's sentinel member.
            pub const COUNT: usize = $name::ALL.len();

            /// Name of the matching C constant.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $c_const,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> $name {
                $name::ALL[0]
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value as i32
            }
        }

        impl ::std::convert::TryFrom<i32> for $name {
            type Error = $crate::error::DiscriminantError;

            fn try_from(value: i32) -> Result<$name, Self::Error> {
                match value {
                    $($value => Ok($name::$variant),)+
                    _ => Err($crate::error::DiscriminantError { kind: $c_name, value }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        const _: () = assert!($name::ALL[0] as i32 == 0);

        // Zero is the first declared value, checked above.
        unsafe impl ::bytemuck::Zeroable for $name {}
    };
}
