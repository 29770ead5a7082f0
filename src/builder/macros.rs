//! Macros for ergonomic state identity construction.

/// Generate a `State` implementation for a fieldless identity enum.
///
/// The generated enum is `Copy + Eq + Hash` so it can key the state table,
/// and carries an `ALL` slice listing every variant in declaration order
/// along with an `index()` accessor into that slice.
///
/// # Example
///
/// ```
/// use menu_mode::state_enum;
/// use menu_mode::core::State;
///
/// state_enum! {
///     pub enum Screen {
///         Title,
///         Options,
///         Credits,
///     }
///     root: [Title]
/// }
///
/// assert!(Screen::Title.is_root());
/// assert_eq!(Screen::Credits.index(), 2);
/// assert_eq!(Screen::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(root: [$($root:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// Position of this variant within [`Self::ALL`].
            pub fn index(self) -> usize {
                self as usize
            }
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_root(&self) -> bool {
                match self {
                    $($(Self::$root => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}
