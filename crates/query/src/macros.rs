/// Declares a catalog category: a module with one `StringField` constant per
/// field, a `FIELDS` slice in declaration order and a `CATEGORY` entry.
/// Categories that double as event types also get `EVENT_CODE` and `event()`.
#[macro_export]
macro_rules! field_category {
    (@code) => {
        None
    };
    (@code $code:literal) => {
        Some($code)
    };
    (
        $(#[$meta:meta])*
        $module:ident => $label:literal $(, event = $code:literal)? {
            $($konst:ident = $name:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        pub mod $module {
            use $crate::catalog::{Category, StringField};

            $(
                pub const EVENT_CODE: &str = $code;

                pub fn event() -> $crate::ast::Attr {
                    $crate::ast::EventType::new(EVENT_CODE).into()
                }
            )?

            $(pub const $konst: StringField = StringField::new($name);)*

            pub const FIELDS: &[StringField] = &[$($konst),*];

            pub const CATEGORY: Category = Category {
                name: $label,
                event_code: $crate::field_category!(@code $($code)?),
                fields: FIELDS,
            };
        }
    };
}

/// Declares constructor functions for event types that have no fields.
#[macro_export]
macro_rules! event_types {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name() -> $crate::ast::Attr {
                $crate::ast::EventType::new(stringify!($name)).into()
            }
        )*
    };
}
