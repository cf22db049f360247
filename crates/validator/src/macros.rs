//! Macros for declaring validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`]: struct + fallible constructor + `Validate` impl + factory fn

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Declares a constraint validator whose constructor checks its parameters.
///
/// Generates the struct (always `#[derive(Debug, Clone)]`, extra derives via
/// `#[derive(...)]`), a `new` constructor returning `Result<Self, E>`, the
/// [`Validate`](crate::foundation::Validate) implementation and a factory
/// function with the same signature as `new`.
///
/// ```
/// use gauge_validator::validator;
/// use gauge_validator::foundation::{InitError, InvalidArgument, Validate, ValidationError};
///
/// validator! {
///     /// Text of at most `max` chars.
///     pub MaxChars { max: usize } for str;
///     rule(self, input) { input.chars().count() <= self.max }
///     error(self, input) { ValidationError::new("max_chars", format!("at most {}", self.max)) }
///     new(max: i64) -> InitError {
///         if max < 0 {
///             return Err(InitError::new(
///                 "max_chars",
///                 InvalidArgument::NegativeBound { name: "max", value: max },
///             ));
///         }
///         Ok(Self { max: max as usize })
///     }
///     fn max_chars(max: i64) -> InitError;
/// }
///
/// assert!(max_chars(-1).is_err());
/// assert!(max_chars(1)?.validate("あ").is_ok());
/// # Ok::<(), InitError>(())
/// ```
#[macro_export]
macro_rules! validator {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };
}
