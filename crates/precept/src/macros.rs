//! Macro generating the mechanical check-method forms
//!
//! Every check family is implemented exactly once as a rule method on the
//! shared engine; [`check_forms!`] stamps out the public surface around
//! it, for both engine types:
//!
//! - `foo(value…, name)` — field name + default template;
//! - `foo_msg(value…, message)` — caller-supplied lazy message;
//! - `foo_unnamed(value…)` — no field name, sentinel-prefixed template.
//!
//! On [`Validator`](crate::Validator) the generated methods return
//! `Result<&mut Self, E>` and hand back the raised failure immediately; on
//! [`BatchValidator`](crate::BatchValidator) they return `&mut Self` and
//! only ever accumulate.
//!
//! Generic parameters for a family are written in square brackets so the
//! token tree nests cleanly: `[T: Numeric] (value: &T, min: T, max: T)`.

macro_rules! check_forms {
    (
        $(#[$doc:meta])*
        $named:ident / $custom:ident / $unnamed:ident
        $([ $($g:tt)+ ])?
        ( $($arg:ident : $aty:ty),+ $(,)? ) => $rule:ident
    ) => {
        impl<E> $crate::Validator<E> {
            $(#[$doc])*
            pub fn $named $(< $($g)+ >)? (
                &mut self,
                $($arg: $aty,)+
                name: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> Result<&mut Self, E> {
                let raised = self
                    .engine
                    .$rule($($arg,)+ $crate::core::message::Message::named(name));
                match raised {
                    Some(failure) => Err(failure),
                    None => Ok(self),
                }
            }

            #[doc = concat!(
                "Same as [`", stringify!($named), "`](Self::", stringify!($named),
                "), with a caller-supplied lazy `message` in place of the default template."
            )]
            pub fn $custom < $($($g)+ ,)? F > (
                &mut self,
                $($arg: $aty,)+
                message: F,
            ) -> Result<&mut Self, E>
            where
                F: FnOnce() -> ::std::string::String,
            {
                let raised = self
                    .engine
                    .$rule($($arg,)+ $crate::core::message::Message::custom(message));
                match raised {
                    Some(failure) => Err(failure),
                    None => Ok(self),
                }
            }

            #[doc = concat!(
                "Same as [`", stringify!($named), "`](Self::", stringify!($named),
                "), without a field name; the default template is prefixed with the ",
                "`parameter` sentinel."
            )]
            pub fn $unnamed $(< $($g)+ >)? (
                &mut self,
                $($arg: $aty,)+
            ) -> Result<&mut Self, E> {
                let raised = self
                    .engine
                    .$rule($($arg,)+ $crate::core::message::Message::unnamed());
                match raised {
                    Some(failure) => Err(failure),
                    None => Ok(self),
                }
            }
        }

        impl<E> $crate::BatchValidator<E> {
            $(#[$doc])*
            pub fn $named $(< $($g)+ >)? (
                &mut self,
                $($arg: $aty,)+
                name: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> &mut Self {
                self.engine
                    .$rule($($arg,)+ $crate::core::message::Message::named(name));
                self
            }

            #[doc = concat!(
                "Same as [`", stringify!($named), "`](Self::", stringify!($named),
                "), with a caller-supplied lazy `message` in place of the default template."
            )]
            pub fn $custom < $($($g)+ ,)? F > (
                &mut self,
                $($arg: $aty,)+
                message: F,
            ) -> &mut Self
            where
                F: FnOnce() -> ::std::string::String,
            {
                self.engine
                    .$rule($($arg,)+ $crate::core::message::Message::custom(message));
                self
            }

            #[doc = concat!(
                "Same as [`", stringify!($named), "`](Self::", stringify!($named),
                "), without a field name; the default template is prefixed with the ",
                "`parameter` sentinel."
            )]
            pub fn $unnamed $(< $($g)+ >)? (
                &mut self,
                $($arg: $aty,)+
            ) -> &mut Self {
                self.engine
                    .$rule($($arg,)+ $crate::core::message::Message::unnamed());
                self
            }
        }
    };
}

pub(crate) use check_forms;
