use std::marker::PhantomData;

use crate::api::capture::*;
use crate::prelude::Collectable;

/// A parameter that takes a single value, overwriting the field each time it is captured.
pub struct Scalar<S, T> {
    access: fn(&mut S) -> &mut T,
}

impl<S, T> Scalar<S, T> {
    /// Create a scalar parameter.
    ///
    /// ### Example
    /// ```
    /// # use cmdreader_builder as cmdreader;
    /// use cmdreader::Scalar;
    ///
    /// #[derive(Default)]
    /// struct Args {
    ///     level: i32,
    /// }
    ///
    /// Scalar::new(|args: &mut Args| &mut args.level);
    /// ```
    pub fn new(access: fn(&mut S) -> &mut T) -> Self {
        Self { access }
    }
}

impl<S, T> GenericCapturable<S, T> for Scalar<S, T>
where
    T: OptionValue,
{
    fn capture(&self, target: &mut S, token: Option<&str>) -> Result<(), ValueError> {
        let value = T::coerce(token)?;
        *(self.access)(target) = value;
        Ok(())
    }
}

/// A parameter that takes no values: a presence flag which sets the field to `true`.
///
/// An explicit boolean may still be supplied in the long form (ex: `--verbose=off`).
pub struct Switch<S> {
    access: fn(&mut S) -> &mut bool,
}

impl<S> Switch<S> {
    /// Create a switch parameter.
    pub fn new(access: fn(&mut S) -> &mut bool) -> Self {
        Self { access }
    }
}

impl<S> GenericCapturable<S, bool> for Switch<S> {
    fn capture(&self, target: &mut S, token: Option<&str>) -> Result<(), ValueError> {
        let value = bool::coerce(token)?;
        *(self.access)(target) = value;
        Ok(())
    }

    fn is_parameterized(&self) -> bool {
        false
    }
}

/// A parameter that maps down to [`Option`], taking a single value.
pub struct Optional<S, T> {
    access: fn(&mut S) -> &mut Option<T>,
}

impl<S, T> Optional<S, T> {
    /// Create an optional parameter.
    pub fn new(access: fn(&mut S) -> &mut Option<T>) -> Self {
        Self { access }
    }
}

impl<S, T> GenericCapturable<S, T> for Optional<S, T>
where
    T: OptionValue,
{
    fn capture(&self, target: &mut S, token: Option<&str>) -> Result<(), ValueError> {
        let value = T::coerce(token)?;
        *(self.access)(target) = Some(value);
        Ok(())
    }
}

/// A parameter that takes multiple values, each appended to the [`Collectable`] field.
///
/// Use an `Option<C>` field to have the container constructed on the first captured value only.
pub struct Collection<S, C, T> {
    access: fn(&mut S) -> &mut C,
    _phantom: PhantomData<fn() -> T>,
}

impl<S, C, T> Collection<S, C, T>
where
    C: Collectable<T>,
{
    /// Create a collection parameter.
    ///
    /// ### Example
    /// ```
    /// # use cmdreader_builder as cmdreader;
    /// use cmdreader::Collection;
    ///
    /// #[derive(Default)]
    /// struct Args {
    ///     files: Vec<String>,
    /// }
    ///
    /// Collection::new(|args: &mut Args| &mut args.files);
    /// ```
    pub fn new(access: fn(&mut S) -> &mut C) -> Self {
        Self {
            access,
            _phantom: PhantomData,
        }
    }
}

impl<S, C, T> GenericCapturable<S, T> for Collection<S, C, T>
where
    T: OptionValue,
    C: Collectable<T>,
{
    fn capture(&self, target: &mut S, token: Option<&str>) -> Result<(), ValueError> {
        let value = T::coerce(token)?;
        (self.access)(target).add(value);
        Ok(())
    }

    fn is_collection(&self) -> bool {
        true
    }
}
