use std::error::Error;

/// Turns a typed error into a panic carrying its message, for methods whose contract has been
/// broken by the caller.
pub(crate) trait ResultExtension<T, E: Error> {
    /// Returns the contained value, or panics with the [`Display`](std::fmt::Display) message of
    /// the error.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

/// The [`Option`] counterpart of [`ResultExtension`], for methods where absence is a broken
/// contract.
pub(crate) trait OptionExtension<T> {
    /// Returns the contained value, or panics with the message of `error`.
    ///
    /// # Panics
    /// Panics if the [`Option`] is [`None`].
    fn or_throw<E: Error>(self, error: E) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    #[track_caller]
    fn or_throw<E: Error>(self, error: E) -> T {
        self.ok_or(error).throw()
    }
}
