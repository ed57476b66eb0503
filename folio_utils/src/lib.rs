pub trait Apply {
    /// Applies the function `f` only if `value` is `Some(...)` and provides the
    /// contained value to `f`.
    ///
    /// #### Example
    /// ```rust
    /// # use folio_utils::Apply;
    /// fn greet(greeting: String, name: Option<&str>) -> String {
    ///     greeting.apply_map(name, |slf, name| format!("{slf}, {name}"))
    /// }
    /// assert_eq!(greet("Hello".into(), None), "Hello");
    /// assert_eq!(greet("Hello".into(), Some("Jane")), "Hello, Jane");
    /// ```
    fn apply_map<U>(self, value: Option<U>, f: impl FnOnce(Self, U) -> Self) -> Self
    where
        Self: Sized,
    {
        if let Some(value) = value {
            f(self, value)
        } else {
            self
        }
    }
}

impl<T> Apply for T {}

#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match ($expr) {
            $pat => (),
            val => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $pred:expr) => {{
        let val = $expr;
        match (&val) {
            $pat if $pred => (),
            #[allow(unused_variables, reason = "bindings are only used by the predicate")]
            $pat => ::core::panic!(
                "Assertion failed: Value {val:?} does not match predicate {}",
                ::core::stringify!($pred)
            ),
            _ => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_map() {
        assert_eq!(1_i32.apply_map(None::<i32>, |a, b| a + b), 1);
        assert_eq!(1_i32.apply_map(Some(2), |a, b| a + b), 3);
    }

    #[test]
    fn assert_matches_with_predicate() {
        assert_matches!(Some(3), Some(x) if *x > 2);
    }

    #[test]
    #[should_panic(expected = "did not match pattern")]
    fn assert_matches_panics_on_mismatch() {
        assert_matches!(None::<u8>, Some(_));
    }
}
