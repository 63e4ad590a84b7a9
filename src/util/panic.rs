/// Asserts that evaluating the block panics. The panic is caught, so the test carries on (and
/// the panic message is still printed above the test output).
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block $(,)?) => {
        assert_panics!($run, "the block completed without panicking")
    };
    ($run:block, $($msg:tt)+) => {{
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run));
        assert!(outcome.is_err(), $($msg)+);
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
