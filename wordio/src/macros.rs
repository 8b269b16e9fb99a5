/// Asserts a condition at compile time.
///
/// Expands to an anonymous constant, so a false condition fails the build instead of panicking
/// at run time. An optional message is shown in the compiler error.
///
/// # Example
///
/// ```
/// use wordio::const_assert;
///
/// const_assert!(std::mem::size_of::<u64>() == 8);
/// const_assert!(u32::BITS == 32, "words must be 32 bits wide");
/// ```
///
/// ```compile_fail
/// wordio::const_assert!(std::mem::size_of::<u32>() == 8);
/// ```
#[macro_export]
macro_rules! const_assert {
    ($cond:expr $(,)?) => {
        const _: () = assert!($cond);
    };
    ($cond:expr, $msg:literal $(,)?) => {
        const _: () = assert!($cond, $msg);
    };
}
