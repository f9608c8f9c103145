//! Always-on assertion macros. Unlike `debug_assert!`, these fire in release builds too and
//! report the call site alongside the failing expression and its operands.

pub fn assert_ord<T: PartialOrd>(_: &T) {}
pub fn assert_partial_eq<T: PartialEq>(_: &T) {}
pub fn assert_same_type<T, U>(_: &T, _: &U) {}
pub fn assert_type<T>(_: &T) {}

#[macro_export]
macro_rules! current_location {
    () => {
        format!("{}:{}", file!(), line!())
    };
}

#[macro_export]
macro_rules! check {
    ($lhs:expr) => {{
        $crate::util::assert::assert_type::<bool>(&$lhs);
        if !$lhs {
            panic!(
                "check failed: {}: {}",
                $crate::current_location!(),
                stringify!($lhs),
            );
        }
    }};
}

#[macro_export]
macro_rules! check_false {
    ($lhs:expr) => {{
        $crate::util::assert::assert_type::<bool>(&$lhs);
        if $lhs {
            panic!(
                "check failed: {}: !{}",
                $crate::current_location!(),
                stringify!($lhs),
            );
        }
    }};
}

#[macro_export]
macro_rules! check_ge {
    ($lhs:expr, $rhs:expr) => {{
        $crate::util::assert::assert_same_type(&$lhs, &$rhs);
        $crate::util::assert::assert_ord(&$lhs);
        if !($lhs >= $rhs) {
            panic!(
                "check failed: {}: {} >= {}: {:?} vs. {:?}",
                $crate::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                $lhs,
                $rhs
            );
        }
    }};
}

#[macro_export]
macro_rules! check_eq {
    ($lhs:expr, $rhs:expr) => {{
        $crate::util::assert::assert_same_type(&$lhs, &$rhs);
        $crate::util::assert::assert_partial_eq(&$lhs);
        if !($lhs == $rhs) {
            panic!(
                "check failed: {}: {} == {}: {:?} vs. {:?}",
                $crate::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                $lhs,
                $rhs
            );
        }
    }};
}

/// Like [`check_eq!`], but compares with `almost_eq()`, so the operands must be vectors.
#[macro_export]
macro_rules! check_almost_eq {
    ($lhs:expr, $rhs:expr) => {{
        $crate::util::assert::assert_same_type(&$lhs, &$rhs);
        if !($lhs.almost_eq($rhs)) {
            panic!(
                "check failed: {}: {} ~= {}: {:?} vs. {:?}",
                $crate::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                $lhs,
                $rhs
            );
        }
    }};
}
