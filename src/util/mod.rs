pub mod panic;
#[cfg(any(test, feature = "testing"))]
pub mod result;
