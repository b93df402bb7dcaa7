/// Asserts that a block panics, optionally checking that the panic message contains `$needle`.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), $msg);
        println!("^ panic caught");
    };
    ($run:block, contains $needle:expr) => {
        match std::panic::catch_unwind(|| $run) {
            Ok(_) => panic!("assertion failed to panic"),
            Err(payload) => {
                let message = $crate::util::panic::payload_message(payload.as_ref());
                assert!(
                    message.contains($needle),
                    "panic message {message:?} should contain {:?}",
                    $needle
                );
                println!("^ panic caught");
            },
        }
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;

/// Extracts the message from a panic payload, which is either a `&str` or a `String` for panics
/// raised through the formatting macros.
#[allow(unused)]
pub(crate) fn payload_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::new()
    }
}
