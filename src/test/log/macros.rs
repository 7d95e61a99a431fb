use crate::log::Logger;
use std::sync::atomic::{AtomicUsize, Ordering};

static FORMAT_SIDE_EFFECT: AtomicUsize = AtomicUsize::new(0);

fn side_effect_value() -> usize {
    FORMAT_SIDE_EFFECT.fetch_add(1, Ordering::Relaxed);
    42
}

#[test]
fn log_debug_does_not_evaluate_format_args_when_disabled() {
    // Nothing in the test binary enables debug mode, so the flag stays off.
    let logger = Logger::new();
    assert!(!logger.is_debug_enabled());
    FORMAT_SIDE_EFFECT.store(0, Ordering::Relaxed);

    crate::log_debug!("debug side effect {}", side_effect_value());
    assert_eq!(FORMAT_SIDE_EFFECT.load(Ordering::Relaxed), 0);
}

#[test]
fn log_warn_does_not_evaluate_format_args_when_disabled() {
    let logger = Logger::new();
    assert!(!logger.is_debug_enabled());
    FORMAT_SIDE_EFFECT.store(0, Ordering::Relaxed);

    crate::log_warn!("warn side effect {}", side_effect_value());
    assert_eq!(FORMAT_SIDE_EFFECT.load(Ordering::Relaxed), 0);
}
