use super::LogFormatter;
use crate::log::LogLevel;

#[test]
fn formats_level_and_message_without_timestamp() {
    let formatter = LogFormatter::new(false, true);

    assert_eq!(formatter.format(Some(LogLevel::Warning), "low disk"), "[WARN] low disk");
    assert_eq!(formatter.format(Some(LogLevel::Debug), "probe"), "[DEBUG] probe");
    assert_eq!(formatter.format(None, "bare"), "bare");
}

#[test]
fn formats_message_only_when_level_is_off() {
    let formatter = LogFormatter::new(false, false);
    assert_eq!(formatter.format(Some(LogLevel::Error), "oops"), "oops");
}

#[test]
fn prefixes_a_timestamp_by_default() {
    let formatted = LogFormatter::default().format(Some(LogLevel::Info), "ready");

    assert!(formatted.ends_with("[INFO] ready"));
    assert!(formatted.len() > "[INFO] ready".len(), "the default formatter leads with a timestamp");
}
