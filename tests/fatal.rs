use console_logger::{fatal, logger, Capture, Fatal, Logger, Settings};
use std::{fmt, io, panic::catch_unwind};

#[derive(Debug)]
struct Exhausted {
    pool: &'static str,
}

impl fmt::Display for Exhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pool {} exhausted", self.pool)
    }
}

impl std::error::Error for Exhausted {}

#[test]
fn fatal_carries_the_error() {
    let payload = catch_unwind(|| fatal(Exhausted { pool: "db" })).unwrap_err();
    let raised = Fatal::recover(payload).unwrap();

    assert_eq!(raised.to_string(), "pool db exhausted");
    let inner = raised.into_inner().downcast::<Exhausted>().unwrap();
    assert_eq!(inner.pool, "db");
}

#[test]
fn fatal_accepts_io_errors_and_strings() {
    let payload = catch_unwind(|| {
        fatal(io::Error::new(io::ErrorKind::NotFound, "no socket"))
    })
    .unwrap_err();
    let raised = Fatal::recover(payload).unwrap();
    let err = raised.error().downcast_ref::<io::Error>().unwrap();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);

    let payload = catch_unwind(|| fatal("shutting down")).unwrap_err();
    assert_eq!(Fatal::recover(payload).unwrap().to_string(), "shutting down");
}

#[test]
fn fatal_bypasses_the_logger() {
    let _ = catch_unwind(|| fatal("ignored flags"));
    assert!(!logger().is_loaded());
}

#[test]
fn fatal_ignores_disabled_levels() {
    let out = Capture::new();
    let logger = Logger::builder()
        .source(Settings::all(false))
        .output(out.clone())
        .build();

    let payload = catch_unwind(|| fatal("all levels off")).unwrap_err();
    let raised = Fatal::recover(payload).unwrap();

    assert_eq!(raised.to_string(), "all levels off");
    assert!(out.is_empty());
    assert!(!logger.is_loaded());
}
