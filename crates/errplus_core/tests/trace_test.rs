//! Tests for caller trace capture and trimming.

use errplus_core::{CallerTrace, capture_trace, function_path};

#[test]
fn test_capture_records_call_line() {
    let line = line!() + 1;
    let trace = capture_trace!();

    assert_eq!(*trace.line(), line);
}

#[test]
fn test_capture_records_file_basename() {
    let trace = capture_trace!();

    assert_eq!(trace.file(), "trace_test.rs");
}

#[test]
fn test_capture_records_enclosing_function() {
    let trace = capture_trace!();

    assert!(
        trace.function().ends_with("test_capture_records_enclosing_function"),
        "got {}",
        trace.function()
    );
    assert!(!trace.function().contains('/'));
}

fn nested_helper() -> CallerTrace {
    capture_trace!()
}

#[test]
fn test_capture_records_immediate_caller_only() {
    let trace = nested_helper();

    assert_eq!(trace.function(), "trace_test::nested_helper");
}

#[test]
fn test_function_path_is_fully_qualified() {
    assert_eq!(function_path!(), "trace_test::test_function_path_is_fully_qualified");
}

#[test]
fn test_from_parts_trims_unix_paths() {
    let trace = CallerTrace::from_parts(
        3,
        "/home/ci/build/src/handlers/order.rs",
        "shop::handlers::order::create",
    );

    assert_eq!(trace.file(), "order.rs");
    assert_eq!(trace.function(), "order::create");
}

#[test]
fn test_from_parts_trims_windows_paths() {
    let trace = CallerTrace::from_parts(3, r"C:\agent\_work\src\order.rs", "create");

    assert_eq!(trace.file(), "order.rs");
}

#[test]
fn test_from_parts_keeps_unmatched_input() {
    let trace = CallerTrace::from_parts(1, "order.rs", "create");

    assert_eq!(trace.file(), "order.rs");
    assert_eq!(trace.function(), "create");

    let odd = CallerTrace::from_parts(1, "/tmp/", "");
    assert_eq!(odd.file(), "/tmp/");
    assert_eq!(odd.function(), "");
}

#[test]
fn test_from_parts_falls_back_to_last_component() {
    let dotted = CallerTrace::from_parts(1, "/srv/app/src/foo.test.rs", "f");
    assert_eq!(dotted.file(), "foo.test.rs");

    let spaced = CallerTrace::from_parts(1, r"C:\My Projects\app\main file.rs", "f");
    assert_eq!(spaced.file(), "main file.rs");

    let bare = CallerTrace::from_parts(1, "/tmp/no-extension", "f");
    assert_eq!(bare.file(), "no-extension");
}

trait Job {
    fn go(&self) -> CallerTrace;
}

struct Worker;

impl Worker {
    fn run(&self) -> CallerTrace {
        capture_trace!()
    }
}

impl Job for Worker {
    fn go(&self) -> CallerTrace {
        capture_trace!()
    }
}

#[test]
fn test_capture_in_inherent_method() {
    assert_eq!(Worker.run().function(), "Worker::run");
}

#[test]
fn test_capture_in_trait_impl_method() {
    assert_eq!(Worker.go().function(), "Worker::go");
}

#[test]
fn test_from_parts_normalizes_qualified_segments() {
    let as_trait = CallerTrace::from_parts(1, "a.rs", "app::<app::jobs::Worker as app::Job>::go");
    assert_eq!(as_trait.function(), "Worker::go");

    let generic = CallerTrace::from_parts(1, "a.rs", "app::<Vec<u8> as app::Sink>::push");
    assert_eq!(generic.function(), "Vec::push");

    let inherent = CallerTrace::from_parts(1, "a.rs", "app::<impl app::jobs::Worker>::run");
    assert_eq!(inherent.function(), "Worker::run");
}

#[test]
fn test_from_parts_keeps_closure_segment() {
    let trace = CallerTrace::from_parts(1, "src/main.rs", "app::main::{{closure}}");

    assert_eq!(trace.function(), "main::{{closure}}");
}

#[test]
fn test_located_uses_caller_location() {
    let line = line!() + 1;
    let trace = CallerTrace::located("app::jobs::retry");

    assert_eq!(*trace.line(), line);
    assert_eq!(trace.file(), "trace_test.rs");
    assert_eq!(trace.function(), "jobs::retry");
}

#[test]
fn test_trimming_is_deterministic() {
    let a = CallerTrace::from_parts(5, "/a/b/c.rs", "x::y::z");
    let b = CallerTrace::from_parts(5, "/a/b/c.rs", "x::y::z");

    assert_eq!(a, b);
}

#[test]
fn test_display() {
    let trace = CallerTrace::from_parts(12, "src/lib.rs", "core::run");

    assert_eq!(trace.to_string(), "lib.rs:12 in core::run");
}

#[test]
fn test_default_is_empty() {
    assert!(CallerTrace::default().is_empty());
    assert!(!CallerTrace::from_parts(1, "", "").is_empty());
}
