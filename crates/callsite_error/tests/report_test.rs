//! Tests for structured logging of annotated errors.

use callsite_error::{Annotator, CallSite, FixedLocation, report, report_opt};
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

fn capture(f: impl FnOnce()) -> String {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    buffer.contents()
}

#[test]
fn test_report_logs_location_fields() {
    let annotator = Annotator::new(FixedLocation(CallSite::new("src/queue.rs", 19)));
    let err = annotator.inject(io::Error::other("queue full"));

    let output = capture(|| report(&err));

    assert!(output.contains("ERROR"));
    assert!(output.contains("operation failed"));
    assert!(output.contains("file=\"queue.rs\""));
    assert!(output.contains("line=19"));
    assert!(output.contains("inner=queue full"));
}

#[test]
fn test_report_unannotated_error_has_empty_location() {
    let err = io::Error::other("bare");

    let output = capture(|| report(&err));

    assert!(output.contains("file=\"\""));
    assert!(output.contains("line=0"));
    assert!(output.contains("error=bare"));
}

#[test]
fn test_report_opt_none_logs_nothing() {
    let output = capture(|| report_opt(None));
    assert!(output.is_empty());
}
