//! E2E: message storage under both strictness levels.

use crate::{failure, verify, BOTH};
use canon_error_conformance::{
    MessageErasing, MessageReplacing, PuttingWordsInMouth, Wrapping, WRAPPING_PREFIX,
};
use canon_error_verifier::{FailureKind, Strictness, Violation, SENTINEL_MESSAGE};
use std::io;
use std::sync::{Arc, Mutex};

#[test]
fn prefixed_message_passes_weak() {
    assert!(verify::<Wrapping>(Strictness::Weak).is_ok());
}

#[test]
fn prefixed_message_fails_strict() {
    let failure = failure::<Wrapping>(Strictness::Strict);
    assert_eq!(failure.label(), "(String message)");
    assert_eq!(
        failure.as_violation(),
        Some(&Violation::MessageChanged {
            expected: SENTINEL_MESSAGE.to_string(),
            observed: format!("{}{}", WRAPPING_PREFIX, SENTINEL_MESSAGE),
        })
    );
}

#[test]
fn replaced_message_fails_both_levels() {
    let strict = failure::<MessageReplacing>(Strictness::Strict);
    assert!(matches!(
        strict.as_violation(),
        Some(Violation::MessageChanged { observed, .. }) if observed == "not what you said"
    ));

    let weak = failure::<MessageReplacing>(Strictness::Weak);
    assert_eq!(weak.label(), "(String message)");
    assert!(matches!(
        weak.as_violation(),
        Some(Violation::MessageMangled { .. })
    ));
    assert!(weak.to_string().contains("ignored or mangled message"));
}

#[test]
fn erased_message_fails_both_levels() {
    for strictness in BOTH {
        let failure = failure::<MessageErasing>(strictness);
        assert_eq!(failure.kind(), FailureKind::InvariantViolation);
        assert_eq!(failure.label(), "(String message)");
        assert!(matches!(
            failure.as_violation(),
            Some(Violation::MessageDropped { .. })
        ));
    }
}

#[test]
fn default_message_passes_weak_fails_strict() {
    assert!(verify::<PuttingWordsInMouth>(Strictness::Weak).is_ok());

    let failure = failure::<PuttingWordsInMouth>(Strictness::Strict);
    assert_eq!(failure.label(), "(default; no-arg)");
    assert_eq!(
        failure.as_violation(),
        Some(&Violation::UnexpectedMessage {
            observed: "haha".to_string(),
        })
    );
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn tolerated_default_message_is_logged() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        assert!(verify::<PuttingWordsInMouth>(Strictness::Weak).is_ok());
    });

    let output = logs.contents();
    assert!(output.contains("WARN"));
    assert!(output.contains("non-null message from a message-less constructor"));
    assert!(output.contains("observed=haha"));
}
