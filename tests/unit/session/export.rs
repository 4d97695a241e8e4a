use super::*;
use crate::animation::timing::AnimationProfile;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::FrameIndex;
use crate::params::CalloutParams;

/// Sink that fails on a chosen frame.
#[derive(Default)]
struct FlakySink {
    fail_at: u64,
    pushed: u64,
    aborted: bool,
}

impl FrameSink for FlakySink {
    fn begin(&mut self, _cfg: SinkConfig) -> ReelResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, _frame: &FrameRGBA) -> ReelResult<()> {
        if idx.0 == self.fail_at {
            return Err(ReelError::encode("disk full"));
        }
        self.pushed += 1;
        Ok(())
    }

    fn end(&mut self) -> ReelResult<()> {
        Ok(())
    }

    fn abort(&mut self) {
        self.aborted = true;
    }
}

fn short_callout() -> TemplateParams {
    TemplateParams::Callout(CalloutParams {
        animation: AnimationProfile::new(0.1, 0.8, 0.1).unwrap(),
        ..CalloutParams::default()
    })
}

#[test]
fn elision_reuses_identical_frames_without_changing_output() {
    let params = short_callout();
    let assets = AssetStore::empty();

    let mut elided = InMemorySink::new();
    let mut spare = InMemorySink::new();
    let outcome = export(&params, &assets, &mut elided, &mut spare, &ExportOpts::default()).unwrap();
    assert!(!outcome.is_degraded());
    let stats = outcome.stats();
    assert_eq!(stats.frames_total, 30);
    assert_eq!(stats.frames_rendered + stats.frames_elided, 30);
    assert!(stats.frames_elided >= 20, "{stats:?}");
    assert!(spare.frames().is_empty());

    let mut full = InMemorySink::new();
    let opts = ExportOpts {
        static_frame_elision: false,
        ..ExportOpts::default()
    };
    let outcome = export(&params, &assets, &mut full, &mut spare, &opts).unwrap();
    assert_eq!(outcome.stats().frames_elided, 0);
    assert_eq!(elided.frames(), full.frames());
    assert!(elided.is_finished());
}

#[test]
fn failing_primary_falls_back() {
    let params = short_callout();
    let mut primary = FlakySink {
        fail_at: 5,
        ..FlakySink::default()
    };
    let mut fallback = InMemorySink::new();
    let outcome = export(
        &params,
        &AssetStore::empty(),
        &mut primary,
        &mut fallback,
        &ExportOpts::default(),
    )
    .unwrap();

    match &outcome {
        ExportOutcome::Fallback { reason, stats, .. } => {
            assert!(reason.contains("disk full"));
            assert_eq!(stats.frames_total, 30);
        }
        other => panic!("expected fallback, got {other:?}"),
    }
    assert!(primary.aborted);
    assert_eq!(primary.pushed, 5);
    assert_eq!(fallback.frames().len(), 30);
}

#[test]
fn failing_fallback_is_fatal() {
    let mut primary = FlakySink::default();
    let mut fallback = FlakySink {
        fail_at: 2,
        ..FlakySink::default()
    };
    let err = export(
        &short_callout(),
        &AssetStore::empty(),
        &mut primary,
        &mut fallback,
        &ExportOpts::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ReelError::Encode(_)));
    assert!(primary.aborted && fallback.aborted);
}

#[test]
fn cancellation_aborts_the_sink() {
    let opts = ExportOpts::default();
    opts.cancel.cancel();
    let mut primary = InMemorySink::new();
    let mut fallback = InMemorySink::new();
    let err = export(
        &short_callout(),
        &AssetStore::empty(),
        &mut primary,
        &mut fallback,
        &opts,
    )
    .unwrap_err();
    assert!(err.is_cancelled());
    assert!(primary.is_aborted());
    assert!(fallback.config().is_none());
}

#[test]
fn file_names_carry_prefix_and_millis() {
    assert_eq!(
        output_file_name("bumper-out", 1_700_000_000_123, "mp4"),
        "bumper-out-1700000000123.mp4"
    );
    let token = CancelToken::new();
    let clone = token.clone();
    clone.cancel();
    assert!(token.is_cancelled());
}
