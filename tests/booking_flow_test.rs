use async_trait::async_trait;
use chrono::NaiveDate;
use doorstep_booking::{
    BookingDraft, BookingEngine, BookingError, Catalog, Confirmation, MissingField, Result,
    StubGateway, SubmissionGateway,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

struct CountingGateway {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl SubmissionGateway for CountingGateway {
    async fn submit(&self, _draft: &BookingDraft) -> Result<Confirmation> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Confirmation {
            booking_id: "BK-TESTTEST".to_string(),
        })
    }
}

struct DecliningGateway;

#[async_trait]
impl SubmissionGateway for DecliningGateway {
    async fn submit(&self, _draft: &BookingDraft) -> Result<Confirmation> {
        Err(BookingError::GatewayFailure {
            reason: "payment declined".to_string(),
        })
    }
}

fn fill_required_fields<G: SubmissionGateway>(engine: &mut BookingEngine<G>) {
    engine.set_date(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap());
    engine.set_time("5:30 م");
    engine.set_address("الرياض، حي النرجس، شارع الياسمين");
    engine.set_phone("0501234567");
}

#[test]
fn scenario_a_cleaning_defaults_to_first_tier() {
    let catalog = Catalog::builtin();
    let mut draft = BookingDraft::new(&catalog).unwrap();
    draft.select_category(&catalog, "cleaning").unwrap();
    assert_eq!(draft.tier_label(), "غرفة واحدة");
    assert_eq!(draft.current_price(&catalog).unwrap(), 99);
}

#[test]
fn scenario_b_unknown_plumber_tier_falls_back() {
    let catalog = Catalog::builtin();
    let mut draft = BookingDraft::new(&catalog).unwrap();
    draft.select_category(&catalog, "plumber").unwrap();
    draft.select_tier("باقة غير موجودة");

    let resolved = catalog
        .resolve_tier(draft.category_id(), draft.tier_label())
        .unwrap();
    assert_eq!(resolved.label, "كشف تسريب");
    assert_eq!(resolved.price, 99);
    assert_eq!(draft.current_price(&catalog).unwrap(), 99);
}

#[tokio::test]
async fn scenario_c_complete_draft_confirms_after_delay() {
    let delay = Duration::from_millis(50);
    let mut engine =
        BookingEngine::new(Catalog::builtin(), StubGateway::new(delay)).unwrap();
    fill_required_fields(&mut engine);
    assert!(engine.draft().validate_for_submission().is_empty());

    let started = Instant::now();
    let confirmation = engine.submit().await.unwrap();
    assert!(started.elapsed() >= delay);

    // BK- followed by 8 alphanumeric characters
    assert_eq!(confirmation.booking_id.len(), 11);
    assert!(confirmation.booking_id.starts_with("BK-"));
    assert!(confirmation.booking_id[3..]
        .chars()
        .all(|c| c.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn scenario_d_missing_phone_never_reaches_gateway() {
    let calls = Arc::new(AtomicUsize::new(0));
    let gateway = CountingGateway {
        calls: calls.clone(),
    };
    let mut engine = BookingEngine::new(Catalog::builtin(), gateway).unwrap();
    engine.set_date(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap());
    engine.set_time("5:30 م");
    engine.set_address("الرياض، حي النرجس");

    assert_eq!(
        engine.draft().validate_for_submission(),
        vec![MissingField::Phone]
    );

    let err = engine.submit().await.unwrap_err();
    match err {
        BookingError::IncompleteDraft { missing } => {
            assert_eq!(missing, vec![MissingField::Phone]);
        }
        other => panic!("expected IncompleteDraft, got {:?}", other),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn confirmation_ids_are_distinguishable_across_calls() {
    let mut engine = BookingEngine::new(
        Catalog::builtin(),
        StubGateway::new(Duration::from_millis(1)),
    )
    .unwrap();

    fill_required_fields(&mut engine);
    let first = engine.submit().await.unwrap();

    // successful submission resets the draft, so refill before resubmitting
    assert_eq!(
        engine.draft().validate_for_submission(),
        vec![
            MissingField::Date,
            MissingField::Time,
            MissingField::Address,
            MissingField::Phone,
        ]
    );
    fill_required_fields(&mut engine);
    let second = engine.submit().await.unwrap();

    assert_ne!(first.booking_id, second.booking_id);
}

#[tokio::test]
async fn gateway_failure_preserves_draft_for_retry() {
    let mut engine = BookingEngine::new(Catalog::builtin(), DecliningGateway).unwrap();
    engine.select_category("electrician").unwrap();
    engine.select_tier("باقة تمديدات");
    fill_required_fields(&mut engine);
    let before = engine.draft().clone();

    let err = engine.submit().await.unwrap_err();
    assert!(matches!(err, BookingError::GatewayFailure { .. }));
    assert_eq!(engine.draft(), &before);
    assert!(!engine.in_flight());
    assert!(engine.draft().validate_for_submission().is_empty());
}

#[tokio::test]
async fn engine_selection_drives_price() {
    let mut engine = BookingEngine::new(Catalog::builtin(), StubGateway::default()).unwrap();
    assert_eq!(engine.current_price().unwrap(), 69);

    engine.select_category("carwash").unwrap();
    assert_eq!(engine.draft().tier_label(), "غسيل خارجي");
    assert_eq!(engine.current_price().unwrap(), 59);

    engine.select_tier("خارجي + داخلي");
    assert_eq!(engine.current_price().unwrap(), 89);

    let err = engine.select_category("landscaping").unwrap_err();
    assert!(matches!(err, BookingError::InvalidCategory { .. }));
    assert_eq!(engine.draft().category_id(), "carwash");
}
