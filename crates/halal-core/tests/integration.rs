//! Integration tests for the product assessment pipeline and assistant.
//!
//! Uses mock collaborators in place of the product-data service, the
//! barcode decoder and the logo model, so these tests run offline.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use halal_core::analysis::outcome::VerdictReason;
use halal_core::analysis::{analyze, Verdict};
use halal_core::assistant::{route, Intent, ResponseTag};
use halal_core::error::{ErrorCategory, HalalError};
use halal_core::model::{ProductRecord, Status};
use halal_core::reference::builtin::load_builtin;
use halal_core::reference::schema::RawRecord;
use halal_core::reference::store::ReferenceStore;
use halal_core::resolver::{check_terms, resolve};
use halal_core::sources::barcode::Barcode;
use halal_core::sources::logo::recognize_logo;
use halal_core::sources::{BarcodeDecoder, LogoDetector, LogoLabel, ProductSource};
use halal_core::{assess_barcode, scan_barcode_image, ProductAssessment};
use rust_decimal_macros::dec;

struct MockProductSource {
    result: Result<ProductRecord, u16>,
    calls: Mutex<Vec<String>>,
}

impl MockProductSource {
    fn returning(product: ProductRecord) -> Self {
        Self {
            result: Ok(product),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing(status: u16) -> Self {
        Self {
            result: Err(status),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProductSource for MockProductSource {
    fn fetch(&self, barcode: &Barcode) -> Result<ProductRecord, HalalError> {
        self.calls.lock().unwrap().push(barcode.to_string());
        self.result
            .clone()
            .map_err(|status| HalalError::ProductLookupStatus {
                barcode: barcode.to_string(),
                status,
            })
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

struct MockDecoder(Option<String>);

impl BarcodeDecoder for MockDecoder {
    fn decode(&self, _image: &[u8]) -> Result<Option<String>, HalalError> {
        Ok(self.0.clone())
    }
}

struct UnreadableImageDecoder;

impl BarcodeDecoder for UnreadableImageDecoder {
    fn decode(&self, _image: &[u8]) -> Result<Option<String>, HalalError> {
        Err(HalalError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "truncated image",
        )))
    }
}

struct MockDetector {
    calls: AtomicUsize,
}

impl LogoDetector for MockDetector {
    fn detect(&self, _image: &[u8]) -> Result<(LogoLabel, f32), HalalError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(HalalError::LogoInference("weights missing".into()))
    }
}

fn product(ingredients: Option<&str>) -> ProductRecord {
    ProductRecord {
        found: true,
        name: "Test Snack".into(),
        brand: "Acme".into(),
        ingredients_text: ingredients.map(str::to_string),
        labels_tags: vec![],
        alcohol_value: None,
        alcohol: None,
    }
}

fn store() -> ReferenceStore {
    load_builtin().unwrap()
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------
#[test]
fn resolve_ignores_case_and_whitespace_for_both_key_families() {
    let store = store();
    for (a, b) in [("E120", "  e120 "), ("Cochineal", "COCHINEAL\t")] {
        assert_eq!(resolve(a, &store), resolve(b, &store));
    }
    assert_eq!(resolve("E120", &store), resolve("cochineal", &store));
}

#[test]
fn absent_terms_never_reported_haram_or_musbooh() {
    let store = store();
    let r = resolve("Quinoa Puffs", &store);
    assert_eq!(r.status, Status::Unknown);
    let a = analyze("Quinoa Puffs, Rice Crisps", &store);
    assert!(a.is_clean());
}

#[test]
fn check_terms_reports_each_term_in_order() {
    let lookups = check_terms("E100, E120,unknownthing", &store());
    let statuses: Vec<Status> = lookups.iter().map(|l| l.result.status).collect();
    assert_eq!(statuses, vec![Status::Halal, Status::Haram, Status::Unknown]);
}

// ---------------------------------------------------------------------------
// Barcode pipeline
// ---------------------------------------------------------------------------
#[test]
fn invalid_barcodes_rejected_before_lookup() {
    let source = MockProductSource::returning(product(Some("Water")));
    for raw in ["1234567", "abcdefgh"] {
        let err = assess_barcode(raw, &source, &store()).unwrap_err();
        assert!(matches!(err, HalalError::InvalidBarcode(_)));
        assert_eq!(err.category(), ErrorCategory::Info);
    }
    assert!(source.calls().is_empty());
}

#[test]
fn eight_digit_barcode_is_looked_up() {
    let source = MockProductSource::returning(product(Some("Water, Salt")));
    let result = assess_barcode("12345678", &source, &store()).unwrap();
    assert_eq!(source.calls(), vec!["12345678"]);
    assert_eq!(result.verdict(), Some(Verdict::Halal));
}

#[test]
fn unresolved_pork_gelatin_is_doubtful() {
    let source = MockProductSource::returning(product(Some(
        "Water, Pork Gelatin. Salt, Emulsifier (E471)",
    )));
    let result = assess_barcode("5449000000996", &source, &store()).unwrap();
    match result {
        ProductAssessment::Assessed {
            analysis, verdict, ..
        } => {
            // "Pork Gelatin" is not a store key; the keyword rule makes it doubtful.
            assert!(analysis.haram.is_empty());
            let terms: Vec<&str> = analysis.musbooh.iter().map(|f| f.term.as_str()).collect();
            assert_eq!(terms, vec!["PORK GELATIN", "EMULSIFIER", "E471"]);
            assert_eq!(
                verdict,
                Verdict::Musbooh(VerdictReason::DoubtfulIngredients)
            );
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn store_haram_entry_gives_haram_verdict() {
    let source = MockProductSource::returning(product(Some("Sugar, Gelatine (E441), Lard")));
    let result = assess_barcode("12345678", &source, &store()).unwrap();
    assert_eq!(
        result.verdict(),
        Some(Verdict::Haram(VerdictReason::HaramIngredients))
    );
}

#[test]
fn certification_overrides_haram_ingredients() {
    let mut p = product(Some("Gelatine, Lard"));
    p.labels_tags = vec!["en:halal".into()];
    p.alcohol_value = Some(dec!(12));
    let source = MockProductSource::returning(p);
    let result = assess_barcode("12345678", &source, &store()).unwrap();
    assert_eq!(result.verdict(), Some(Verdict::Halal));
}

#[test]
fn alcohol_content_gives_haram_verdict() {
    let mut p = product(Some("Water, Sugar"));
    p.alcohol = Some(dec!(0.6));
    let source = MockProductSource::returning(p);
    let result = assess_barcode("12345678", &source, &store()).unwrap();
    assert_eq!(
        result.verdict(),
        Some(Verdict::Haram(VerdictReason::ContainsAlcohol))
    );
}

#[test]
fn not_found_and_no_ingredients_are_distinct() {
    let missing = MockProductSource::returning(ProductRecord::default());
    assert!(matches!(
        assess_barcode("12345678", &missing, &store()).unwrap(),
        ProductAssessment::NotFound { .. }
    ));

    let bare = MockProductSource::returning(product(None));
    assert!(matches!(
        assess_barcode("12345678", &bare, &store()).unwrap(),
        ProductAssessment::NoIngredients { .. }
    ));

    let blank = MockProductSource::returning(product(Some("   ")));
    assert!(matches!(
        assess_barcode("12345678", &blank, &store()).unwrap(),
        ProductAssessment::NoIngredients { .. }
    ));
}

#[test]
fn lookup_failure_is_reported_not_retried() {
    let source = MockProductSource::failing(503);
    let err = assess_barcode("12345678", &source, &store()).unwrap_err();
    assert!(matches!(
        err,
        HalalError::ProductLookupStatus { status: 503, .. }
    ));
    assert_eq!(source.calls().len(), 1);
}

#[test]
fn scanned_barcode_is_validated() {
    let source = MockProductSource::returning(product(Some("Water")));

    let none = scan_barcode_image(b"img", &MockDecoder(None), &source, &store()).unwrap_err();
    assert!(matches!(none, HalalError::NoBarcodeDetected));

    let bad = scan_barcode_image(
        b"img",
        &MockDecoder(Some("QR:hello".into())),
        &source,
        &store(),
    )
    .unwrap_err();
    assert!(matches!(bad, HalalError::InvalidBarcode(_)));
    assert!(source.calls().is_empty());

    let ok = scan_barcode_image(
        b"img",
        &MockDecoder(Some("012345678905".into())),
        &source,
        &store(),
    )
    .unwrap();
    assert_eq!(ok.barcode().as_str(), "012345678905");
}

#[test]
fn padded_barcodes_are_malformed() {
    let source = MockProductSource::returning(product(Some("Water")));

    let typed = assess_barcode(" 12345678\n", &source, &store()).unwrap_err();
    assert!(matches!(typed, HalalError::InvalidBarcode(_)));

    let scanned = scan_barcode_image(
        b"img",
        &MockDecoder(Some("5449000000996 ".into())),
        &source,
        &store(),
    )
    .unwrap_err();
    assert!(matches!(scanned, HalalError::InvalidBarcode(_)));
    assert!(source.calls().is_empty());
}

#[test]
fn decoder_failure_is_an_error_and_skips_lookup() {
    let source = MockProductSource::returning(product(Some("Water")));
    let err =
        scan_barcode_image(b"img", &UnreadableImageDecoder, &source, &store()).unwrap_err();
    match &err {
        HalalError::BarcodeDecode(reason) => assert!(reason.contains("truncated image")),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.category(), ErrorCategory::Error);
    assert!(source.calls().is_empty());
}

// ---------------------------------------------------------------------------
// Logo recognition
// ---------------------------------------------------------------------------
#[test]
fn logo_inference_failure_degrades_to_no_logo() {
    let detector = MockDetector {
        calls: AtomicUsize::new(0),
    };
    let result = recognize_logo(&detector, b"img");
    assert_eq!(detector.calls.load(Ordering::SeqCst), 1);
    assert!(!result.detected);
    assert_eq!(result.confidence, 0.0);
    assert_eq!(result.status, Status::Unknown);
}

// ---------------------------------------------------------------------------
// Degraded reference data
// ---------------------------------------------------------------------------
#[test]
fn empty_store_degrades_everything_to_unknown() {
    let (store, err) =
        ReferenceStore::load_or_empty(std::path::Path::new("/definitely/missing.csv"));
    assert!(err.is_some());
    assert_eq!(resolve("E120", &store).status, Status::Unknown);
    assert_eq!(route("E120", &store).tag, ResponseTag::Unknown);
    // The keyword heuristic still works without reference data.
    let a = analyze("lard", &store);
    assert_eq!(a.musbooh_count(), 1);
}

#[test]
fn custom_rows_last_row_wins() {
    let rows = vec![
        RawRecord {
            code: Some("E999".into()),
            name: Some("Test additive".into()),
            status_clean: None,
            status: Some("Halal".into()),
            description: None,
        },
        RawRecord {
            code: Some("e999 ".into()),
            name: None,
            status_clean: None,
            status: Some("Haram when animal derived".into()),
            description: None,
        },
    ];
    let store = ReferenceStore::build(&rows);
    assert_eq!(resolve("E999", &store).status, Status::Haram);
    assert_eq!(resolve("test additive", &store).status, Status::Halal);
}

// ---------------------------------------------------------------------------
// Assistant
// ---------------------------------------------------------------------------
#[test]
fn assistant_routes_against_builtin_data() {
    let store = store();

    let r = route("how does the app work", &store);
    assert_eq!(r.intent, Intent::AppGuidance);
    assert_eq!(r.tag, ResponseTag::Info);

    let r = route("E120", &store);
    assert_eq!(r.intent, Intent::DirectLookup);
    assert_eq!(r.tag, ResponseTag::Haram);

    let r = route("e471", &store);
    assert_eq!(r.tag, ResponseTag::Musbooh);

    let r = route("xyzzy", &store);
    assert_eq!(r.intent, Intent::NoMatch);
    assert_eq!(r.tag, ResponseTag::Unknown);
}
