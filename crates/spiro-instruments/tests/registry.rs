use spiro_instruments::error::InstrumentError;
use spiro_instruments::fields::FieldKind;
use spiro_instruments::{all_instruments, get_instrument, instrument_fields};

#[test]
fn registry_lists_both_instruments() {
    let ids: Vec<_> = all_instruments().iter().map(|i| i.id().to_string()).collect();
    assert_eq!(ids, ["copd", "asthma"]);
}

#[test]
fn lookup_by_id_round_trips() {
    for instrument in all_instruments() {
        let found = get_instrument(instrument.id()).expect("registered id should resolve");
        assert_eq!(found.name(), instrument.name());
    }
}

#[test]
fn unknown_id_is_an_error() {
    assert!(get_instrument("spirometry").is_none());

    let err = instrument_fields("spirometry").expect_err("unknown id should fail");
    assert!(matches!(err, InstrumentError::UnknownInstrument(_)));
    assert!(err.to_string().contains("spirometry"));
}

#[test]
fn copd_fields_expose_wizard_metadata() {
    let fields = instrument_fields("copd").expect("copd should be registered");

    let mmrc = fields
        .iter()
        .find(|f| f.id == "mmrc")
        .expect("mmrc field should exist");
    assert!(mmrc.required);
    let range = mmrc.range.expect("mmrc should carry a range");
    assert_eq!(range.min, 0.0);
    assert_eq!(range.max, Some(4.0));
    assert!(range.contains(3.0));
    assert!(!range.contains(4.5));
}

#[test]
fn asthma_categories_list_their_options() {
    let fields = instrument_fields("asthma").expect("asthma should be registered");

    let daytime = fields
        .iter()
        .find(|f| f.id == "daytime")
        .expect("daytime field should exist");
    match &daytime.kind {
        FieldKind::Category { options } => {
            assert_eq!(options, &["<=2", "3-6", "daily", "throughout"]);
        }
        other => panic!("expected category field, got: {other:?}"),
    }
}
