use parrot::{Flock, Parrot, ParrotError};

#[test]
fn test_deserialize_flock_json() {
    let json_string = r#"
{
 "parrots": [
     { "variant": "european" },
     { "variant": "african", "number_of_coconuts": 1 },
     { "variant": "norwegian_blue", "voltage": 1.5, "is_nailed": false },
     { "variant": "norwegian_blue", "voltage": 2.0 },
     { "variant": "african" }
 ]
}"#;

    let flock = Flock::from_json_str(json_string).unwrap();
    assert_eq!(flock.len(), 5);
    assert_eq!(
        flock.parrots,
        vec![
            Parrot::european(),
            Parrot::african(1),
            Parrot::norwegian_blue(1.5, false),
            Parrot::norwegian_blue(2.0, false),
            Parrot::african(0),
        ]
    );
}

#[test]
fn test_serialized_json_reads_back() {
    let flock: Flock = [Parrot::african(3), Parrot::norwegian_blue(0.5, true)]
        .into_iter()
        .collect();
    let json = flock.to_json_string().unwrap();
    assert!(json.contains("\"variant\": \"norwegian_blue\""));
    assert_eq!(Flock::from_json_str(&json).unwrap(), flock);
}

#[test]
fn test_negative_voltage_rejected() {
    let json_string = r#"{ "parrots": [ { "variant": "european" }, { "variant": "norwegian_blue", "voltage": -1.0 } ] }"#;
    match Flock::from_json_str(json_string) {
        Err(ParrotError::Validation(reason)) => assert!(reason.starts_with("parrot 1:")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_malformed_json_rejected() {
    let err = Flock::from_json_str(r#"{ "parrots": [ { "variant": "macaw" } ] }"#).unwrap_err();
    assert!(matches!(err, ParrotError::Json(_)));
}

#[test]
fn test_serialize_deserialize_cbor() {
    let dir = tempfile::tempdir().unwrap();
    let filename = dir.path().join("flock_test.cbor");
    let flock = Flock::random(&mut rand::thread_rng(), 50);

    flock.write_cbor(&filename).unwrap();
    let flock_from_cbor = Flock::read_cbor(&filename).unwrap();

    assert_eq!(flock_from_cbor, flock);
}

#[test]
fn test_missing_cbor_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Flock::read_cbor(dir.path().join("missing.cbor")).unwrap_err();
    assert!(matches!(err, ParrotError::Io(_)));
}

#[test]
fn test_fastest() {
    let flock = Flock::new(vec![
        Parrot::african(1),
        Parrot::norwegian_blue(3.0, false),
        Parrot::european(),
    ]);
    assert_eq!(flock.fastest(), Some(&Parrot::norwegian_blue(3.0, false)));
    assert_eq!(Flock::default().fastest(), None);
    assert!(Flock::default().is_empty());
}

#[test]
fn test_malformed_cbor_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let filename = dir.path().join("garbage.cbor");
    std::fs::write(&filename, [0xff, 0x00, 0x13]).unwrap();

    let err = Flock::read_cbor(&filename).unwrap_err();
    assert!(matches!(err, ParrotError::Cbor(_)));
}

#[test]
fn test_negative_voltage_rejected_from_cbor() {
    let dir = tempfile::tempdir().unwrap();
    let filename = dir.path().join("negative.cbor");
    Flock::new(vec![Parrot::norwegian_blue(-1.0, false)])
        .write_cbor(&filename)
        .unwrap();

    match Flock::read_cbor(&filename) {
        Err(ParrotError::Validation(reason)) => assert!(reason.starts_with("parrot 0:")),
        other => panic!("expected validation error, got {:?}", other),
    }
}
