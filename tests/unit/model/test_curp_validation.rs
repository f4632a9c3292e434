use assert_json_diff::assert_json_eq;
use chrono::NaiveDate;
use cuenca_client::model::curp_validation::CurpValidation;
use cuenca_client::model::identity::{Gender, State};
use cuenca_client::session::resource::Resource;
use serde_json::json;

/// Documented example payload for the resource
fn example_payload() -> serde_json::Value {
    json!({
        "id": "CV-123",
        "created_at": "2019-08-24T14:15:22Z",
        "names": "Guillermo",
        "first_surname": "Gonzales",
        "second_surname": "Camarena",
        "date_of_birth": "1965-04-18",
        "country_of_birth": "MX",
        "state_of_birth": "VZ",
        "gender": "male",
        "nationality": "MX",
        "manual_curp": null,
        "calculated_curp": "GOCG650418HVZNML08",
        "validated_curp": "GOCG650418HVZNML08",
        "renapo_curp_match": true,
        "renapo_full_match": true,
    })
}

#[test]
fn resource_name() {
    assert_eq!(CurpValidation::NAME, "curp_validations");
}

#[test]
fn example_payload_deserializes_exactly() {
    let record: CurpValidation = serde_json::from_value(example_payload()).unwrap();

    assert_eq!(record.id, "CV-123");
    assert_eq!(record.created_at.to_rfc3339(), "2019-08-24T14:15:22+00:00");
    assert_eq!(record.names.as_deref(), Some("Guillermo"));
    assert_eq!(record.first_surname.as_deref(), Some("Gonzales"));
    assert_eq!(record.second_surname.as_deref(), Some("Camarena"));
    assert_eq!(
        record.date_of_birth,
        Some(NaiveDate::from_ymd_opt(1965, 4, 18).unwrap())
    );
    assert_eq!(
        record.country_of_birth.as_ref().map(|c| c.as_str()),
        Some("MX")
    );
    assert_eq!(record.state_of_birth, Some(State::Veracruz));
    assert_eq!(record.gender, Some(Gender::Male));
    assert_eq!(record.nationality.as_ref().map(|c| c.as_str()), Some("MX"));
    assert_eq!(record.manual_curp, None);
    assert_eq!(record.calculated_curp.as_str(), "GOCG650418HVZNML08");
    assert_eq!(
        record.validated_curp.as_ref().map(|c| c.as_str()),
        Some("GOCG650418HVZNML08")
    );
    assert!(record.renapo_curp_match);
    assert!(record.renapo_full_match);
}

#[test]
fn example_payload_round_trips() {
    let record: CurpValidation = serde_json::from_value(example_payload()).unwrap();
    assert_json_eq!(serde_json::to_value(&record).unwrap(), example_payload());
}

#[test]
fn full_match_implies_curp_match_on_fixture() {
    let record: CurpValidation = serde_json::from_value(example_payload()).unwrap();
    if record.renapo_full_match {
        assert!(record.renapo_curp_match);
    }
}

#[test]
fn no_match_record_keeps_calculated_curp() {
    // A record where nothing was found in the registry still carries
    // the server-computed CURP.
    let record: CurpValidation = serde_json::from_value(json!({
        "id": "CV-456",
        "created_at": "2020-01-01T00:00:00Z",
        "names": null,
        "first_surname": null,
        "second_surname": null,
        "date_of_birth": null,
        "country_of_birth": null,
        "state_of_birth": null,
        "gender": null,
        "nationality": null,
        "manual_curp": null,
        "calculated_curp": "GOCG650418HVZNML08",
        "validated_curp": null,
        "renapo_curp_match": false,
        "renapo_full_match": false,
    }))
    .unwrap();

    assert_eq!(record.calculated_curp.as_str(), "GOCG650418HVZNML08");
    assert_eq!(record.validated_curp, None);
    assert!(!record.renapo_curp_match);
}

#[test]
fn record_without_calculated_curp_is_rejected() {
    let mut payload = example_payload();
    payload.as_object_mut().unwrap().remove("calculated_curp");
    let result: Result<CurpValidation, _> = serde_json::from_value(payload);
    assert!(result.is_err());
}
