use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::not_blank;

/// Result fields accepted on create and on update. Update replaces all of them.
///
/// `status` is an opaque label; no lifecycle is enforced on it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResultInput {
    pub lab_id: i32,
    #[validate(
        custom(function = "not_blank"),
        length(min = 2, max = 50, message = "nif must be between 2 and 50 characters")
    )]
    pub nif: String,
    #[validate(
        custom(function = "not_blank"),
        length(min = 3, max = 100, message = "patientName must be between 3 and 100 characters")
    )]
    pub patient_name: String,
    /// Epoch milliseconds.
    pub date: i64,
    #[validate(custom(function = "not_blank"))]
    pub data: String,
    #[validate(custom(function = "not_blank"))]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ResultInput {
        ResultInput {
            lab_id: 1,
            nif: "123-4".into(),
            patient_name: "A B".into(),
            date: 1_700_000_000_000,
            data: "ok".into(),
            status: "pending".into(),
        }
    }

    #[test]
    fn accepts_minimal_valid_payload() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn rejects_each_bad_field() {
        let bad = ResultInput {
            nif: "1".into(),
            patient_name: "AB".into(),
            data: " ".into(),
            status: "".into(),
            ..valid()
        };
        let errs = bad.validate().unwrap_err();
        let fields = errs.field_errors();
        for field in ["nif", "patient_name", "data", "status"] {
            assert!(fields.contains_key(field), "expected error on {field}");
        }
    }

    #[test]
    fn date_and_lab_id_are_not_range_checked() {
        let odd = ResultInput { lab_id: -5, date: -1, ..valid() };
        assert!(odd.validate().is_ok());
    }

    #[test]
    fn missing_date_fails_to_deserialize() {
        let parsed = serde_json::from_str::<ResultInput>(
            r#"{"labId":1,"nif":"123-4","patientName":"A B","data":"ok","status":"pending"}"#,
        );
        assert!(parsed.is_err());
    }
}
