//! Disbursement request and response types.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Request body for creating a new disbursement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDisbursement {
    /// Caller-supplied identifier used to look the disbursement up later.
    pub external_id: String,
    #[serde(with = "amount")]
    pub amount: Decimal,
    pub bank_code: String,
    pub account_holder_name: String,
    pub account_number: String,
    pub disbursement_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_to: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_cc: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_bcc: Option<Vec<String>>,
}

impl CreateDisbursement {
    pub fn new(
        external_id: impl Into<String>,
        amount: impl Into<Decimal>,
        bank_code: impl Into<String>,
        account_holder_name: impl Into<String>,
        account_number: impl Into<String>,
        disbursement_description: impl Into<String>,
    ) -> Self {
        Self {
            external_id: external_id.into(),
            amount: amount.into(),
            bank_code: bank_code.into(),
            account_holder_name: account_holder_name.into(),
            account_number: account_number.into(),
            disbursement_description: disbursement_description.into(),
            email_to: None,
            email_cc: None,
            email_bcc: None,
        }
    }

    /// Addresses notified when the disbursement completes.
    pub fn with_email_to(mut self, to: Vec<String>) -> Self {
        self.email_to = Some(to);
        self
    }

    pub fn with_email_cc(mut self, cc: Vec<String>) -> Self {
        self.email_cc = Some(cc);
        self
    }

    pub fn with_email_bcc(mut self, bcc: Vec<String>) -> Self {
        self.email_bcc = Some(bcc);
        self
    }
}

/// JSON number encoding for amounts.
///
/// Whole amounts are written as integers (`15000`, not `15000.0`); amounts
/// with a fractional part go through `f64`. Any JSON number is accepted when
/// reading.
mod amount {
    use rust_decimal::Decimal;
    use rust_decimal::prelude::ToPrimitive;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        if amount.fract().is_zero() {
            if let Some(whole) = amount.to_i64() {
                return serializer.serialize_i64(whole);
            }
        }
        rust_decimal::serde::float::serialize(amount, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        rust_decimal::serde::float::deserialize(deserializer)
    }
}

/// Optional per-request headers.
///
/// The default value sends no extra headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RequestHeaders {
    /// Sub-account the operation is performed on behalf of.
    pub for_user_id: Option<String>,
}

impl RequestHeaders {
    /// Headers scoping the request to the given sub-account.
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            for_user_id: Some(user_id.into()),
        }
    }
}

/// Disbursement status as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisbursementStatus {
    Pending,
    Completed,
    Failed,
    /// A status this client does not know about yet.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for DisbursementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisbursementStatus::Pending => write!(f, "PENDING"),
            DisbursementStatus::Completed => write!(f, "COMPLETED"),
            DisbursementStatus::Failed => write!(f, "FAILED"),
            DisbursementStatus::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Typed view of the fields in a disbursement response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
struct DisbursementFields {
    id: String,
    #[serde(default)]
    user_id: Option<String>,
    external_id: String,
    #[serde(with = "amount")]
    amount: Decimal,
    bank_code: String,
    account_holder_name: String,
    #[serde(default)]
    account_number: Option<String>,
    #[serde(default)]
    disbursement_description: Option<String>,
    status: DisbursementStatus,
    #[serde(default)]
    failure_code: Option<String>,
    #[serde(default)]
    email_to: Option<Vec<String>>,
    #[serde(default)]
    email_cc: Option<Vec<String>>,
    #[serde(default)]
    email_bcc: Option<Vec<String>>,
}

/// A disbursement record tracked by the API.
///
/// Built once from a response body and never modified afterwards. The full
/// JSON object the server sent is kept in [`payload`](Self::payload), so
/// fields this type does not model are still reachable.
#[derive(Debug, Clone, PartialEq)]
pub struct Disbursement {
    fields: DisbursementFields,
    payload: serde_json::Value,
}

impl Disbursement {
    /// Build a disbursement from the JSON object returned by the API.
    pub fn from_payload(payload: serde_json::Value) -> Result<Self, serde_json::Error> {
        let fields = DisbursementFields::deserialize(&payload)?;
        Ok(Self { fields, payload })
    }

    pub fn id(&self) -> &str {
        &self.fields.id
    }

    pub fn user_id(&self) -> Option<&str> {
        self.fields.user_id.as_deref()
    }

    pub fn external_id(&self) -> &str {
        &self.fields.external_id
    }

    pub fn amount(&self) -> Decimal {
        self.fields.amount
    }

    pub fn bank_code(&self) -> &str {
        &self.fields.bank_code
    }

    pub fn account_holder_name(&self) -> &str {
        &self.fields.account_holder_name
    }

    pub fn account_number(&self) -> Option<&str> {
        self.fields.account_number.as_deref()
    }

    pub fn disbursement_description(&self) -> Option<&str> {
        self.fields.disbursement_description.as_deref()
    }

    pub fn status(&self) -> DisbursementStatus {
        self.fields.status
    }

    /// Reason reported by the bank when [`status`](Self::status) is `FAILED`.
    pub fn failure_code(&self) -> Option<&str> {
        self.fields.failure_code.as_deref()
    }

    pub fn email_to(&self) -> Option<&[String]> {
        self.fields.email_to.as_deref()
    }

    pub fn email_cc(&self) -> Option<&[String]> {
        self.fields.email_cc.as_deref()
    }

    pub fn email_bcc(&self) -> Option<&[String]> {
        self.fields.email_bcc.as_deref()
    }

    /// The raw response object, exactly as received.
    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }

    pub fn into_payload(self) -> serde_json::Value {
        self.payload
    }
}

impl<'de> Deserialize<'de> for Disbursement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let payload = serde_json::Value::deserialize(deserializer)?;
        Self::from_payload(payload).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Disbursement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.payload.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_payload() -> serde_json::Value {
        json!({
            "user_id": "5785e6334d7b410667d355c4",
            "external_id": "d28aac6a-03c8-46d0-ac03-43b6278b35eb",
            "amount": 15000,
            "bank_code": "BCA",
            "account_holder_name": "Bob Jones",
            "disbursement_description": "sample disbursement",
            "status": "PENDING",
            "id": "57f1ce05bb1a631a65eee662",
            "email_to": ["test+to1@xendit.co"]
        })
    }

    #[test]
    fn test_disbursement_from_payload() {
        let disbursement = Disbursement::from_payload(sample_payload()).unwrap();
        assert_eq!(disbursement.id(), "57f1ce05bb1a631a65eee662");
        assert_eq!(disbursement.user_id(), Some("5785e6334d7b410667d355c4"));
        assert_eq!(disbursement.amount(), Decimal::from(15_000));
        assert_eq!(disbursement.bank_code(), "BCA");
        assert_eq!(disbursement.account_holder_name(), "Bob Jones");
        assert_eq!(disbursement.account_number(), None);
        assert_eq!(
            disbursement.disbursement_description(),
            Some("sample disbursement")
        );
        assert_eq!(disbursement.status(), DisbursementStatus::Pending);
        assert_eq!(
            disbursement.email_to(),
            Some(&["test+to1@xendit.co".to_string()][..])
        );
        assert_eq!(disbursement.payload(), &sample_payload());
    }

    #[test]
    fn test_unrecognised_status_does_not_fail() {
        let mut payload = sample_payload();
        payload["status"] = json!("REVERSED");
        let disbursement = Disbursement::from_payload(payload).unwrap();
        assert_eq!(disbursement.status(), DisbursementStatus::Unknown);
        assert_eq!(disbursement.payload()["status"], "REVERSED");
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        let mut payload = sample_payload();
        payload.as_object_mut().unwrap().remove("bank_code");
        assert!(Disbursement::from_payload(payload).is_err());
    }

    #[test]
    fn test_serializes_back_to_raw_payload() {
        let disbursement: Disbursement = serde_json::from_value(sample_payload()).unwrap();
        assert_eq!(serde_json::to_value(&disbursement).unwrap(), sample_payload());
    }

    #[test]
    fn test_fractional_amount_stays_a_number() {
        let params = CreateDisbursement::new(
            "ext-2",
            Decimal::new(1_500_050, 2),
            "BCA",
            "Bob Jones",
            "1111111111",
            "Payment",
        );
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body["amount"].as_f64(), Some(15_000.5));

        let parsed: CreateDisbursement = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.amount, Decimal::new(150_005, 1));
    }

    #[test]
    fn test_create_request_body_omits_unset_emails() {
        let params = CreateDisbursement::new(
            "ext-1",
            15_000,
            "BCA",
            "Bob Jones",
            "1111111111",
            "Payment",
        );
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body["external_id"], "ext-1");
        assert_eq!(body["amount"], json!(15_000));
        assert_eq!(
            serde_json::to_string(&body["amount"]).unwrap(),
            "15000"
        );
        assert_eq!(body["disbursement_description"], "Payment");
        assert!(body.get("email_to").is_none());

        let body = serde_json::to_value(params.with_email_cc(vec!["ops@example.com".into()]))
            .unwrap();
        assert_eq!(body["email_cc"], json!(["ops@example.com"]));
    }
}
