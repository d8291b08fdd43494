//! Error codes reported by the disbursement API.
//!
//! Every non-2xx response carries an `error_code` string. Codes listed in
//! [`ERROR_CODES`] are mapped to a [`DisbursementErrorKind`]; anything else is
//! surfaced by the client as a generic API error with the raw payload.

use crate::objects::error::ErrorPayload;

/// The kinds of failure the disbursement API reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisbursementErrorKind {
    BankCodeNotSupported,
    InvalidDestination,
    NotEnoughBalance,
    DirectDisbursementNotFound,
    DescriptionNotFound,
    SwitchingNetworkError,
    UnknownBankNetworkError,
    TemporaryBankNetworkError,
    RejectedByBank,
    TransferError,
    TemporaryTransferError,
    DuplicateTransactionError,
    RecipientAccountNumberError,
    RecipientAmountError,
    MaximumTransferLimitError,
}

/// Error code to kind lookup. Several codes may share a kind.
pub const ERROR_CODES: &[(&str, DisbursementErrorKind)] = &[
    (
        "BANK_CODE_NOT_SUPPORTED_ERROR",
        DisbursementErrorKind::BankCodeNotSupported,
    ),
    ("INVALID_DESTINATION", DisbursementErrorKind::InvalidDestination),
    ("INSUFFICIENT_BALANCE", DisbursementErrorKind::NotEnoughBalance),
    (
        "DIRECT_DISBURSEMENT_BALANCE_INSUFFICIENT_ERROR",
        DisbursementErrorKind::NotEnoughBalance,
    ),
    (
        "DIRECT_DISBURSEMENT_NOT_FOUND_ERROR",
        DisbursementErrorKind::DirectDisbursementNotFound,
    ),
    (
        "DISBURSEMENT_DESCRIPTION_NOT_FOUND_ERROR",
        DisbursementErrorKind::DescriptionNotFound,
    ),
    (
        "SWITCHING_NETWORK_ERROR",
        DisbursementErrorKind::SwitchingNetworkError,
    ),
    (
        "UNKNOWN_BANK_NETWORK_ERROR",
        DisbursementErrorKind::UnknownBankNetworkError,
    ),
    (
        "TEMPORARY_BANK_NETWORK_ERROR",
        DisbursementErrorKind::TemporaryBankNetworkError,
    ),
    ("REJECTED_BY_BANK", DisbursementErrorKind::RejectedByBank),
    ("TRANSFER_ERROR", DisbursementErrorKind::TransferError),
    (
        "TEMPORARY_TRANSFER_ERROR",
        DisbursementErrorKind::TemporaryTransferError,
    ),
    (
        "DUPLICATE_TRANSACTION_ERROR",
        DisbursementErrorKind::DuplicateTransactionError,
    ),
    (
        "RECIPIENT_ACCOUNT_NUMBER_ERROR",
        DisbursementErrorKind::RecipientAccountNumberError,
    ),
    (
        "RECIPIENT_AMOUNT_ERROR",
        DisbursementErrorKind::RecipientAmountError,
    ),
    (
        "MAXIMUM_TRANSFER_LIMIT_ERROR",
        DisbursementErrorKind::MaximumTransferLimitError,
    ),
];

/// Error code the client reports when an external-id lookup matches nothing.
pub const NOT_FOUND_ERROR_CODE: &str = "DIRECT_DISBURSEMENT_NOT_FOUND_ERROR";

/// Message paired with [`NOT_FOUND_ERROR_CODE`].
pub const NOT_FOUND_MESSAGE: &str = "Direct disbursement not found";

impl DisbursementErrorKind {
    /// Look up the kind for an `error_code` string.
    pub fn from_code(code: &str) -> Option<Self> {
        ERROR_CODES
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, kind)| *kind)
    }

    /// Whether the upstream describes this failure as temporary.
    ///
    /// Informational only; the client never retries.
    pub fn is_transient(self) -> bool {
        matches!(
            self,
            DisbursementErrorKind::SwitchingNetworkError
                | DisbursementErrorKind::UnknownBankNetworkError
                | DisbursementErrorKind::TemporaryBankNetworkError
                | DisbursementErrorKind::TemporaryTransferError
        )
    }
}

impl std::fmt::Display for DisbursementErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DisbursementErrorKind::BankCodeNotSupported => "bank code not supported",
            DisbursementErrorKind::InvalidDestination => "invalid destination",
            DisbursementErrorKind::NotEnoughBalance => "not enough balance",
            DisbursementErrorKind::DirectDisbursementNotFound => "direct disbursement not found",
            DisbursementErrorKind::DescriptionNotFound => "description not found",
            DisbursementErrorKind::SwitchingNetworkError => "switching network error",
            DisbursementErrorKind::UnknownBankNetworkError => "unknown bank network error",
            DisbursementErrorKind::TemporaryBankNetworkError => "temporary bank network error",
            DisbursementErrorKind::RejectedByBank => "rejected by bank",
            DisbursementErrorKind::TransferError => "transfer error",
            DisbursementErrorKind::TemporaryTransferError => "temporary transfer error",
            DisbursementErrorKind::DuplicateTransactionError => "duplicate transaction",
            DisbursementErrorKind::RecipientAccountNumberError => "recipient account number error",
            DisbursementErrorKind::RecipientAmountError => "recipient amount error",
            DisbursementErrorKind::MaximumTransferLimitError => "maximum transfer limit exceeded",
        };
        f.write_str(name)
    }
}

/// A failure reported by the API with a recognised `error_code`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct DisbursementError {
    pub kind: DisbursementErrorKind,
    /// HTTP status code of the response.
    pub status: u16,
    /// The `message` field of the response body.
    pub message: String,
    /// The full response body.
    pub payload: serde_json::Value,
}

impl DisbursementError {
    pub fn new(
        kind: DisbursementErrorKind,
        status: u16,
        message: impl Into<String>,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            kind,
            status,
            message: message.into(),
            payload,
        }
    }

    /// The error returned when an external-id lookup yields no records.
    pub fn not_found() -> Self {
        let error = ErrorPayload {
            error_code: NOT_FOUND_ERROR_CODE.to_string(),
            message: NOT_FOUND_MESSAGE.to_string(),
        };
        Self::new(
            DisbursementErrorKind::DirectDisbursementNotFound,
            404,
            NOT_FOUND_MESSAGE,
            error.to_value(),
        )
    }

    /// The `error_code` carried in the payload.
    pub fn error_code(&self) -> Option<&str> {
        self.payload.get("error_code").and_then(|c| c.as_str())
    }
}
