//! Defines the core data models for transactions.

use serde::{Deserialize, Deserializer, Serialize};
use time::{Duration, OffsetDateTime, macros::datetime};

use crate::Error;

// ============================================================================
// MODELS
// ============================================================================

/// The timestamp of a transaction that was stored without one.
pub const ZERO_TIMESTAMP: OffsetDateTime = datetime!(0001-01-01 0:00 UTC);

/// The prefix of server generated transaction IDs.
pub const GENERATED_ID_PREFIX: &str = "txn-";

/// A record of money that was spent or earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, e.g. "txn-001".
    pub id: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// The currency of `amount`, e.g. "USD".
    pub currency: String,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl Transaction {
    /// The records every new store starts with, timestamped relative to `now`.
    pub fn seed_data(now: OffsetDateTime) -> Vec<Transaction> {
        vec![
            Transaction {
                id: "txn-001".to_owned(),
                amount: 100.50,
                currency: "USD".to_owned(),
                description: "Coffee purchase".to_owned(),
                timestamp: now - Duration::hours(1),
            },
            Transaction {
                id: "txn-002".to_owned(),
                amount: 25.00,
                currency: "USD".to_owned(),
                description: "Lunch".to_owned(),
                timestamp: now - Duration::hours(2),
            },
        ]
    }
}

/// The request body for creating or replacing a [Transaction].
///
/// Every field may be left out or set to `null`. `amount`, `currency` and
/// `description` then take their zero values, `0` and `""`.
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionPayload {
    /// A caller chosen ID. Ignored when replacing a transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The amount of money spent or earned.
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
    /// The currency of `amount`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency: String,
    /// What the transaction was for.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// When the transaction happened.
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<OffsetDateTime>,
}

impl TransactionPayload {
    /// Start a payload with the transaction details.
    pub fn new(amount: f64, currency: &str, description: &str) -> Self {
        Self {
            id: None,
            amount,
            currency: currency.to_owned(),
            description: description.to_owned(),
            timestamp: None,
        }
    }

    /// Set the ID for the transaction.
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_owned());
        self
    }

    /// Set the timestamp for the transaction.
    pub fn timestamp(mut self, timestamp: OffsetDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Decode a payload from a JSON request body.
    ///
    /// Only the first JSON value in `body` is read, anything after it is
    /// ignored. A body of `null` decodes to the default payload.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidJson] if `body` is empty, is not valid JSON, or
    /// has a field of the wrong type.
    pub fn from_json(body: &[u8]) -> Result<Self, Error> {
        let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<Self>>();

        match values.next() {
            Some(Ok(payload)) => Ok(payload.unwrap_or_default()),
            Some(Err(error)) => Err(Error::InvalidJson(error.to_string())),
            None => Err(Error::InvalidJson("the request body is empty".to_owned())),
        }
    }

    /// Turn the payload into a new transaction created at `now`.
    ///
    /// A missing or empty ID is replaced with a generated one and a missing or
    /// zero timestamp is replaced with `now`.
    pub fn into_new_transaction(self, now: OffsetDateTime) -> Transaction {
        let id = match self.id {
            Some(id) if !id.is_empty() => id,
            _ => generate_transaction_id(now),
        };

        let timestamp = match self.timestamp {
            Some(timestamp) if timestamp != ZERO_TIMESTAMP => timestamp,
            _ => now,
        };

        Transaction {
            id,
            amount: self.amount,
            currency: self.currency,
            description: self.description,
            timestamp,
        }
    }

    /// Turn the payload into the replacement for the transaction `id`.
    ///
    /// The payload's own ID is discarded. A missing timestamp is stored as
    /// [ZERO_TIMESTAMP].
    pub fn into_replacement(self, id: &str) -> Transaction {
        Transaction {
            id: id.to_owned(),
            amount: self.amount,
            currency: self.currency,
            description: self.description,
            timestamp: self.timestamp.unwrap_or(ZERO_TIMESTAMP),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Create a transaction ID from the unix time in seconds, e.g. "txn-1700000000".
///
/// Two IDs generated within the same second are equal.
pub fn generate_transaction_id(now: OffsetDateTime) -> String {
    format!("{GENERATED_ID_PREFIX}{}", now.unix_timestamp())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::datetime;

    use crate::{
        Error,
        transaction::core::{
            Transaction, TransactionPayload, ZERO_TIMESTAMP, generate_transaction_id,
        },
    };

    #[test]
    fn decodes_payload_without_optional_fields() {
        let body = br#"{"amount":5,"currency":"USD","description":"Snack"}"#;

        let payload = TransactionPayload::from_json(body).unwrap();

        assert_eq!(payload, TransactionPayload::new(5.0, "USD", "Snack"));
    }

    #[test]
    fn decodes_payload_with_all_fields() {
        let body = br#"{
            "id": "txn-abc",
            "amount": -12.5,
            "currency": "NZD",
            "description": "Refund",
            "timestamp": "2025-03-04T05:06:07Z",
            "tags": ["ignored"]
        }"#;

        let payload = TransactionPayload::from_json(body).unwrap();

        assert_eq!(
            payload,
            TransactionPayload::new(-12.5, "NZD", "Refund")
                .id("txn-abc")
                .timestamp(datetime!(2025-03-04 05:06:07 UTC))
        );
    }

    #[test]
    fn rejects_malformed_json() {
        let result = TransactionPayload::from_json(b"{\"amount\": ");

        assert!(matches!(result, Err(Error::InvalidJson(_))));
    }

    #[test]
    fn rejects_empty_body() {
        let result = TransactionPayload::from_json(b"");

        assert!(matches!(result, Err(Error::InvalidJson(_))));
    }

    #[test]
    fn rejects_wrong_field_type() {
        let body = br#"{"amount":"five","currency":"USD","description":"Snack"}"#;

        let result = TransactionPayload::from_json(body);

        assert!(matches!(result, Err(Error::InvalidJson(_))));
    }

    #[test]
    fn missing_fields_take_zero_values() {
        let payload = TransactionPayload::from_json(br#"{"description":"x"}"#).unwrap();

        assert_eq!(payload, TransactionPayload::new(0.0, "", "x"));
    }

    #[test]
    fn null_fields_take_zero_values() {
        let body = br#"{
            "id": null,
            "amount": null,
            "currency": null,
            "description": null,
            "timestamp": null
        }"#;

        let payload = TransactionPayload::from_json(body).unwrap();

        assert_eq!(payload, TransactionPayload::default());
    }

    #[test]
    fn null_body_is_default_payload() {
        let payload = TransactionPayload::from_json(b"null").unwrap();

        assert_eq!(payload, TransactionPayload::default());
    }

    #[test]
    fn reads_only_first_value() {
        let body = br#"{"amount":1,"currency":"USD","description":"first"} {"amount":2}"#;

        let payload = TransactionPayload::from_json(body).unwrap();

        assert_eq!(payload, TransactionPayload::new(1.0, "USD", "first"));
    }

    #[test]
    fn rejects_whitespace_body() {
        let result = TransactionPayload::from_json(b"  \n");

        assert!(matches!(result, Err(Error::InvalidJson(_))));
    }

    #[test]
    fn new_transaction_gets_generated_id_and_timestamp() {
        let now = datetime!(2025-10-18 12:00 UTC);

        let transaction = TransactionPayload::new(5.0, "USD", "Snack").into_new_transaction(now);

        assert_eq!(
            transaction,
            Transaction {
                id: format!("txn-{}", now.unix_timestamp()),
                amount: 5.0,
                currency: "USD".to_owned(),
                description: "Snack".to_owned(),
                timestamp: now,
            }
        );
    }

    #[test]
    fn new_transaction_replaces_empty_id() {
        let now = datetime!(2025-10-18 12:00 UTC);

        let transaction = TransactionPayload::new(5.0, "USD", "Snack")
            .id("")
            .into_new_transaction(now);

        assert_eq!(transaction.id, generate_transaction_id(now));
    }

    #[test]
    fn new_transaction_replaces_zero_timestamp() {
        let now = datetime!(2025-10-18 12:00 UTC);

        let transaction = TransactionPayload::new(5.0, "USD", "Snack")
            .timestamp(ZERO_TIMESTAMP)
            .into_new_transaction(now);

        assert_eq!(transaction.timestamp, now);
    }

    #[test]
    fn new_transaction_keeps_caller_fields() {
        let now = datetime!(2025-10-18 12:00 UTC);
        let timestamp = datetime!(2025-01-01 08:30 UTC);

        let transaction = TransactionPayload::new(5.0, "USD", "Snack")
            .id("mine")
            .timestamp(timestamp)
            .into_new_transaction(now);

        assert_eq!(transaction.id, "mine");
        assert_eq!(transaction.timestamp, timestamp);
    }

    #[test]
    fn replacement_forces_id_and_stores_zero_timestamp() {
        let transaction = TransactionPayload::new(200.0, "USD", "Coffee x2")
            .id("txn-999")
            .into_replacement("txn-001");

        assert_eq!(transaction.id, "txn-001");
        assert_eq!(transaction.timestamp, ZERO_TIMESTAMP);
    }

    #[test]
    fn serializes_timestamp_as_rfc3339() {
        let transaction = Transaction {
            id: "txn-001".to_owned(),
            amount: 100.5,
            currency: "USD".to_owned(),
            description: "Coffee purchase".to_owned(),
            timestamp: datetime!(2025-10-18 11:00 UTC),
        };

        let got = serde_json::to_value(&transaction).unwrap();

        assert_eq!(
            got,
            json!({
                "id": "txn-001",
                "amount": 100.5,
                "currency": "USD",
                "description": "Coffee purchase",
                "timestamp": "2025-10-18T11:00:00Z"
            })
        );
    }

    #[test]
    fn seed_data_is_ordered_and_in_the_past() {
        let now = datetime!(2025-10-18 12:00 UTC);

        let seed = Transaction::seed_data(now);

        let ids: Vec<&str> = seed.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["txn-001", "txn-002"]);
        assert_eq!(seed[0].amount, 100.50);
        assert_eq!(seed[1].amount, 25.00);
        assert!(seed.iter().all(|t| t.timestamp < now));
    }
}
