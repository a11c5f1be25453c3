//! Subscription entity - the user's current health plan enrollment.
//!
//! At most one subscription exists per user. Changing plan overwrites the
//! record in place; no history of past subscriptions is retained. Cancelling
//! flips `is_active` but keeps the record for display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one of the three static plans.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    /// Entry-level plan
    Basic,
    /// Mid-tier plan
    Intermediate,
    /// Top-tier plan
    Premium,
}

impl PlanId {
    /// The lowercase wire token for this plan id.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
            Self::Premium => "premium",
        }
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the subscription is paid for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodType {
    /// Credit card
    CreditCard,
    /// Debit card
    DebitCard,
    /// Direct bank account debit
    BankAccount,
}

/// Payment method on file for the subscription.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    /// Kind of payment instrument
    #[serde(rename = "type")]
    pub kind: PaymentMethodType,
    /// Last four digits of the card or account number
    pub last_four: String,
}

/// The user's current plan enrollment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Unique identifier of this enrollment
    pub id: String,
    /// Which plan the user is on
    pub plan_id: PlanId,
    /// Start of the current 30-day term
    pub start_date: DateTime<Utc>,
    /// End of the current 30-day term
    pub end_date: DateTime<Utc>,
    /// Whether the enrollment is active (false after cancellation)
    pub is_active: bool,
    /// Payment method on file
    pub payment_method: PaymentMethod,
}
