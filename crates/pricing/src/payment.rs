use serde::{Deserialize, Serialize};
use shoplite_core::DomainResult;
use tracing::info;

/// Payment method selected for an order.
///
/// Every current variant succeeds unconditionally; `pay` still reports
/// through `Result` so a gateway-backed variant can fail without changing
/// callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Payment {
    CreditCard { card_number: String },
    BankTransfer { account: String },
    #[serde(rename = "paypal")]
    PayPal { email: String },
}

impl Payment {
    pub fn label(&self) -> &'static str {
        match self {
            Payment::CreditCard { .. } => "credit card",
            Payment::BankTransfer { .. } => "bank transfer",
            Payment::PayPal { .. } => "paypal",
        }
    }

    /// Details safe to put in a log line. Card numbers are reduced to
    /// their last four digits.
    pub fn masked_details(&self) -> String {
        match self {
            Payment::CreditCard { card_number } => {
                let digits: Vec<char> = card_number
                    .chars()
                    .filter(|c| c.is_ascii_digit())
                    .collect();
                let tail: String = digits
                    .iter()
                    .skip(digits.len().saturating_sub(4))
                    .collect();
                format!("card ****{tail}")
            }
            Payment::BankTransfer { account } => format!("account {account}"),
            Payment::PayPal { email } => format!("paypal {email}"),
        }
    }

    /// Execute payment for `amount`. The confirmation record is a
    /// structured log line naming the method and masked details.
    pub fn pay(&self, amount: f64) -> DomainResult<()> {
        info!(
            method = %self.label(),
            details = %self.masked_details(),
            amount,
            "payment executed"
        );
        Ok(())
    }
}
