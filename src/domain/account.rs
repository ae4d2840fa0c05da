use crate::utils::error::{AppError, Result};
use crate::utils::validation::validate_positive_amount;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_INTEREST_RATE: f64 = 3.0;
pub const DEFAULT_CHECKING_FEE: f64 = 1.5;

/// Withdrawal and bonus rules of a trust account.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustTerms {
    pub max_withdrawals: u32,
    /// Deposits at or above this amount receive `bonus` before interest.
    pub bonus_threshold: f64,
    pub bonus: f64,
    /// Largest single withdrawal as a fraction of the current balance.
    pub withdrawal_cap_ratio: f64,
}

impl Default for TrustTerms {
    fn default() -> Self {
        Self {
            max_withdrawals: 3,
            bonus_threshold: 5000.0,
            bonus: 50.0,
            withdrawal_cap_ratio: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AccountKind {
    Basic,
    Savings {
        interest_rate: f64,
    },
    Checking {
        fee: f64,
    },
    /// A savings account with capped, counted withdrawals and a deposit bonus.
    Trust {
        interest_rate: f64,
        withdrawals: u32,
        terms: TrustTerms,
    },
}

impl AccountKind {
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Basic => "General",
            AccountKind::Savings { .. } => "Savings",
            AccountKind::Checking { .. } => "Checking",
            AccountKind::Trust { .. } => "Trust",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    name: String,
    password: String,
    balance: f64,
    kind: AccountKind,
}

impl Account {
    pub fn new(
        name: impl Into<String>,
        password: impl Into<String>,
        balance: f64,
        kind: AccountKind,
    ) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
            balance,
            kind,
        }
    }

    pub fn basic(name: impl Into<String>, password: impl Into<String>, balance: f64) -> Self {
        Self::new(name, password, balance, AccountKind::Basic)
    }

    pub fn savings(
        name: impl Into<String>,
        password: impl Into<String>,
        balance: f64,
        interest_rate: f64,
    ) -> Self {
        Self::new(name, password, balance, AccountKind::Savings { interest_rate })
    }

    pub fn checking(name: impl Into<String>, password: impl Into<String>, balance: f64) -> Self {
        Self::new(
            name,
            password,
            balance,
            AccountKind::Checking {
                fee: DEFAULT_CHECKING_FEE,
            },
        )
    }

    pub fn trust(
        name: impl Into<String>,
        password: impl Into<String>,
        balance: f64,
        interest_rate: f64,
    ) -> Self {
        Self::trust_with_terms(name, password, balance, interest_rate, TrustTerms::default())
    }

    pub fn trust_with_terms(
        name: impl Into<String>,
        password: impl Into<String>,
        balance: f64,
        interest_rate: f64,
        terms: TrustTerms,
    ) -> Self {
        Self::new(
            name,
            password,
            balance,
            AccountKind::Trust {
                interest_rate,
                withdrawals: 0,
                terms,
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    /// Plain-text comparison; there is no hashing in this toy bank.
    pub fn check_password(&self, password: &str) -> bool {
        self.password == password
    }

    /// Remaining trust withdrawals, `None` for other kinds.
    pub fn withdrawals_left(&self) -> Option<u32> {
        match &self.kind {
            AccountKind::Trust {
                withdrawals, terms, ..
            } => Some(terms.max_withdrawals.saturating_sub(*withdrawals)),
            _ => None,
        }
    }

    /// Credits the account and returns the amount actually credited.
    pub fn deposit(&mut self, amount: f64) -> Result<f64> {
        validate_positive_amount(amount)?;

        let credited = match &self.kind {
            AccountKind::Basic | AccountKind::Checking { .. } => amount,
            AccountKind::Savings { interest_rate } => with_interest(amount, *interest_rate),
            AccountKind::Trust {
                interest_rate,
                terms,
                ..
            } => {
                let amount = if amount >= terms.bonus_threshold {
                    amount + terms.bonus
                } else {
                    amount
                };
                with_interest(amount, *interest_rate)
            }
        };

        self.balance += credited;
        tracing::debug!(
            account = %self.name,
            amount,
            credited,
            balance = self.balance,
            "deposit"
        );
        Ok(credited)
    }

    /// Debits the account and returns the amount actually debited, fees included.
    pub fn withdraw(&mut self, amount: f64) -> Result<f64> {
        validate_positive_amount(amount)?;

        let balance = &mut self.balance;
        let debited = match &mut self.kind {
            AccountKind::Basic | AccountKind::Savings { .. } => debit(balance, amount)?,
            AccountKind::Checking { fee } => debit(balance, amount + *fee)?,
            AccountKind::Trust {
                withdrawals, terms, ..
            } => {
                if *withdrawals >= terms.max_withdrawals {
                    return Err(AppError::WithdrawalLimitReached {
                        max: terms.max_withdrawals,
                    });
                }
                let cap = *balance * terms.withdrawal_cap_ratio;
                if amount > cap {
                    return Err(AppError::WithdrawalCapExceeded { amount, cap });
                }
                let debited = debit(balance, amount)?;
                *withdrawals += 1;
                debited
            }
        };

        tracing::debug!(
            account = %self.name,
            amount,
            debited,
            balance = self.balance,
            "withdraw"
        );
        Ok(debited)
    }

    /// The summary line printed by the "save" action. Nothing is stored.
    pub fn save_summary(&self) -> String {
        match &self.kind {
            AccountKind::Basic => {
                format!("[Saved] Account: {}, Balance: {:.2}", self.name, self.balance)
            }
            AccountKind::Savings { interest_rate } => format!(
                "[Saved] Savings: {}, Balance: {:.2}, Interest: {}%",
                self.name, self.balance, interest_rate
            ),
            AccountKind::Checking { .. } => {
                format!("[Saved] Checking: {}, Balance: {:.2}", self.name, self.balance)
            }
            AccountKind::Trust { .. } => format!(
                "[Saved] Trust: {}, Balance: {:.2}, Withdrawals left: {}",
                self.name,
                self.balance,
                self.withdrawals_left().unwrap_or(0)
            ),
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {:.2}", self.name, self.kind.label(), self.balance)?;
        match &self.kind {
            AccountKind::Savings { interest_rate } => write!(f, ", Interest: {}%", interest_rate),
            AccountKind::Trust { interest_rate, .. } => write!(
                f,
                ", Interest: {}%, Withdrawals left: {}",
                interest_rate,
                self.withdrawals_left().unwrap_or(0)
            ),
            AccountKind::Basic | AccountKind::Checking { .. } => Ok(()),
        }
    }
}

fn with_interest(amount: f64, interest_rate: f64) -> f64 {
    amount + amount * (interest_rate / 100.0)
}

fn debit(balance: &mut f64, required: f64) -> Result<f64> {
    if *balance < required {
        return Err(AppError::InsufficientFunds {
            balance: *balance,
            required,
        });
    }
    *balance -= required;
    Ok(required)
}
