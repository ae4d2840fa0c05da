use crate::domain::account::Account;
use crate::utils::error::{AppError, EntityKind, Result};
use crate::utils::validation::validate_positive_amount;

/// Moves `amount` from `sender` to `receiver` using each account's own rules.
///
/// The receiver is only credited after the sender's withdrawal succeeds. A
/// deposit cannot fail at that point because the amount is already known to be
/// positive, so there is no rollback path. Returns the amount credited to the
/// receiver, which differs from `amount` when the receiver earns interest.
pub fn transfer(sender: &mut Account, receiver: &mut Account, amount: f64) -> Result<f64> {
    validate_positive_amount(amount)?;
    sender.withdraw(amount)?;
    let credited = receiver.deposit(amount)?;
    tracing::info!(
        from = sender.name(),
        to = receiver.name(),
        amount,
        credited,
        "transfer completed"
    );
    Ok(credited)
}

/// Sum of both balances. Neither account is touched.
pub fn combined_balance(a: &Account, b: &Account) -> f64 {
    a.balance() + b.balance()
}

/// The accounts known to one interactive session.
#[derive(Debug, Clone, Default)]
pub struct Bank {
    accounts: Vec<Account>,
}

impl Bank {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// The four demo accounts the bank program starts with when no config is given.
    pub fn with_default_accounts() -> Self {
        Self::new(vec![
            Account::savings("Yousef", "0000", 3000.0, 4.5),
            Account::checking("Hana", "1111", 1500.0),
            Account::trust("Kareem", "2222", 8000.0, 5.0),
            Account::basic("Basic", "3333", 1000.0),
        ])
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Index of the account whose name and password both match exactly.
    pub fn login(&self, name: &str, password: &str) -> Result<usize> {
        match self
            .accounts
            .iter()
            .position(|a| a.name() == name && a.check_password(password))
        {
            Some(index) => {
                tracing::info!(account = name, "login succeeded");
                Ok(index)
            }
            None => {
                tracing::warn!(account = name, "login failed");
                Err(AppError::AuthenticationFailed {
                    username: name.to_string(),
                })
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<usize> {
        self.accounts.iter().position(|a| a.name() == name)
    }

    pub fn get(&self, index: usize) -> Option<&Account> {
        self.accounts.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Account> {
        self.accounts.get_mut(index)
    }

    /// Transfers from the account at `from` to the account named `recipient`.
    ///
    /// The recipient must exist and must not be the sender.
    pub fn transfer(&mut self, from: usize, recipient: &str, amount: f64) -> Result<f64> {
        if from >= self.accounts.len() {
            return Err(AppError::NotFound {
                entity: EntityKind::Account,
                key: from.to_string(),
            });
        }
        let to = match self.find(recipient) {
            Some(to) if to != from => to,
            _ => {
                return Err(AppError::InvalidRecipient {
                    name: recipient.to_string(),
                })
            }
        };

        let (sender, receiver) = if from < to {
            let (left, right) = self.accounts.split_at_mut(to);
            (&mut left[from], &mut right[0])
        } else {
            let (left, right) = self.accounts.split_at_mut(from);
            (&mut right[0], &mut left[to])
        };
        transfer(sender, receiver, amount)
    }
}
