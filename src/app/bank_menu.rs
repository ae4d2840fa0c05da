use crate::app::input::{parse_number, prompt_amount, prompt_line, Step};
use crate::core::bank::Bank;
use crate::domain::ports::Console;
use crate::utils::error::{AppError, Result};

const MENU: &str = "\n=== Bank Menu ===
1. Show account
2. Deposit to your account
3. Withdraw from your account
4. Save your account
5. Transfer to another account
0. Exit";

/// Logs a user in and runs the bank menu for that account.
///
/// A failed login ends the session with [`AppError::AuthenticationFailed`].
pub fn run_bank_session<C: Console>(console: &mut C, bank: &mut Bank) -> Result<()> {
    let current = login(console, bank)?;
    let name = bank
        .get(current)
        .map(|account| account.name().to_string())
        .unwrap_or_default();

    let session_id = format!("session_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"));
    let span = tracing::info_span!("bank_session", %session_id, account = %name);
    let _guard = span.enter();

    console.write_line(&format!("Welcome, {}!", name))?;

    let mut session = BankSession {
        console,
        bank,
        current,
    };
    loop {
        session.console.write_line(MENU)?;
        let Some(line) = prompt_line(session.console, "Choice: ")? else {
            break;
        };
        let step = match parse_number::<u32>(&line).ok() {
            Some(1) => session.show()?,
            Some(2) => session.deposit()?,
            Some(3) => session.withdraw()?,
            Some(4) => session.save()?,
            Some(5) => session.transfer()?,
            Some(0) => {
                session.console.write_line("Goodbye!")?;
                Step::Quit
            }
            _ => {
                session.console.write_line("Invalid choice.")?;
                Step::Continue
            }
        };
        if step == Step::Quit {
            break;
        }
    }
    tracing::info!("bank session ended");
    Ok(())
}

fn login<C: Console>(console: &mut C, bank: &Bank) -> Result<usize> {
    console.write_line("=== Login ===")?;
    let username = prompt_line(console, "Enter username: ")?;
    let password = match username {
        Some(_) => prompt_line(console, "Enter password: ")?,
        None => None,
    };

    let result = match (username, password) {
        (Some(username), Some(password)) => bank.login(&username, &password),
        (username, _) => Err(AppError::AuthenticationFailed {
            username: username.unwrap_or_default(),
        }),
    };
    if result.is_err() {
        console.write_line("Login failed. Exiting...")?;
    }
    result
}

/// Explicit session context: the account list plus the logged-in account.
struct BankSession<'a, C: Console> {
    console: &'a mut C,
    bank: &'a mut Bank,
    current: usize,
}

impl<C: Console> BankSession<'_, C> {
    fn current_name(&self) -> String {
        self.bank
            .get(self.current)
            .map(|account| account.name().to_string())
            .unwrap_or_default()
    }

    fn show(&mut self) -> Result<Step> {
        self.console.write_line("\n=== Account Info ===")?;
        if let Some(account) = self.bank.get(self.current) {
            self.console.write_line(&account.to_string())?;
        }
        Ok(Step::Continue)
    }

    fn deposit(&mut self) -> Result<Step> {
        let Some(amount) = prompt_amount(self.console, "Enter deposit amount: ")? else {
            return Ok(Step::Quit);
        };
        self.console
            .write_line(&format!("\n--- Depositing {} ---", amount))?;

        let name = self.current_name();
        let result = match self.bank.get_mut(self.current) {
            Some(account) => account.deposit(amount),
            None => return Ok(Step::Quit),
        };
        let line = match result {
            Ok(_) => format!("Deposited {} to {}", amount, name),
            Err(e) => format!("Failed to deposit to {}: {}", name, e),
        };
        self.console.write_line(&line)?;
        Ok(Step::Continue)
    }

    fn withdraw(&mut self) -> Result<Step> {
        let Some(amount) = prompt_amount(self.console, "Enter withdrawal amount: ")? else {
            return Ok(Step::Quit);
        };
        self.console
            .write_line(&format!("\n--- Withdrawing {} ---", amount))?;

        let name = self.current_name();
        let result = match self.bank.get_mut(self.current) {
            Some(account) => account.withdraw(amount),
            None => return Ok(Step::Quit),
        };
        let line = match result {
            Ok(_) => format!("Withdrew {} from {}", amount, name),
            Err(e) => format!("Failed to withdraw from {}: {}", name, e),
        };
        self.console.write_line(&line)?;
        Ok(Step::Continue)
    }

    fn save(&mut self) -> Result<Step> {
        self.console.write_line("\n--- Saving Account ---")?;
        if let Some(account) = self.bank.get(self.current) {
            let summary = account.save_summary();
            tracing::info!(%summary, "account saved");
            self.console.write_line(&summary)?;
        }
        Ok(Step::Continue)
    }

    fn transfer(&mut self) -> Result<Step> {
        let Some(recipient) = prompt_line(self.console, "Enter recipient's name: ")? else {
            return Ok(Step::Quit);
        };
        match self.bank.find(&recipient) {
            Some(index) if index != self.current => {}
            _ => {
                self.console.write_line("Invalid recipient.")?;
                return Ok(Step::Continue);
            }
        }

        let Some(amount) = prompt_amount(self.console, "Enter transfer amount: ")? else {
            return Ok(Step::Quit);
        };
        let name = self.current_name();
        self.console.write_line(&format!(
            "\n--- Transferring {} from {} to {} ---",
            amount, name, recipient
        ))?;

        match self.bank.transfer(self.current, &recipient, amount) {
            Ok(_) => self.console.write_line("Transfer successful.")?,
            Err(e) => self
                .console
                .write_line(&format!("Transfer failed: {}.", e))?,
        }
        Ok(Step::Continue)
    }
}
