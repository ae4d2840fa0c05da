use schoolbank::core::bank::{combined_balance, transfer};
use schoolbank::core::{Account, AccountKind};
use schoolbank::{AppError, Bank};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn every_kind(balance: f64) -> Vec<Account> {
    vec![
        Account::basic("basic", "p", balance),
        Account::savings("savings", "p", balance, 4.5),
        Account::checking("checking", "p", balance),
        Account::trust("trust", "p", balance, 5.0),
    ]
}

#[test]
fn test_non_positive_amounts_have_no_side_effects() {
    for mut account in every_kind(500.0) {
        assert!(matches!(
            account.deposit(0.0),
            Err(AppError::NonPositiveAmount { .. })
        ));
        assert!(account.deposit(-5.0).is_err());
        assert!(account.withdraw(0.0).is_err());
        assert_close(account.balance(), 500.0);
        assert_eq!(account.withdrawals_left().unwrap_or(3), 3);
    }
}

#[test]
fn test_savings_interest_on_deposit_only() {
    let mut account = Account::savings("Yousef", "0000", 1000.0, 4.5);

    account.deposit(100.0).unwrap();
    assert_close(account.balance(), 1104.5);

    account.withdraw(104.5).unwrap();
    assert_close(account.balance(), 1000.0);
}

#[test]
fn test_checking_fee_threshold() {
    let mut short = Account::checking("Hana", "1111", 51.49);
    assert!(matches!(
        short.withdraw(50.0),
        Err(AppError::InsufficientFunds { .. })
    ));
    assert_close(short.balance(), 51.49);

    let mut exact = Account::checking("Hana", "1111", 51.5);
    assert_close(exact.withdraw(50.0).unwrap(), 51.5);
    assert_close(exact.balance(), 0.0);

    let mut plenty = Account::checking("Hana", "1111", 1500.0);
    plenty.withdraw(50.0).unwrap();
    assert_close(plenty.balance(), 1448.5);
}

#[test]
fn test_trust_fourth_withdrawal_rejected() {
    let mut trust = Account::trust("Kareem", "2222", 8000.0, 5.0);

    trust.withdraw(1000.0).unwrap();
    trust.withdraw(500.0).unwrap();
    trust.withdraw(250.0).unwrap();
    let balance = trust.balance();
    assert_close(balance, 6250.0);

    // well under 20% of the balance, still refused
    assert!(matches!(
        trust.withdraw(1.0),
        Err(AppError::WithdrawalLimitReached { max: 3 })
    ));
    assert_close(trust.balance(), balance);
    assert_eq!(trust.withdrawals_left(), Some(0));
}

#[test]
fn test_trust_withdrawal_cap_is_twenty_percent_of_current_balance() {
    let mut trust = Account::trust("Kareem", "2222", 8000.0, 5.0);

    assert!(matches!(
        trust.withdraw(1600.01),
        Err(AppError::WithdrawalCapExceeded { .. })
    ));
    trust.withdraw(1600.0).unwrap();
    // the cap follows the shrinking balance: 20% of 6400
    assert!(trust.withdraw(1300.0).is_err());
    assert!(trust.withdraw(1280.0).is_ok());
}

#[test]
fn test_trust_bonus_threshold_then_interest() {
    let mut trust = Account::trust("Kareem", "2222", 0.0, 5.0);

    let credited = trust.deposit(5000.0).unwrap();

    assert_close(credited, (5000.0 + 50.0) * 1.05);
    assert_close(trust.balance(), 5302.5);
}

#[test]
fn test_transfer_scenario() {
    let mut sender = Account::basic("sender", "p", 1000.0);
    let mut receiver = Account::savings("receiver", "p", 200.0, 4.5);

    let credited = transfer(&mut sender, &mut receiver, 300.0).unwrap();

    assert_close(sender.balance(), 700.0);
    assert_close(credited, 313.5);
    assert_close(receiver.balance(), 513.5);
}

#[test]
fn test_transfer_failure_leaves_both_balances() {
    let mut sender = Account::trust("sender", "p", 1000.0, 5.0);
    let mut receiver = Account::basic("receiver", "p", 200.0);

    // above the trust cap of 200
    assert!(transfer(&mut sender, &mut receiver, 300.0).is_err());

    assert_close(sender.balance(), 1000.0);
    assert_close(receiver.balance(), 200.0);
    assert_eq!(sender.withdrawals_left(), Some(3));
}

#[test]
fn test_combined_balance() {
    let bank = Bank::with_default_accounts();
    let yousef = &bank.accounts()[0];
    let hana = &bank.accounts()[1];

    assert_close(combined_balance(yousef, hana), 4500.0);
    assert_close(yousef.balance(), 3000.0);
}

#[test]
fn test_default_accounts() {
    let bank = Bank::with_default_accounts();
    let kinds: Vec<&str> = bank.accounts().iter().map(|a| a.kind().label()).collect();
    assert_eq!(kinds, vec!["Savings", "Checking", "Trust", "General"]);
    assert!(matches!(
        bank.accounts()[0].kind(),
        AccountKind::Savings { interest_rate } if *interest_rate == 4.5
    ));
    assert_eq!(bank.login("Kareem", "2222").unwrap(), 2);
}

#[test]
fn test_bank_transfer_by_recipient_name() {
    let mut bank = Bank::with_default_accounts();
    let kareem = bank.login("Kareem", "2222").unwrap();

    bank.transfer(kareem, "Basic", 300.0).unwrap();

    assert_close(bank.accounts()[2].balance(), 7700.0);
    assert_close(bank.accounts()[3].balance(), 1300.0);
    assert!(matches!(
        bank.transfer(kareem, "Kareem", 10.0),
        Err(AppError::InvalidRecipient { .. })
    ));
}
