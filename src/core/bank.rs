//! Bank application state and action handlers
//!
//! This module provides the `Bank`, which owns the account store, the session,
//! the process-wide sort flag and the display surface, and runs every user
//! action against them.
//!
//! Each handler either succeeds, mutating state and refreshing the display, or
//! returns a `BankError` without mutating anything and without touching the
//! display. Refusals are not surfaced to the user; they are only logged.
//!
//! A refresh shows the movements in chronological order whatever the sort flag
//! says. Only the sort toggle renders sorted rows.

use crate::core::account_store::AccountStore;
use crate::core::ledger::Summary;
use crate::core::renderer::render_movements;
use crate::core::session::Session;
use crate::core::traits::DisplaySurface;
use crate::types::{Account, Action, ActionOutcome, BankError, MovementRow, Pin};
use rust_decimal::Decimal;

/// One existing movement must reach the loan amount divided by this
const LOAN_COVER_DIVISOR: Decimal = Decimal::TEN;

/// Bank application state
///
/// Holds everything the handlers share. Handlers run one at a time to
/// completion; see [`crate::core::SharedBank`] for use from concurrent tasks.
#[derive(Debug)]
pub struct Bank<D: DisplaySurface> {
    store: AccountStore,
    session: Session,
    sorted: bool,
    display: D,
}

impl<D: DisplaySurface> Bank<D> {
    /// Create a bank over `accounts`, logged out and unsorted
    ///
    /// Cached balances are recomputed so they match the movements.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if an account's figures do not fit in a
    /// `Decimal`
    pub fn new(accounts: Vec<Account>, display: D) -> Result<Self, BankError> {
        Ok(Bank {
            store: AccountStore::from_accounts(accounts)?,
            session: Session::default(),
            sorted: false,
            display,
        })
    }

    /// Run one action
    ///
    /// Logs the outcome at `info` and a refusal at `debug`.
    pub fn dispatch(&mut self, action: Action) -> Result<ActionOutcome, BankError> {
        let name = action.name();
        let description = action.to_string();

        let result = match action {
            Action::Login { username, pin } => self.login(&username, pin),
            Action::Transfer { to, amount } => self.transfer(&to, amount),
            Action::Loan { amount } => self.request_loan(amount),
            Action::Close { username, pin } => self.close_account(&username, pin),
            Action::Sort => self.toggle_sort(),
        };

        match &result {
            Ok(outcome) => tracing::info!(action = name, ?outcome, "{}", description),
            Err(e) => tracing::debug!(action = name, "{} refused: {}", description, e),
        }

        result
    }

    /// Log in with a username and PIN
    ///
    /// On success the account becomes current, the application is shown with
    /// a welcome message and every figure is refreshed. The sort flag is left
    /// as it was.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredentials` if no account has this username or the PIN
    /// differs. The session is left unchanged.
    pub fn login(&mut self, username: &str, pin: Pin) -> Result<ActionOutcome, BankError> {
        let account = self
            .store
            .find(username)
            .filter(|account| account.pin == pin)
            .ok_or_else(|| BankError::invalid_credentials(username))?;

        let welcome = format!("Welcome back, {}", account.first_name());
        let username = account.username.clone();

        self.session.log_in(username.clone());
        self.display.set_welcome(&welcome);
        self.display.set_app_visible(true);
        self.update_ui(&username);

        Ok(ActionOutcome::LoggedIn { username })
    }

    /// Transfer `amount` from the current account to `to`
    ///
    /// The sender is debited before the recipient is credited. Only the
    /// sender's view is refreshed.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - `NotLoggedIn` / `SessionAccountMissing` without a current account
    /// - `InvalidAmount` if `amount` is not positive
    /// - `InsufficientFunds` if the sender's balance is below `amount`
    /// - `AccountNotFound` if no account is named `to`
    /// - `SelfTransfer` if `to` is the sender
    /// - `ArithmeticOverflow` if either account's figures would overflow
    pub fn transfer(&mut self, to: &str, amount: Decimal) -> Result<ActionOutcome, BankError> {
        let sender = self.current_account()?;
        let from = sender.username.clone();

        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(amount));
        }

        if sender.balance < amount {
            return Err(BankError::insufficient_funds(
                &from,
                sender.balance,
                amount,
            ));
        }

        let recipient = self
            .store
            .find(to)
            .ok_or_else(|| BankError::account_not_found(to))?;

        if recipient.username == from {
            return Err(BankError::self_transfer(&from));
        }
        let to = recipient.username.clone();

        // both sides are checked before either is mutated
        self.store.preview_movement("transfer", &from, -amount)?;
        self.store.preview_movement("transfer", &to, amount)?;

        self.store.push_movement("transfer", &from, -amount)?;
        self.store.push_movement("transfer", &to, amount)?;

        self.update_ui(&from);

        Ok(ActionOutcome::Transferred { from, to, amount })
    }

    /// Request a loan for the current account
    ///
    /// Granted when `amount` is positive and at least one existing movement is
    /// at least 10% of it. A granted loan is appended as a deposit.
    ///
    /// # Errors
    ///
    /// - `NotLoggedIn` / `SessionAccountMissing` without a current account
    /// - `InvalidAmount` if `amount` is not positive
    /// - `LoanNotEligible` if no movement covers 10% of `amount`
    /// - `ArithmeticOverflow` if the account's figures would overflow
    pub fn request_loan(&mut self, amount: Decimal) -> Result<ActionOutcome, BankError> {
        let account = self.current_account()?;
        let username = account.username.clone();

        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(amount));
        }

        let threshold = amount / LOAN_COVER_DIVISOR;
        if !account.movements.iter().any(|mov| *mov >= threshold) {
            return Err(BankError::loan_not_eligible(&username, amount));
        }

        self.store.push_movement("loan", &username, amount)?;
        self.update_ui(&username);

        Ok(ActionOutcome::LoanGranted { username, amount })
    }

    /// Close the current account
    ///
    /// Both the username and the PIN must match the current account. The
    /// account is removed from the store and the application is hidden. The
    /// session keeps the removed username.
    ///
    /// # Errors
    ///
    /// - `NotLoggedIn` / `SessionAccountMissing` without a current account
    /// - `CloseCredentialsMismatch` if either credential differs
    pub fn close_account(&mut self, username: &str, pin: Pin) -> Result<ActionOutcome, BankError> {
        let account = self.current_account()?;

        if account.username != username || account.pin != pin {
            return Err(BankError::CloseCredentialsMismatch);
        }
        let username = account.username.clone();

        let index = self
            .store
            .position(&username)
            .ok_or_else(|| BankError::account_not_found(&username))?;
        self.store.remove_at(index);

        self.display.set_app_visible(false);

        Ok(ActionOutcome::Closed { username })
    }

    /// Flip the sort flag and redraw the current account's movements
    ///
    /// Balance and summary figures are not touched.
    ///
    /// # Errors
    ///
    /// `NotLoggedIn` / `SessionAccountMissing` without a current account. The
    /// flag is not flipped in that case.
    pub fn toggle_sort(&mut self) -> Result<ActionOutcome, BankError> {
        let account = self.current_account()?;

        let sorted = !self.sorted;
        let rows: Vec<MovementRow> = render_movements(&account.movements, sorted).rows().collect();

        self.sorted = sorted;
        self.display.show_movements(&rows);

        Ok(ActionOutcome::SortToggled { sorted })
    }

    /// The current account, resolved against the store
    ///
    /// # Errors
    ///
    /// - `NotLoggedIn` before any successful login
    /// - `SessionAccountMissing` if the current account has been closed
    pub fn current_account(&self) -> Result<&Account, BankError> {
        let username = self.session.current().ok_or(BankError::NotLoggedIn)?;

        self.store
            .find(username)
            .ok_or_else(|| BankError::session_account_missing(username))
    }

    /// Redraw movements, balance and summary for an account
    fn update_ui(&mut self, username: &str) {
        let Some(account) = self.store.find(username) else {
            return;
        };

        // the store only holds accounts whose figures fit
        let Some(summary) = Summary::of(account) else {
            tracing::warn!(username, "account figures overflow, display not refreshed");
            return;
        };
        let rows: Vec<MovementRow> = render_movements(&account.movements, false).rows().collect();

        self.display.show_movements(&rows);
        self.display.set_balance(summary.balance);
        self.display.set_summary(&summary);
    }

    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current value of the process-wide sort flag
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Consume the bank, returning the store and the display
    pub fn into_parts(self) -> (AccountStore, D) {
        (self.store, self.display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::display::ScreenState;
    use crate::io::seed::default_accounts;
    use crate::types::{AccountType, MovementKind};

    fn bank() -> Bank<ScreenState> {
        Bank::new(default_accounts().unwrap(), ScreenState::new()).unwrap()
    }

    fn logged_in(username: &str, pin: Pin) -> Bank<ScreenState> {
        let mut bank = bank();
        bank.login(username, pin).unwrap();
        bank
    }

    fn balance_of(bank: &Bank<ScreenState>, username: &str) -> Decimal {
        bank.store().find(username).unwrap().balance
    }

    #[test]
    fn test_new_bank_is_logged_out_and_unsorted() {
        let bank = bank();

        assert_eq!(bank.session(), &Session::LoggedOut);
        assert!(!bank.is_sorted());
        assert_eq!(bank.store().accounts().len(), 4);
        assert!(!bank.display().app_visible);
    }

    #[test]
    fn test_login_shows_account() {
        let mut bank = bank();

        let outcome = bank.login("js", 1111).unwrap();
        assert_eq!(
            outcome,
            ActionOutcome::LoggedIn {
                username: "js".to_string()
            }
        );

        let screen = bank.display();
        assert!(screen.app_visible);
        assert_eq!(screen.welcome, "Welcome back, Jonas");
        assert_eq!(screen.balance, Some(Decimal::from(3840)));
        assert_eq!(
            screen.summary,
            Some(Summary {
                balance: Decimal::from(3840),
                income: Decimal::from(5020),
                expenses: Decimal::from(1180),
                interest: Decimal::new(594, 1),
            })
        );
        assert_eq!(screen.rows.len(), 8);
        assert_eq!(screen.rows[0].position, 8);
        assert_eq!(screen.rows[0].amount, Decimal::from(1300));
    }

    #[test]
    fn test_login_three_word_owner() {
        let mut bank = bank();
        assert!(bank.login("stw", 3333).is_ok());
        assert_eq!(bank.display().welcome, "Welcome back, Steven");
    }

    #[test]
    fn test_login_with_wrong_pin_changes_nothing() {
        let mut bank = bank();

        let result = bank.login("js", 2222);

        assert_eq!(result, Err(BankError::invalid_credentials("js")));
        assert_eq!(bank.session(), &Session::LoggedOut);
        assert_eq!(bank.display(), &ScreenState::new());
    }

    #[test]
    fn test_login_with_unknown_username_changes_nothing() {
        let mut bank = logged_in("ss", 4444);

        let result = bank.login("zz", 1111);

        assert!(matches!(result, Err(BankError::InvalidCredentials { .. })));
        assert_eq!(bank.session().current(), Some("ss"));
    }

    #[test]
    fn test_transfer_moves_funds() {
        let mut bank = logged_in("js", 1111);

        let outcome = bank.transfer("jd", Decimal::from(100)).unwrap();

        assert_eq!(
            outcome,
            ActionOutcome::Transferred {
                from: "js".to_string(),
                to: "jd".to_string(),
                amount: Decimal::from(100),
            }
        );
        assert_eq!(balance_of(&bank, "js"), Decimal::from(3740));
        assert_eq!(balance_of(&bank, "jd"), Decimal::from(11820));
        assert_eq!(
            bank.store().find("js").unwrap().movements.last(),
            Some(&Decimal::from(-100))
        );
        assert_eq!(
            bank.store().find("jd").unwrap().movements.last(),
            Some(&Decimal::from(100))
        );

        // only the sender is on screen
        let screen = bank.display();
        assert_eq!(screen.balance, Some(Decimal::from(3740)));
        assert_eq!(screen.rows[0].amount, Decimal::from(-100));
        assert_eq!(screen.rows[0].kind, MovementKind::Withdrawal);
    }

    #[test]
    fn test_transfer_from_balance_1000() {
        let accounts = vec![
            Account::new("Ann Lee", vec![Decimal::from(1000)], Decimal::ONE, 1, AccountType::Basic)
                .unwrap(),
            Account::new("Bob Ray", vec![Decimal::from(50)], Decimal::ONE, 2, AccountType::Basic)
                .unwrap(),
        ];
        let mut bank = Bank::new(accounts, ScreenState::new()).unwrap();
        bank.login("al", 1).unwrap();

        bank.transfer("br", Decimal::from(100)).unwrap();

        assert_eq!(balance_of(&bank, "al"), Decimal::from(900));
        assert_eq!(balance_of(&bank, "br"), Decimal::from(150));
    }

    #[test]
    fn test_transfer_refused_when_recipient_would_overflow() {
        let accounts = vec![
            Account::new("Ann Lee", vec![Decimal::from(100)], Decimal::ONE, 1, AccountType::Basic)
                .unwrap(),
            Account::new(
                "Bob Ray",
                vec![Decimal::MAX - Decimal::from(5)],
                Decimal::ONE,
                2,
                AccountType::Basic,
            )
            .unwrap(),
        ];
        let mut bank = Bank::new(accounts, ScreenState::new()).unwrap();
        bank.login("al", 1).unwrap();
        let screen_before = bank.display().clone();

        let result = bank.transfer("br", Decimal::from(50));

        assert_eq!(result, Err(BankError::arithmetic_overflow("transfer", "br")));
        // the sender was not debited
        assert_eq!(bank.store().find("al").unwrap().movements, vec![Decimal::from(100)]);
        assert_eq!(balance_of(&bank, "al"), Decimal::from(100));
        assert_eq!(bank.store().find("br").unwrap().movements.len(), 1);
        assert_eq!(bank.display(), &screen_before);
    }

    #[test]
    fn test_loan_chain_overflow_is_refused() {
        let mut bank = logged_in("ss", 4444);

        // each loan is covered by the previous one
        for exponent in 4..=28 {
            let amount = Decimal::from_i128_with_scale(10_i128.pow(exponent), 0);
            assert!(bank.request_loan(amount).is_ok(), "loan of {} refused", amount);
        }
        let before = bank.store().find("ss").unwrap().clone();
        let screen_before = bank.display().clone();

        let result = bank.dispatch(Action::Loan {
            amount: Decimal::MAX,
        });

        assert_eq!(result, Err(BankError::arithmetic_overflow("loan", "ss")));
        assert_eq!(bank.store().find("ss"), Some(&before));
        assert_eq!(before.movements.len(), 30);
        assert_eq!(bank.display(), &screen_before);
    }

    #[test]
    fn test_new_bank_rejects_overflowing_account() {
        let mut account =
            Account::new("Ann Lee", vec![Decimal::ONE], Decimal::ONE, 1, AccountType::Basic)
                .unwrap();
        account.movements.push(Decimal::MAX);

        let result = Bank::new(vec![account], ScreenState::new());
        assert!(matches!(result, Err(BankError::ArithmeticOverflow { .. })));
    }

    #[test]
    fn test_transfer_entire_balance_is_allowed() {
        let mut bank = logged_in("stw", 3333);

        assert!(bank.transfer("js", Decimal::from(10)).is_ok());
        assert_eq!(balance_of(&bank, "stw"), Decimal::ZERO);
    }

    #[test]
    fn test_transfer_refusals_change_nothing() {
        let cases = [
            ("jd", Decimal::ZERO, BankError::invalid_amount(Decimal::ZERO)),
            ("jd", Decimal::from(-5), BankError::invalid_amount(Decimal::from(-5))),
            (
                "jd",
                Decimal::from(5000),
                BankError::insufficient_funds("js", Decimal::from(3840), Decimal::from(5000)),
            ),
            ("zz", Decimal::from(100), BankError::account_not_found("zz")),
            ("js", Decimal::from(100), BankError::self_transfer("js")),
        ];

        for (to, amount, expected) in cases {
            let mut bank = logged_in("js", 1111);
            let store_before = bank.store().clone();
            let screen_before = bank.display().clone();

            assert_eq!(bank.transfer(to, amount), Err(expected));
            assert_eq!(bank.store(), &store_before);
            assert_eq!(bank.display(), &screen_before);
        }
    }

    #[test]
    fn test_transfer_requires_login() {
        let mut bank = bank();
        assert_eq!(
            bank.transfer("jd", Decimal::from(1)),
            Err(BankError::NotLoggedIn)
        );
    }

    #[test]
    fn test_loan_granted_when_a_movement_covers_ten_percent() {
        let mut bank = logged_in("js", 1111);

        // largest movement is 3000, so up to 30000 is allowed
        let outcome = bank.request_loan(Decimal::from(30000)).unwrap();

        assert_eq!(
            outcome,
            ActionOutcome::LoanGranted {
                username: "js".to_string(),
                amount: Decimal::from(30000),
            }
        );
        assert_eq!(balance_of(&bank, "js"), Decimal::from(33840));
        assert_eq!(bank.display().balance, Some(Decimal::from(33840)));
    }

    #[test]
    fn test_loan_refused_without_cover() {
        let mut bank = logged_in("js", 1111);

        let result = bank.request_loan(Decimal::from(30001));

        assert_eq!(
            result,
            Err(BankError::loan_not_eligible("js", Decimal::from(30001)))
        );
        assert_eq!(balance_of(&bank, "js"), Decimal::from(3840));
    }

    #[test]
    fn test_loan_refused_for_non_positive_amount() {
        let mut bank = logged_in("ss", 4444);
        assert_eq!(
            bank.request_loan(Decimal::ZERO),
            Err(BankError::invalid_amount(Decimal::ZERO))
        );
    }

    #[test]
    fn test_close_removes_exactly_one_account() {
        let mut bank = logged_in("jd", 2222);

        let outcome = bank.close_account("jd", 2222).unwrap();

        assert_eq!(
            outcome,
            ActionOutcome::Closed {
                username: "jd".to_string()
            }
        );
        let usernames: Vec<&str> = bank
            .store()
            .accounts()
            .iter()
            .map(|a| a.username.as_str())
            .collect();
        assert_eq!(usernames, vec!["js", "stw", "ss"]);
        assert!(!bank.display().app_visible);
        assert_eq!(balance_of(&bank, "js"), Decimal::from(3840));
    }

    #[test]
    fn test_close_keeps_stale_session() {
        let mut bank = logged_in("jd", 2222);
        bank.close_account("jd", 2222).unwrap();

        assert_eq!(bank.session().current(), Some("jd"));
        assert_eq!(
            bank.request_loan(Decimal::from(10)),
            Err(BankError::session_account_missing("jd"))
        );
        assert_eq!(
            bank.toggle_sort(),
            Err(BankError::session_account_missing("jd"))
        );
    }

    #[test]
    fn test_close_with_mismatched_credentials() {
        let mut bank = logged_in("jd", 2222);

        assert_eq!(
            bank.close_account("jd", 1111),
            Err(BankError::CloseCredentialsMismatch)
        );
        // another existing account's credentials do not close it either
        assert_eq!(
            bank.close_account("js", 1111),
            Err(BankError::CloseCredentialsMismatch)
        );
        assert_eq!(bank.store().accounts().len(), 4);
        assert!(bank.display().app_visible);
    }

    #[test]
    fn test_toggle_sort_twice_restores_order() {
        let mut bank = logged_in("js", 1111);
        let original = bank.display().rows.clone();

        bank.toggle_sort().unwrap();
        let sorted = bank.display().rows.clone();
        assert_ne!(sorted, original);
        assert_eq!(sorted[0].amount, Decimal::from(3000));
        assert_eq!(sorted[0].position, 4);

        assert_eq!(
            bank.toggle_sort().unwrap(),
            ActionOutcome::SortToggled { sorted: false }
        );
        assert_eq!(bank.display().rows, original);
    }

    #[test]
    fn test_toggle_sort_leaves_figures_alone() {
        let mut bank = logged_in("js", 1111);
        let before = bank.display().clone();

        bank.toggle_sort().unwrap();

        let after = bank.display();
        assert_eq!(after.balance, before.balance);
        assert_eq!(after.summary, before.summary);
        assert_eq!(after.welcome, before.welcome);
        assert_eq!(after.movement_refreshes, before.movement_refreshes + 1);
        assert!(bank.is_sorted());
    }

    #[test]
    fn test_sort_flag_persists_across_logins() {
        let mut bank = logged_in("js", 1111);
        bank.toggle_sort().unwrap();

        bank.login("ss", 4444).unwrap();
        assert!(bank.is_sorted());

        // login redraws chronologically, the next toggle unsorts
        assert_eq!(bank.display().rows[0].amount, Decimal::from(90));
        assert_eq!(
            bank.toggle_sort().unwrap(),
            ActionOutcome::SortToggled { sorted: false }
        );
    }

    #[test]
    fn test_toggle_sort_requires_login() {
        let mut bank = bank();
        assert_eq!(bank.toggle_sort(), Err(BankError::NotLoggedIn));
        assert!(!bank.is_sorted());
    }

    #[test]
    fn test_dispatch_routes_actions() {
        let mut bank = bank();

        let login = Action::Login {
            username: "ss".to_string(),
            pin: 4444,
        };
        assert!(bank.dispatch(login).is_ok());
        assert!(bank
            .dispatch(Action::Loan {
                amount: Decimal::from(1000)
            })
            .is_ok());
        assert_eq!(
            bank.dispatch(Action::Sort),
            Ok(ActionOutcome::SortToggled { sorted: true })
        );
        assert_eq!(balance_of(&bank, "ss"), Decimal::from(3270));
    }
}
