//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use std::time::Duration;

use tracing::warn;

use crate::config::Settings;
use crate::models::Expense;
use crate::reports::CategorySummary;
use crate::services::ExpenseService;
use crate::storage::RecordStore;

use super::dialogs::expense::ExpenseFormState;
use super::widgets::{Notification, NotificationQueue};

/// Errors stay on screen longer than confirmations
const ERROR_DURATION: Duration = Duration::from_secs(6);

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    Summary,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Service over the record store
    pub service: ExpenseService<&'a dyn RecordStore>,

    /// Application settings
    pub settings: &'a Settings,

    /// Where the records live, shown in the header
    pub source: String,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Add form state
    pub expense_form: ExpenseFormState,

    /// Records shown in the table, in file order
    pub expenses: Vec<Expense>,

    /// Selected row in the table
    pub selected_index: usize,

    /// Summary shown by the summary popup; `None` when there is nothing to show
    pub summary: Option<CategorySummary>,

    /// Status bar messages
    pub notifications: NotificationQueue,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(store: &'a dyn RecordStore, settings: &'a Settings) -> Self {
        Self {
            service: ExpenseService::new(store),
            settings,
            source: String::new(),
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            expense_form: ExpenseFormState::new(&settings.category_hint()),
            expenses: Vec::new(),
            selected_index: 0,
            summary: None,
            notifications: NotificationQueue::new(),
        }
    }

    /// Set the store location shown in the header
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Queue a status bar message
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Queue an error message that outlasts ordinary notifications
    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notify(Notification::error(message).with_duration(ERROR_DURATION));
    }

    /// Reload the table from the store, keeping the selection in range.
    ///
    /// Returns whether the reload succeeded.
    pub fn refresh_expenses(&mut self) -> bool {
        match self.service.list() {
            Ok(expenses) => {
                self.expenses = expenses;
                self.selected_index = self
                    .selected_index
                    .min(self.expenses.len().saturating_sub(1));
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to reload expenses");
                self.notify_error(e.to_string());
                false
            }
        }
    }

    /// Reload on request and report how many records were read
    pub fn reload(&mut self) {
        if self.refresh_expenses() {
            let message = format!("Reloaded {} expenses", self.expenses.len());
            self.notify(Notification::info(message));
        }
    }

    /// Open a fresh add form
    pub fn open_add_form(&mut self) {
        self.expense_form.reset();
        self.open_dialog(ActiveDialog::AddExpense);
    }

    /// Validate and persist the add form.
    ///
    /// Validation failures stay in the form; the store is only touched when
    /// every field is present and the amount parses.
    pub fn submit_expense(&mut self) {
        let input = self.expense_form.input();
        match self.service.add_required(&input) {
            Ok(_) => {
                self.notify(Notification::success("Expense added successfully"));
                self.expense_form.reset();
                self.refresh_expenses();
                self.selected_index = self.expenses.len().saturating_sub(1);
            }
            Err(e) if e.is_validation() => {
                self.expense_form.set_error(e.user_message());
            }
            Err(e) => {
                warn!(error = %e, "failed to add expense");
                self.expense_form.set_error(e.to_string());
            }
        }
    }

    /// Rebuild the summary and show the summary popup
    pub fn open_summary(&mut self) {
        match self.service.summarize() {
            Ok(summary) => {
                self.summary = summary;
                self.open_dialog(ActiveDialog::Summary);
            }
            Err(e) => {
                warn!(error = %e, "failed to summarize expenses");
                self.notify_error(e.to_string());
            }
        }
    }

    /// Periodic housekeeping
    pub fn on_tick(&mut self) {
        self.notifications.remove_expired();
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.expenses.len() {
            self.selected_index += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.expenses.len().saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::CsvExpenseStore;
    use crate::tui::widgets::NotificationType;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, CsvExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = CsvExpenseStore::new(temp_dir.path().join("expenses.csv"));
        (temp_dir, store)
    }

    fn fill_form(app: &mut App, date: &str, category: &str, amount: &str) {
        app.open_add_form();
        let form = &mut app.expense_form;
        form.date_input.clear();
        for c in date.chars() {
            form.date_input.insert(c);
        }
        for c in category.chars() {
            form.category_input.insert(c);
        }
        for c in amount.chars() {
            form.amount_input.insert(c);
        }
    }

    #[test]
    fn test_submit_valid_expense() {
        let (_temp_dir, store) = create_test_store();
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);

        fill_form(&mut app, "2024-01-01", "Food", "12.5");
        app.submit_expense();

        assert_eq!(
            app.expenses,
            vec![Expense::new("2024-01-01", "Food", 12.5)]
        );
        assert_eq!(
            app.notifications.current().unwrap().message,
            "Expense added successfully"
        );
        assert!(app.expense_form.category_input.value().is_empty());
        assert!(app.expense_form.amount_input.value().is_empty());
        assert!(app.expense_form.error_message.is_none());
    }

    #[test]
    fn test_submit_missing_field() {
        let (_temp_dir, store) = create_test_store();
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);

        fill_form(&mut app, "2024-01-01", "", "12.5");
        app.submit_expense();

        assert_eq!(
            app.expense_form.error_message.as_deref(),
            Some("All fields are required")
        );
        assert!(!store.path().exists());
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn test_submit_invalid_amount() {
        let (_temp_dir, store) = create_test_store();
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);

        fill_form(&mut app, "2024-01-01", "Food", "twelve");
        app.submit_expense();

        assert_eq!(
            app.expense_form.error_message.as_deref(),
            Some("Invalid amount")
        );
        assert!(app.expenses.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_open_summary() {
        let (_temp_dir, store) = create_test_store();
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);

        app.open_summary();
        assert_eq!(app.active_dialog, ActiveDialog::Summary);
        assert!(app.summary.is_none());

        fill_form(&mut app, "2024-01-01", "Food", "10");
        app.submit_expense();
        app.open_summary();

        let summary = app.summary.as_ref().unwrap();
        assert_eq!(summary.total(), 10.0);
    }

    #[test]
    fn test_reload_reports_count() {
        let (_temp_dir, store) = create_test_store();
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);
        std::fs::write(store.path(), "2024-01-01,Food,1.0\n2024-01-02,Food,2.0\n").unwrap();

        app.reload();

        assert_eq!(app.expenses.len(), 2);
        let current = app.notifications.current().unwrap();
        assert_eq!(current.message, "Reloaded 2 expenses");
        assert_eq!(current.notification_type, NotificationType::Info);
    }

    #[test]
    fn test_failed_summary_is_notified() {
        let (_temp_dir, store) = create_test_store();
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);
        std::fs::write(store.path(), "2024-01-01,Rent,1e308\n2024-01-02,Rent,1e308\n").unwrap();

        app.open_summary();

        assert_eq!(app.active_dialog, ActiveDialog::None);
        let current = app.notifications.current().unwrap();
        assert_eq!(current.notification_type, NotificationType::Error);
        assert!(current.message.contains("too large to report"));
        assert!(!current.is_expired());
    }

    #[test]
    fn test_selection_bounds() {
        let (_temp_dir, store) = create_test_store();
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);

        app.move_down();
        assert_eq!(app.selected_index, 0);

        fill_form(&mut app, "2024-01-01", "Food", "1");
        app.submit_expense();
        fill_form(&mut app, "2024-01-02", "Food", "2");
        app.submit_expense();
        assert_eq!(app.selected_index, 1);

        app.move_down();
        assert_eq!(app.selected_index, 1);
        app.select_first();
        app.move_up();
        assert_eq!(app.selected_index, 0);
        app.select_last();
        assert_eq!(app.selected_index, 1);
    }
}
