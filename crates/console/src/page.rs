//! Everything the customer screen shows at a given moment.

use std::time::Instant;

use crate::banner::Banner;
use crate::form::CustomerForm;
use crate::model::{CustomerRecord, RecordId};

/// Whether submitting the form creates a record or updates one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit {
        id: RecordId,
    },
}

impl FormMode {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Create => "Add New Customer",
            Self::Edit { .. } => "Edit Customer",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Create => "Save Customer",
            Self::Edit { .. } => "Update Customer",
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit { .. })
    }
}

/// Screen state: table, form, mode, banners and spinner.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub form: CustomerForm,
    pub mode: FormMode,
    /// Records from the last successful list load
    pub customers: Vec<CustomerRecord>,
    pub loading: bool,
    pub error: Option<Banner>,
    pub success: Option<Banner>,
    /// Native-constraint message from the last rejected submit
    pub validation: Option<String>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_empty_state(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(Banner::error(message));
    }

    pub fn show_success(&mut self, message: impl Into<String>) {
        self.success = Some(Banner::success(message));
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn dismiss_success(&mut self) {
        self.success = None;
    }

    /// Hide banners whose display time has run out.
    pub fn expire_banners(&mut self, now: Instant) {
        if self.error.as_ref().is_some_and(|b| b.is_expired(now)) {
            self.error = None;
        }
        if self.success.as_ref().is_some_and(|b| b.is_expired(now)) {
            self.success = None;
        }
    }

    /// Clear the form and return to create mode.
    pub fn reset_form(&mut self) {
        self.form.reset();
        self.mode = FormMode::Create;
        self.validation = None;
    }

    /// Load a fetched record into the form and switch to edit mode.
    pub fn enter_edit(&mut self, id: RecordId, record: &CustomerRecord) {
        self.form.fill(&id, record);
        self.mode = FormMode::Edit { id };
        self.validation = None;
    }

    pub fn set_customers(&mut self, customers: Vec<CustomerRecord>) {
        self.customers = customers;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::banner::{BannerKind, BANNER_TIMEOUT};

    #[test]
    fn test_mode_labels() {
        let edit = FormMode::Edit {
            id: RecordId::from("5"),
        };

        assert_eq!(FormMode::Create.title(), "Add New Customer");
        assert_eq!(FormMode::Create.submit_label(), "Save Customer");
        assert_eq!(edit.title(), "Edit Customer");
        assert_eq!(edit.submit_label(), "Update Customer");
        assert!(edit.is_edit());
    }

    #[test]
    fn test_empty_state_follows_customer_list() {
        let mut page = Page::new();
        assert!(page.show_empty_state());

        page.set_customers(vec![CustomerRecord::default()]);
        assert!(!page.show_empty_state());
    }

    #[test]
    fn test_enter_edit_then_reset() {
        let mut page = Page::new();
        let record = CustomerRecord {
            name: Some("Bob".to_string()),
            email: Some("bob@example.com".to_string()),
            ..Default::default()
        };

        page.enter_edit(RecordId::from("5"), &record);
        assert_eq!(page.form.id, "5");
        assert!(page.mode.is_edit());

        page.reset_form();
        assert_eq!(page.form, CustomerForm::default());
        assert_eq!(page.mode, FormMode::Create);
    }

    #[test]
    fn test_new_banner_restarts_countdown() {
        let start = Instant::now();
        let mut page = Page::new();
        page.success = Some(Banner::at(BannerKind::Success, "first", start));

        // replaced four seconds in
        let replaced_at = start + Duration::from_secs(4);
        page.success = Some(Banner::at(BannerKind::Success, "second", replaced_at));

        page.expire_banners(start + BANNER_TIMEOUT);
        assert_eq!(page.success.as_ref().map(|b| b.message.as_str()), Some("second"));

        page.expire_banners(replaced_at + BANNER_TIMEOUT);
        assert!(page.success.is_none());
    }

    #[test]
    fn test_banners_expire_independently() {
        let start = Instant::now();
        let mut page = Page::new();
        page.error = Some(Banner::at(BannerKind::Error, "old", start));
        page.success = Some(Banner::at(
            BannerKind::Success,
            "new",
            start + Duration::from_secs(3),
        ));

        page.expire_banners(start + BANNER_TIMEOUT);

        assert!(page.error.is_none());
        assert!(page.success.is_some());
    }
}
