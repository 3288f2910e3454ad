//! Customer console.
//!
//! The controller behind the customer-record CRUD screen: it fetches the
//! record list from the REST API, keeps the page state (table, form, mode,
//! banners, spinner) and renders it as HTML or plain text. Every user action
//! maps to a single request followed by a re-render.
//!
//! - **api**: REST client trait and its reqwest implementation
//! - **model**: wire records and request payloads
//! - **form**: the create/edit form and its native constraints
//! - **banner**: transient success/error messages
//! - **page**: everything the screen shows
//! - **controller**: user actions wired to API calls
//! - **render**: HTML and text output
//! - **escape**: HTML escaping

pub mod api;
pub mod banner;
pub mod config;
pub mod controller;
pub mod escape;
pub mod form;
pub mod model;
pub mod page;
pub mod render;

pub use api::{ApiError, CustomerApi, HttpCustomerApi, Operation};
pub use banner::{Banner, BannerKind, BANNER_TIMEOUT};
pub use config::ConsoleConfig;
pub use controller::{Confirm, CustomerController, Outcome, DELETE_CONFIRMATION};
pub use escape::escape_html;
pub use form::CustomerForm;
pub use model::{CustomerPayload, CustomerRecord, RecordId};
pub use page::{FormMode, Page};
