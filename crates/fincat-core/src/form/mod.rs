//! Product form state machine.
//!
//! [`ProductForm`] models the create/edit screen: per-field synchronous
//! validation, the debounced asynchronous id-uniqueness probe, the derived
//! revision date, and submission with mode-dependent dispatch. The mode is
//! fixed at construction and never changes afterwards.

mod fields;
mod id_check;

pub use fields::{
    Field, FieldError, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, MIN_DESCRIPTION_LENGTH,
    MIN_NAME_LENGTH,
};
pub use id_check::ID_CHECK_DEBOUNCE;

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::catalog::product::{Product, revision_date_for};
use crate::repository::ProductRepository;
use crate::types::{MAX_ID_LENGTH, MIN_ID_LENGTH, ProductId};

use fields::{before_today, parse_release_date, validate_required, validate_text};
use id_check::{IdCheck, Probe};

/// Whether the form creates a new record or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// A new record; the id is user-chosen and probed for uniqueness.
    Create,
    /// An existing record; the id is immutable and exempt from validation.
    Edit { id: ProductId },
}

/// Why a submission did not go out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlock {
    /// One or more mode-relevant fields are invalid.
    Invalid,
    /// A previous submission is in flight or already succeeded.
    InFlight,
    /// The id-uniqueness probe has not settled yet.
    CheckPending,
}

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The record was persisted; time to navigate back to the list.
    Saved(Product),
    /// Nothing was sent; the block reason says why.
    Blocked(SubmitBlock),
    /// The backend rejected the submission; the message is retained on the
    /// form as display state.
    Failed,
}

#[derive(Debug, Default, Clone)]
struct FieldState {
    value: String,
    error: Option<FieldError>,
}

/// State behind the product create/edit screen.
///
/// Must live inside a Tokio runtime: the uniqueness probe runs as a
/// spawned task sleeping out a 300 ms debounce window.
pub struct ProductForm {
    repo: Arc<dyn ProductRepository>,
    mode: FormMode,
    id: FieldState,
    name: FieldState,
    description: FieldState,
    logo: FieldState,
    release_date: FieldState,
    revision_date: String,
    id_taken: bool,
    check: IdCheck,
    submitting: bool,
    error_message: Option<String>,
}

impl ProductForm {
    /// Create-mode form with every field empty.
    pub fn create(repo: Arc<dyn ProductRepository>) -> Self {
        let mut form = Self::bare(repo, FormMode::Create);
        form.clear_fields();
        form
    }

    /// Edit-mode form preloaded from an existing record.
    ///
    /// The revision date is recomputed from the release date, which also
    /// repairs stored records that drifted from the one-year rule.
    pub fn edit(repo: Arc<dyn ProductRepository>, product: &Product) -> Self {
        let mut form = Self::bare(
            repo,
            FormMode::Edit {
                id: product.id.clone(),
            },
        );
        form.id = FieldState {
            value: product.id.to_string(),
            error: None,
        };
        form.set_name(&product.name);
        form.set_description(&product.description);
        form.set_logo(&product.logo);
        form.set_release_date(product.release_date.to_string());
        form
    }

    fn bare(repo: Arc<dyn ProductRepository>, mode: FormMode) -> Self {
        Self {
            repo,
            mode,
            id: FieldState::default(),
            name: FieldState::default(),
            description: FieldState::default(),
            logo: FieldState::default(),
            release_date: FieldState::default(),
            revision_date: String::new(),
            id_taken: false,
            check: IdCheck::default(),
            submitting: false,
            error_message: None,
        }
    }

    /// Set the id field and schedule the uniqueness probe.
    ///
    /// The probe fires for any non-empty value, even one the length rule
    /// rejects. In Edit mode the id is immutable and this is a no-op.
    pub fn set_id(&mut self, value: impl AsRef<str>) {
        if matches!(self.mode, FormMode::Edit { .. }) {
            return;
        }
        let value = value.as_ref();
        self.id = FieldState {
            value: value.to_string(),
            error: validate_text(value, MIN_ID_LENGTH, MAX_ID_LENGTH),
        };
        self.id_taken = match self.check.schedule(&self.repo, value) {
            Probe::Remembered(exists) => exists,
            Probe::Skipped | Probe::Scheduled => false,
        };
    }

    /// Set the name field.
    pub fn set_name(&mut self, value: impl AsRef<str>) {
        let value = value.as_ref();
        self.name = FieldState {
            value: value.to_string(),
            error: validate_text(value, MIN_NAME_LENGTH, MAX_NAME_LENGTH),
        };
    }

    /// Set the description field.
    pub fn set_description(&mut self, value: impl AsRef<str>) {
        let value = value.as_ref();
        self.description = FieldState {
            value: value.to_string(),
            error: validate_text(value, MIN_DESCRIPTION_LENGTH, MAX_DESCRIPTION_LENGTH),
        };
    }

    /// Set the logo field.
    pub fn set_logo(&mut self, value: impl AsRef<str>) {
        let value = value.as_ref();
        self.logo = FieldState {
            value: value.to_string(),
            error: validate_required(value),
        };
    }

    /// Set the release date field from `YYYY-MM-DD` input.
    ///
    /// The derived revision date follows every parseable value, even one
    /// the minimum-date rule rejects; unparseable or empty input clears it.
    /// "Today" for the minimum-date rule is captured freshly per call.
    pub fn set_release_date(&mut self, value: impl AsRef<str>) {
        let value = value.as_ref();
        let parsed = parse_release_date(value);
        let error = match &parsed {
            Ok(date) => {
                if matches!(self.mode, FormMode::Create) && before_today(*date) {
                    Some(FieldError::BeforeToday)
                } else {
                    None
                }
            }
            Err(error) => Some(error.clone()),
        };
        self.revision_date = match &parsed {
            Ok(date) => revision_date_for(*date).to_string(),
            Err(_) => String::new(),
        };
        self.release_date = FieldState {
            value: value.to_string(),
            error,
        };
    }

    /// Wait for a scheduled uniqueness probe and fold its outcome into the
    /// id field. No-op when nothing is pending.
    pub async fn settle(&mut self) {
        if let Some((value, exists)) = self.check.settle().await {
            if value == self.id.value {
                self.id_taken = exists;
            }
        }
    }

    /// Submit the form.
    ///
    /// Allowed only when the mode-relevant fields are valid, no submission
    /// is in flight and no uniqueness probe is pending. Dispatches create
    /// or update per mode. The in-flight flag stays set after a success,
    /// so a queued duplicate submit is blocked rather than re-sent.
    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::Blocked(SubmitBlock::InFlight);
        }
        if self.check.is_pending() {
            return SubmitOutcome::Blocked(SubmitBlock::CheckPending);
        }
        let Some(product) = self.snapshot() else {
            return SubmitOutcome::Blocked(SubmitBlock::Invalid);
        };
        self.submitting = true;
        let result = match &self.mode {
            FormMode::Create => self.repo.create(&product).await,
            FormMode::Edit { id } => self.repo.update(id, &product).await,
        };
        match result {
            Ok(saved) => {
                debug!(id = %saved.id, "product saved");
                self.error_message = None;
                SubmitOutcome::Saved(saved)
            }
            Err(err) => {
                debug!(error = %err, "submission failed");
                self.error_message = Some(err.message().to_string());
                self.submitting = false;
                SubmitOutcome::Failed
            }
        }
    }

    /// Reset the form.
    ///
    /// Create mode clears every field; Edit mode restores the immutable id
    /// and clears the rest. The revision date stays empty until a release
    /// date is set again. Probe state, the last error message and the
    /// in-flight flag are dropped, so a reset form is submittable again.
    pub fn reset(&mut self) {
        self.check.reset();
        self.id_taken = false;
        self.error_message = None;
        self.submitting = false;
        self.clear_fields();
    }

    /// True when every mode-relevant field passes validation.
    ///
    /// In Edit mode the id field is exempt; in Create mode a remembered
    /// "taken" probe outcome fails the id field.
    pub fn is_valid(&self) -> bool {
        let id_ok = match self.mode {
            FormMode::Create => self.id.error.is_none() && !self.id_taken,
            FormMode::Edit { .. } => true,
        };
        id_ok
            && self.name.error.is_none()
            && self.description.error.is_none()
            && self.logo.error.is_none()
            && self.release_date.error.is_none()
    }

    /// The validation failure for a field, if any.
    ///
    /// For the id field a synchronous failure takes precedence over the
    /// probe's "already exists" outcome.
    pub fn error(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Id => self
                .id
                .error
                .clone()
                .or_else(|| self.id_taken.then_some(FieldError::IdExists)),
            Field::Name => self.name.error.clone(),
            Field::Description => self.description.error.clone(),
            Field::Logo => self.logo.error.clone(),
            Field::ReleaseDate => self.release_date.error.clone(),
        }
    }

    /// Every failing field with its error, in display order.
    pub fn errors(&self) -> Vec<(Field, FieldError)> {
        [
            Field::Id,
            Field::Name,
            Field::Description,
            Field::Logo,
            Field::ReleaseDate,
        ]
        .into_iter()
        .filter_map(|field| self.error(field).map(|error| (field, error)))
        .collect()
    }

    /// The form mode, fixed at construction.
    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn id(&self) -> &str {
        &self.id.value
    }

    pub fn name(&self) -> &str {
        &self.name.value
    }

    pub fn description(&self) -> &str {
        &self.description.value
    }

    pub fn logo(&self) -> &str {
        &self.logo.value
    }

    pub fn release_date(&self) -> &str {
        &self.release_date.value
    }

    /// The derived revision date, empty until a parseable release date is
    /// set.
    pub fn revision_date(&self) -> &str {
        &self.revision_date
    }

    /// Message from the most recent failed submission, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// True while a uniqueness probe has not settled.
    pub fn is_checking(&self) -> bool {
        self.check.is_pending()
    }

    /// True from the start of a submission until it fails (success keeps
    /// the flag set).
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    fn clear_fields(&mut self) {
        match self.mode.clone() {
            FormMode::Create => self.set_id(""),
            FormMode::Edit { id } => {
                self.id = FieldState {
                    value: id.to_string(),
                    error: None,
                };
            }
        }
        self.set_name("");
        self.set_description("");
        self.set_logo("");
        self.set_release_date("");
    }

    /// A record assembled from the current field values, or `None` while
    /// any mode-relevant field is invalid.
    fn snapshot(&self) -> Option<Product> {
        if !self.is_valid() {
            return None;
        }
        let id = ProductId::new(&self.id.value).ok()?;
        let release = parse_release_date(&self.release_date.value).ok()?;
        Some(Product::new(
            id,
            self.name.value.clone(),
            self.description.value.clone(),
            self.logo.value.clone(),
            release,
        ))
    }
}
