use crate::core::fallback;
use crate::core::hooks::ContactFormMutation;
use crate::domain::model::{
    ContactSubmission, InvalidField, SubmissionPayload, SubmissionResult, SubmissionStatus,
    Timeline,
};
use crate::utils::error::{ContentError, Result};
use crate::utils::validation::{
    validate_email, validate_required_text, Validate, INVALID_EMAIL_MESSAGE,
    REQUIRED_FIELDS_MESSAGE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Business,
    Website,
    Project,
    Timeline,
}

impl FormField {
    /// Contact Form 7 field name
    pub fn form_key(self) -> &'static str {
        match self {
            FormField::Name => "your-name",
            FormField::Email => "your-email",
            FormField::Phone => "your-phone",
            FormField::Business => "business-name",
            FormField::Website => "current-website",
            FormField::Project => "project-description",
            FormField::Timeline => "timeline",
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl ContactSubmission {
    /// 所有本地驗證錯誤，依欄位順序
    pub fn validation_errors(&self) -> Vec<InvalidField> {
        let mut errors = Vec::new();

        for (field, value) in [
            (FormField::Name, &self.name),
            (FormField::Email, &self.email),
            (FormField::Project, &self.project),
        ] {
            if validate_required_text(field.form_key(), value).is_err() {
                errors.push(InvalidField {
                    field: field.form_key().to_string(),
                    message: REQUIRED_FIELDS_MESSAGE.to_string(),
                });
            }
        }

        if !self.email.trim().is_empty()
            && validate_email(FormField::Email.form_key(), &self.email).is_err()
        {
            errors.push(InvalidField {
                field: FormField::Email.form_key().to_string(),
                message: INVALID_EMAIL_MESSAGE.to_string(),
            });
        }

        errors
    }

    /// Validates and trims the input into an immutable payload.
    pub fn freeze(&self) -> Result<SubmissionPayload> {
        self.validate()?;

        Ok(SubmissionPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: optional(&self.phone),
            business: optional(&self.business),
            website: optional(&self.website),
            project: self.project.trim().to_string(),
            timeline: self.timeline,
        })
    }
}

impl Validate for ContactSubmission {
    fn validate(&self) -> Result<()> {
        match self.validation_errors().into_iter().next() {
            Some(InvalidField { field, message }) => Err(ContentError::Validation { field, message }),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient message shown after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Message sent!".to_string(),
            message: message.into(),
        }
    }

    fn error(title: &str, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.to_string(),
            message: message.into(),
        }
    }

    /// Local validation failure; the title follows the failing rule.
    fn invalid(message: String) -> Self {
        let title = if message == INVALID_EMAIL_MESSAGE {
            "Invalid email"
        } else {
            "Missing information"
        };
        Self::error(title, message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed, nothing was sent.
    Invalid(Vec<InvalidField>),
    AlreadyPending,
    Submitted(SubmissionResult),
}

/// Contact section form state: edits, submit, reset on success, retain on failure.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactSubmission,
    errors: Vec<InvalidField>,
    notification: Option<Notification>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    /// Timeline is set through [`ContactForm::set_timeline`]; a text edit parses the label.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.fields.name = value,
            FormField::Email => self.fields.email = value,
            FormField::Phone => self.fields.phone = value,
            FormField::Business => self.fields.business = value,
            FormField::Website => self.fields.website = value,
            FormField::Project => self.fields.project = value,
            FormField::Timeline => self.fields.timeline = Timeline::from_label(&value),
        }
        self.errors.retain(|error| error.field != field.form_key());
    }

    pub fn set_timeline(&mut self, timeline: Timeline) {
        self.fields.timeline = timeline;
    }

    pub fn errors(&self) -> &[InvalidField] {
        &self.errors
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.notification = None;
    }

    pub fn reset(&mut self) {
        self.fields = ContactSubmission::default();
        self.errors.clear();
    }

    pub async fn submit(&mut self, mutation: &ContactFormMutation) -> SubmitOutcome {
        if mutation.is_pending() {
            tracing::debug!("Submission ignored, another one is still pending");
            return SubmitOutcome::AlreadyPending;
        }

        let payload = match self.fields.freeze() {
            Ok(payload) => payload,
            Err(err) => {
                let errors = self.fields.validation_errors();
                tracing::debug!("Contact form failed local validation: {}", err);
                self.notification = Some(Notification::invalid(err.user_friendly_message()));
                self.errors = errors.clone();
                return SubmitOutcome::Invalid(errors);
            }
        };

        let result = match mutation.mutate_async(payload).await {
            Ok(result) => result,
            Err(err) => {
                tracing::error!("❌ Contact form submission failed: {}", err);
                SubmissionResult {
                    status: SubmissionStatus::Error,
                    message: fallback::SUBMISSION_ERROR_MESSAGE.to_string(),
                    invalid_fields: vec![],
                }
            }
        };

        if result.is_success() {
            self.reset();
            self.notification = Some(Notification::success(result.message.clone()));
        } else {
            self.errors = result.invalid_fields.clone();
            self.notification = Some(Notification::error("Error", result.message.clone()));
        }

        SubmitOutcome::Submitted(result)
    }
}
