//! Appointment form view model
//!
//! ```text
//!   Editing ──submit──▶ Submitting ──2xx──▶ Success (fields cleared)
//!      ▲                    │
//!      │                    └──error──▶ Failed(message) (fields kept)
//!      └──────── any field edit ◀────────┘
//! ```

use crate::api::ContentApi;
use crate::error::ApiError;
use crate::locale::Labels;
use crate::model::AppointmentRequest;

pub const SUBMITTING_MESSAGE: &str = "Submitting...";
pub const SUCCESS_MESSAGE: &str = "✅ Booked! We will contact you shortly.";

/// A form input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Email,
    Phone,
    Destination,
    ServiceType,
    Date,
    Message,
}

impl Field {
    /// Single-line inputs, in display order
    pub const INPUTS: [Field; 6] = [
        Field::FullName,
        Field::Email,
        Field::Phone,
        Field::Destination,
        Field::ServiceType,
        Field::Date,
    ];

    pub const fn required(self) -> bool {
        matches!(self, Field::FullName | Field::Email | Field::Phone | Field::Date)
    }

    /// Wire name, also used as the input's `name`
    pub const fn key(self) -> &'static str {
        match self {
            Field::FullName => "full_name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Destination => "destination",
            Field::ServiceType => "service_type",
            Field::Date => "date",
            Field::Message => "message",
        }
    }

    /// HTML input type
    pub const fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Phone => "tel",
            Field::Date => "date",
            _ => "text",
        }
    }

    pub const fn label(self, labels: &Labels) -> &'static str {
        match self {
            Field::FullName => labels.field_full_name,
            Field::Email => labels.field_email,
            Field::Phone => labels.field_phone,
            Field::Destination => labels.field_destination,
            Field::ServiceType => labels.field_service_type,
            Field::Date => labels.field_date,
            Field::Message => labels.field_message,
        }
    }
}

/// Where the form is in its lifecycle
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    Success,
    /// Message shown after the ❌ marker
    Failed(String),
}

/// Why a submit action did not start a request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A request is already outstanding
    InFlight,
    /// Required fields are blank
    Missing(Vec<Field>),
}

/// Appointment form state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppointmentForm {
    request: AppointmentRequest,
    status: FormStatus,
}

impl AppointmentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn status(&self) -> &FormStatus {
        &self.status
    }

    pub const fn is_submitting(&self) -> bool {
        matches!(self.status, FormStatus::Submitting)
    }

    pub fn value(&self, field: Field) -> &str {
        let r = &self.request;
        match field {
            Field::FullName => &r.full_name,
            Field::Email => &r.email,
            Field::Phone => &r.phone,
            Field::Destination => &r.destination,
            Field::ServiceType => &r.service_type,
            Field::Date => &r.date,
            Field::Message => &r.message,
        }
    }

    /// Edit a field; any edit puts the form back into `Editing`
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let r = &mut self.request;
        let slot = match field {
            Field::FullName => &mut r.full_name,
            Field::Email => &mut r.email,
            Field::Phone => &mut r.phone,
            Field::Destination => &mut r.destination,
            Field::ServiceType => &mut r.service_type,
            Field::Date => &mut r.date,
            Field::Message => &mut r.message,
        };
        *slot = value.into();
        if !self.is_submitting() {
            self.status = FormStatus::Editing;
        }
    }

    /// Required fields that are still blank
    pub fn missing_required(&self) -> Vec<Field> {
        Field::INPUTS
            .into_iter()
            .filter(|f| f.required() && self.value(*f).trim().is_empty())
            .collect()
    }

    /// Move to `Submitting` and hand out the payload to send
    pub fn begin_submit(&mut self) -> Result<AppointmentRequest, SubmitBlocked> {
        if self.is_submitting() {
            return Err(SubmitBlocked::InFlight);
        }
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(SubmitBlocked::Missing(missing));
        }
        self.status = FormStatus::Submitting;
        Ok(self.request.clone())
    }

    /// Apply the server's answer to a submission
    pub fn finish(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                tracing::info!("Appointment booked");
                self.request = AppointmentRequest::default();
                self.status = FormStatus::Success;
            }
            Err(err) => {
                tracing::warn!("Appointment submission failed: {}", err);
                self.status = FormStatus::Failed(err.user_message());
            }
        }
    }

    /// Submit through `api`, start to finish
    pub async fn submit(&mut self, api: &dyn ContentApi) -> Result<(), SubmitBlocked> {
        let request = self.begin_submit()?;
        let result = api.submit_appointment(&request).await;
        self.finish(result);
        Ok(())
    }

    /// Status line under the form, if any
    pub fn status_message(&self) -> Option<String> {
        match &self.status {
            FormStatus::Editing => None,
            FormStatus::Submitting => Some(SUBMITTING_MESSAGE.into()),
            FormStatus::Success => Some(SUCCESS_MESSAGE.into()),
            FormStatus::Failed(message) => Some(format!("❌ {message}")),
        }
    }
}
