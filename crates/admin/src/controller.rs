use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use model::RecordKind;
use query::{Page, Query, Queryable};
use serde_json::Value;
use std::sync::Arc;
use store::RecordGateway;

use crate::bus::RefreshBus;
use crate::error::{AdminError, AdminResult};
use crate::form::{validate, FormValues};

/// What a submission dispatches when it reaches the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Edit { id: i64 },
}

/// Form lifecycle for the active record kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    /// No form open.
    #[default]
    Idle,
    /// Form open for a new record.
    Creating,
    /// Form open over an existing record.
    Editing { id: i64 },
    /// A submission is in flight; further submissions are rejected, not
    /// queued.
    Submitting { mode: SubmitMode },
    /// The last submission failed. The form stays open with the submitted
    /// input preserved; submitting again is the explicit user retry.
    Error {
        mode: SubmitMode,
        form: FormValues,
        message: String,
    },
}

/// Entity-agnostic CRUD controller behind the admin tables.
///
/// Owns the active record kind, the last successfully fetched rows, and the
/// form state machine. Mutations go through the record gateway; after a
/// confirmed success the refresh bus tells every mounted view to re-fetch.
/// The row list is never mutated optimistically.
pub struct AdminController {
    kind: RecordKind,
    gateway: Arc<dyn RecordGateway>,
    bus: RefreshBus,
    state: ModalState,
    records: Vec<Value>,
}

impl AdminController {
    pub fn new(gateway: Arc<dyn RecordGateway>, bus: RefreshBus, kind: RecordKind) -> Self {
        Self {
            kind,
            gateway,
            bus,
            state: ModalState::Idle,
            records: Vec::new(),
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    /// Rows from the last successful fetch.
    pub fn records(&self) -> &[Value] {
        &self.records
    }

    /// Switch the active record kind: any open form is discarded and the
    /// new kind's records are fetched.
    pub async fn select_kind(&mut self, kind: RecordKind) -> AdminResult<()> {
        self.state = ModalState::Idle;
        self.kind = kind;
        self.records.clear();
        self.refresh().await
    }

    /// Re-fetch the active kind's records from the gateway.
    pub async fn refresh(&mut self) -> AdminResult<()> {
        let result = self
            .gateway
            .list(self.kind, Some(self.kind.default_order()))
            .await;
        match result {
            Ok(rows) => {
                self.records = rows;
                Ok(())
            }
            Err(e) => {
                tracing::error!("failed to fetch {}: {}", self.kind, e);
                Err(e.into())
            }
        }
    }

    /// Open the form for a new record.
    pub fn open_create(&mut self) {
        self.state = ModalState::Creating;
    }

    /// Open the form over an existing row.
    ///
    /// # Panics
    ///
    /// Panics when the row has no `id`: rows come from the store and always
    /// carry one, so a missing id is a programming error rather than a
    /// recoverable condition.
    pub fn open_edit(&mut self, record: &Value) {
        let id = record
            .get("id")
            .and_then(Value::as_i64)
            .expect("open_edit requires a record with an id");
        self.state = ModalState::Editing { id };
    }

    /// Close the form without saving.
    pub fn close(&mut self) {
        self.state = ModalState::Idle;
    }

    /// Validate the form and persist it through the gateway.
    pub async fn submit(&mut self, form: FormValues) -> AdminResult<()> {
        let mode = match &self.state {
            ModalState::Creating => SubmitMode::Create,
            ModalState::Editing { id } => SubmitMode::Edit { id: *id },
            ModalState::Error { mode, .. } => *mode,
            ModalState::Submitting { .. } => return Err(AdminError::SubmitInFlight),
            ModalState::Idle => return Err(AdminError::NoOpenForm),
        };

        // Validation failures are inline form errors: the form state is
        // left untouched and nothing reaches the gateway.
        let payload = validate(self.kind, &form)?;

        self.state = ModalState::Submitting { mode };

        let result = match mode {
            SubmitMode::Create => self
                .gateway
                .insert(self.kind, payload)
                .await
                .map(|_row| ()),
            SubmitMode::Edit { id } => self.gateway.update(self.kind, id, payload).await,
        };

        match result {
            Ok(()) => {
                self.state = ModalState::Idle;
                self.bus.publish(self.kind);
                self.refresh().await
            }
            Err(e) => {
                tracing::error!("failed to save {}: {}", self.kind, e);
                self.state = ModalState::Error {
                    mode,
                    form,
                    message: "Error saving data".to_string(),
                };
                Err(e.into())
            }
        }
    }

    /// Begin deleting a record. Nothing is dispatched until the returned
    /// request is explicitly confirmed.
    pub fn request_delete(&mut self, id: i64) -> DeleteRequest<'_> {
        DeleteRequest {
            controller: self,
            id,
        }
    }

    /// Run the query engine over the fetched rows for on-screen filtering.
    pub fn rows(&self, query: &Query) -> Page<Value> {
        let rows: Vec<Row<'_>> = self
            .records
            .iter()
            .map(|value| Row {
                kind: self.kind,
                value,
            })
            .collect();

        let page = query::run(&rows, query);
        Page {
            items: page.items.into_iter().map(|row| row.value.clone()).collect(),
            total: page.total,
            page: page.page,
            total_pages: page.total_pages,
        }
    }
}

/// Pending delete awaiting the user's explicit confirmation.
#[must_use = "a delete does nothing until confirmed"]
pub struct DeleteRequest<'a> {
    controller: &'a mut AdminController,
    id: i64,
}

impl DeleteRequest<'_> {
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The user confirmed: dispatch the delete, then broadcast and
    /// re-fetch. On failure the displayed list is left unchanged.
    pub async fn confirm(self) -> AdminResult<()> {
        let kind = self.controller.kind;
        let result = self.controller.gateway.delete(kind, self.id).await;
        match result {
            Ok(()) => {
                self.controller.bus.publish(kind);
                self.controller.refresh().await
            }
            Err(e) => {
                tracing::error!("failed to delete from {}: {}", kind, e);
                Err(e.into())
            }
        }
    }

    /// The user backed out; the gateway is never called.
    pub fn cancel(self) {}
}

/// Kind-aware adapter giving raw store rows the query engine's view of a
/// record.
#[derive(Clone)]
struct Row<'a> {
    kind: RecordKind,
    value: &'a Value,
}

impl Row<'_> {
    fn text(&self, field: &str) -> Option<&str> {
        self.value.get(field).and_then(Value::as_str)
    }
}

impl Queryable for Row<'_> {
    fn search_fields(&self) -> Vec<&str> {
        self.kind
            .searchable_fields()
            .iter()
            .filter_map(|field| self.text(field))
            .collect()
    }

    fn sort_key(&self) -> DateTime<Utc> {
        self.text(self.kind.default_order().column)
            .and_then(parse_timestamp)
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    fn date(&self) -> Option<NaiveDate> {
        self.text(self.kind.default_order().column)
            .and_then(parse_timestamp)
            .map(|timestamp| timestamp.date_naive())
    }

    fn category(&self) -> Option<&str> {
        match self.kind {
            RecordKind::Resources => self.text("category"),
            _ => None,
        }
    }
}

/// Timestamps arrive as RFC 3339 from the store, but rows may also hold
/// plain dates or `datetime-local` form strings.
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}
