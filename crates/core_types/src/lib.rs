//! Core types for the job application tracker.
//!
//! This crate defines the shared data structures used across
//! the board UI, the API client, and the session context, plus
//! the pure list and drag-gesture logic that backs the dashboard.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Local-storage key holding the serialized session.
pub const SESSION_KEY: &str = "jobtrack.session";

/// Status of a job application, one column per status on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ApplicationStatus {
    /// Application submitted, no response yet
    #[default]
    Applied,
    /// Interview scheduled or in progress
    Interview,
    /// Offer received
    Offer,
    /// Application rejected
    Rejected,
    /// Offer accepted
    Hired,
}

impl ApplicationStatus {
    /// All statuses in board column order.
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Interview,
        ApplicationStatus::Offer,
        ApplicationStatus::Rejected,
        ApplicationStatus::Hired,
    ];

    /// The exact string the REST API uses for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Interview => "Interview",
            ApplicationStatus::Offer => "Offer",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Hired => "Hired",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing an application status from its wire string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown application status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for ApplicationStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApplicationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// Validation failures for a job application draft.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Company is required")]
    MissingCompany,

    #[error("Job title is required")]
    MissingTitle,

    #[error("Applied date is required")]
    MissingDate,
}

/// A single job application record.
///
/// `id` and the two timestamps are assigned by the server; a record
/// without an `id` has not been persisted yet and cannot be targeted
/// by update or delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    /// Server-assigned identifier (absent until persisted)
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Identifier of the owning user
    #[serde(default)]
    pub user: String,
    /// Company name (required)
    pub company: String,
    /// Job title (required)
    pub title: String,
    /// Current board column
    #[serde(default)]
    pub status: ApplicationStatus,
    /// Calendar date the application was sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_date: Option<NaiveDate>,
    /// Link to the job posting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Which resume was sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_used: Option<String>,
    /// Ordered labels, may be empty
    #[serde(default)]
    pub tags: Vec<String>,
    /// Server-assigned creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Server-assigned last-modified timestamp, echoed back on
    /// updates so the server can reject stale writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl JobApplication {
    /// Create an unsaved draft owned by the given user.
    ///
    /// Status defaults to Applied and the applied date to today.
    pub fn draft(user: &str) -> Self {
        Self {
            id: None,
            user: user.to_string(),
            company: String::new(),
            title: String::new(),
            status: ApplicationStatus::Applied,
            applied_date: Some(Utc::now().date_naive()),
            url: None,
            notes: None,
            resume_used: None,
            tags: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Check the required fields before anything goes over the wire.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.company.trim().is_empty() {
            return Err(ValidationError::MissingCompany);
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.applied_date.is_none() {
            return Err(ValidationError::MissingDate);
        }
        Ok(())
    }

    /// Whether the record has been persisted (has a server id).
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// The authenticated session, persisted verbatim to local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub name: String,
    pub email: String,
    pub token: String,
}

impl From<AuthResponse> for Session {
    fn from(resp: AuthResponse) -> Self {
        Self {
            id: resp.user.id,
            name: resp.user.name,
            email: resp.user.email,
            token: resp.token,
        }
    }
}

/// Request body for POST /users/login.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Request body for POST /users/register.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Response from the login and register endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

/// User fields embedded in an auth response.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Error body the API attaches to non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
}

/// What a drop zone extracts from the drag transfer channel: the
/// dragged record's identifier and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragIntent {
    pub dragged_id: String,
}

impl DragIntent {
    /// Build an intent from the raw transfer payload.
    ///
    /// Returns `None` for an empty or whitespace payload, which can
    /// happen when something other than a card is dropped on a column.
    pub fn from_payload(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                dragged_id: trimmed.to_string(),
            })
        }
    }
}

/// A status-change intent raised by dropping a card on a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub id: String,
    pub status: ApplicationStatus,
}

/// Which modal the dashboard is showing; at most one at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    AddForm,
    EditForm(JobApplication),
    ViewDetail(JobApplication),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    /// Whether the open modal is showing the record with this id.
    pub fn references(&self, id: &str) -> bool {
        match self {
            ModalState::EditForm(app) | ModalState::ViewDetail(app) => {
                app.id.as_deref() == Some(id)
            }
            _ => false,
        }
    }
}

/// The board's fan-out: the applications in one column, in list order.
pub fn filter_by_status(
    apps: &[JobApplication],
    status: ApplicationStatus,
) -> Vec<JobApplication> {
    apps.iter()
        .filter(|app| app.status == status)
        .cloned()
        .collect()
}

/// Reconcile a confirmed create: the server's record goes at the end.
pub fn append(mut apps: Vec<JobApplication>, app: JobApplication) -> Vec<JobApplication> {
    apps.push(app);
    apps
}

/// Reconcile a confirmed update: replace the entry whose id matches
/// the server's returned record. A record that matches nothing (stale
/// id, or an unsaved record) leaves the list untouched.
pub fn replace_by_id(apps: Vec<JobApplication>, updated: JobApplication) -> Vec<JobApplication> {
    let Some(id) = updated.id.clone() else {
        return apps;
    };
    apps.into_iter()
        .map(|app| {
            if app.id.as_deref() == Some(id.as_str()) {
                updated.clone()
            } else {
                app
            }
        })
        .collect()
}

/// Reconcile a confirmed delete: drop the entry with this id.
pub fn remove_by_id(apps: Vec<JobApplication>, id: &str) -> Vec<JobApplication> {
    apps.into_iter()
        .filter(|app| app.id.as_deref() != Some(id))
        .collect()
}

/// Split comma-separated tag input into trimmed, non-empty tags.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(id: &str, company: &str, status: ApplicationStatus) -> JobApplication {
        JobApplication {
            id: Some(id.to_string()),
            user: "u1".to_string(),
            company: company.to_string(),
            title: "Engineer".to_string(),
            status,
            applied_date: Some(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()),
            url: None,
            notes: None,
            resume_used: None,
            tags: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_status_wire_strings() {
        for status in ApplicationStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));

            let parsed: ApplicationStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_status_rejects_values_outside_the_set() {
        assert!(serde_json::from_str::<ApplicationStatus>("\"Ghosted\"").is_err());
        assert!("applied".parse::<ApplicationStatus>().is_err());
        assert_eq!(
            "Interview".parse::<ApplicationStatus>().unwrap(),
            ApplicationStatus::Interview
        );
    }

    #[test]
    fn test_status_default_is_applied() {
        assert_eq!(ApplicationStatus::default(), ApplicationStatus::Applied);
    }

    #[test]
    fn test_draft_defaults() {
        let draft = JobApplication::draft("u1");

        assert!(draft.id.is_none());
        assert!(!draft.is_persisted());
        assert_eq!(draft.user, "u1");
        assert_eq!(draft.status, ApplicationStatus::Applied);
        assert!(draft.applied_date.is_some());
        assert!(draft.tags.is_empty());
    }

    #[test]
    fn test_validate_rejects_missing_required_fields() {
        let mut draft = JobApplication::draft("u1");
        assert_eq!(draft.validate(), Err(ValidationError::MissingCompany));

        draft.company = "Acme".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::MissingTitle));

        draft.title = "   ".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::MissingTitle));

        draft.title = "Engineer".to_string();
        assert_eq!(draft.validate(), Ok(()));

        draft.applied_date = None;
        assert_eq!(draft.validate(), Err(ValidationError::MissingDate));
    }

    #[test]
    fn test_record_serializes_to_wire_names() {
        let record = app("1", "Acme", ApplicationStatus::Applied);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["_id"], "1");
        assert_eq!(json["company"], "Acme");
        assert_eq!(json["status"], "Applied");
        assert_eq!(json["appliedDate"], "2025-03-01");
        assert!(json.get("url").is_none());
    }

    #[test]
    fn test_draft_serializes_without_id() {
        let mut draft = JobApplication::draft("u1");
        draft.company = "Acme".to_string();
        draft.title = "Engineer".to_string();

        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn test_record_deserializes_server_shape() {
        let json = r#"{
            "_id": "42",
            "user": "u1",
            "company": "Acme",
            "title": "Engineer",
            "status": "Offer",
            "appliedDate": "2025-03-01",
            "resumeUsed": "Resume_V2.pdf",
            "tags": ["remote", "frontend"],
            "createdAt": "2025-03-01T12:00:00Z",
            "updatedAt": "2025-03-02T12:00:00Z"
        }"#;

        let record: JobApplication = serde_json::from_str(json).unwrap();
        assert_eq!(record.id.as_deref(), Some("42"));
        assert_eq!(record.status, ApplicationStatus::Offer);
        assert_eq!(record.resume_used.as_deref(), Some("Resume_V2.pdf"));
        assert_eq!(record.tags, vec!["remote", "frontend"]);
        assert!(record.updated_at.is_some());
    }

    #[test]
    fn test_record_deserializes_with_optional_fields_missing() {
        let json = r#"{"company": "Acme", "title": "Engineer"}"#;

        let record: JobApplication = serde_json::from_str(json).unwrap();
        assert!(record.id.is_none());
        assert_eq!(record.status, ApplicationStatus::Applied);
        assert!(record.applied_date.is_none());
        assert!(record.tags.is_empty());
    }

    #[test]
    fn test_filter_by_status_covers_every_column_and_keeps_order() {
        let apps = vec![
            app("1", "Acme", ApplicationStatus::Applied),
            app("2", "Globex", ApplicationStatus::Interview),
            app("3", "Initech", ApplicationStatus::Applied),
        ];

        let applied = filter_by_status(&apps, ApplicationStatus::Applied);
        assert_eq!(applied.len(), 2);
        assert_eq!(applied[0].id.as_deref(), Some("1"));
        assert_eq!(applied[1].id.as_deref(), Some("3"));

        let total: usize = ApplicationStatus::ALL
            .iter()
            .map(|s| filter_by_status(&apps, *s).len())
            .sum();
        assert_eq!(total, apps.len());

        assert!(filter_by_status(&apps, ApplicationStatus::Hired).is_empty());
    }

    #[test]
    fn test_append_after_create_grows_list_by_one_at_the_end() {
        let apps = vec![app("1", "Acme", ApplicationStatus::Applied)];

        let mut created = app("42", "Acme", ApplicationStatus::Applied);
        created.title = "Engineer".to_string();

        let apps = append(apps, created.clone());
        assert_eq!(apps.len(), 2);
        assert_eq!(apps.last(), Some(&created));
        assert!(apps.last().unwrap().is_persisted());
    }

    #[test]
    fn test_replace_by_id_after_drag_to_interview() {
        let apps = vec![app("1", "Acme", ApplicationStatus::Applied)];

        let mut updated = apps[0].clone();
        updated.status = ApplicationStatus::Interview;

        let apps = replace_by_id(apps, updated);
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].status, ApplicationStatus::Interview);
        // Everything except the status is untouched.
        assert_eq!(apps[0].company, "Acme");
        assert_eq!(apps[0].title, "Engineer");
        assert_eq!(
            apps[0].applied_date,
            Some(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
        );
    }

    #[test]
    fn test_drop_on_current_column_is_an_idempotent_update() {
        let apps = vec![app("1", "Acme", ApplicationStatus::Applied)];

        let updated = apps[0].clone();
        let after = replace_by_id(apps.clone(), updated);
        assert_eq!(after, apps);
    }

    #[test]
    fn test_replace_by_id_ignores_unknown_and_unsaved_records() {
        let apps = vec![app("1", "Acme", ApplicationStatus::Applied)];

        let stale = app("99", "Globex", ApplicationStatus::Offer);
        let after = replace_by_id(apps.clone(), stale);
        assert_eq!(after, apps);

        let mut unsaved = app("1", "Acme", ApplicationStatus::Offer);
        unsaved.id = None;
        let after = replace_by_id(apps.clone(), unsaved);
        assert_eq!(after, apps);
    }

    #[test]
    fn test_remove_by_id_after_delete() {
        let apps = vec![
            app("1", "Acme", ApplicationStatus::Applied),
            app("2", "Globex", ApplicationStatus::Interview),
        ];

        let apps = remove_by_id(apps, "1");
        assert_eq!(apps.len(), 1);
        assert!(apps.iter().all(|a| a.id.as_deref() != Some("1")));

        // Removing an id that is already gone is a no-op.
        let apps = remove_by_id(apps, "1");
        assert_eq!(apps.len(), 1);
    }

    #[test]
    fn test_drag_intent_from_payload() {
        assert_eq!(
            DragIntent::from_payload("42"),
            Some(DragIntent {
                dragged_id: "42".to_string()
            })
        );
        assert_eq!(
            DragIntent::from_payload("  42\n"),
            Some(DragIntent {
                dragged_id: "42".to_string()
            })
        );
        assert_eq!(DragIntent::from_payload(""), None);
        assert_eq!(DragIntent::from_payload("   "), None);
    }

    #[test]
    fn test_modal_state_references_open_record() {
        let record = app("1", "Acme", ApplicationStatus::Applied);

        assert!(ModalState::ViewDetail(record.clone()).references("1"));
        assert!(ModalState::EditForm(record.clone()).references("1"));
        assert!(!ModalState::ViewDetail(record.clone()).references("2"));
        assert!(!ModalState::AddForm.references("1"));
        assert!(!ModalState::Closed.references("1"));

        assert!(ModalState::AddForm.is_open());
        assert!(!ModalState::Closed.is_open());
    }

    #[test]
    fn test_session_from_auth_response() {
        let json = r#"{
            "token": "jwt-abc",
            "user": {"_id": "u1", "name": "Ada", "email": "ada@example.com"}
        }"#;

        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        let session = Session::from(resp);

        assert_eq!(session.id, "u1");
        assert_eq!(session.name, "Ada");
        assert_eq!(session.email, "ada@example.com");
        assert_eq!(session.token, "jwt-abc");
    }

    #[test]
    fn test_session_round_trips_through_storage_shape() {
        let session = Session {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            token: "jwt-abc".to_string(),
        };

        let json = serde_json::to_string(&session).unwrap();
        let parsed: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, session);
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(
            parse_tags("remote, frontend,urgent"),
            vec!["remote", "frontend", "urgent"]
        );
        assert_eq!(parse_tags("remote,, ,"), vec!["remote"]);
        assert!(parse_tags("").is_empty());
    }
}
