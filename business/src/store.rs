//! Client for the `team_members` table behind a PostgREST surface.

use log::{debug, warn};
use thiserror::Error;

use crate::config::StoreConfig;
use crate::http::{Client, HttpError, RequestBuilder, Response};
use crate::team::{MemberId, NewTeamMember, TeamMember};

pub const TEAM_MEMBERS_TABLE: &str = "team_members";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Transport(String),
    #[error("store responded with {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode store response: {0}")]
    Decode(String),
    #[error("no team member with id {0}")]
    NotFound(MemberId),
    #[error("store is not configured: {0} is empty")]
    MissingConfig(&'static str),
}

impl From<HttpError> for StoreError {
    fn from(err: HttpError) -> Self {
        Self::Transport(err.message)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Select-all, insert-one and delete-by-id against `team_members`.
///
/// Cheap to clone; commands take one out of the config snapshot and move it
/// into their future.
#[derive(Debug, Clone)]
pub struct TeamStore {
    config: StoreConfig,
}

impl TeamStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    fn endpoint(&self) -> StoreResult<String> {
        if !self.config.is_configured() {
            return Err(StoreError::MissingConfig("ROSTER_STORE_URL"));
        }
        Ok(self.config.rest_url(TEAM_MEMBERS_TABLE))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.config.api_key() {
            Some(key) => request
                .header("apikey", key)
                .header("Authorization", format!("Bearer {key}")),
            None => request,
        }
    }

    /// All rows, newest first. Rows that do not decode are skipped.
    pub async fn list_members(&self) -> StoreResult<Vec<TeamMember>> {
        let url = format!("{}?select=*&order=created_at.desc", self.endpoint()?);
        debug!("GET {url}");

        let response = self.authorize(Client::get(url)).send().await?;
        let rows: Vec<serde_json::Value> = ensure_success(response)?.json()?;
        Ok(decode_members(rows))
    }

    pub async fn insert_member(&self, member: &NewTeamMember) -> StoreResult<()> {
        let url = self.endpoint()?;
        debug!("POST {url}");

        let request = self
            .authorize(Client::post(url))
            .header("Prefer", "return=minimal")
            .json(member)?;
        ensure_success(request.send().await?)?;
        Ok(())
    }

    /// Deletes the row with `id`. Zero deleted rows is [`StoreError::NotFound`].
    pub async fn delete_member(&self, id: MemberId) -> StoreResult<()> {
        let url = format!(
            "{}?id=eq.{}",
            self.endpoint()?,
            urlencoding::encode(id.as_str())
        );
        debug!("DELETE {url}");

        let request = self
            .authorize(Client::delete(url))
            .header("Prefer", "return=representation");
        let response = ensure_success(request.send().await?)?;

        // A proxy that drops the representation still reports success.
        if response.status == 204 || response.body.is_empty() {
            return Ok(());
        }

        let deleted: Vec<serde_json::Value> = response.json()?;
        if deleted.is_empty() {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}

fn decode_members(rows: Vec<serde_json::Value>) -> Vec<TeamMember> {
    rows.into_iter()
        .filter_map(|row| match serde_json::from_value::<TeamMember>(row) {
            Ok(member) => Some(member),
            Err(err) => {
                warn!("Skipping undecodable team member row: {err}");
                None
            }
        })
        .collect()
}

fn ensure_success(response: Response) -> StoreResult<Response> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(StoreError::Status {
            status: response.status,
            body: response.text_lossy(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_store_reports_missing_url() {
        let store = TeamStore::new(StoreConfig::default());
        assert_eq!(
            store.endpoint(),
            Err(StoreError::MissingConfig("ROSTER_STORE_URL"))
        );
    }

    #[test]
    fn api_key_sets_both_auth_headers() {
        let store = TeamStore::new(StoreConfig::new("http://localhost").with_api_key("k1"));
        let request = store.authorize(Client::get("http://localhost"));

        assert_eq!(request.header_value("apikey"), Some("k1"));
        assert_eq!(request.header_value("Authorization"), Some("Bearer k1"));
    }

    #[test]
    fn no_key_means_no_auth_headers() {
        let store = TeamStore::new(StoreConfig::new("http://localhost"));
        let request = store.authorize(Client::get("http://localhost"));

        assert!(request.header_value("apikey").is_none());
        assert!(request.header_value("Authorization").is_none());
    }

    #[test]
    fn non_success_becomes_status_error() {
        let response = Response {
            status: 409,
            body: br#"{"code":"23505"}"#.to_vec(),
        };

        assert_eq!(
            ensure_success(response).map(|_| ()),
            Err(StoreError::Status {
                status: 409,
                body: r#"{"code":"23505"}"#.to_owned(),
            })
        );
    }

    #[test]
    fn undecodable_rows_are_dropped_in_order() {
        let rows = vec![
            serde_json::json!({
                "id": "v1",
                "name": "S. Nair",
                "responsibilities": "Stage Coordinator",
                "role": "volunteer",
                "created_at": "2024-05-02T10:00:00Z"
            }),
            serde_json::json!({ "id": "x", "role": "volunteer" }),
            serde_json::json!({
                "id": "o1",
                "name": "A. Roy",
                "responsibilities": "Event Director",
                "role": "official",
                "created_at": "2024-05-01T10:00:00Z"
            }),
        ];

        let ids: Vec<_> = decode_members(rows).into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![MemberId::new("v1"), MemberId::new("o1")]);
    }

    #[test]
    fn error_messages_name_the_cause() {
        assert_eq!(
            StoreError::NotFound(MemberId::new("missing")).to_string(),
            "no team member with id missing"
        );
        assert!(
            StoreError::from(HttpError::new("connection refused"))
                .to_string()
                .contains("connection refused")
        );
    }
}
