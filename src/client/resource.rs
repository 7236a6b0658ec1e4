//! Resource client
//!
//! Maps CRUD and RPC verbs onto [`Requester::execute`] using PostgREST path
//! conventions: `<table>` for whole-table operations, `<table>?id=eq.<id>`
//! for single-row addressing, `<table>?<filters>` for filtered reads, and
//! `rpc/<function>` for stored procedures.

use super::requester::{HttpRequester, Requester};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::{JsonValue, Method};
use tracing::debug;

/// Client for a Supabase PostgREST endpoint
///
/// Generic over the [`Requester`] so tests can substitute a scripted
/// transport; production code uses the [`HttpRequester`] default.
#[derive(Debug, Clone)]
pub struct Supacrud<R: Requester = HttpRequester> {
    requester: R,
}

impl Supacrud<HttpRequester> {
    /// Build a client over a live HTTP requester
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            requester: HttpRequester::new(config)?,
        })
    }
}

impl<R: Requester> Supacrud<R> {
    /// Build a client over a custom requester
    pub fn with_requester(requester: R) -> Self {
        Self { requester }
    }

    /// The underlying requester
    pub fn requester(&self) -> &R {
        &self.requester
    }

    /// Create one or more records. Returns the created rows (the request
    /// asks for a full representation).
    pub async fn create(&self, path: &str, data: &JsonValue) -> Result<JsonValue> {
        debug!("performing POST operation at {path}");
        let response = self
            .requester
            .execute(Method::POST, path, Some(data), true)
            .await?;
        Ok(response.body)
    }

    /// Read rows. The path must address specific rows with an id or a filter
    /// query string; a bare table name is rejected before any network call
    /// to guard against accidental full-table scans.
    pub async fn read(&self, path: &str) -> Result<JsonValue> {
        ensure_selective(path)?;
        debug!("performing GET operation at {path}");
        let response = self.requester.execute(Method::GET, path, None, false).await?;
        Ok(response.body)
    }

    /// Read the row addressed by `id=eq.<id>`
    pub async fn read_by_id(&self, table: &str, id: &str) -> Result<JsonValue> {
        self.read(&format!("{table}?id=eq.{id}")).await
    }

    /// Read rows matching a PostgREST filter expression,
    /// e.g. `age=gte.18&student=is.true`
    pub async fn read_where(&self, table: &str, filters: &str) -> Result<JsonValue> {
        self.read(&format!("{table}?{filters}")).await
    }

    /// Update rows at the given path. Returns the updated rows.
    pub async fn update(&self, path: &str, data: &JsonValue) -> Result<JsonValue> {
        debug!("performing PATCH operation at {path}");
        let response = self
            .requester
            .execute(Method::PATCH, path, Some(data), true)
            .await?;
        Ok(response.body)
    }

    /// Update the row addressed by `id=eq.<id>`
    pub async fn update_by_id(&self, table: &str, id: &str, data: &JsonValue) -> Result<JsonValue> {
        self.update(&format!("{table}?id=eq.{id}"), data).await
    }

    /// Delete rows at the given path. Returns the deleted rows.
    pub async fn delete(&self, path: &str) -> Result<JsonValue> {
        debug!("performing DELETE operation at {path}");
        let response = self
            .requester
            .execute(Method::DELETE, path, None, true)
            .await?;
        Ok(response.body)
    }

    /// Delete the row addressed by `id=eq.<id>`
    pub async fn delete_by_id(&self, table: &str, id: &str) -> Result<JsonValue> {
        self.delete(&format!("{table}?id=eq.{id}")).await
    }

    /// Invoke a stored procedure with named parameters
    pub async fn rpc(&self, function: &str, params: &JsonValue) -> Result<JsonValue> {
        let path = format!("rpc/{function}");
        debug!("performing RPC operation at {path}");
        let response = self
            .requester
            .execute(Method::POST, &path, Some(params), false)
            .await?;
        Ok(response.body)
    }
}

/// Reads must carry an id or filter query string
fn ensure_selective(path: &str) -> Result<()> {
    match path.split_once('?') {
        Some((_, query)) if !query.is_empty() => Ok(()),
        _ => Err(Error::validation("either an id or filters must be provided")),
    }
}
