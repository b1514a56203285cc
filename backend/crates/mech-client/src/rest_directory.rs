use crate::wire::ProfileBody;
use crate::{BackendClient, ClientError, ClientResult};

use mech_core::{NewProfile, Profile, ProfileDirectory, ServiceError, ServiceResult};

use async_trait::async_trait;
use log::debug;
use reqwest::{Method, Url};

/// Profile directory backed by the hosted REST layer over relational rows.
#[derive(Debug, Clone)]
pub struct RestProfileDirectory {
    client: BackendClient,
    table: String,
}

impl RestProfileDirectory {
    pub fn new(client: BackendClient, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
        }
    }

    fn table_path(&self) -> String {
        format!("/rest/v1/{}", self.table)
    }

    /// Rows matching a single column filter, e.g. `("username", "eq.alexj")`.
    async fn select(&self, column: &str, filter: String) -> ClientResult<Vec<ProfileBody>> {
        let url = Url::parse_with_params(
            &self.client.url(&self.table_path()),
            &[("select", "*"), (column, filter.as_str())],
        )
        .map_err(ClientError::invalid_url)?;
        let req = self.client.request_url(Method::GET, url);
        let body = self.client.execute(req).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// At most one row, like a `maybeSingle` read.
    async fn select_one(&self, column: &str, filter: String) -> ServiceResult<Option<Profile>> {
        let rows = self.select(column, filter).await?;
        self.at_most_one(rows.into_iter().map(ProfileBody::into_profile).collect())
    }

    fn at_most_one(&self, mut rows: Vec<Profile>) -> ServiceResult<Option<Profile>> {
        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.pop()),
            n => Err(ServiceError::rejected(
                None,
                format!("Expected at most one {} row, found {}", self.table, n),
            )),
        }
    }
}

#[async_trait]
impl ProfileDirectory for RestProfileDirectory {
    async fn find_by_username(&self, username: &str) -> ServiceResult<Option<Profile>> {
        self.select_one("username", format!("eq.{}", username))
            .await
    }

    async fn find_by_email(&self, email: &str) -> ServiceResult<Option<Profile>> {
        // The REST layer also reads `*` in a like pattern as a wildcard, so
        // the filter can over-match. Keep only rows equal to the email.
        let rows = self
            .select("email", format!("ilike.{}", escape_like(email)))
            .await?;
        let exact = rows
            .into_iter()
            .map(ProfileBody::into_profile)
            .filter(|profile| profile.has_email(email))
            .collect();
        self.at_most_one(exact)
    }

    async fn insert(&self, profile: &NewProfile) -> ServiceResult<()> {
        debug!("Inserting {} row for '{}'", self.table, profile.username);

        let req = self
            .client
            .request(Method::POST, &self.table_path())
            .header("Prefer", "return=minimal")
            .json(&[profile]);
        self.client.execute(req).await?;

        Ok(())
    }
}

/// Escape LIKE metacharacters so an ILIKE filter behaves as case-insensitive equality.
pub(crate) fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
