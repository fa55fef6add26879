use anyhow::{Result, anyhow};
use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, CONTENT_TYPE, AUTHORIZATION},
    Method,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;

/// Outcome of a table operation against the hosted backend.
///
/// Transport and API failures never escape as `Err`; they are folded into
/// `success == false` with a human readable `message`.
#[derive(Debug, Clone, PartialEq)]
pub struct TableResponse {
    pub success: bool,
    pub data: Vec<Value>,
    pub message: Option<String>,
}

impl TableResponse {
    pub fn ok(data: Vec<Value>) -> Self {
        Self { success: true, data, message: None }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, data: Vec::new(), message: Some(message.into()) }
    }
}

pub struct SupabaseClient {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.supabase_url.trim_end_matches('/').to_string(),
            anon_key: config.supabase_anon_key.clone(),
        }
    }

    fn get_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert("apikey", HeaderValue::from_str(&self.anon_key)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.anon_key))?,
        );

        Ok(headers)
    }

    pub async fn request_with_headers<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<T>
    where T: DeserializeOwned {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making {} request to {}", method, url);

        let mut headers = self.get_headers()?;
        if let Some(extra) = extra_headers {
            headers.extend(extra);
        }

        let mut req = self.client.request(method, &url)
            .headers(headers);

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("API error ({}): {}", status, error_text);

            return Err(match status.as_u16() {
                401 | 403 => anyhow!("Authentication error: {}", error_text),
                404 => anyhow!("Resource not found: {}", error_text),
                _ => anyhow!("API error ({}): {}", status, error_text),
            });
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }

    /// GET rows from `table`. `query` is a raw PostgREST query string
    /// (`select=...&id=eq.1`), without the leading `?`.
    pub async fn fetch_records(&self, table: &str, query: &str) -> TableResponse {
        let path = table_path(table, query);
        self.table_call(Method::GET, &path, None).await
    }

    pub async fn create_record(&self, table: &str, query: &str, row: Value) -> TableResponse {
        let path = table_path(table, query);
        self.table_call(Method::POST, &path, Some(row)).await
    }

    pub async fn update_records(&self, table: &str, query: &str, changes: Value) -> TableResponse {
        let path = table_path(table, query);
        self.table_call(Method::PATCH, &path, Some(changes)).await
    }

    pub async fn delete_records(&self, table: &str, query: &str) -> TableResponse {
        let path = table_path(table, query);
        self.table_call(Method::DELETE, &path, None).await
    }

    async fn table_call(&self, method: Method, path: &str, body: Option<Value>) -> TableResponse {
        let mut headers = HeaderMap::new();
        headers.insert("Prefer", HeaderValue::from_static("return=representation"));

        match self.request_with_headers::<Vec<Value>>(method.clone(), path, body, Some(headers)).await {
            Ok(rows) => TableResponse::ok(rows),
            Err(e) => {
                error!("{} {} failed: {}", method, path, e);
                TableResponse::failed(e.to_string())
            }
        }
    }

    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }
}

fn table_path(table: &str, query: &str) -> String {
    if query.is_empty() {
        format!("/rest/v1/{}", table)
    } else {
        format!("/rest/v1/{}?{}", table, query)
    }
}
