use super::BoardClient;
use crate::config::Settings;
use crate::error::UploadError;
use async_trait::async_trait;
use common::model::board::{GraphQlResponse, ItemsData, RemoteItem};
use common::requests::ItemId;
use log::{debug, error, info, warn};
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

const ITEM_COLUMNS_QUERY: &str =
    "query ($itemId: [ID!]) { items (ids: $itemId) { id column_values { id text } } }";

/// Multipart `map` field binding the `image` part to `$file`.
const FILE_VARIABLE_MAP: &str = r#"{"image":"variables.file"}"#;
const UPLOAD_PART: &str = "image";
const UPLOAD_FILE_NAME: &str = "qr_code.png";

/// Reasons a lookup came back empty-handed. Never leaves this module.
#[derive(Error, Debug)]
enum LookupError {
    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {0}: {1}")]
    Status(StatusCode, String),

    #[error("unreadable response body: {0}")]
    Decode(reqwest::Error),
}

/// monday.com GraphQL client.
///
/// Both calls send the raw token in `Authorization`.
#[derive(Clone)]
pub struct MondayClient {
    client: reqwest::Client,
    api_url: String,
    file_api_url: String,
    token: String,
}

impl MondayClient {
    pub fn new(settings: &Settings) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.http_timeout_secs))
            .user_agent(concat!("qrhook/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_url: settings.api_url.clone(),
            file_api_url: settings.file_api_url.clone(),
            token: settings.api_token.clone(),
        })
    }

    async fn fetch_item(&self, item_id: ItemId) -> Result<Option<RemoteItem>, LookupError> {
        let body = json!({
            "query": ITEM_COLUMNS_QUERY,
            "variables": { "itemId": [item_id.to_string()] },
        });

        let response = self
            .client
            .post(&self.api_url)
            .header(AUTHORIZATION, self.token.as_str())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        debug!("Board query for item {} answered {}", item_id, status);
        if status != StatusCode::OK {
            let text = response.text().await.unwrap_or_default();
            return Err(LookupError::Status(status, text));
        }

        let payload: GraphQlResponse<ItemsData> =
            response.json().await.map_err(LookupError::Decode)?;
        if let Some(errors) = &payload.errors {
            warn!("Board query for item {} reported errors: {}", item_id, errors);
        }
        Ok(payload.data.and_then(|data| data.items.into_iter().next()))
    }
}

#[async_trait]
impl BoardClient for MondayClient {
    async fn lookup(&self, item_id: ItemId, column_id: &str) -> Option<String> {
        let item = match self.fetch_item(item_id).await {
            Ok(Some(item)) => item,
            Ok(None) => {
                warn!("Item {} was not returned by the board", item_id);
                return None;
            }
            Err(e) => {
                error!("Error querying the board for item {}: {}", item_id, e);
                return None;
            }
        };

        match item.column_text(column_id) {
            Some(text) => {
                info!("Found URL in column {}: {}", column_id, text);
                Some(text.to_string())
            }
            None => {
                warn!("No URL found in column {} for item {}", column_id, item_id);
                None
            }
        }
    }

    async fn upload(
        &self,
        item_id: ItemId,
        column_id: &str,
        png: Vec<u8>,
    ) -> Result<(), UploadError> {
        // item ids are digits only; the column id goes in as a quoted JSON string
        let query = format!(
            "mutation ($file: File!) {{ add_file_to_column (item_id: {}, column_id: {}, file: $file) {{ id }} }}",
            item_id,
            Value::from(column_id)
        );
        debug!("Uploading {} bytes to item {}, column {}", png.len(), item_id, column_id);

        let part = Part::bytes(png)
            .file_name(UPLOAD_FILE_NAME)
            .mime_str("image/png")?;
        let form = Form::new()
            .text("query", query)
            .text("map", FILE_VARIABLE_MAP)
            .part(UPLOAD_PART, part);

        let response = self
            .client
            .post(&self.file_api_url)
            .header(AUTHORIZATION, self.token.as_str())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("Board upload answered {}: {}", status, body);

        if status != StatusCode::OK {
            return Err(UploadError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let result: Value = serde_json::from_str(&body)?;
        if let Some(errors) = result.get("errors") {
            return Err(UploadError::Rejected(errors.to_string()));
        }

        info!("Uploaded QR code to item {}, column {}", item_id, column_id);
        Ok(())
    }
}
