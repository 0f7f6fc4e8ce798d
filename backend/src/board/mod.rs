//! Access to the work-management board: read a column of an item, attach a file to another.

mod client;

pub use client::MondayClient;

use crate::error::UploadError;
use async_trait::async_trait;
use common::requests::ItemId;

#[async_trait]
pub trait BoardClient {
    /// Non-empty text of `column_id` on the item.
    ///
    /// Every failure (transport, HTTP status, missing item, empty value) yields `None`;
    /// the cause is only reported in the logs.
    async fn lookup(&self, item_id: ItemId, column_id: &str) -> Option<String>;

    /// Attaches `png` to the file column `column_id`. One attempt, no retries.
    async fn upload(
        &self,
        item_id: ItemId,
        column_id: &str,
        png: Vec<u8>,
    ) -> Result<(), UploadError>;
}
