use crate::board::BoardClient;
use crate::config::Settings;
use crate::error::UploadError;
use async_trait::async_trait;
use common::requests::ItemId;
use mockall::mock;
use std::path::PathBuf;

mock! {
    pub Board {}

    #[async_trait]
    impl BoardClient for Board {
        async fn lookup(&self, item_id: ItemId, column_id: &str) -> Option<String>;

        async fn upload(
            &self,
            item_id: ItemId,
            column_id: &str,
            png: Vec<u8>,
        ) -> Result<(), UploadError>;
    }
}

/// Settings pointing at nothing reachable; the background path does not exist, so
/// cards are drawn on the gradient.
pub fn test_settings() -> Settings {
    Settings {
        host: "127.0.0.1".to_string(),
        port: 0,
        api_url: "http://127.0.0.1:9/v2".to_string(),
        file_api_url: "http://127.0.0.1:9/v2/file".to_string(),
        api_token: "test-token".to_string(),
        board_id: "1".to_string(),
        background_path: PathBuf::from("/nonexistent/qrhook/background.png"),
        http_timeout_secs: 5,
    }
}
