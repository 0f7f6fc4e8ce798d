use crate::error::{PipelineError, Result};
use crate::imaging;
use crate::state::AppState;
use common::model::endpoint::{EndpointType, OverlayColor};
use common::requests::ItemId;
use log::info;
use std::path::Path;
use uuid::Uuid;

/// Lookup, render and upload for one item, stopping at the first failure.
///
/// Rendering is CPU bound and runs on the blocking pool. A panic there surfaces as a
/// join error and becomes `PipelineError::Internal`. The caller spawns this whole
/// future as a task, so panics in the board calls are contained the same way.
pub(super) async fn run(
    kind: EndpointType,
    state: &AppState,
    item_id: ItemId,
    delivery: Uuid,
) -> Result<()> {
    info!("[{}] Processing item {} for {}", delivery, item_id, kind);
    let columns = kind.columns();

    let url = state
        .board
        .lookup(item_id, columns.url_column)
        .await
        .ok_or(PipelineError::UrlNotFound(columns.url_column))?;
    info!("[{}] Processing URL: {}", delivery, url);

    let overlay = kind.overlay();
    let background_path = state.settings.background_path.clone();
    let png = tokio::task::spawn_blocking(move || render_card(&url, overlay, &background_path))
        .await
        .map_err(|e| PipelineError::Internal(e.to_string()))??;

    state.board.upload(item_id, columns.file_column, png).await?;
    Ok(())
}

fn render_card(url: &str, overlay: OverlayColor, background_path: &Path) -> Result<Vec<u8>> {
    let qr = imaging::encode_qr(url).map_err(PipelineError::QrGeneration)?;
    let card =
        imaging::compose(&qr, overlay, background_path).map_err(PipelineError::Composition)?;
    imaging::encode_png(&card).map_err(PipelineError::Composition)
}
