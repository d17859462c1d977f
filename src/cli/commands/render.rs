use tracing::{debug, error, info, trace};

use crate::config::PageSettings;
use crate::error::RenderError;
use crate::page::{read_snapshot, render_document, render_fragment, write_output};

/// Everything the render command needs
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub snapshot_path: String,
    pub output_path: String,
    pub force_loading: bool,
    pub fragment: bool,
    pub page: PageSettings,
}

pub async fn render(request: &RenderRequest) -> Result<(), RenderError> {
    trace!("Entering render function");
    info!("Rendering donation analytics");
    debug!("Snapshot path: {}", request.snapshot_path);
    debug!("Output path: {}", request.output_path);

    let mut snapshot = match read_snapshot(&request.snapshot_path) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to load snapshot: {}", e);
            return Err(e);
        }
    };

    if request.force_loading {
        debug!("Forcing loading state");
        snapshot.is_loading = true;
    }
    debug!("Panel state: {:?}", snapshot.panel_state());

    let html = if request.fragment {
        render_fragment(snapshot).await
    } else {
        render_document(&request.page, snapshot).await
    };
    trace!("Rendered {} bytes of HTML", html.len());

    if let Err(e) = write_output(&request.output_path, &html) {
        error!("Failed to write rendered HTML: {}", e);
        return Err(e);
    }

    info!("Donation analytics rendered to {}", request.output_path);
    Ok(())
}
