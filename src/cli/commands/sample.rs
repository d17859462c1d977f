use frontend::mock_data::sample_snapshot;
use tracing::{debug, info};

use crate::error::RenderError;
use crate::page::write_output;

pub fn sample(output_path: &str) -> Result<(), RenderError> {
    debug!("Writing sample snapshot to {}", output_path);

    let mut json = serde_json::to_string_pretty(&sample_snapshot())?;
    json.push('\n');
    write_output(output_path, &json)?;

    info!("Sample snapshot written to {}", output_path);
    Ok(())
}
