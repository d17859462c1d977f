use std::io::{Read, Write};

use common::AnalyticsSnapshot;
use frontend::{Analytics, AnalyticsProps};
use tracing::{debug, trace};
use yew::prelude::*;
use yew::ServerRenderer;

use crate::config::PageSettings;
use crate::error::RenderError;

/// Path value meaning stdin or stdout
pub const STDIO_PATH: &str = "-";

#[derive(Properties, PartialEq, Clone)]
pub struct DocumentProps {
    pub title: String,
    pub stylesheet_url: String,
    pub icons_url: String,
    pub snapshot: AnalyticsSnapshot,
}

/// Standalone HTML document holding the analytics panel
#[function_component(Document)]
pub fn document(props: &DocumentProps) -> Html {
    let panel = AnalyticsProps::from(props.snapshot.clone());

    html! {
        <html lang="en" data-theme="light">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{&props.title}</title>
                <link rel="stylesheet" href={props.stylesheet_url.clone()} />
                <link rel="stylesheet" href={props.icons_url.clone()} />
            </head>
            <body class="bg-base-200 min-h-screen">
                <main class="container mx-auto max-w-6xl">
                    <Analytics ..panel />
                </main>
            </body>
        </html>
    }
}

/// Render the bare panel
pub async fn render_fragment(snapshot: AnalyticsSnapshot) -> String {
    trace!("Rendering analytics fragment");
    let props = AnalyticsProps::from(snapshot);
    ServerRenderer::<Analytics>::with_props(move || props)
        .hydratable(false)
        .render()
        .await
}

/// Render the panel wrapped in a complete HTML page
pub async fn render_document(settings: &PageSettings, snapshot: AnalyticsSnapshot) -> String {
    trace!("Rendering analytics document");
    let props = DocumentProps {
        title: settings.title.clone(),
        stylesheet_url: settings.stylesheet_url.clone(),
        icons_url: settings.icons_url.clone(),
        snapshot,
    };
    let body = ServerRenderer::<Document>::with_props(move || props)
        .hydratable(false)
        .render()
        .await;

    format!("<!DOCTYPE html>\n{}\n", body)
}

/// Read a snapshot from a file, or stdin when the path is `-`
pub fn read_snapshot(path: &str) -> Result<AnalyticsSnapshot, RenderError> {
    let raw = if path == STDIO_PATH {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw).map(|_| raw)
    } else {
        std::fs::read_to_string(path)
    }
    .map_err(|source| RenderError::ReadSnapshot {
        path: path.to_string(),
        source,
    })?;
    debug!("Read {} bytes of snapshot from {}", raw.len(), path);

    serde_json::from_str(&raw).map_err(|source| RenderError::ParseSnapshot {
        path: path.to_string(),
        source,
    })
}

/// Write output to a file, or stdout when the path is `-`
pub fn write_output(path: &str, contents: &str) -> Result<(), RenderError> {
    let result = if path == STDIO_PATH {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(contents.as_bytes())
            .and_then(|_| stdout.flush())
    } else {
        std::fs::write(path, contents)
    };

    result.map_err(|source| RenderError::WriteOutput {
        path: path.to_string(),
        source,
    })
}
