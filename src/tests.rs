#[cfg(test)]
mod integration_tests {
    use std::path::PathBuf;

    use clap::Parser;
    use common::{AnalyticsError, AnalyticsSnapshot};
    use frontend::mock_data::sample_snapshot;
    use serde_json::json;

    use crate::cli::{Cli, Commands};
    use crate::cli::commands::{RenderRequest, render, sample};
    use crate::config::{DEFAULT_PAGE_TITLE, PageSettings};
    use crate::error::RenderError;
    use crate::page::{read_snapshot, render_document, render_fragment};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "donation-analytics-{}-{}",
            std::process::id(),
            name
        ))
    }

    fn write_snapshot(name: &str, value: serde_json::Value) -> String {
        let path = temp_path(name);
        std::fs::write(&path, value.to_string()).unwrap();
        path.to_string_lossy().into_owned()
    }

    fn request(snapshot_path: String, output_path: String) -> RenderRequest {
        RenderRequest {
            snapshot_path,
            output_path,
            force_loading: false,
            fragment: false,
            page: PageSettings::default(),
        }
    }

    #[tokio::test]
    async fn test_render_document_wraps_panel() {
        let settings = PageSettings {
            title: "Spring Campaign".to_string(),
            ..PageSettings::default()
        };
        let html = render_document(&settings, sample_snapshot()).await;

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Spring Campaign</title>"));
        assert!(html.contains(&settings.stylesheet_url));
        assert!(html.contains(&settings.icons_url));
        assert!(html.contains("Donation Analytics"));
        assert!(html.contains("$4,850.00"));
        assert!(html.contains("48.5% of $10,000.00 goal"));
    }

    #[tokio::test]
    async fn test_render_fragment_has_no_page_shell() {
        let html = render_fragment(sample_snapshot()).await;

        assert!(!html.contains("<html"));
        assert!(!html.contains("<!DOCTYPE"));
        assert!(html.contains("Recent Donations"));
    }

    #[tokio::test]
    async fn test_render_command_writes_file() {
        let snapshot_path = write_snapshot(
            "render-input.json",
            json!({
                "data": {
                    "currentAmount": 250,
                    "targetAmount": 1000,
                    "recentDonations": [{
                        "_id": "a1",
                        "plan": { "amount": 250, "interval": "monthly" },
                        "createdAt": "2024-03-05T10:00:00Z"
                    }],
                    "donations": [{ "_id": "a1" }]
                },
                "isLoading": false
            }),
        );
        let output_path = temp_path("render-output.html");
        let output = output_path.to_string_lossy().into_owned();

        render(&request(snapshot_path, output.clone())).await.unwrap();

        let html = std::fs::read_to_string(&output_path).unwrap();
        assert!(html.contains("25.0% of $1,000.00 goal"));
        assert!(html.contains("Anonymous"));
        assert!(html.contains("badge-primary"));
        assert!(html.contains("3/5/2024"));
    }

    #[tokio::test]
    async fn test_render_command_forces_loading() {
        let snapshot_path = write_snapshot(
            "loading-input.json",
            serde_json::to_value(sample_snapshot()).unwrap(),
        );
        let output_path = temp_path("loading-output.html");
        let mut request = request(snapshot_path, output_path.to_string_lossy().into_owned());
        request.force_loading = true;
        request.fragment = true;

        render(&request).await.unwrap();

        let html = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(html.matches(r#"data-testid="summary-card-skeleton""#).count(), 3);
        assert_eq!(html.matches(r#"data-testid="donation-row-skeleton""#).count(), 5);
        assert!(!html.contains("$4,850.00"));
    }

    #[tokio::test]
    async fn test_error_snapshot_renders_single_message() {
        let snapshot = AnalyticsSnapshot {
            data: sample_snapshot().data,
            is_loading: false,
            error: Some(AnalyticsError::default()),
        };
        let html = render_fragment(snapshot).await;

        assert!(html.contains("Failed to load analytics data"));
        assert!(!html.contains("Recent Donations"));
    }

    #[test]
    fn test_read_snapshot_missing_file() {
        let path = temp_path("does-not-exist.json");
        let err = read_snapshot(&path.to_string_lossy()).unwrap_err();
        assert!(matches!(err, RenderError::ReadSnapshot { .. }));
    }

    #[test]
    fn test_read_snapshot_invalid_json() {
        let path = temp_path("invalid.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = read_snapshot(&path.to_string_lossy()).unwrap_err();
        assert!(matches!(err, RenderError::ParseSnapshot { .. }));
        assert!(err.to_string().contains("Invalid snapshot JSON"));
    }

    #[test]
    fn test_sample_command_output_parses_back() {
        let output_path = temp_path("sample.json");
        sample(&output_path.to_string_lossy()).unwrap();

        let snapshot = read_snapshot(&output_path.to_string_lossy()).unwrap();
        assert_eq!(snapshot, sample_snapshot());
    }

    #[test]
    fn test_cli_render_defaults() {
        let cli = Cli::try_parse_from(["donation-analytics", "render", "--snapshot", "input.json"])
            .unwrap();

        match cli.command {
            Commands::Render {
                snapshot,
                output,
                loading,
                fragment,
                title,
                ..
            } => {
                assert_eq!(snapshot, "input.json");
                assert_eq!(output, "-");
                assert!(!loading);
                assert!(!fragment);
                assert_eq!(title, DEFAULT_PAGE_TITLE);
            }
            other => panic!("Expected render command, got {:?}", other),
        }
    }
}
