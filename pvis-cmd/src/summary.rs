//! Grouped summary of the live storage dump.

use log::info;
use pvis_core::config::ViewerConfig;
use pvis_core::grouping::{group_by, summarize, Property};
use pvis_core::hierarchy::format_kb;
use pvis_core::snapshot::{FileEntry, Snapshot};
use pvis_core::timestamp::format_day;
use std::path::Path;
use std::time::Duration;

/// GET the dump at `url` and parse it.
pub async fn fetch_snapshot(client: &reqwest::Client, url: &str) -> anyhow::Result<Snapshot> {
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Snapshot::from_json(&body)
}

/// One line per group: key, entry count, total size and latest date.
pub fn summary_lines(entries: &[FileEntry], property: Property) -> Vec<String> {
    summarize(&group_by(entries, property))
        .into_iter()
        .map(|group| {
            let latest = group
                .latest
                .map(|ts| format_day(&ts))
                .unwrap_or_else(|| "-".to_string());
            format!(
                "{}\t{} entries\t{} KB\t{}",
                group.key,
                group.count,
                format_kb(group.total_size),
                latest
            )
        })
        .collect()
}

pub async fn run_summary(
    property: Property,
    config_path: Option<&Path>,
    server: Option<&str>,
) -> anyhow::Result<()> {
    let mut config = match config_path {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };
    if let Some(server) = server {
        config.server = server.to_string();
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()?;

    let url = config.dump_url();
    info!("Fetching storage dump from {}", url);
    let snapshot = fetch_snapshot(&client, &url).await?;
    let entries = snapshot.current_entries();
    info!(
        "{} current entries, grouping by {}",
        entries.len(),
        property
    );

    for line in summary_lines(&entries, property) {
        println!("{}", line);
    }
    Ok(())
}
