// src/cli/dashboard.rs — dashboard / upload / report commands
//
// Text rendition of the dashboard: a direct, stateless projection of the
// orchestrator's state via the view projections.

use std::path::Path;
use std::sync::Arc;

use crate::api::{ApiGateway, DatasetFile};
use crate::core::projections::{
    averages_series, distribution_series, table_rows, AVERAGE_LABELS,
};
use crate::core::{Dashboard, DashboardState};

pub async fn run_dashboard<G: ApiGateway>(
    dashboard: &Dashboard<G>,
    select: Option<usize>,
) -> anyhow::Result<()> {
    dashboard.initialize().await;

    if let Some(n) = select {
        let state = dashboard.state();
        match state.history.get(n.saturating_sub(1)) {
            Some(entry) => dashboard.on_history_select(entry.clone()),
            None => println!("No history entry #{n}"),
        }
    }

    render(&dashboard.state());
    Ok(())
}

pub async fn run_upload<G: ApiGateway>(
    gateway: Arc<G>,
    dashboard: &Dashboard<G>,
    path: &Path,
) -> anyhow::Result<()> {
    let bytes = tokio::fs::read(path).await?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let content_type = filename
        .to_ascii_lowercase()
        .ends_with(".csv")
        .then(|| "text/csv".to_string());

    let file = DatasetFile {
        filename,
        content_type,
        bytes,
    };

    match gateway.upload_dataset(file).await {
        Ok(receipt) => {
            tracing::info!(dataset_id = receipt.id, "upload accepted");
            dashboard.on_upload_success().await;
            render(&dashboard.state());
            Ok(())
        }
        Err(err) => {
            anyhow::bail!("Failed to upload file: {err}")
        }
    }
}

pub async fn run_report<G: ApiGateway>(dashboard: &Dashboard<G>) -> anyhow::Result<()> {
    dashboard.initialize().await;
    dashboard.download_report().await;
    Ok(())
}

fn render(state: &DashboardState) {
    let Some(summary) = &state.summary else {
        println!("No data available. Upload a CSV file to get started.");
        render_history(state);
        return;
    };

    println!("Dataset: {}", summary.filename.as_deref().unwrap_or("(unnamed)"));
    if let Some(id) = summary.id {
        println!("ID:      {id}");
    }
    if let Some(date) = summary.upload_date {
        println!("Uploaded: {}", date.format("%Y-%m-%d %H:%M:%S UTC"));
    }

    let distribution = distribution_series(state.summary.as_ref());
    if !distribution.labels.is_empty() {
        println!("\nEquipment Type Distribution");
        for (label, value) in distribution.labels.iter().zip(&distribution.values) {
            println!("  {label:<16} {value}");
        }
    }

    let averages = averages_series(state.summary.as_ref());
    println!("\nParameter Averages");
    for (label, value) in AVERAGE_LABELS.iter().zip(averages.values) {
        match value {
            Some(v) => println!("  {label:<16} {v:.2}"),
            None => println!("  {label:<16} -"),
        }
    }

    let rows = table_rows(state.summary.as_ref());
    if !rows.is_empty() {
        println!("\nEquipment Data");
        println!(
            "  {:<20} {:<14} {:>10} {:>10} {:>12}",
            "Name", "Type", "Flowrate", "Pressure", "Temperature"
        );
        for row in rows {
            println!(
                "  {:<20} {:<14} {:>10.2} {:>10.2} {:>12.2}",
                row.name, row.equipment_type, row.flowrate, row.pressure, row.temperature
            );
        }
    }

    render_history(state);
}

fn render_history(state: &DashboardState) {
    if state.history.is_empty() {
        return;
    }
    println!("\nUpload History (Last 5)");
    for (i, entry) in state.history.iter().enumerate() {
        let id = entry
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "?".into());
        let date = entry
            .upload_date
            .map(|d| d.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "unknown".into());
        println!("  {}. Dataset ID: {id}  Uploaded at: {date}", i + 1);
    }
}
