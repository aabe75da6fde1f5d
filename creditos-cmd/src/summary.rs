//! `summary` subcommand: the numbers behind the two dashboard charts.

use crate::client::CreditosClient;
use comfy_table::Table;
use credito_core::credito::ClientTotal;
use credito_core::summary::ChartSummary;
use credito_core::table::format_decimal;
use log::info;

pub fn render_summary(summary: &ChartSummary) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Cliente", "Total"]);
    for entry in &summary.by_client {
        table.add_row(vec![entry.cliente.clone(), format_decimal(entry.total)]);
    }
    format!(
        "Total otorgado: {}\n{}",
        format_decimal(summary.total),
        table
    )
}

pub async fn run_summary(client: &CreditosClient, server: bool) -> anyhow::Result<()> {
    let summary = if server {
        let total = client.total().await?;
        let by_client: Vec<ClientTotal> = client.by_client().await?;
        ChartSummary { total, by_client }
    } else {
        let records = client.list().await?;
        info!("Summarizing {} creditos", records.len());
        ChartSummary::from_records(&records)
    };
    println!("{}", render_summary(&summary));
    Ok(())
}
