//! list / add / update / delete subcommands.

use crate::client::CreditosClient;
use crate::CreditoArgs;
use anyhow::bail;
use chrono::Local;
use comfy_table::Table;
use credito_core::api::{ApiRequest, CONFIRM_DELETE};
use credito_core::table::{rows, HEADERS};
use credito_core::{Credito, FormState};
use log::info;
use std::io::{self, BufRead, Write};

/// Render records as a text table, one row per record in backend order.
pub fn render_table(records: &[Credito]) -> String {
    let mut out = Table::new();
    out.set_header(HEADERS.to_vec());
    for row in rows(records) {
        out.add_row(row.cells().to_vec());
    }
    out.to_string()
}

pub async fn run_list(client: &CreditosClient, json: bool) -> anyhow::Result<()> {
    let records = client.list().await?;
    info!("Fetched {} creditos", records.len());
    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        println!("{}", render_table(&records));
    }
    Ok(())
}

/// Validate, send, and on success print the refreshed list.
async fn submit(client: &CreditosClient, form: &mut FormState) -> anyhow::Result<()> {
    let Some(request) = form.submit() else {
        bail!("{}", form.error().unwrap_or_default());
    };
    match client.save(request).await {
        Ok(saved) => {
            form.submit_succeeded();
            match saved {
                Some(credito) => println!("Guardado crédito {}", credito.id),
                None => println!("Guardado"),
            }
            run_list(client, false).await
        }
        Err(e) => {
            form.submit_failed(e.to_string());
            Err(e)
        }
    }
}

pub async fn run_add(client: &CreditosClient, fields: &CreditoArgs) -> anyhow::Result<()> {
    let mut form = FormState::new();
    form.values.fecha_otorgamiento = Local::now().date_naive().format("%Y-%m-%d").to_string();
    fields.apply(&mut form.values);
    submit(client, &mut form).await
}

pub async fn run_update(
    client: &CreditosClient,
    id: i64,
    fields: &CreditoArgs,
) -> anyhow::Result<()> {
    let records = client.list().await?;
    let mut form = FormState::new();
    if !form.begin_edit(id, &records) {
        bail!("Crédito no encontrado: {}", id);
    }
    fields.apply(&mut form.values);
    submit(client, &mut form).await
}

/// True for an affirmative answer (`s`, `si`, `sí`, `y`, `yes`).
pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    )
}

fn prompt(question: &str) -> anyhow::Result<bool> {
    print!("{} [s/N] ", question);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

pub async fn run_delete(client: &CreditosClient, id: i64, yes: bool) -> anyhow::Result<()> {
    let confirmed = yes || prompt(CONFIRM_DELETE)?;
    let Some(request) = ApiRequest::delete_if_confirmed(id, confirmed) else {
        println!("Cancelado");
        return Ok(());
    };
    client.delete(request).await?;
    println!("Eliminado crédito {}", id);
    run_list(client, false).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table_formats_amounts() {
        let records = vec![Credito {
            id: 2,
            cliente: "Ana".to_string(),
            monto: 1500.0,
            tasa_interes: 7.0,
            plazo: 12,
            fecha_otorgamiento: "2024-02-29".to_string(),
        }];
        let out = render_table(&records);
        assert!(out.contains("Cliente"));
        assert!(out.contains("1500.00"));
        assert!(out.contains("7.00"));
        assert!(out.contains("2024-02-29"));
    }

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("s\n"));
        assert!(is_affirmative(" Sí "));
        assert!(is_affirmative("yes"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n"));
    }
}
