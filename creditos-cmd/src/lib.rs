//! Command implementations for the créditos CLI.
//!
//! Each subcommand goes through the same validation, request descriptions and
//! error-body rules as the browser app (see `credito-core`).

use clap::{Args, Subcommand};
use credito_core::validation::FormValues;

pub mod client;
pub mod records;
pub mod summary;

use client::CreditosClient;

/// Field values given on the command line. Missing fields stay empty and
/// are reported by validation.
#[derive(Args, Debug, Default, Clone)]
pub struct CreditoArgs {
    /// Borrower name
    #[arg(long)]
    pub cliente: Option<String>,

    /// Loan amount
    #[arg(long)]
    pub monto: Option<String>,

    /// Interest rate
    #[arg(long = "tasa")]
    pub tasa_interes: Option<String>,

    /// Term length
    #[arg(long)]
    pub plazo: Option<String>,

    /// Origination date (YYYY-MM-DD)
    #[arg(long = "fecha")]
    pub fecha_otorgamiento: Option<String>,
}

impl CreditoArgs {
    /// Overwrite the fields that were given, keep the rest.
    pub fn apply(&self, values: &mut FormValues) {
        let fields = [
            (&self.cliente, &mut values.cliente),
            (&self.monto, &mut values.monto),
            (&self.tasa_interes, &mut values.tasa_interes),
            (&self.plazo, &mut values.plazo),
            (&self.fecha_otorgamiento, &mut values.fecha_otorgamiento),
        ];
        for (given, target) in fields {
            if let Some(value) = given {
                *target = value.clone();
            }
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// List all créditos, newest first as returned by the backend
    List {
        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Create a crédito (date defaults to today)
    Add {
        #[command(flatten)]
        fields: CreditoArgs,
    },

    /// Update a crédito; fields not given keep their current value
    Update {
        id: i64,

        #[command(flatten)]
        fields: CreditoArgs,
    },

    /// Delete a crédito after confirmation
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Total lent and per-client distribution
    Summary {
        /// Use the backend's aggregate endpoints instead of computing locally
        #[arg(long)]
        server: bool,
    },
}

pub async fn run(command: Command, base_url: &str) -> anyhow::Result<()> {
    let client = CreditosClient::new(base_url)?;
    match command {
        Command::List { json } => records::run_list(&client, json).await,
        Command::Add { fields } => records::run_add(&client, &fields).await,
        Command::Update { id, fields } => records::run_update(&client, id, &fields).await,
        Command::Delete { id, yes } => records::run_delete(&client, id, yes).await,
        Command::Summary { server } => summary::run_summary(&client, server).await,
    }
}
