use serde::{Deserialize, Serialize};

/// A loan record as stored by the backend.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Credito {
    /// Assigned by the backend, never changes.
    pub id: i64,
    /// Borrower name
    pub cliente: String,
    /// Loan amount
    pub monto: f64,
    /// Interest rate
    pub tasa_interes: f64,
    /// Term length
    pub plazo: i64,
    /// Origination date, `YYYY-MM-DD`
    pub fecha_otorgamiento: String,
}

/// Body of a create or update request. Same shape as [`Credito`] minus the id.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CreditoPayload {
    pub cliente: String,
    pub monto: f64,
    pub tasa_interes: f64,
    pub plazo: i64,
    pub fecha_otorgamiento: String,
}

impl Credito {
    /// Find a record by id in a fetched list.
    pub fn find(records: &[Credito], id: i64) -> Option<&Credito> {
        records.iter().find(|c| c.id == id)
    }
}

impl From<&Credito> for CreditoPayload {
    fn from(credito: &Credito) -> Self {
        Self {
            cliente: credito.cliente.clone(),
            monto: credito.monto,
            tasa_interes: credito.tasa_interes,
            plazo: credito.plazo,
            fecha_otorgamiento: credito.fecha_otorgamiento.clone(),
        }
    }
}

/// Response of `GET /api/creditos/total`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct TotalResponse {
    pub total: f64,
}

/// One entry of `GET /api/creditos/por_cliente`, also used for the
/// locally computed per-client distribution.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ClientTotal {
    pub cliente: String,
    pub total: f64,
}
