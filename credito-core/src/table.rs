//! Display formatting for one table row.

use crate::credito::Credito;

/// Fixed two-decimal rendering used for `monto` and `tasa_interes`.
pub fn format_decimal(value: f64) -> String {
    format!("{:.2}", value)
}

/// Cell texts of one rendered record, in column order.
///
/// Cells are plain text; renderers must insert them as text nodes, never as
/// markup.
#[derive(Debug, PartialEq, Clone)]
pub struct CreditoRow {
    pub id: i64,
    pub cliente: String,
    pub monto: String,
    pub tasa_interes: String,
    pub plazo: String,
    pub fecha_otorgamiento: String,
}

/// Column headers, matching [`CreditoRow`] field order.
pub const HEADERS: [&str; 6] = ["ID", "Cliente", "Monto", "Tasa %", "Plazo", "Fecha"];

impl From<&Credito> for CreditoRow {
    fn from(credito: &Credito) -> Self {
        Self {
            id: credito.id,
            cliente: credito.cliente.clone(),
            monto: format_decimal(credito.monto),
            tasa_interes: format_decimal(credito.tasa_interes),
            plazo: credito.plazo.to_string(),
            fecha_otorgamiento: credito.fecha_otorgamiento.clone(),
        }
    }
}

impl CreditoRow {
    pub fn cells(&self) -> [String; 6] {
        [
            self.id.to_string(),
            self.cliente.clone(),
            self.monto.clone(),
            self.tasa_interes.clone(),
            self.plazo.clone(),
            self.fecha_otorgamiento.clone(),
        ]
    }
}

/// Rows in backend order; no client-side sorting.
pub fn rows(records: &[Credito]) -> Vec<CreditoRow> {
    records.iter().map(CreditoRow::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimals() {
        assert_eq!(format_decimal(100.0), "100.00");
        assert_eq!(format_decimal(12.5), "12.50");
        assert_eq!(format_decimal(0.0), "0.00");
        assert_eq!(format_decimal(1234.567), "1234.57");
    }

    #[test]
    fn test_row_from_credito() {
        let credito = Credito {
            id: 5,
            cliente: "<b>X</b>".to_string(),
            monto: 1500.0,
            tasa_interes: 9.126,
            plazo: 36,
            fecha_otorgamiento: "2023-12-31".to_string(),
        };
        let row = CreditoRow::from(&credito);
        assert_eq!(row.cliente, "<b>X</b>");
        assert_eq!(
            row.cells(),
            [
                "5".to_string(),
                "<b>X</b>".to_string(),
                "1500.00".to_string(),
                "9.13".to_string(),
                "36".to_string(),
                "2023-12-31".to_string(),
            ]
        );
    }

    #[test]
    fn test_rows_keep_backend_order() {
        let make = |id| Credito {
            id,
            cliente: format!("c{}", id),
            monto: 1.0,
            tasa_interes: 1.0,
            plazo: 1,
            fecha_otorgamiento: "2024-01-01".to_string(),
        };
        let records = vec![make(9), make(3), make(7)];
        let ids: Vec<i64> = rows(&records).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 3, 7]);
    }
}
