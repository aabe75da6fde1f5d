//! Aggregates behind the two charts.

use crate::credito::{ClientTotal, Credito};

/// Derived totals for one record set.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct ChartSummary {
    /// Sum of `monto` over all records
    pub total: f64,
    /// Sum of `monto` per client, in first-seen order
    pub by_client: Vec<ClientTotal>,
}

impl ChartSummary {
    pub fn from_records(records: &[Credito]) -> Self {
        let total = records.iter().map(|c| c.monto).sum();

        let mut by_client: Vec<ClientTotal> = Vec::new();
        for credito in records {
            match by_client.iter_mut().find(|t| t.cliente == credito.cliente) {
                Some(entry) => entry.total += credito.monto,
                None => by_client.push(ClientTotal {
                    cliente: credito.cliente.clone(),
                    total: credito.monto,
                }),
            }
        }

        Self { total, by_client }
    }

    pub fn labels(&self) -> Vec<String> {
        self.by_client.iter().map(|t| t.cliente.clone()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.by_client.iter().map(|t| t.total).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credito(id: i64, cliente: &str, monto: f64) -> Credito {
        Credito {
            id,
            cliente: cliente.to_string(),
            monto,
            tasa_interes: 0.0,
            plazo: 1,
            fecha_otorgamiento: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_total() {
        let records = vec![
            credito(1, "A", 100.0),
            credito(2, "B", 250.0),
            credito(3, "C", 50.0),
        ];
        assert_eq!(ChartSummary::from_records(&records).total, 400.0);
    }

    #[test]
    fn test_by_client_groups_in_first_seen_order() {
        let records = vec![
            credito(1, "Ana", 100.0),
            credito(2, "Beto", 50.0),
            credito(3, "Ana", 25.0),
        ];
        let summary = ChartSummary::from_records(&records);
        assert_eq!(summary.labels(), vec!["Ana", "Beto"]);
        assert_eq!(summary.values(), vec![125.0, 50.0]);
        assert_eq!(summary.total, 175.0);
    }

    #[test]
    fn test_empty() {
        let summary = ChartSummary::from_records(&[]);
        assert_eq!(summary.total, 0.0);
        assert!(summary.by_client.is_empty());
    }

    #[test]
    fn test_client_names_are_case_sensitive() {
        let records = vec![credito(1, "ana", 1.0), credito(2, "Ana", 2.0)];
        assert_eq!(ChartSummary::from_records(&records).by_client.len(), 2);
    }
}
