use serde::{Deserialize, Serialize};

use super::SectorScoped;
use crate::enums::Sector;
use crate::shared::blocks::descriptor::Fields;
use crate::shared::blocks::presets::{read_amount, read_optional_amount, read_text, MAX_AMOUNT};

const MAX_PAYOR_CHARS: usize = 80;

/// One payor (Federal, State, Local, ...) with its authored per-sector figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayorRow {
    pub payor: String,
    pub labor: f64,
    pub healthcare: f64,
    pub child_services: f64,
    pub justice: f64,
    pub total: f64,
}

impl PayorRow {
    /// Normalize one authored row. Figures are finite and non-negative;
    /// a missing `total` is the sum of the four sector figures, capped at
    /// `MAX_AMOUNT` like every other figure.
    pub fn from_fields(fields: &Fields) -> Self {
        let labor = read_amount(fields, "laborCost");
        let healthcare = read_amount(fields, "healthcareCost");
        let child_services = read_amount(fields, "childServicesCost");
        let justice = read_amount(fields, "justiceCost");
        let total = read_optional_amount(fields, "total")
            .unwrap_or_else(|| (labor + healthcare + child_services + justice).min(MAX_AMOUNT));
        Self {
            payor: read_text(fields, "payor", MAX_PAYOR_CHARS, "Unspecified"),
            labor,
            healthcare,
            child_services,
            justice,
            total,
        }
    }

    pub fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("payor".into(), self.payor.clone().into());
        fields.insert("laborCost".into(), self.labor.into());
        fields.insert("healthcareCost".into(), self.healthcare.into());
        fields.insert("childServicesCost".into(), self.child_services.into());
        fields.insert("justiceCost".into(), self.justice.into());
        fields.insert("total".into(), self.total.into());
        fields
    }

    /// Figure attributed to `sector`; `All Sectors` reads the total column.
    pub fn figure(&self, sector: Sector) -> f64 {
        match sector {
            Sector::AllSectors => self.total,
            Sector::LostLabor => self.labor,
            Sector::Healthcare => self.healthcare,
            Sector::ChildServicesK12 => self.child_services,
            Sector::CriminalJustice => self.justice,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayorLine {
    pub payor: String,
    pub value: f64,
}

/// Single visible column of the payor breakdown table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayorBreakdownView {
    pub sector: Sector,
    pub column_label: String,
    pub lines: Vec<PayorLine>,
    pub grand_total: f64,
}

impl SectorScoped for [PayorRow] {
    type Visible = PayorBreakdownView;

    fn compute_visible(&self, sector: Sector) -> PayorBreakdownView {
        let lines: Vec<PayorLine> = self
            .iter()
            .map(|row| PayorLine {
                payor: row.payor.clone(),
                value: row.figure(sector),
            })
            .collect();
        let grand_total = lines.iter().map(|l| l.value).sum();
        let column_label = if sector.is_all() {
            "Total".to_string()
        } else {
            sector.label().to_string()
        };
        PayorBreakdownView {
            sector,
            column_label,
            lines,
            grand_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn row(v: Value) -> PayorRow {
        match v {
            Value::Object(m) => PayorRow::from_fields(&m),
            _ => unreachable!(),
        }
    }

    fn rows() -> Vec<PayorRow> {
        vec![
            row(json!({
                "payor": "Federal",
                "laborCost": 1.0, "healthcareCost": 2.0,
                "childServicesCost": 3.0, "justiceCost": 4.0,
                "total": 10.0
            })),
            row(json!({
                "payor": "State",
                "laborCost": 5, "healthcareCost": "6",
                "childServicesCost": -7, "justiceCost": "n/a"
            })),
        ]
    }

    #[test]
    fn test_row_normalization() {
        let rows = rows();
        assert_eq!(rows[1].child_services, 0.0);
        assert_eq!(rows[1].justice, 0.0);
        assert_eq!(rows[1].total, 11.0);
        assert_eq!(row(json!({})).payor, "Unspecified");
    }

    #[test]
    fn test_summed_total_is_capped() {
        let huge = row(json!({
            "payor": "Federal",
            "laborCost": 1e15, "healthcareCost": 1e15,
            "childServicesCost": 1e15, "justiceCost": 1e15
        }));
        assert_eq!(huge.total, MAX_AMOUNT);
        assert_eq!(PayorRow::from_fields(&huge.to_fields()), huge);
    }

    #[test]
    fn test_all_sectors_shows_total_column() {
        let view = rows().compute_visible(Sector::AllSectors);
        assert_eq!(view.column_label, "Total");
        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.lines[0].value, 10.0);
        assert_eq!(view.grand_total, 21.0);
    }

    #[test]
    fn test_specific_sector_shows_only_its_column() {
        let data = rows();
        let view = data.compute_visible(Sector::Healthcare);
        assert_eq!(view.column_label, "Healthcare");
        let values: Vec<f64> = view.lines.iter().map(|l| l.value).collect();
        assert_eq!(values, vec![2.0, 6.0]);

        let justice = data.compute_visible(Sector::CriminalJustice);
        assert_eq!(justice.grand_total, 4.0);
    }
}
