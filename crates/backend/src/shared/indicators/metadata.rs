use contracts::domain::a001_locality::IndicatorKey;
use contracts::enums::Sector;
use contracts::shared::indicators::*;

fn usd() -> ValueFormat {
    ValueFormat::Money {
        currency: "$".into(),
    }
}

fn meta(raw: &str, label: &str, sector: Option<Sector>, description: &str) -> Option<IndicatorMeta> {
    let key = match IndicatorKey::parse(raw) {
        Ok(key) => key,
        Err(e) => {
            tracing::error!("indicator catalogue references {raw}: {e}");
            return None;
        }
    };
    Some(IndicatorMeta {
        key,
        label: label.into(),
        format: usd(),
        description: Some(description.into()),
        sector,
    })
}

/// Build the full catalogue of allow-listed indicators.
pub fn build_catalog() -> IndicatorCatalogResponse {
    let indicators = [
        meta(
            "Total_PerCapita",
            "Total cost per capita",
            Some(Sector::AllSectors),
            "Sum of every sector's per-capita cost",
        ),
        meta(
            "Labor_PerCapita",
            "Lost labor per capita",
            Some(Sector::LostLabor),
            "Lost earnings and productivity per resident",
        ),
        meta(
            "Healthcare_PerCapita",
            "Healthcare per capita",
            Some(Sector::Healthcare),
            "Public and private healthcare spending per resident",
        ),
        meta(
            "ChildServices_PerCapita",
            "Child services & K12 per capita",
            Some(Sector::ChildServicesK12),
            "Child welfare and K12 spending per resident",
        ),
        meta(
            "Justice_PerCapita",
            "Criminal justice per capita",
            Some(Sector::CriminalJustice),
            "Policing, courts and corrections per resident",
        ),
        meta(
            "Household_Cost",
            "Cost per household",
            None,
            "Total cost divided by the number of households",
        ),
    ]
    .into_iter()
    .flatten()
    .collect();

    IndicatorCatalogResponse {
        indicators,
        sectors: Sector::all().to_vec(),
    }
}
