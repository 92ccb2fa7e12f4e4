use contracts::domain::a001_locality::{IndicatorKey, IndicatorMap};
use contracts::shared::blocks::config::{BlockSpec, IndicatorMapConfig};
use contracts::shared::blocks::BlockConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::registry::{mismatched, PageEnv};
use crate::shared::api_utils::{get_json, ApiError};
use crate::shared::fetch_guard::FetchGuard;
use crate::shared::number_format::format_money;

pub fn render(config: BlockConfig, _env: &PageEnv) -> AnyView {
    match config {
        BlockConfig::IndicatorMap(config) => view! { <IndicatorMapBlock config=config /> }.into_any(),
        other => mismatched(IndicatorMapConfig::TAG, &other),
    }
}

pub async fn fetch_indicator_map(key: IndicatorKey) -> Result<IndicatorMap, ApiError> {
    get_json(&format!("/api/indicator?indicator={}", key.as_str())).await
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedBar {
    pub locality: String,
    pub value: f64,
    /// Bar length relative to the largest value, `0.0..=100.0`
    pub percent: f64,
}

/// Localities ordered by value (largest first, then by name).
pub fn rank(map: &IndicatorMap) -> Vec<RankedBar> {
    let max = map.values().copied().fold(0.0_f64, f64::max);
    let mut bars: Vec<RankedBar> = map
        .iter()
        .map(|(locality, value)| RankedBar {
            locality: locality.clone(),
            value: *value,
            percent: if max > 0.0 {
                (value / max * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            },
        })
        .collect();
    bars.sort_by(|a, b| {
        b.value
            .total_cmp(&a.value)
            .then_with(|| a.locality.cmp(&b.locality))
    });
    bars
}

#[derive(Clone)]
enum MapState {
    Loading,
    Ready(Vec<RankedBar>),
    Failed,
}

/// Per-locality values of one indicator, ranked as horizontal bars.
#[component]
pub fn IndicatorMapBlock(config: IndicatorMapConfig) -> impl IntoView {
    let state = RwSignal::new(MapState::Loading);
    let guard = FetchGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.invalidate()
    });

    let key = config.indicator;
    let ticket = guard.begin();
    spawn_local(async move {
        let result = fetch_indicator_map(key).await;
        if !guard.is_current(ticket) {
            return;
        }
        match result {
            Ok(map) => state.set(MapState::Ready(rank(&map))),
            Err(e) => {
                log::error!("Failed to load indicator {}: {}", key, e);
                state.set(MapState::Failed);
            }
        }
    });

    let color = config.color.to_string();
    let heading = if config.title.is_empty() {
        key.to_string()
    } else {
        config.title.clone()
    };

    view! {
        <figure
            class=format!("block block-indicator-map {}", config.spacing.classes())
            style=format!("max-width: {}px;", config.width)
        >
            <figcaption>{heading}</figcaption>
            {move || match state.get() {
                MapState::Loading => view! { <p class="page-status">"Loading…"</p> }.into_any(),
                MapState::Failed => {
                    view! { <p class="page-status page-status--error">"Data unavailable."</p> }
                        .into_any()
                }
                MapState::Ready(bars) => {
                    bars.into_iter()
                        .map(|bar| {
                            let style = format!(
                                "width: {:.2}%; background: {};",
                                bar.percent, color
                            );
                            view! {
                                <div class="indicator-row">
                                    <span class="name">{bar.locality}</span>
                                    <span class="bar" style=style></span>
                                    <span class="value">{format_money(bar.value)}</span>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_orders_by_value_then_name() {
        let map: IndicatorMap = [("Beta", 10.0), ("Alpha", 10.0), ("Gamma", 40.0), ("Delta", 0.0)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        let bars = rank(&map);
        let names: Vec<&str> = bars.iter().map(|b| b.locality.as_str()).collect();
        assert_eq!(names, ["Gamma", "Alpha", "Beta", "Delta"]);
        assert_eq!(bars[0].percent, 100.0);
        assert_eq!(bars[1].percent, 25.0);
        assert_eq!(bars[3].percent, 0.0);
    }

    #[test]
    fn test_rank_all_zero() {
        let map: IndicatorMap = [("Alpha".to_string(), 0.0)].into_iter().collect();
        assert_eq!(rank(&map)[0].percent, 0.0);
        assert!(rank(&IndicatorMap::new()).is_empty());
    }
}
