use contracts::enums::Sector;
use contracts::shared::blocks::config::{BlockSpec, SectorSelectorConfig};
use contracts::shared::blocks::BlockConfig;
use leptos::prelude::*;

use super::registry::{mismatched, PageEnv};
use crate::shared::sector::expect_sector;

pub fn render(config: BlockConfig, _env: &PageEnv) -> AnyView {
    match config {
        BlockConfig::SectorSelector(config) => view! { <SectorSelector config=config /> }.into_any(),
        other => mismatched(SectorSelectorConfig::TAG, &other),
    }
}

/// Drop-down writing the page's sector selection.
#[component]
pub fn SectorSelector(config: SectorSelectorConfig) -> impl IntoView {
    let sector = expect_sector();

    let on_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        match Sector::from_label(&value) {
            Some(next) => sector.set(next),
            None => log::warn!("Ignoring unknown sector option {:?}", value),
        }
    };

    view! {
        <div class=format!("block block-sector-selector {}", config.spacing.classes())>
            <label>
                {config.label}
                <select on:change=on_change>
                    {Sector::all()
                        .into_iter()
                        .map(|option| {
                            view! {
                                <option value=option.label() selected=move || sector.get() == option>
                                    {option.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
        </div>
    }
}
