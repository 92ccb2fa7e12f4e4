use contracts::shared::blocks::config::{BlockSpec, HorizontalRuleConfig};
use contracts::shared::blocks::BlockConfig;
use leptos::prelude::*;

use super::registry::{mismatched, PageEnv};

pub fn render(config: BlockConfig, _env: &PageEnv) -> AnyView {
    match config {
        BlockConfig::HorizontalRule(config) => view! { <HorizontalRule config=config /> }.into_any(),
        other => mismatched(HorizontalRuleConfig::TAG, &other),
    }
}

#[component]
pub fn HorizontalRule(config: HorizontalRuleConfig) -> impl IntoView {
    let style = format!(
        "max-width: {}px; border-top: {}px solid {};",
        config.width, config.thickness, config.color
    );
    view! { <hr class=format!("block block-hr {}", config.spacing.classes()) style=style /> }
}
