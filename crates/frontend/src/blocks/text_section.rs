use contracts::shared::blocks::config::{BlockSpec, TextSectionConfig};
use contracts::shared::blocks::BlockConfig;
use leptos::prelude::*;

use super::registry::{mismatched, PageEnv};

pub fn render(config: BlockConfig, _env: &PageEnv) -> AnyView {
    match config {
        BlockConfig::TextSection(config) => view! { <TextSection config=config /> }.into_any(),
        other => mismatched(TextSectionConfig::TAG, &other),
    }
}

#[component]
pub fn TextSection(config: TextSectionConfig) -> impl IntoView {
    let heading = (!config.heading.is_empty()).then(|| {
        let heading = config.heading.clone();
        view! { <h2>{heading}</h2> }
    });

    view! {
        <section class=format!("block block-text {}", config.spacing.classes())>
            {heading}
            {config
                .body
                .into_iter()
                .map(|paragraph| view! { <p>{paragraph}</p> })
                .collect_view()}
        </section>
    }
}
