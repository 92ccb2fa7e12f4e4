use contracts::shared::blocks::RawBlock;
use leptos::prelude::*;

use super::registry::{render_blocks, PageEnv};

/// Renders an authored block sequence in order.
#[component]
pub fn BlockList(blocks: Vec<RawBlock>, env: PageEnv) -> impl IntoView {
    let rendered = render_blocks(&blocks, &env);
    view! { <div class="block-list">{rendered}</div> }
}
