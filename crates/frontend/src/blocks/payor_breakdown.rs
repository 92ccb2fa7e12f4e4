use contracts::shared::blocks::config::{BlockSpec, PayorBreakdownConfig};
use contracts::shared::blocks::BlockConfig;
use contracts::shared::sector_data::SectorScoped;
use leptos::prelude::*;

use super::registry::{mismatched, PageEnv};
use crate::shared::number_format::format_money;
use crate::shared::sector::expect_sector;

pub fn render(config: BlockConfig, _env: &PageEnv) -> AnyView {
    match config {
        BlockConfig::PayorBreakdown(config) => view! { <PayorBreakdown config=config /> }.into_any(),
        other => mismatched(PayorBreakdownConfig::TAG, &other),
    }
}

/// Who pays: one column for the selected sector, or the totals for all sectors.
#[component]
pub fn PayorBreakdown(config: PayorBreakdownConfig) -> impl IntoView {
    let sector = expect_sector();
    let rows = config.rows;
    let visible = Memo::new(move |_| rows.compute_visible(sector.get()));

    let caption = (!config.title.is_empty()).then(|| {
        let title = config.title.clone();
        view! { <caption>{title}</caption> }
    });

    view! {
        <div class=format!("block block-payor {}", config.spacing.classes())>
            <table>
                {caption}
                <thead>
                    <tr>
                        <th>"Payor"</th>
                        <th class="num">{move || visible.with(|v| v.column_label.clone())}</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        visible
                            .get()
                            .lines
                            .into_iter()
                            .map(|line| {
                                view! {
                                    <tr>
                                        <td>{line.payor}</td>
                                        <td class="num">{format_money(line.value)}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
                <tfoot>
                    <tr>
                        <td>"Total"</td>
                        <td class="num">{move || format_money(visible.with(|v| v.grand_total))}</td>
                    </tr>
                </tfoot>
            </table>
        </div>
    }
}
