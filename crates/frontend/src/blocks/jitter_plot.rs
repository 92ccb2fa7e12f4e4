use contracts::enums::Sector;
use contracts::shared::blocks::config::{BlockSpec, JitterPlotConfig};
use contracts::shared::blocks::BlockConfig;
use contracts::shared::sector_data::jitter::{jitter_offset, value_extent, JitterPoint};
use contracts::shared::sector_data::{JitterDataset, SectorScoped};
use leptos::prelude::*;

use super::registry::{mismatched, PageEnv};
use crate::shared::number_format::format_money_compact;
use crate::shared::sector::expect_sector;

const PAD_X: f64 = 24.0;
const LABEL_WIDTH: f64 = 150.0;
const AXIS_HEIGHT: f64 = 24.0;

pub fn render(config: BlockConfig, env: &PageEnv) -> AnyView {
    match config {
        BlockConfig::JitterPlot(config) => {
            let dataset = JitterDataset::from_localities(&env.localities);
            view! { <JitterPlot config=config dataset=dataset /> }.into_any()
        }
        other => mismatched(JitterPlotConfig::TAG, &other),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    pub cx: f64,
    pub cy: f64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lane {
    pub sector: Sector,
    pub center_y: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlotLayout {
    pub lanes: Vec<Lane>,
    pub dots: Vec<Dot>,
    pub extent: Option<(f64, f64)>,
}

/// Place the visible points: one horizontal lane per sector present, x by
/// value, y jittered inside the lane.
pub fn layout(points: &[JitterPoint], width: u32, height: u32, radius: u32) -> PlotLayout {
    let Some((lo, hi)) = value_extent(points) else {
        return PlotLayout::default();
    };

    let sectors: Vec<Sector> = Sector::specific()
        .into_iter()
        .filter(|s| points.iter().any(|p| p.sector == *s))
        .collect();

    let plot_left = LABEL_WIDTH;
    let plot_right = (width as f64 - PAD_X).max(plot_left + 1.0);
    let plot_height = (height as f64 - AXIS_HEIGHT).max(1.0);
    let lane_height = plot_height / sectors.len().max(1) as f64;
    let spread = ((lane_height / 2.0) - radius as f64).max(0.0) * 0.8;

    let lanes: Vec<Lane> = sectors
        .iter()
        .enumerate()
        .map(|(i, sector)| Lane {
            sector: *sector,
            center_y: lane_height * (i as f64 + 0.5),
        })
        .collect();

    // scaled before subtracting so extreme extents do not overflow to infinity
    let scale = lo.abs().max(hi.abs()).max(1.0);
    let span = hi / scale - lo / scale;
    let x_of = |value: f64| {
        if !span.is_finite() || span <= f64::EPSILON {
            (plot_left + plot_right) / 2.0
        } else {
            let t = ((value / scale - lo / scale) / span).clamp(0.0, 1.0);
            plot_left + t * (plot_right - plot_left)
        }
    };

    let dots = points
        .iter()
        .filter_map(|point| {
            let lane = lanes.iter().find(|l| l.sector == point.sector)?;
            Some(Dot {
                cx: x_of(point.value),
                cy: lane.center_y + jitter_offset(point) * spread,
                title: format!("{}: {}", point.locality, format_money_compact(point.value)),
            })
        })
        .collect();

    PlotLayout {
        lanes,
        dots,
        extent: Some((lo, hi)),
    }
}

/// Per-capita cost of every locality as dots, one lane per sector.
#[component]
pub fn JitterPlot(config: JitterPlotConfig, dataset: JitterDataset) -> impl IntoView {
    let sector = expect_sector();
    let (width, height, radius) = (config.width, config.height, config.point_radius);
    let color = config.color.to_string();

    let plot = Memo::new(move |_| layout(&dataset.compute_visible(sector.get()), width, height, radius));

    let view_box = format!("0 0 {} {}", width, height);
    let axis_y = height as f64 - AXIS_HEIGHT / 2.0;
    let axis_right = width as f64 - PAD_X;
    let caption = (!config.title.is_empty()).then(|| {
        let title = config.title.clone();
        view! { <figcaption>{title}</figcaption> }
    });

    view! {
        <figure class=format!("block block-jitter {}", config.spacing.classes())>
            {caption}
            {move || {
                let plot = plot.get();
                let Some((lo, hi)) = plot.extent else {
                    return view! { <p class="page-status">"No data for this sector."</p> }.into_any();
                };
                let lanes = plot
                    .lanes
                    .into_iter()
                    .map(|lane| {
                        view! {
                            <text x="0" y={lane.center_y} dominant-baseline="middle" font-size="12">
                                {lane.sector.label()}
                            </text>
                        }
                    })
                    .collect_view();
                let dots = plot
                    .dots
                    .into_iter()
                    .map(|dot| {
                        view! {
                            <circle
                                cx={dot.cx}
                                cy={dot.cy}
                                r={radius}
                                fill={color.clone()}
                                fill-opacity="0.7"
                                aria-label={dot.title}
                            />
                        }
                    })
                    .collect_view();
                view! {
                    <svg viewBox={view_box.clone()} width={width} height={height} role="img">
                        {lanes}
                        {dots}
                        <text x={LABEL_WIDTH} y={axis_y} font-size="11">
                            {format_money_compact(lo)}
                        </text>
                        <text x={axis_right} y={axis_y} font-size="11" text-anchor="end">
                            {format_money_compact(hi)}
                        </text>
                    </svg>
                }
                .into_any()
            }}
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(locality: &str, sector: Sector, value: f64) -> JitterPoint {
        JitterPoint {
            locality: locality.into(),
            fips: String::new(),
            sector,
            value,
        }
    }

    #[test]
    fn test_empty_points_have_no_extent() {
        let plot = layout(&[], 800, 400, 4);
        assert!(plot.extent.is_none());
        assert!(plot.dots.is_empty());
    }

    #[test]
    fn test_dots_stay_inside_plot_area() {
        let points = vec![
            point("Alpha", Sector::Healthcare, 10.0),
            point("Beta", Sector::Healthcare, 50.0),
            point("Alpha", Sector::CriminalJustice, 30.0),
        ];
        let plot = layout(&points, 800, 400, 4);

        assert_eq!(plot.lanes.len(), 2);
        assert_eq!(plot.dots.len(), 3);
        for dot in &plot.dots {
            assert!(dot.cx >= LABEL_WIDTH && dot.cx <= 800.0 - PAD_X);
            assert!(dot.cy >= 0.0 && dot.cy <= 400.0 - AXIS_HEIGHT);
        }
        assert_eq!(plot.dots[0].cx, LABEL_WIDTH);
        assert_eq!(plot.dots[1].cx, 800.0 - PAD_X);
    }

    #[test]
    fn test_extreme_values_stay_finite() {
        let points = vec![
            point("Alpha", Sector::Healthcare, -1e308),
            point("Beta", Sector::Healthcare, 1e308),
            point("Gamma", Sector::Healthcare, 0.0),
        ];
        let plot = layout(&points, 800, 400, 4);
        for dot in &plot.dots {
            assert!(dot.cx.is_finite() && dot.cy.is_finite());
            assert!(dot.cx >= LABEL_WIDTH && dot.cx <= 800.0 - PAD_X);
        }
        assert_eq!(plot.dots[0].cx, LABEL_WIDTH);
        assert_eq!(plot.dots[1].cx, 800.0 - PAD_X);
    }

    #[test]
    fn test_single_value_is_centered() {
        let plot = layout(&[point("Alpha", Sector::LostLabor, 5.0)], 800, 400, 4);
        assert_eq!(plot.dots[0].cx, (LABEL_WIDTH + 800.0 - PAD_X) / 2.0);
        assert_eq!(plot.extent, Some((5.0, 5.0)));
    }
}
