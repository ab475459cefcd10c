//! 顧客セグメント円グラフ（SVG）

use leptos::prelude::*;
use pitch_coach_common::market::pie_geometry;
use pitch_coach_common::SegmentSlice;

const CHART_SIZE: f64 = 320.0;
const CHART_RADIUS: f64 = 100.0;

#[component]
pub fn SegmentChart(slices: Vec<SegmentSlice>) -> impl IntoView {
    let center = CHART_SIZE / 2.0;
    let geometry = pie_geometry(&slices, center, center, CHART_RADIUS);

    view! {
        <svg
            class="segment-chart w-full h-80"
            viewBox=format!("0 0 {} {}", CHART_SIZE, CHART_SIZE)
            role="img"
        >
            {slices
                .into_iter()
                .zip(geometry)
                .map(|(slice, shape)| {
                    let anchor = if shape.label_x < center { "end" } else { "start" };
                    view! {
                        <g>
                            <path d=shape.path fill=slice.color></path>
                            <text
                                x=format!("{:.1}", shape.label_x)
                                y=format!("{:.1}", shape.label_y)
                                text-anchor=anchor
                                class="segment-label"
                            >
                                {slice.label()}
                            </text>
                        </g>
                    }
                })
                .collect_view()}
        </svg>
    }
}
