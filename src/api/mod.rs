mod chart_spec;
mod map_chart;
mod pipeline;

pub use chart_spec::{
    ChartSpec, ChartSpecUpdate, DEFAULT_LABEL_STYLE, DEFAULT_TRANSITION_TIME_MS, NormalizedSeries,
};
pub use map_chart::{MapChart, Projector};
pub use pipeline::{build_render_state, chart_origin};
