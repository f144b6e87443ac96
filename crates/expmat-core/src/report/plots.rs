use plotly::common::Mode;
use plotly::layout::{Axis, AxisType, Layout};
use plotly::{Plot, Scatter};

use crate::series::ErrorSeries;

/// Build the shared semi-log chart: one curve per series over the sample
/// index, with a logarithmic vertical axis and a legend keyed by series
/// label. Non-positive samples are dropped per series (see
/// [`ErrorSeries::positive_points`]); an entirely non-positive series
/// contributes an empty curve.
pub fn plot_convergence(
    series: &[ErrorSeries],
    title: &str,
    x_title: &str,
    y_title: &str,
) -> Plot {
    let mut plot = Plot::new();

    for run in series {
        let (xs, ys) = run.positive_points();
        plot.add_trace(
            Scatter::new(xs, ys)
                .mode(Mode::Lines)
                .name(run.label()),
        );
    }

    plot.set_layout(
        Layout::new()
            .title(title)
            .x_axis(Axis::new().title(x_title))
            .y_axis(Axis::new().title(y_title).type_(AxisType::Log)),
    );

    plot
}
