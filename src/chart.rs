// Copyright 2019 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::path::PathBuf;

use plotters::prelude::*;

use crate::config::Config;
use crate::error::Error;
use crate::scenario::Scenario;
use crate::series::Series;
use crate::sweep::Sweep;

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            ($colour & 0x0000FF) as u8,
        )
    };
}

const BASELINE_COLOUR: RGBColor = hexcolour!(0x0000FF);
const COMPARISON_COLOUR: RGBColor = hexcolour!(0x117733);

/// Draws one scenario: both series overlaid against the sweep on a fresh
/// drawing area, written to `<output>/<scenario>.png`. Returns the path of
/// the rendered chart.
///
/// Series are matched to sweep points positionally, so both must hold
/// exactly one value per sweep point.
pub fn plot_comparison(
    scenario: &Scenario,
    sweep: &Sweep,
    baseline: &Series,
    comparison: &Series,
    config: &Config,
) -> Result<PathBuf, Error> {
    let points = sweep.points();

    for (file, series) in &[
        (scenario.baseline_file(), baseline),
        (scenario.comparison_file(), comparison),
    ] {
        if series.len() != points.len() {
            return Err(Error::LengthMismatch {
                file: file.to_string(),
                expected: points.len(),
                actual: series.len(),
            });
        }
    }

    let path = config.output().join(format!("{}.png", scenario.name()));

    let x_min = points.first().copied().unwrap_or(0);
    let x_max = points.last().copied().unwrap_or(1);
    let y_max = baseline
        .values()
        .iter()
        .chain(comparison.values())
        .fold(0.0f64, |max, &value| max.max(value));
    // headroom so the slowest point is not clipped by the frame
    let y_max = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

    let caption = format!(
        "{} vs {} ({})",
        config.baseline_label(),
        config.comparison_label(),
        scenario.name()
    );

    let root = BitMapBackend::new(&path, (config.width(), config.height())).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&caption, ("sans-serif", 30))
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 80)
        .set_label_area_size(LabelAreaPosition::Bottom, 50)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .x_desc("Input length (elements)")
        .y_desc("Time (ms)")
        .draw()
        .map_err(render_error)?;

    let series = points.iter().zip(baseline.values()).map(|(&x, &y)| (x, y));
    chart
        .draw_series(LineSeries::new(series, BASELINE_COLOUR.stroke_width(2)))
        .map_err(render_error)?
        .label(config.baseline_label())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BASELINE_COLOUR));

    let series = points.iter().zip(comparison.values()).map(|(&x, &y)| (x, y));
    chart
        .draw_series(LineSeries::new(series, COMPARISON_COLOUR.stroke_width(2)))
        .map_err(render_error)?
        .label(config.comparison_label())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], COMPARISON_COLOUR));

    chart
        .configure_series_labels()
        .background_style(WHITE.filled())
        .border_style(&BLACK)
        .draw()
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    drop(chart);
    drop(root);

    Ok(path)
}

fn render_error<E: std::error::Error>(error: E) -> Error {
    Error::Render(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(dir: &std::path::Path) -> Config {
        toml::from_str(&format!(
            "[general]\noutput = {:?}\n[sweep]\nstart = 100\nend = 400\nstep = 100\n",
            dir.display().to_string()
        ))
        .unwrap()
    }

    fn scenario() -> Scenario {
        let files = vec!["random.txt".to_string(), "random_hybrid.txt".to_string()];
        Scenario::pair(&files).unwrap().remove(0)
    }

    #[test]
    fn renders_png() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        let sweep = config.sweep();
        let baseline = Series::from_values(vec![1.0, 2.0, 3.0]);
        let comparison = Series::from_values(vec![0.5, 1.5, 2.5]);
        let path = plot_comparison(&scenario(), &sweep, &baseline, &comparison, &config).unwrap();
        assert_eq!(path, dir.path().join("random.png"));
        assert!(path.exists());
    }

    #[test]
    fn length_mismatch_produces_no_chart() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        let sweep = config.sweep();
        let baseline = Series::from_values(vec![1.0, 2.0]);
        let comparison = Series::from_values(vec![0.5, 1.5, 2.5]);
        match plot_comparison(&scenario(), &sweep, &baseline, &comparison, &config) {
            Err(Error::LengthMismatch {
                file,
                expected,
                actual,
            }) => {
                assert_eq!(file, "random.txt");
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("expected LengthMismatch, got: {:?}", other),
        }
        assert!(!dir.path().join("random.png").exists());
    }
}
