//! # Terminal Chart Rendering
//!
//! Draws a scalar series as an ASCII chart for quick inspection of the
//! filtered signal from a terminal. Long series are averaged down into at most
//! [`MAX_COLUMNS`] columns so a few minutes of 100 Hz data still fits a screen.

/// Widest chart produced, in data columns
pub const MAX_COLUMNS: usize = 120;

/// Width of the y-axis label gutter, including the axis line
const Y_AXIS_WIDTH: usize = 10;

/// Render `series` into a multi-line chart `rows` tall.
///
/// Returns an empty string for an empty series.
///
/// # Example
/// ```
/// use pedometer_lib::renderer::render_ascii;
///
/// let chart = render_ascii(&[0.0, 1.0, 0.0, -1.0], 5);
/// assert_eq!(chart.lines().count(), 6); // 5 chart rows + sample axis
/// ```
pub fn render_ascii(series: &[f64], rows: usize) -> String {
    if series.is_empty() {
        return String::new();
    }
    let rows = rows.max(2);
    let columns = downsample(series, MAX_COLUMNS);

    let (min, max) = columns
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        });
    let span = if max > min { max - min } else { 1.0 };

    let value_to_row = |value: f64| {
        let normalized = (value - min) / span;
        ((1.0 - normalized) * (rows as f64 - 1.0)).round() as usize
    };

    let mut grid = vec![vec![' '; columns.len() + Y_AXIS_WIDTH]; rows];

    // Label the top, middle and bottom rows
    for (row, value) in [(0, max), (rows / 2, (max + min) / 2.0), (rows - 1, min)] {
        let label = format!("{:>width$.3}", value, width = Y_AXIS_WIDTH - 1);
        for (i, ch) in label.chars().take(Y_AXIS_WIDTH - 1).enumerate() {
            grid[row][i] = ch;
        }
    }
    for line in grid.iter_mut() {
        line[Y_AXIS_WIDTH - 1] = '│';
    }

    for (column, &value) in columns.iter().enumerate() {
        let row = value_to_row(value).min(rows - 1);
        grid[row][column + Y_AXIS_WIDTH] = '•';
    }

    let mut out: String = grid
        .into_iter()
        .map(|line| line.into_iter().collect::<String>() + "\n")
        .collect();

    // Tick every 10 columns below the chart
    let padding = " ".repeat(Y_AXIS_WIDTH);
    let ticks: String = (0..columns.len())
        .map(|i| if i % 10 == 0 { '|' } else { ' ' })
        .collect();
    out.push_str(&padding);
    out.push_str(ticks.trim_end());
    out.push('\n');
    out
}

/// Print the chart for `series` to stdout.
pub fn draw_ascii(series: &[f64], rows: usize) {
    print!("{}", render_ascii(series, rows));
}

/// Average consecutive samples into at most `width` buckets.
fn downsample(series: &[f64], width: usize) -> Vec<f64> {
    if series.len() <= width {
        return series.to_vec();
    }
    let bucket = series.len().div_ceil(width);
    series
        .chunks(bucket)
        .map(|chunk| chunk.iter().sum::<f64>() / chunk.len() as f64)
        .collect()
}
