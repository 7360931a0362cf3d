//! Terminal rendering of chart data.

use comfy_table::{Cell, CellAlignment, Color, Table};
use eda_ingest::format_numeric;

use crate::charts::{Bar, BoxStats, Chart, ChartData};
use crate::style::{align_column, dim_cell, styled_table};

/// Width in glyphs of the longest bar.
pub const BAR_WIDTH: usize = 40;

const BAR_GLYPH: char = '█';

/// A bar of `count` scaled against `max`; any non-zero count gets one glyph.
pub fn bar_glyphs(count: usize, max: usize, width: usize) -> String {
    if count == 0 || max == 0 {
        return String::new();
    }
    let scaled = (count * width).div_ceil(max).clamp(1, width);
    std::iter::repeat_n(BAR_GLYPH, scaled).collect()
}

fn bar_table(kind_labels: (&str, &str), bars: &[Bar]) -> Table {
    let (category, value) = kind_labels;
    let mut table = styled_table(&[category, value, ""]);
    align_column(&mut table, 1, CellAlignment::Right);
    let max = bars.iter().map(|b| b.count).max().unwrap_or(0);
    for bar in bars {
        let count = if bar.count == 0 {
            dim_cell(0)
        } else {
            Cell::new(bar.count)
        };
        table.add_row(vec![
            Cell::new(&bar.label),
            count,
            Cell::new(bar_glyphs(bar.count, max, BAR_WIDTH)).fg(Color::Blue),
        ]);
    }
    table
}

fn box_table(kind_labels: (&str, &str), boxes: &[BoxStats]) -> Table {
    let (category, value) = kind_labels;
    let median_header = format!("Median {}", value.to_lowercase());
    let mut table = styled_table(&[
        category,
        "N",
        "Min",
        "Q1",
        median_header.as_str(),
        "Q3",
        "Max",
    ]);
    for index in 1..7 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for stats in boxes {
        table.add_row(vec![
            Cell::new(&stats.label),
            Cell::new(stats.count),
            Cell::new(format_numeric(stats.min)),
            Cell::new(format_numeric(stats.q1)),
            Cell::new(format_numeric(stats.median)).fg(Color::Blue),
            Cell::new(format_numeric(stats.q3)),
            Cell::new(format_numeric(stats.max)),
        ]);
    }
    table
}

/// Builds the terminal table for one chart.
pub fn chart_table(chart: &Chart) -> Table {
    let labels = chart.kind.axis_labels();
    match &chart.data {
        ChartData::Bars(bars) => bar_table(labels, bars),
        ChartData::Boxes(boxes) => box_table(labels, boxes),
    }
}

/// Renders one chart with its title.
pub fn render_chart(chart: &Chart) -> String {
    format!("{}\n{}", chart.kind.title(), chart_table(chart))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartKind;

    #[test]
    fn test_bar_glyphs_scale() {
        assert_eq!(bar_glyphs(10, 10, 4).chars().count(), 4);
        assert_eq!(bar_glyphs(5, 10, 4).chars().count(), 2);
        assert_eq!(bar_glyphs(1, 1000, 4).chars().count(), 1);
        assert_eq!(bar_glyphs(0, 10, 4), "");
        assert_eq!(bar_glyphs(3, 0, 4), "");
    }

    #[test]
    fn test_render_chart_includes_title_and_labels() {
        let chart = Chart {
            kind: ChartKind::SeasonCounts,
            data: ChartData::Bars(vec![
                Bar {
                    label: "WINTER".into(),
                    count: 3,
                },
                Bar {
                    label: "SPRING".into(),
                    count: 0,
                },
            ]),
        };
        let rendered = render_chart(&chart);

        assert!(rendered.starts_with("Accidents by season\n"));
        assert!(rendered.contains("WINTER"));
        assert!(rendered.contains("SPRING"));
    }

    #[test]
    fn test_render_box_chart_has_quartiles() {
        let chart = Chart {
            kind: ChartKind::HourByWeather,
            data: ChartData::Boxes(vec![BoxStats {
                label: "CLEAR".into(),
                count: 4,
                min: 1.0,
                q1: 1.75,
                median: 2.5,
                q3: 3.25,
                max: 4.0,
            }]),
        };
        let rendered = render_chart(&chart);

        assert!(rendered.contains("CLEAR"));
        assert!(rendered.contains("1.75"));
        assert!(rendered.contains("3.25"));
    }
}
