//! Plotting backend using the `plotters` crate
//!
//! Everything is coerced to `f64` for plotting purposes.
//!
//! Uses the bitmap backend to create PNG files. Text is drawn with the font
//! family named in [`RenderConfig`], resolved against the fonts installed on
//! the system.
use std::{ops::Range, path::Path};

use plotters::{
    coord::{types::RangedCoordf64, Shift},
    element::DashedPathElement,
    prelude::*,
};

use crate::{
    method::LineStyle,
    plotting::{format_tick, PlotBackend, PlotOptions, RenderConfig, YScale},
    value::{CoordExt, Value},
};

const MAX_LBL_WIDTH: usize = 120;

/// A drawing area root for plotters
pub struct Root<'a>(DrawingArea<BitMapBackend<'a>, Shift>);
impl<'a> AsRef<DrawingArea<BitMapBackend<'a>, Shift>> for Root<'a> {
    fn as_ref(&self) -> &DrawingArea<BitMapBackend<'a>, Shift> {
        &self.0
    }
}
impl<'a> Root<'a> {
    /// Create a new drawing area root for plotters
    ///
    /// Will create a PNG file at the given path with the given size
    ///
    /// # Errors
    /// Returns an error if the drawing area cannot be cleared.
    pub fn new(path: &'a Path, size: (u32, u32)) -> Result<Self, Error<'a>> {
        let backend = BitMapBackend::new(path, size);
        let root = IntoDrawingArea::into_drawing_area(backend);
        root.fill(&WHITE)?;
        Ok(Self(root))
    }
}

/// Plotters backend for plotting
pub struct Backend<'root> {
    context: ChartContext<'root, BitMapBackend<'root>, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    y_range: Range<f64>,
    y_scale: YScale,

    font_family: String,
    unicode_minus: bool,

    x_label: Option<String>,
    y_label: Option<String>,

    hide_legend: bool,
}
impl<'root> PlotBackend for Backend<'root> {
    type Error = Error<'root>;
    type Color = RGBColor;
    type Root = Root<'root>;

    fn color_from_rgb(rgb: (u8, u8, u8)) -> Self::Color {
        RGBColor(rgb.0, rgb.1, rgb.2)
    }

    fn new_plot<T: Value>(
        root: &Self::Root,
        options: &PlotOptions<T>,
        config: &RenderConfig,
        x_range: Range<T>,
        y_range: Range<T>,
    ) -> Result<Self, Self::Error>
    where
        Self: Sized,
    {
        //
        // T(Range) -> f64(Range), then into plotted coordinates
        let scale = options.y_scale;
        let x_range: Range<f64> = cast(x_range.start)?..cast(x_range.end)?;
        let y_range: Range<f64> = scale.forward(cast(y_range.start)?)..scale.forward(cast(y_range.end)?);

        let font = FontFamily::from(config.font_family.as_str());

        let mut context = ChartBuilder::on(root.as_ref());
        context
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(80);

        if !options.title.is_empty() {
            context.caption(&options.title, (font, 24).into_font());
        }

        let context = context.build_cartesian_2d(x_range, y_range.clone())?;

        Ok(Self {
            context,
            y_range,
            y_scale: scale,

            font_family: config.font_family.clone(),
            unicode_minus: config.unicode_minus,

            x_label: options.x_label.clone(),
            y_label: options.y_label.clone(),

            hide_legend: options.hide_legend,
        })
    }

    fn add_curve<T: Value>(
        &mut self,
        data: &[(T, T)],
        label: &str,
        style: LineStyle,
        width: u32,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let data = data.as_f64().map_err(|_| Error::Cast)?;

        // Map into plotted coordinates, then cut the curve into drawable runs
        let data: Vec<(f64, f64)> = data.into_iter().map(|(x, y)| (x, self.y_scale.forward(y))).collect();
        let mut runs = clip_to_band(&data, self.y_range.start, self.y_range.end);
        if runs.is_empty() {
            // Still register the legend entry
            runs.push(Vec::new());
        }

        //
        // Shorten label and add [...] if too long
        let label = if label.len() > MAX_LBL_WIDTH {
            let mut s: String = label.chars().take(MAX_LBL_WIDTH - 3).collect();
            s.push_str("...");
            s
        } else {
            label.to_string()
        };

        let shape = ShapeStyle::from(color).stroke_width(width);
        let sizing = dash_sizing(style, width);
        for (i, run) in runs.into_iter().enumerate() {
            let annotation = match sizing {
                None => self.context.draw_series(LineSeries::new(run, shape))?,
                Some((size, spacing)) => self
                    .context
                    .draw_series(DashedLineSeries::new(run, size, spacing, shape))?,
            };

            // One legend entry per curve
            if i > 0 {
                continue;
            }

            let annotation = annotation.label(label.clone());
            match sizing {
                None => annotation.legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], shape)),
                Some((size, spacing)) => annotation.legend(move |(x, y)| {
                    DashedPathElement::new(vec![(x, y), (x + 30, y)], size, spacing, shape)
                }),
            };
        }

        Ok(())
    }

    fn finalize(mut self) -> Result<(), Self::Error> {
        let scale = self.y_scale;
        let unicode_minus = self.unicode_minus;
        let x_formatter = move |v: &f64| format_tick(*v, unicode_minus);
        let y_formatter = move |v: &f64| format_tick(scale.inverse(*v), unicode_minus);
        let font = self.font_family.clone();

        //
        // Mesh and axes
        let mut context = self.context.configure_mesh();

        context
            .label_style((FontFamily::from(font.as_str()), 16))
            .axis_desc_style((FontFamily::from(font.as_str()), 18))
            .light_line_style(BLACK.mix(0.05))
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&y_formatter);

        if let Some(x_label) = &self.x_label {
            context.x_desc(x_label);
        }

        if let Some(y_label) = &self.y_label {
            context.y_desc(y_label);
        }

        context.draw()?;

        if !self.hide_legend {
            //
            // Legend
            self.context
                .configure_series_labels()
                .label_font((FontFamily::from(font.as_str()), 16))
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .position(SeriesLabelPosition::UpperMiddle)
                .draw()?;
        }

        self.context.plotting_area().present()?;
        Ok(())
    }
}

/// Dash length and gap for a line style, or `None` for a solid line.
///
/// Plotters has no dash-dot pattern; it is drawn as medium dashes between the
/// long dashes of [`LineStyle::Dashed`] and the dots of [`LineStyle::Dotted`].
fn dash_sizing(style: LineStyle, width: u32) -> Option<(u32, u32)> {
    let w = width.max(1);
    match style {
        LineStyle::Solid => None,
        LineStyle::Dashed => Some((6 * w, 4 * w)),
        LineStyle::DashDot => Some((4 * w, 2 * w)),
        LineStyle::Dotted => Some((w, 2 * w)),
    }
}

/// Splits a polyline into the runs that lie inside the band `lo..=hi`.
///
/// A run ends at a non-finite point, or where the line leaves the band; spans
/// crossing an edge are cut at the crossing rather than pinned to it.
fn clip_to_band(points: &[(f64, f64)], lo: f64, hi: f64) -> Vec<Vec<(f64, f64)>> {
    let (lo, hi) = (lo.min(hi), lo.max(hi));
    let in_band = |y: f64| y.is_finite() && lo <= y && y <= hi;

    if let [(x, y)] = points {
        return if in_band(*y) { vec![vec![(*x, *y)]] } else { vec![] };
    }

    let mut runs = Vec::new();
    let mut run: Vec<(f64, f64)> = Vec::new();
    for pair in points.windows(2) {
        match clip_span(pair[0], pair[1], lo, hi) {
            Some((start, end)) => {
                if run.last() != Some(&start) && !run.is_empty() {
                    runs.push(std::mem::take(&mut run));
                }
                if run.is_empty() {
                    run.push(start);
                }
                run.push(end);
            }
            None if !run.is_empty() => runs.push(std::mem::take(&mut run)),
            None => {}
        }
    }

    if !run.is_empty() {
        runs.push(run);
    }
    runs
}

/// The part of the segment `a -> b` with `lo <= y <= hi`, if any.
fn clip_span(a: (f64, f64), b: (f64, f64), lo: f64, hi: f64) -> Option<((f64, f64), (f64, f64))> {
    if !a.1.is_finite() || !b.1.is_finite() {
        return None;
    }

    let dy = b.1 - a.1;
    if dy == 0.0 {
        return (lo <= a.1 && a.1 <= hi).then_some((a, b));
    }

    let (t_lo, t_hi) = ((lo - a.1) / dy, (hi - a.1) / dy);
    let t0 = t_lo.min(t_hi).max(0.0);
    let t1 = t_lo.max(t_hi).min(1.0);
    if t0 > t1 {
        return None;
    }

    let at = |t: f64| match t {
        t if t <= 0.0 => a,
        t if t >= 1.0 => b,
        t => (a.0 + t * (b.0 - a.0), a.1 + t * dy),
    };
    Some((at(t0), at(t1)))
}

fn cast<'root, T: Value>(value: T) -> Result<f64, Error<'root>> {
    value.as_f64().ok_or(Error::Cast)
}

/// Error occurring during plotting
#[derive(Debug, thiserror::Error)]
pub enum Error<'root> {
    /// Error drawing the plot
    #[error("Error drawing plot: {0}")]
    Draw(#[from] DrawingAreaErrorKind<<BitMapBackend<'root> as DrawingBackend>::ErrorType>),

    /// Error casting a value
    #[error("A value could not be represented as f64")]
    Cast,
}
