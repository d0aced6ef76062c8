//! Rendering comparisons to images
//!
//! [`plot_comparison`] draws every curve of a [`Comparison`] onto one chart and
//! writes it as a PNG through the `plotters` bitmap backend. Other backends can be
//! plugged in by implementing [`PlotBackend`] and calling [`render_comparison`].
//!
//! Rendering is configured explicitly:
//! - [`RenderConfig`] holds the typography (font family, how formulae are
//!   spelled, which minus sign tick labels use).
//! - [`PlotOptions`] holds the chart itself (title, labels, size, axis range
//!   and [`YScale`]).
//!
//! Output files go to [`plots_dir`], named by [`comparison_filename`].
use std::{
    ops::Range,
    path::{Path, PathBuf},
};

use crate::{
    comparison::Comparison, display::unicode, target::TargetFunction, value::Value,
};

mod backend;
pub use backend::*;

/// How formulae in titles and axis labels are spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MathStyle {
    /// ASCII only: `f(x)-P_n(x)`, `y = e^x`
    Plain,

    /// Unicode sub- and superscripts: `f(x) − Pₙ(x)`, `y = eˣ`
    #[default]
    Unicode,
}

/// Typography used when rendering a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Font family for all text; `sans-serif`, `serif`, `monospace` or a
    /// font name known to the system
    pub font_family: String,

    /// Spelling of formulae
    pub math_style: MathStyle,

    /// Use `−` (U+2212) instead of `-` for negative tick labels
    pub unicode_minus: bool,
}
impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            math_style: MathStyle::default(),
            unicode_minus: false,
        }
    }
}
impl RenderConfig {
    /// The y-axis label, `f(x) - Pₙ(x)`.
    #[must_use]
    pub fn error_label(&self) -> String {
        match self.math_style {
            MathStyle::Plain => "f(x)-P_n(x)".to_string(),
            MathStyle::Unicode => format!("f(x) \u{2212} P{}(x)", unicode::subscript("n")),
        }
    }

    /// The chart title for `target` at order `n`.
    #[must_use]
    pub fn title(&self, target: TargetFunction, n: usize) -> String {
        let formula = target.label(self.math_style == MathStyle::Unicode);
        format!("{formula}, order n = {n}: approximation error")
    }
}

/// Vertical axis scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum YScale {
    /// Plot errors as they are
    #[default]
    Linear,

    /// Symmetric log: linear within `±linthresh`, logarithmic outside it.
    ///
    /// Keeps the sign of the error while showing errors of very different
    /// magnitudes on one chart.
    Symlog {
        /// Half-width of the linear region around zero
        linthresh: f64,
    },
}
impl YScale {
    /// A symlog scale suited to errors up to `max_abs`.
    ///
    /// The linear region is a thousandth of the largest error.
    #[must_use]
    pub fn symlog_for(max_abs: f64) -> Self {
        let linthresh = if max_abs.is_finite() && max_abs > 0.0 {
            max_abs / 1000.0
        } else {
            1.0
        };
        Self::Symlog { linthresh }
    }

    /// Maps a data value to its plotted position.
    ///
    /// ```math
    /// symlog(y) = sign(y) · log₁₀(1 + |y| / linthresh)
    /// ```
    #[must_use]
    pub fn forward(self, y: f64) -> f64 {
        match self {
            Self::Linear => y,
            Self::Symlog { linthresh } => y.signum() * (y.abs() / linthresh).ln_1p() / std::f64::consts::LN_10,
        }
    }

    /// Maps a plotted position back to the data value; inverse of [`YScale::forward`].
    #[must_use]
    pub fn inverse(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::Symlog { linthresh } => t.signum() * linthresh * (10f64.powf(t.abs()) - 1.0),
        }
    }
}

/// Options for plotting
#[derive(Debug, Clone)]
pub struct PlotOptions<T: Value = f64> {
    /// Caption for the plot
    pub title: String,

    /// X-axis label
    pub x_label: Option<String>,

    /// Y-axis label
    pub y_label: Option<String>,

    /// Size of the output image in pixels
    pub size: (u32, u32),

    /// Y-axis range, in data units; the comparison's limits if `None`
    pub y_range: Option<Range<T>>,

    /// Y-axis scale
    pub y_scale: YScale,

    /// Whether to hide the legend
    pub hide_legend: bool,

    /// Stroke width of the error curves
    pub line_width: u32,
}
impl<T: Value> Default for PlotOptions<T> {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_label: Some("x".to_string()),
            y_label: None,
            size: (1200, 700),
            y_range: None,
            y_scale: YScale::Linear,
            hide_legend: false,
            line_width: 2,
        }
    }
}
impl<T: Value> PlotOptions<T> {
    /// Options for charting `comparison`: title and y-label per `config`, the
    /// comparison's symmetric limits, and a symlog axis if `log_scale` is set.
    #[must_use]
    pub fn for_comparison(comparison: &Comparison<T>, log_scale: bool, config: &RenderConfig) -> Self {
        let (lo, hi) = comparison.y_limits();
        let y_scale = if log_scale {
            YScale::symlog_for(comparison.max_abs_error().as_f64().unwrap_or(f64::NAN))
        } else {
            YScale::Linear
        };

        Self {
            title: config.title(comparison.target(), comparison.order()),
            y_label: Some(config.error_label()),
            y_range: Some(lo..hi),
            y_scale,
            ..Default::default()
        }
    }
}

/// Formats a tick value: fixed point for moderate magnitudes, scientific otherwise.
///
/// With `unicode_minus`, negative signs (including exponents) use `−`.
///
/// ```
/// # use expapprox::plotting::format_tick;
/// assert_eq!(format_tick(0.25, false), "0.25");
/// assert_eq!(format_tick(-0.0005, false), "-5.0e-4");
/// assert_eq!(format_tick(-1.5, true), "\u{2212}1.50");
/// ```
#[must_use]
pub fn format_tick(v: f64, unicode_minus: bool) -> String {
    // Avoid printing `-0.00`
    let v = if v == 0.0 { 0.0 } else { v };

    let abs = v.abs();
    let s = if abs == 0.0 || (1e-2..1e3).contains(&abs) {
        format!("{v:.2}")
    } else {
        format!("{v:.1e}")
    };

    if unicode_minus {
        s.replace('-', "\u{2212}")
    } else {
        s
    }
}

/// Draws every curve of `comparison` with backend `P` onto `root`.
///
/// Curves are drawn in the comparison's method order, each in its method's
/// color and line style.
///
/// # Errors
/// Returns an error if the backend fails to draw.
pub fn render_comparison<P: PlotBackend, T: Value>(
    root: &P::Root,
    comparison: &Comparison<T>,
    options: &PlotOptions<T>,
    config: &RenderConfig,
) -> Result<(), P::Error> {
    let (lo, hi) = comparison.y_limits();
    let y_range = options.y_range.clone().unwrap_or(lo..hi);

    let mut plot = P::new_plot(root, options, config, -T::one()..T::one(), y_range)?;
    for curve in comparison.curves() {
        plot.add_method_curve(curve, options.line_width)?;
    }
    plot.finalize()
}

/// Renders `comparison` into a PNG at `path`.
///
/// # Errors
/// Returns an error if the image cannot be drawn or written.
pub fn plot_comparison<'a, T: Value>(
    path: &'a Path,
    comparison: &Comparison<T>,
    options: &PlotOptions<T>,
    config: &RenderConfig,
) -> Result<(), backend::plotters::Error<'a>> {
    let root = backend::plotters::Root::new(path, options.size)?;
    render_comparison::<backend::plotters::Backend, T>(&root, comparison, options, config)?;
    log::info!("Wrote plot to {}", path.display());
    Ok(())
}

/// The directory plots are written to: `$TARGET_DIR/plot_output`, with
/// `TARGET_DIR` defaulting to `target`.
///
/// Creates the directory if it does not exist.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn plots_dir() -> std::io::Result<PathBuf> {
    let target_dir = std::env::var("TARGET_DIR").unwrap_or_else(|_| "target".into());
    let dir = Path::new(&target_dir).join("plot_output");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// File name for the chart of `target` at order `n`: `{prefix_}{tag}_n{n}.png`.
///
/// ```
/// # use expapprox::{plotting::comparison_filename, target::TargetFunction};
/// assert_eq!(comparison_filename(TargetFunction::ExpNeg, 4, None), "exp_neg_n4.png");
/// assert_eq!(comparison_filename(TargetFunction::Exp, 3, Some("view")), "view_exp_n3.png");
/// ```
#[must_use]
pub fn comparison_filename(target: TargetFunction, n: usize, prefix: Option<&str>) -> String {
    let prefix = match prefix {
        Some(p) if !p.is_empty() => format!("{p}_"),
        _ => String::new(),
    };
    format!("{prefix}{}_n{n}.png", target.tag())
}
