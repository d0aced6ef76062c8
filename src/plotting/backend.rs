use std::ops::Range;

use crate::{
    comparison::MethodCurve,
    method::LineStyle,
    plotting::{PlotOptions, RenderConfig},
    value::Value,
};

pub mod plotters;

/// Trait for plot backends
pub trait PlotBackend {
    /// Error type for the plot backend
    type Error: std::error::Error;

    /// Root type for the plot backend
    type Root;

    /// Color type for the plot backend
    type Color: Clone;

    /// Convert an RGB triple into a backend color
    fn color_from_rgb(rgb: (u8, u8, u8)) -> Self::Color;

    /// Create a new plot with the given options and ranges on the given root
    ///
    /// Ranges are in data units; the backend applies [`PlotOptions::y_scale`].
    ///
    /// # Errors
    /// Returns an error if the plot cannot be created.
    fn new_plot<T: Value>(
        root: &Self::Root,
        options: &PlotOptions<T>,
        config: &RenderConfig,
        x_range: Range<T>,
        y_range: Range<T>,
    ) -> Result<Self, Self::Error>
    where
        Self: Sized;

    /// Add a line to the plot
    ///
    /// # Errors
    /// Returns an error if the plot cannot be modified.
    fn add_curve<T: Value>(
        &mut self,
        data: &[(T, T)],
        label: &str,
        style: LineStyle,
        width: u32,
        color: Self::Color,
    ) -> Result<(), Self::Error>;

    /// Finalize the plot
    ///
    /// # Errors
    /// Returns an error if the plot cannot be modified.
    fn finalize(self) -> Result<(), Self::Error>;

    /// Add one method's error curve, in its registry color and line style
    ///
    /// # Errors
    /// Returns an error if the plot cannot be modified.
    fn add_method_curve<T: Value>(&mut self, curve: &MethodCurve<T>, width: u32) -> Result<(), Self::Error> {
        let method = curve.method;
        let color = Self::color_from_rgb(method.rgb());
        self.add_curve(
            &curve.curve.points(),
            method.name(),
            method.line_style(),
            width,
            color,
        )
    }
}
