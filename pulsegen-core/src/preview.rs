/// How a pulse should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeKind {
    /// Piecewise constant, drawn as steps.
    #[default]
    Stepped,
    /// Drawn as a line through the samples.
    Continuous,
}

/// A sink that draws a pulse, e.g. a plot in a front-end.
pub trait Preview {
    /// Draws `samples`, which span `period_ms` milliseconds.
    fn render(&mut self, samples: &[f64], period_ms: f64, shape: ShapeKind);
}

impl<P: Preview + ?Sized> Preview for &mut P {
    fn render(&mut self, samples: &[f64], period_ms: f64, shape: ShapeKind) {
        (**self).render(samples, period_ms, shape);
    }
}
