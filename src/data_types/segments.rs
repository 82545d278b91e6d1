use eyre::Result;

use crate::data_types::color::Argb;

/// Errors raised at the configuration boundary of the chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartError {
    /// The color list and the percentage list must have the same length.
    ConfigurationMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConfigurationMismatch { expected, actual } => write!(
                f,
                "color list length {actual} does not match percentage list length {expected}"
            ),
        }
    }
}

impl std::error::Error for ChartError {}

/// The proportional values and colors of the chart, stored as two parallel
/// lists. Index i of the color list paints the wedge for index i of the
/// percentage list; insertion order is draw order is angular order.
///
/// Percentages are deliberately not validated against a 100% sum; a
/// distribution that overshoots or leaves a gap is drawn (and hit-tested)
/// as-is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SegmentModel {
    percentages: Vec<f32>,
    colors: Vec<Argb>,
}

impl SegmentModel {
    /// Builds a model from a percentage list and a color list of equal
    /// length. Both lists are stored by value.
    pub fn new(percentages: Vec<f32>, colors: Vec<Argb>) -> Result<Self> {
        if colors.len() != percentages.len() {
            return Err(ChartError::ConfigurationMismatch {
                expected: percentages.len(),
                actual: colors.len(),
            }
            .into());
        }
        Ok(Self {
            percentages,
            colors,
        })
    }

    /// Replaces the percentage list. No length check here; the color list is
    /// validated against the percentages when it is set.
    pub fn set_percentages(&mut self, percentages: Vec<f32>) {
        self.percentages = percentages;
    }

    /// Replaces the color list. Fails with
    /// [`ChartError::ConfigurationMismatch`] when the length differs from the
    /// stored percentage list; the previous colors are kept on failure.
    pub fn set_colors(&mut self, colors: Vec<Argb>) -> Result<()> {
        if colors.len() != self.percentages.len() {
            return Err(ChartError::ConfigurationMismatch {
                expected: self.percentages.len(),
                actual: colors.len(),
            }
            .into());
        }
        self.colors = colors;
        Ok(())
    }

    pub fn percentages(&self) -> &[f32] {
        &self.percentages
    }

    pub fn colors(&self) -> &[Argb] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.percentages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.percentages.is_empty()
    }
}
