//! Display error types

/// Display errors
///
/// Bus writes never fail (the medium is write-only), so every variant
/// describes a request rejected before it reached the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Font resource unreadable or truncated at the glyph offset
    MissingGlyph,
    /// Pixel, window, or cell outside the panel
    InvalidCoordinates,
    /// Widget call not allowed in the widget's current state
    InvalidWidgetState(StateViolation),
    /// Text does not fit the label's fixed capacity
    TextTooLong,
    /// Bitmap cell count does not match its dimensions
    InvalidDimensions,
}

/// Widget state-machine misuse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StateViolation {
    /// `draw` on a widget that is already visible
    AlreadyVisible,
    /// `erase` or `update` on a widget that is hidden
    NotVisible,
}

impl DisplayError {
    /// Check if this error reports widget misuse
    pub fn is_widget_state(&self) -> bool {
        matches!(self, DisplayError::InvalidWidgetState(_))
    }
}

impl From<StateViolation> for DisplayError {
    fn from(violation: StateViolation) -> Self {
        DisplayError::InvalidWidgetState(violation)
    }
}
