//! Stateful widgets
//!
//! Widgets own their position, content and colours and track whether they
//! are on screen. The lifecycle is strict:
//!
//! ```text
//!            draw
//!   Hidden ───────▶ Visible ──┐
//!     ▲                │      │ update (Label only)
//!     └────────────────┘ ◀────┘
//!            erase
//! ```
//!
//! `draw` while visible, and `erase`/`update` while hidden, are rejected
//! with [`DisplayError::InvalidWidgetState`](crate::DisplayError) before
//! anything reaches the canvas.

mod label;
mod picture;

pub use label::Label;
pub use picture::{Bitmap, Picture};

use crate::error::StateViolation;

/// Widget lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    pub(crate) fn require_hidden(self) -> Result<(), StateViolation> {
        match self {
            Visibility::Hidden => Ok(()),
            Visibility::Visible => Err(StateViolation::AlreadyVisible),
        }
    }

    pub(crate) fn require_visible(self) -> Result<(), StateViolation> {
        match self {
            Visibility::Visible => Ok(()),
            Visibility::Hidden => Err(StateViolation::NotVisible),
        }
    }
}
