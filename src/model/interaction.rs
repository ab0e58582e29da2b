use egui::{Modifiers, PointerButton, Pos2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which drag operation a pointer press starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    /// Left date handle: moves the start date.
    Start,
    /// Right date handle: moves the end date.
    End,
    /// Task body: reschedules the whole task.
    Move,
    /// Progress handle: changes the completed fraction.
    Progress,
}

impl InteractionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InteractionKind::Start => "start",
            InteractionKind::End => "end",
            InteractionKind::Move => "move",
            InteractionKind::Progress => "progress",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The pointer press that started an interaction.
///
/// Handed to the host untouched so it can read the position, the button and
/// the modifier keys when it begins tracking the drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pos: Pos2,
    pub button: PointerButton,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// A primary-button press with no modifiers held.
    pub fn primary(pos: Pos2) -> Self {
        Self {
            pos,
            button: PointerButton::Primary,
            modifiers: Modifiers::NONE,
        }
    }
}

/// What the host allows the user to change on a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub date_changeable: bool,
    pub progress_changeable: bool,
}

impl Capabilities {
    pub const ALL: Self = Self {
        date_changeable: true,
        progress_changeable: true,
    };

    pub const READ_ONLY: Self = Self {
        date_changeable: false,
        progress_changeable: false,
    };
}

/// Reading direction of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn from_rtl(rtl: bool) -> Self {
        if rtl {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }

    pub fn is_rtl(self) -> bool {
        self == TextDirection::Rtl
    }
}
