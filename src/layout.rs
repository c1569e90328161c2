//! Button-band layout seams: the host's base metrics, the visibility gate over them,
//! and the active screen's button set.

use crate::policy::EffectiveUiState;

/// Vertical space reserved for the button band on stock screens.
pub const BUTTON_AREA_HEIGHT: i32 = 52;
/// Height of a single touch button sprite.
pub const BUTTON_HEIGHT: i32 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    Cancel,
    PageUp,
    PageDown,
}

impl ButtonKind {
    pub const ALL: [ButtonKind; 3] = [ButtonKind::Cancel, ButtonKind::PageUp, ButtonKind::PageDown];
}

impl std::fmt::Display for ButtonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ButtonKind::Cancel => "cancel",
            ButtonKind::PageUp => "page-up",
            ButtonKind::PageDown => "page-down",
        };
        write!(f, "{label}")
    }
}

/// Mutable attributes of a button widget owned by the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonWidget {
    pub kind: ButtonKind,
    pub visible: bool,
    pub x: i32,
    pub y: i32,
}

impl ButtonWidget {
    pub fn new(kind: ButtonKind, x: i32) -> Self {
        Self {
            kind,
            visible: false,
            x,
            y: 0,
        }
    }
}

/// Ungated layout metrics as the host computes them.
pub trait BaseLayoutProvider {
    fn screen_height(&self) -> i32;

    fn button_area_height(&self) -> i32 {
        BUTTON_AREA_HEIGHT
    }

    fn button_height(&self) -> i32 {
        BUTTON_HEIGHT
    }

    fn button_area_top(&self, bottom_layout: bool) -> i32 {
        if bottom_layout {
            self.screen_height().saturating_sub(self.button_area_height())
        } else {
            0
        }
    }

    fn button_area_bottom(&self, bottom_layout: bool) -> i32 {
        self.button_area_top(bottom_layout)
            .saturating_add(self.button_area_height())
    }
}

/// The active screen as seen by the touch-UI layer.
pub trait ScreenLayoutPort: BaseLayoutProvider {
    /// Create whichever buttons this screen needs and does not have yet.
    fn ensure_buttons_exist(&mut self);

    fn button_mut(&mut self, kind: ButtonKind) -> Option<&mut ButtonWidget>;
}

/// Base metrics with the button band collapsed to zero while the buttons are hidden.
pub struct GatedLayout<'a, P: ?Sized> {
    base: &'a P,
    state: EffectiveUiState,
}

impl<'a, P: BaseLayoutProvider + ?Sized> GatedLayout<'a, P> {
    pub fn new(base: &'a P, state: EffectiveUiState) -> Self {
        Self { base, state }
    }

    pub fn state(&self) -> EffectiveUiState {
        self.state
    }

    pub fn button_area_height(&self) -> i32 {
        if self.state.visible {
            self.base.button_area_height()
        } else {
            0
        }
    }

    pub fn button_area_top(&self) -> i32 {
        if self.state.visible {
            self.base.button_area_top(self.state.bottom_layout)
        } else {
            0
        }
    }

    pub fn button_area_bottom(&self) -> i32 {
        if self.state.visible {
            self.base.button_area_bottom(self.state.bottom_layout)
        } else {
            0
        }
    }

    /// Row the buttons sit on, centred in the (gated) band.
    pub fn button_y(&self) -> i32 {
        let offset = self
            .button_area_height()
            .saturating_sub(self.base.button_height())
            .div_euclid(2);
        self.button_area_top().saturating_add(offset)
    }

    /// First row available to screen content.
    pub fn main_area_top(&self) -> i32 {
        if self.state.bottom_layout {
            0
        } else {
            self.button_area_bottom()
        }
    }

    pub fn main_area_height(&self) -> i32 {
        self.base.screen_height().saturating_sub(self.button_area_height())
    }
}
