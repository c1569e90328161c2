//! Reference screen with the engine's stock metrics, used by the CLI and as a
//! template for hosts wiring their own screens to the policy.

use clap::ValueEnum;

use crate::layout::{BaseLayoutProvider, ButtonKind, ButtonWidget, ScreenLayoutPort};

pub const DEFAULT_SCREEN_WIDTH: i32 = 816;
pub const DEFAULT_SCREEN_HEIGHT: i32 = 624;

const CANCEL_BUTTON_WIDTH: i32 = 96;
const PAGE_BUTTON_WIDTH: i32 = 48;
const BUTTON_MARGIN: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum SceneKind {
    /// Options screen: cancel button only
    #[default]
    Options,
    /// Paged menu screen: cancel plus page-up/page-down
    Menu,
}

#[derive(Debug, Clone)]
pub struct SceneScreen {
    kind: SceneKind,
    width: i32,
    height: i32,
    cancel: Option<ButtonWidget>,
    page_up: Option<ButtonWidget>,
    page_down: Option<ButtonWidget>,
    created: usize,
}

impl SceneScreen {
    pub fn new(kind: SceneKind) -> Self {
        Self::with_size(kind, DEFAULT_SCREEN_WIDTH, DEFAULT_SCREEN_HEIGHT)
    }

    pub fn with_size(kind: SceneKind, width: i32, height: i32) -> Self {
        Self {
            kind,
            width,
            height,
            cancel: None,
            page_up: None,
            page_down: None,
            created: 0,
        }
    }

    pub fn kind(&self) -> SceneKind {
        self.kind
    }

    fn needs_cancel_button(&self) -> bool {
        self.cancel.is_none()
    }

    fn needs_page_buttons(&self) -> bool {
        self.kind == SceneKind::Menu && self.page_up.is_none()
    }

    pub fn button(&self, kind: ButtonKind) -> Option<&ButtonWidget> {
        match kind {
            ButtonKind::Cancel => self.cancel.as_ref(),
            ButtonKind::PageUp => self.page_up.as_ref(),
            ButtonKind::PageDown => self.page_down.as_ref(),
        }
    }

    pub fn buttons(&self) -> impl Iterator<Item = &ButtonWidget> {
        [&self.cancel, &self.page_up, &self.page_down]
            .into_iter()
            .flatten()
    }

    /// Widgets built over the screen's lifetime.
    pub fn created_count(&self) -> usize {
        self.created
    }
}

impl BaseLayoutProvider for SceneScreen {
    fn screen_height(&self) -> i32 {
        self.height
    }
}

impl ScreenLayoutPort for SceneScreen {
    fn ensure_buttons_exist(&mut self) {
        if self.needs_cancel_button() {
            let x = self.width - CANCEL_BUTTON_WIDTH - BUTTON_MARGIN;
            self.cancel = Some(ButtonWidget::new(ButtonKind::Cancel, x));
            self.created += 1;
        }
        if self.needs_page_buttons() {
            let page_up_x = BUTTON_MARGIN;
            let page_down_x = page_up_x + PAGE_BUTTON_WIDTH + BUTTON_MARGIN;
            self.page_up = Some(ButtonWidget::new(ButtonKind::PageUp, page_up_x));
            self.page_down = Some(ButtonWidget::new(ButtonKind::PageDown, page_down_x));
            self.created += 2;
        }
    }

    fn button_mut(&mut self, kind: ButtonKind) -> Option<&mut ButtonWidget> {
        match kind {
            ButtonKind::Cancel => self.cancel.as_mut(),
            ButtonKind::PageUp => self.page_up.as_mut(),
            ButtonKind::PageDown => self.page_down.as_mut(),
        }
    }
}
