use crate::{Preferences, ShareChannel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the surface area field.
    SurfaceChanged(String),
    /// User edited the annual rainfall field.
    RainfallChanged(String),
    /// User picked a roof type; `None` is the empty placeholder option.
    CoefficientSelected(Option<String>),
    /// User submitted the calculator form.
    Submitted,
    /// User clicked Clear.
    ClearClicked,
    /// User clicked the theme toggle.
    ThemeToggled,
    /// Apply preferences loaded at startup.
    RestorePreferences(Preferences),
    /// User clicked the menu button.
    MenuToggled,
    /// User followed a menu link.
    MenuLinkClicked,
    /// User clicked one of the share buttons.
    ShareRequested(ShareChannel),
    /// Host viewport width changed, in pixels.
    ViewportResized(u32),
    /// Fallback for placeholder wiring.
    NoOp,
}

