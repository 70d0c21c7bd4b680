//! Client-side content protection.
//!
//! [`ProtectionController`] decides whether a context-menu, drag-start or
//! keyboard event should be blocked, and counts every block as a violation.
//! It is a deterrent against casual copying only: disabling scripts, using
//! the element inspector, or fetching image URLs directly bypasses it.
//!
//! The controller is DOM-agnostic. The browser layer describes each event
//! with a [`TargetInfo`] or [`KeyChord`] and acts on the returned [`Verdict`].

use std::fmt;

/// What the browser layer should do with an intercepted event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Let the event through untouched.
    Allow,
    /// Prevent the default action. Keyboard blocks also stop propagation.
    Block,
}

impl Verdict {
    #[inline]
    pub fn is_block(self) -> bool {
        self == Self::Block
    }
}

/// Description of the element a pointer event was dispatched to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TargetInfo {
    /// The target is an `<img>` element.
    pub is_image: bool,
    /// The target is inside a region marked as protected.
    pub in_protected_region: bool,
}

impl TargetInfo {
    pub const IMAGE: Self = Self {
        is_image: true,
        in_protected_region: false,
    };

    pub const PROTECTED_REGION: Self = Self {
        is_image: false,
        in_protected_region: true,
    };

    pub const UNPROTECTED: Self = Self {
        is_image: false,
        in_protected_region: false,
    };

    #[inline]
    pub fn is_protected(self) -> bool {
        self.is_image || self.in_protected_region
    }
}

/// A pressed key with its modifier state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyChord {
    /// `KeyboardEvent.key` value (e.g. `"s"`, `"F12"`).
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyChord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Ctrl on Windows/Linux, Cmd on macOS.
    #[inline]
    fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Keyboard shortcuts on the deny-list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockedShortcut {
    /// Ctrl/Cmd+S
    SavePage,
    /// Ctrl/Cmd+U
    ViewSource,
    /// Ctrl/Cmd+Shift+I
    Inspector,
    /// Ctrl/Cmd+Shift+J
    Console,
    /// Ctrl/Cmd+Shift+C
    ElementPicker,
    /// F12
    DevTools,
}

impl BlockedShortcut {
    /// Find the deny-list entry matching `chord`, if any.
    ///
    /// Key comparison is case-insensitive, so Shift-modified letters
    /// (`"I"`) match the same entries as their lowercase forms. Extra
    /// modifiers do not prevent a match.
    pub fn matching(chord: &KeyChord) -> Option<Self> {
        let key = chord.key.to_lowercase();
        let command = chord.command();

        match key.as_str() {
            "f12" => Some(Self::DevTools),
            "s" if command => Some(Self::SavePage),
            "u" if command => Some(Self::ViewSource),
            "i" if command && chord.shift => Some(Self::Inspector),
            "j" if command && chord.shift => Some(Self::Console),
            "c" if command && chord.shift => Some(Self::ElementPicker),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::SavePage => "save page",
            Self::ViewSource => "view source",
            Self::Inspector => "open inspector",
            Self::Console => "open console",
            Self::ElementPicker => "element picker",
            Self::DevTools => "open devtools",
        }
    }
}

/// Kind of user action that was intercepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViolationKind {
    ContextMenu,
    DragStart,
    Shortcut(BlockedShortcut),
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContextMenu => write!(f, "context menu"),
            Self::DragStart => write!(f, "image drag"),
            Self::Shortcut(shortcut) => write!(f, "shortcut ({})", shortcut.label()),
        }
    }
}

/// Protection state: an enabled flag plus a violation counter.
///
/// Disabling does not unregister anything; every handler simply returns
/// [`Verdict::Allow`] while disabled. The counter only grows and is reset
/// by a page reload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProtectionController {
    enabled: bool,
    violations: u32,
    last_violation: Option<ViolationKind>,
}

impl ProtectionController {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            violations: 0,
            last_violation: None,
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn violations(&self) -> u32 {
        self.violations
    }

    #[inline]
    pub fn last_violation(&self) -> Option<ViolationKind> {
        self.last_violation
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn toggle(&mut self) {
        if self.enabled {
            self.disable();
        } else {
            self.enable();
        }
    }

    /// Right-click anywhere in the document.
    pub fn on_context_menu(&mut self, target: TargetInfo) -> Verdict {
        self.intercept_pointer(target, ViolationKind::ContextMenu)
    }

    /// Drag start anywhere in the document.
    pub fn on_drag_start(&mut self, target: TargetInfo) -> Verdict {
        self.intercept_pointer(target, ViolationKind::DragStart)
    }

    /// Key press, observed in the capture phase.
    pub fn on_key_down(&mut self, chord: &KeyChord) -> Verdict {
        if !self.enabled {
            return Verdict::Allow;
        }
        match BlockedShortcut::matching(chord) {
            Some(shortcut) => self.record(ViolationKind::Shortcut(shortcut)),
            None => Verdict::Allow,
        }
    }

    fn intercept_pointer(&mut self, target: TargetInfo, kind: ViolationKind) -> Verdict {
        if self.enabled && target.is_protected() {
            self.record(kind)
        } else {
            Verdict::Allow
        }
    }

    fn record(&mut self, kind: ViolationKind) -> Verdict {
        self.violations = self.violations.saturating_add(1);
        self.last_violation = Some(kind);
        Verdict::Block
    }
}

impl Default for ProtectionController {
    fn default() -> Self {
        Self::new(crate::config::protection::ENABLED_BY_DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_menu_on_marked_image_then_elsewhere() {
        let mut ctrl = ProtectionController::new(true);
        assert_eq!(ctrl.violations(), 0);

        assert_eq!(ctrl.on_context_menu(TargetInfo::IMAGE), Verdict::Block);
        assert_eq!(ctrl.violations(), 1);

        assert_eq!(ctrl.on_context_menu(TargetInfo::UNPROTECTED), Verdict::Allow);
        assert_eq!(ctrl.violations(), 1);
    }

    #[test]
    fn test_protected_region_counts_once_per_event() {
        let mut ctrl = ProtectionController::new(true);
        for expected in 1..=3 {
            assert!(ctrl.on_context_menu(TargetInfo::PROTECTED_REGION).is_block());
            assert_eq!(ctrl.violations(), expected);
        }
        assert!(ctrl.on_drag_start(TargetInfo::PROTECTED_REGION).is_block());
        assert_eq!(ctrl.violations(), 4);
        assert_eq!(ctrl.last_violation(), Some(ViolationKind::DragStart));
    }

    #[test]
    fn test_disabled_never_blocks_or_counts() {
        let mut ctrl = ProtectionController::new(false);
        assert_eq!(ctrl.on_context_menu(TargetInfo::IMAGE), Verdict::Allow);
        assert_eq!(ctrl.on_drag_start(TargetInfo::PROTECTED_REGION), Verdict::Allow);
        assert_eq!(ctrl.on_key_down(&KeyChord::new("F12")), Verdict::Allow);
        assert_eq!(ctrl.violations(), 0);
        assert_eq!(ctrl.last_violation(), None);
    }

    #[test]
    fn test_toggle_keeps_counter() {
        let mut ctrl = ProtectionController::new(true);
        ctrl.on_drag_start(TargetInfo::IMAGE);
        ctrl.toggle();
        assert!(!ctrl.is_enabled());
        assert_eq!(ctrl.on_drag_start(TargetInfo::IMAGE), Verdict::Allow);
        ctrl.toggle();
        assert!(ctrl.is_enabled());
        assert_eq!(ctrl.violations(), 1);

        ctrl.disable();
        assert!(!ctrl.is_enabled());
        ctrl.enable();
        assert!(ctrl.is_enabled());
    }

    #[test]
    fn test_drag_on_unprotected_target_allowed() {
        let mut ctrl = ProtectionController::new(true);
        assert_eq!(ctrl.on_drag_start(TargetInfo::default()), Verdict::Allow);
        assert_eq!(ctrl.violations(), 0);
    }

    #[test]
    fn test_blocked_shortcuts() {
        let cases = [
            (KeyChord::new("s").ctrl(), BlockedShortcut::SavePage),
            (KeyChord::new("S").meta(), BlockedShortcut::SavePage),
            (KeyChord::new("u").ctrl(), BlockedShortcut::ViewSource),
            (KeyChord::new("I").ctrl().shift(), BlockedShortcut::Inspector),
            (KeyChord::new("j").meta().shift(), BlockedShortcut::Console),
            (KeyChord::new("C").ctrl().shift(), BlockedShortcut::ElementPicker),
            (KeyChord::new("F12"), BlockedShortcut::DevTools),
        ];
        for (chord, expected) in cases {
            assert_eq!(BlockedShortcut::matching(&chord), Some(expected), "{:?}", chord);
        }
    }

    #[test]
    fn test_allowed_shortcuts() {
        let cases = [
            KeyChord::new("s"),
            KeyChord::new("i").ctrl(),
            KeyChord::new("c").ctrl(),
            KeyChord::new("j").shift(),
            KeyChord::new("ArrowLeft"),
            KeyChord::new("Escape"),
            KeyChord::new("k").ctrl(),
        ];
        for chord in cases {
            assert_eq!(BlockedShortcut::matching(&chord), None, "{:?}", chord);
        }
    }

    #[test]
    fn test_key_down_counts_violation() {
        let mut ctrl = ProtectionController::new(true);
        assert_eq!(ctrl.on_key_down(&KeyChord::new("a")), Verdict::Allow);
        assert_eq!(ctrl.on_key_down(&KeyChord::new("u").ctrl()), Verdict::Block);
        assert_eq!(ctrl.violations(), 1);
        assert_eq!(
            ctrl.last_violation(),
            Some(ViolationKind::Shortcut(BlockedShortcut::ViewSource))
        );
    }

    #[test]
    fn test_violation_display() {
        assert_eq!(ViolationKind::ContextMenu.to_string(), "context menu");
        assert_eq!(
            ViolationKind::Shortcut(BlockedShortcut::DevTools).to_string(),
            "shortcut (open devtools)"
        );
    }
}
