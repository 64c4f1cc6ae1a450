//! Input event types for accordion triggers.
//!
//! These are the widget-local events the accordion understands: pointer
//! presses on a trigger header, key presses while a trigger is focused, and
//! focus movement in and out of a trigger. The embedding shell translates
//! its native input events into these types and dispatches them through
//! [`Accordion::trigger_event`](crate::Accordion::trigger_event).
//!
//! Each event carries an [`EventBase`] with an accepted flag. A handler that
//! consumes an event calls [`EventBase::accept`]; the shell then suppresses
//! the default action for that input (for example, page scroll on Space).

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left = 0,
    /// Secondary button (usually right).
    Right = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
}

/// Keys the accordion's event contract distinguishes.
///
/// The set is deliberately small: activation keys, arrow navigation, and a
/// handful of common keys a shell is likely to forward. Anything else maps
/// to [`Key::Unknown`] and is ignored by the accordion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Enter/Return.
    Enter,
    /// Space bar.
    Space,
    /// Tab.
    Tab,
    /// Escape.
    Escape,
    /// Backspace.
    Backspace,
    /// Delete.
    Delete,
    /// Unknown/unmapped key with its raw scan code.
    Unknown(u16),
}

impl Key {
    /// Check if this is a navigation key.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Key::ArrowUp
                | Key::ArrowDown
                | Key::ArrowLeft
                | Key::ArrowRight
                | Key::Home
                | Key::End
                | Key::PageUp
                | Key::PageDown
        )
    }

    /// Check if this key confirms/activates the focused control.
    pub fn is_activation(&self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

/// Common data for all trigger events.
#[derive(Debug, Clone, Copy)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl Default for EventBase {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, telling the shell to suppress the default action.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing the default action to proceed.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Mouse press event on a trigger header.
#[derive(Debug, Clone, Copy)]
pub struct MousePressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
}

impl MousePressEvent {
    /// Create a new mouse press event.
    pub fn new(button: MouseButton) -> Self {
        Self {
            base: EventBase::new(),
            button,
        }
    }
}

/// Key press event while a trigger is focused.
#[derive(Debug, Clone, Copy)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// Whether this is a key repeat event (key held down).
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// Create a new key press event with no modifiers.
    pub fn new(key: Key) -> Self {
        Self::with_modifiers(key, KeyboardModifiers::NONE)
    }

    /// Create a new key press event with modifiers.
    pub fn with_modifiers(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
            is_repeat: false,
        }
    }
}

/// Focus in event, sent when a trigger gains input focus.
#[derive(Debug, Clone, Copy, Default)]
pub struct FocusInEvent {
    /// Base event data.
    pub base: EventBase,
}

/// Focus out event, sent when a trigger loses input focus.
#[derive(Debug, Clone, Copy, Default)]
pub struct FocusOutEvent {
    /// Base event data.
    pub base: EventBase,
}

/// An input event addressed to a single trigger.
#[derive(Debug, Clone, Copy)]
pub enum TriggerEvent {
    /// Mouse press on the trigger header.
    MousePress(MousePressEvent),
    /// Key press while the trigger has focus.
    KeyPress(KeyPressEvent),
    /// The trigger gained input focus.
    FocusIn(FocusInEvent),
    /// The trigger lost input focus.
    FocusOut(FocusOutEvent),
}

impl TriggerEvent {
    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        match self {
            Self::MousePress(e) => e.base.is_accepted(),
            Self::KeyPress(e) => e.base.is_accepted(),
            Self::FocusIn(e) => e.base.is_accepted(),
            Self::FocusOut(e) => e.base.is_accepted(),
        }
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        match self {
            Self::MousePress(e) => e.base.accept(),
            Self::KeyPress(e) => e.base.accept(),
            Self::FocusIn(e) => e.base.accept(),
            Self::FocusOut(e) => e.base.accept(),
        }
    }

    /// Ignore the event.
    pub fn ignore(&mut self) {
        match self {
            Self::MousePress(e) => e.base.ignore(),
            Self::KeyPress(e) => e.base.ignore(),
            Self::FocusIn(e) => e.base.ignore(),
            Self::FocusOut(e) => e.base.ignore(),
        }
    }
}
