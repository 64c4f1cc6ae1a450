//! The accordion controller.
//!
//! This module provides [`Accordion`], the single stateful component of the
//! crate. It owns the ordered item collection, enforces the configured
//! expansion policy, and keeps every item's rendered state (glyph, active
//! style class, expanded accessibility state) consistent with its open flag.
//!
//! Items are added before [`initialize`](Accordion::initialize) and are fixed
//! afterwards; the controller then reacts only to discrete input events
//! dispatched through [`trigger_event`](Accordion::trigger_event). All
//! mutation is synchronous, so observers never see a half-applied transition.
//!
//! # Example
//!
//! ```
//! use concertina::Accordion;
//!
//! let mut accordion = Accordion::new();
//! accordion.add_item("What is this?", "A collapsible FAQ widget.");
//! accordion.add_item("Can several answers be open?", "Not in exclusive mode.");
//! assert!(accordion.initialize());
//!
//! accordion.activate(0);
//! assert!(accordion.is_open(0));
//!
//! accordion.activate(1);
//! assert!(!accordion.is_open(0)); // exclusive mode closed the other item
//! assert!(accordion.is_open(1));
//! ```
//!
//! # Signals
//!
//! - `item_toggled((usize, bool))`: an item's open state changed
//! - `open_changed(Option<usize>)`: the open item changed (exclusive mode)
//! - `focus_changed(usize)`: the focused trigger changed

use crate::config::{AccordionConfig, ExpandMode};
use crate::events::{Key, MouseButton, TriggerEvent};
use crate::item::AccordionItem;
use crate::signal::Signal;

/// Direction for keyboard focus movement between triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusDirection {
    /// Move to the following trigger, wrapping at the end.
    Next,
    /// Move to the preceding trigger, wrapping at the start.
    Previous,
}

/// An accordion of question/answer items.
///
/// See the [module documentation](self) for an overview.
pub struct Accordion {
    /// Configuration fixed at construction.
    config: AccordionConfig,

    /// The ordered item collection, fixed at initialization.
    items: Vec<AccordionItem>,

    /// Index of the trigger that currently has input focus.
    focused: Option<usize>,

    /// Whether `initialize` has completed.
    initialized: bool,

    /// Next accessibility node id to assign. 0 is reserved for the root.
    next_node_id: u64,

    /// Signal emitted when an item's open state changes.
    pub item_toggled: Signal<(usize, bool)>,

    /// Signal emitted in exclusive mode when the open item changes.
    ///
    /// Carries the index of the newly open item, or `None` when the
    /// activation collapsed the open item.
    pub open_changed: Signal<Option<usize>>,

    /// Signal emitted when the focused trigger changes.
    ///
    /// The shell should move real input focus to that item's trigger.
    pub focus_changed: Signal<usize>,
}

impl Accordion {
    /// Create an empty accordion with the default (exclusive) configuration.
    pub fn new() -> Self {
        Self::with_config(AccordionConfig::default())
    }

    /// Create an empty accordion with the given configuration.
    pub fn with_config(config: AccordionConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
            focused: None,
            initialized: false,
            next_node_id: 1,
            item_toggled: Signal::new(),
            open_changed: Signal::new(),
            focus_changed: Signal::new(),
        }
    }

    /// Create an empty accordion with the given expansion policy.
    pub fn with_mode(mode: ExpandMode) -> Self {
        Self::with_config(AccordionConfig::default().with_mode(mode))
    }

    // =========================================================================
    // Item Management
    // =========================================================================

    /// Add a question/answer item.
    ///
    /// Returns the new item's index, or `None` once the accordion has been
    /// initialized (the collection is fixed from then on).
    pub fn add_item(
        &mut self,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Option<usize> {
        self.push_item(AccordionItem::new(question, answer))
    }

    /// Add a trigger with no panel content.
    ///
    /// The item still toggles, but the linking step is skipped at
    /// initialization and the trigger stays unlinked for assistive
    /// technology.
    pub fn add_trigger_only(&mut self, question: impl Into<String>) -> Option<usize> {
        self.push_item(AccordionItem::without_panel(question))
    }

    fn push_item(&mut self, item: AccordionItem) -> Option<usize> {
        if self.initialized {
            tracing::debug!(
                target: "concertina::accordion",
                "item collection is fixed after initialization; ignoring added item"
            );
            return None;
        }
        self.items.push(item);
        Some(self.items.len() - 1)
    }

    /// Get the number of items.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Check if the accordion has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by index.
    pub fn item(&self, index: usize) -> Option<&AccordionItem> {
        self.items.get(index)
    }

    /// Iterate over the items in order.
    pub fn items(&self) -> impl Iterator<Item = &AccordionItem> {
        self.items.iter()
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Initialize the accordion.
    ///
    /// Resets every item to closed with the expand glyph and assigns any
    /// missing trigger/panel accessibility linkage. Panel-less items skip
    /// the panel assignment and remain unlinked rather than aborting the
    /// whole set.
    ///
    /// An empty collection is a non-fatal condition: a warning is logged,
    /// initialization is skipped, and `false` is returned. Calling this a
    /// second time on a live accordion is a no-op returning `true`.
    pub fn initialize(&mut self) -> bool {
        if self.items.is_empty() {
            tracing::warn!(
                target: "concertina::accordion",
                "accordion has no items; initialization skipped"
            );
            return false;
        }
        if self.initialized {
            return true;
        }

        let expand_glyph = self.config.expand_glyph;
        for index in 0..self.items.len() {
            let needs_trigger = self.items[index].trigger_node().is_none();
            if needs_trigger {
                let node = self.allocate_node();
                self.items[index].set_trigger_node(node);
            }
            let needs_panel =
                self.items[index].has_panel() && self.items[index].panel_node().is_none();
            if needs_panel {
                let node = self.allocate_node();
                self.items[index].set_panel_node(node);
            }
            self.items[index].set_open(false, expand_glyph);
        }

        self.initialized = true;
        tracing::debug!(
            target: "concertina::accordion",
            items = self.items.len(),
            mode = ?self.config.mode,
            "accordion initialized"
        );
        true
    }

    /// Whether `initialize` has completed.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn allocate_node(&mut self) -> accesskit::NodeId {
        let id = accesskit::NodeId(self.next_node_id);
        self.next_node_id += 1;
        id
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// The accordion's configuration.
    pub fn config(&self) -> &AccordionConfig {
        &self.config
    }

    /// The configured expansion policy.
    pub fn mode(&self) -> ExpandMode {
        self.config.mode
    }

    // =========================================================================
    // Open State
    // =========================================================================

    /// Check if the item at `index` is open.
    pub fn is_open(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(AccordionItem::is_open)
    }

    /// The number of currently open items.
    pub fn open_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_open()).count()
    }

    /// The index of the open item, if exactly one is open.
    ///
    /// In exclusive mode this is the open item or `None`; in independent
    /// mode it is only meaningful while zero or one items happen to be open.
    pub fn open_index(&self) -> Option<usize> {
        let mut open = self.items.iter().enumerate().filter(|(_, i)| i.is_open());
        match (open.next(), open.next()) {
            (Some((index, _)), None) => Some(index),
            _ => None,
        }
    }

    /// The glyph currently shown on an item's trigger.
    pub fn glyph(&self, index: usize) -> Option<char> {
        self.items.get(index).map(AccordionItem::glyph)
    }

    /// The style class the shell should apply to an item's trigger, if any.
    ///
    /// Returns the configured active class while the item is open.
    pub fn style_class(&self, index: usize) -> Option<&str> {
        self.items
            .get(index)
            .filter(|item| item.is_open())
            .map(|_| self.config.active_class.as_str())
    }

    /// Check if an item reacts to activation.
    pub fn is_item_enabled(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(AccordionItem::is_enabled)
    }

    /// Set whether an item reacts to activation.
    pub fn set_item_enabled(&mut self, index: usize, enabled: bool) {
        if let Some(item) = self.items.get_mut(index) {
            item.set_enabled(enabled);
        }
    }

    // =========================================================================
    // State Transitions
    // =========================================================================

    /// Activate the item at `index`.
    ///
    /// This is the single state-transition entry point, used by both pointer
    /// and keyboard activation:
    ///
    /// - Exclusive mode: activating a closed item first closes every other
    ///   open item, then opens it; activating the open item collapses it.
    ///   After the call, zero or one items are open.
    /// - Independent mode: flips only the addressed item.
    ///
    /// Returns `true` if a transition happened. Activation is refused before
    /// initialization, for out-of-range indices, and for disabled items.
    pub fn activate(&mut self, index: usize) -> bool {
        if !self.initialized {
            tracing::debug!(
                target: "concertina::accordion",
                "activation before initialization ignored"
            );
            return false;
        }
        let Some(item) = self.items.get(index) else {
            return false;
        };
        if !item.is_enabled() {
            return false;
        }

        match self.config.mode {
            ExpandMode::Exclusive => {
                if self.items[index].is_open() {
                    self.apply_open(index, false);
                    self.open_changed.emit(None);
                } else {
                    let open_others: Vec<usize> = self
                        .items
                        .iter()
                        .enumerate()
                        .filter(|&(other, item)| other != index && item.is_open())
                        .map(|(other, _)| other)
                        .collect();
                    for other in open_others {
                        self.apply_open(other, false);
                    }
                    self.apply_open(index, true);
                    self.open_changed.emit(Some(index));
                }
            }
            ExpandMode::Independent => {
                let open = !self.items[index].is_open();
                self.apply_open(index, open);
            }
        }
        true
    }

    /// Set one item's open flag and its derived rendered state, then notify.
    fn apply_open(&mut self, index: usize, open: bool) {
        let glyph = if open {
            self.config.collapse_glyph
        } else {
            self.config.expand_glyph
        };
        self.items[index].set_open(open, glyph);
        tracing::trace!(target: "concertina::accordion", index, open, "item toggled");
        self.item_toggled.emit((index, open));
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Index of the trigger that currently has input focus.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Move focus to the trigger at `index`.
    ///
    /// Emits `focus_changed` when the focused trigger actually changes.
    /// Returns `true` on a change.
    pub fn set_focus(&mut self, index: usize) -> bool {
        if !self.initialized || index >= self.items.len() {
            return false;
        }
        if self.focused == Some(index) {
            return false;
        }
        self.focused = Some(index);
        self.focus_changed.emit(index);
        true
    }

    /// Move focus from `index` to the adjacent trigger with wraparound.
    ///
    /// `Next` advances by one modulo the collection size; `Previous`
    /// decrements, adding the size before the modulo so the first trigger
    /// wraps to the last. Open state is never touched.
    ///
    /// Returns the target index, or `None` before initialization or for an
    /// out-of-range `index`.
    pub fn focus_adjacent(&mut self, index: usize, direction: FocusDirection) -> Option<usize> {
        if !self.initialized || index >= self.items.len() {
            return None;
        }
        let count = self.items.len();
        let target = match direction {
            FocusDirection::Next => (index + 1) % count,
            FocusDirection::Previous => (index + count - 1) % count,
        };
        self.set_focus(target);
        Some(target)
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Dispatch an input event addressed to the trigger at `index`.
    ///
    /// Returns `true` when the event was consumed; the event is also marked
    /// accepted so the shell suppresses the input's default action.
    ///
    /// The contract:
    ///
    /// - Primary mouse press activates the trigger.
    /// - Enter/Space activate the trigger while it has focus.
    /// - ArrowDown/ArrowUp move focus to the adjacent trigger, wrapping.
    /// - Focus events update the focused-trigger bookkeeping.
    /// - No other input has any effect.
    pub fn trigger_event(&mut self, index: usize, event: &mut TriggerEvent) -> bool {
        match event {
            TriggerEvent::MousePress(e) => {
                if e.button == MouseButton::Left && self.activate(index) {
                    e.base.accept();
                    return true;
                }
                false
            }

            TriggerEvent::KeyPress(e) => {
                if self.focused != Some(index) {
                    return false;
                }
                let handled = match e.key {
                    key if key.is_activation() => self.activate(index),
                    Key::ArrowDown => self.focus_adjacent(index, FocusDirection::Next).is_some(),
                    Key::ArrowUp => self
                        .focus_adjacent(index, FocusDirection::Previous)
                        .is_some(),
                    _ => false,
                };
                if handled {
                    e.base.accept();
                }
                handled
            }

            TriggerEvent::FocusIn(_) => {
                if index < self.items.len() {
                    self.focused = Some(index);
                }
                false
            }

            TriggerEvent::FocusOut(_) => {
                if self.focused == Some(index) {
                    self.focused = None;
                }
                false
            }
        }
    }
}

impl Default for Accordion {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Accordion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Accordion")
            .field("mode", &self.config.mode)
            .field("items", &self.items.len())
            .field("open", &self.open_count())
            .field("focused", &self.focused)
            .field("initialized", &self.initialized)
            .finish()
    }
}

// Ensure Accordion is Send + Sync
static_assertions::assert_impl_all!(Accordion: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{FocusInEvent, FocusOutEvent, KeyPressEvent, MousePressEvent};
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn faq(mode: ExpandMode, count: usize) -> Accordion {
        let mut accordion = Accordion::with_mode(mode);
        for i in 0..count {
            accordion.add_item(format!("Question {i}"), format!("Answer {i}"));
        }
        assert!(accordion.initialize());
        accordion
    }

    #[test]
    fn test_empty_accordion_refuses_initialization() {
        let mut accordion = Accordion::new();
        assert!(!accordion.initialize());
        assert!(!accordion.is_initialized());

        // Operations on an uninitialized accordion are inert
        assert!(!accordion.activate(0));
        assert!(accordion.focus_adjacent(0, FocusDirection::Next).is_none());
    }

    #[test]
    fn test_initialize_sets_closed_state_everywhere() {
        let accordion = faq(ExpandMode::Exclusive, 4);
        for i in 0..4 {
            assert!(!accordion.is_open(i));
            assert_eq!(accordion.glyph(i), Some('+'));
            assert!(accordion.style_class(i).is_none());
            assert!(accordion.item(i).unwrap().trigger_node().is_some());
            assert!(accordion.item(i).unwrap().panel_node().is_some());
        }
        assert_eq!(accordion.open_count(), 0);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut accordion = faq(ExpandMode::Exclusive, 2);
        accordion.activate(0);
        let trigger = accordion.item(0).unwrap().trigger_node();

        assert!(accordion.initialize());
        // Node linkage is stable and state untouched by the no-op
        assert_eq!(accordion.item(0).unwrap().trigger_node(), trigger);
        assert!(accordion.is_open(0));
    }

    #[test]
    fn test_trigger_only_item_skips_panel_linkage() {
        let mut accordion = Accordion::new();
        accordion.add_item("Linked", "Has a panel");
        accordion.add_trigger_only("Unlinked");
        assert!(accordion.initialize());

        assert!(accordion.item(0).unwrap().panel_node().is_some());
        assert!(accordion.item(1).unwrap().panel_node().is_none());
        assert!(accordion.item(1).unwrap().trigger_node().is_some());

        // The unlinked item still toggles
        assert!(accordion.activate(1));
        assert!(accordion.is_open(1));
    }

    #[test]
    fn test_items_fixed_after_initialization() {
        let mut accordion = faq(ExpandMode::Exclusive, 2);
        assert!(accordion.add_item("Late", "Too late").is_none());
        assert_eq!(accordion.count(), 2);
    }

    #[test]
    fn test_exclusive_at_most_one_open() {
        let mut accordion = faq(ExpandMode::Exclusive, 5);
        for &i in &[0, 3, 1, 1, 4, 2, 0, 0, 3] {
            accordion.activate(i);
            assert!(accordion.open_count() <= 1);
        }
    }

    #[test]
    fn test_exclusive_toggle_off() {
        let mut accordion = faq(ExpandMode::Exclusive, 3);
        accordion.activate(1);
        assert_eq!(accordion.open_index(), Some(1));

        accordion.activate(1);
        assert_eq!(accordion.open_count(), 0);
        assert_eq!(accordion.open_index(), None);
    }

    #[test]
    fn test_exclusive_swap() {
        let mut accordion = faq(ExpandMode::Exclusive, 3);
        accordion.activate(0);
        accordion.activate(2);

        assert!(!accordion.is_open(0));
        assert!(accordion.is_open(2));
        assert_eq!(accordion.open_count(), 1);
    }

    #[test]
    fn test_independent_items_do_not_interact() {
        let mut accordion = faq(ExpandMode::Independent, 3);
        accordion.activate(0);
        accordion.activate(2);

        assert!(accordion.is_open(0));
        assert!(!accordion.is_open(1));
        assert!(accordion.is_open(2));
        assert_eq!(accordion.open_count(), 2);

        accordion.activate(0);
        assert!(!accordion.is_open(0));
        assert!(accordion.is_open(2));
    }

    #[test]
    fn test_glyph_tracks_open_state() {
        let mut accordion = faq(ExpandMode::Independent, 3);
        for step in 0..6 {
            accordion.activate(step % 3);
            for i in 0..3 {
                let expected = if accordion.is_open(i) { '−' } else { '+' };
                assert_eq!(accordion.glyph(i), Some(expected));
            }
        }
    }

    #[test]
    fn test_style_class_tracks_open_state() {
        let mut accordion = faq(ExpandMode::Exclusive, 2);
        accordion.activate(0);
        assert_eq!(accordion.style_class(0), Some("active"));
        assert_eq!(accordion.style_class(1), None);

        accordion.activate(0);
        assert_eq!(accordion.style_class(0), None);
    }

    #[test]
    fn test_three_item_walkthrough() {
        let mut accordion = faq(ExpandMode::Exclusive, 3);

        accordion.activate(1);
        assert_eq!(accordion.open_index(), Some(1));
        assert_eq!(accordion.glyph(1), Some('−'));
        assert_eq!(accordion.glyph(0), Some('+'));
        assert_eq!(accordion.glyph(2), Some('+'));

        accordion.activate(2);
        assert!(!accordion.is_open(1));
        assert_eq!(accordion.glyph(1), Some('+'));
        assert_eq!(accordion.open_index(), Some(2));
        assert_eq!(accordion.glyph(2), Some('−'));

        accordion.activate(2);
        assert_eq!(accordion.open_count(), 0);
        for i in 0..3 {
            assert_eq!(accordion.glyph(i), Some('+'));
        }
    }

    #[test]
    fn test_disabled_item_cannot_activate() {
        let mut accordion = faq(ExpandMode::Exclusive, 2);
        accordion.set_item_enabled(1, false);
        assert!(!accordion.activate(1));
        assert!(!accordion.is_open(1));

        accordion.set_item_enabled(1, true);
        assert!(accordion.activate(1));
    }

    #[test]
    fn test_focus_wraparound() {
        let mut accordion = faq(ExpandMode::Exclusive, 4);

        assert_eq!(
            accordion.focus_adjacent(0, FocusDirection::Previous),
            Some(3)
        );
        assert_eq!(accordion.focused(), Some(3));

        assert_eq!(accordion.focus_adjacent(3, FocusDirection::Next), Some(0));
        assert_eq!(accordion.focused(), Some(0));

        assert_eq!(accordion.focus_adjacent(1, FocusDirection::Next), Some(2));
        assert_eq!(accordion.focus_adjacent(2, FocusDirection::Previous), Some(1));
    }

    #[test]
    fn test_focus_movement_does_not_touch_open_state() {
        let mut accordion = faq(ExpandMode::Exclusive, 3);
        accordion.activate(1);

        accordion.focus_adjacent(1, FocusDirection::Next);
        accordion.focus_adjacent(2, FocusDirection::Next);
        assert_eq!(accordion.open_index(), Some(1));
    }

    #[test]
    fn test_single_item_wraps_to_itself() {
        let mut accordion = faq(ExpandMode::Exclusive, 1);
        assert_eq!(accordion.focus_adjacent(0, FocusDirection::Next), Some(0));
        assert_eq!(
            accordion.focus_adjacent(0, FocusDirection::Previous),
            Some(0)
        );
    }

    #[test]
    fn test_mouse_press_activates() {
        let mut accordion = faq(ExpandMode::Exclusive, 2);

        let mut event = TriggerEvent::MousePress(MousePressEvent::new(MouseButton::Left));
        assert!(accordion.trigger_event(0, &mut event));
        assert!(event.is_accepted());
        assert!(accordion.is_open(0));

        // Secondary button does nothing
        let mut event = TriggerEvent::MousePress(MousePressEvent::new(MouseButton::Right));
        assert!(!accordion.trigger_event(1, &mut event));
        assert!(!event.is_accepted());
        assert!(!accordion.is_open(1));
    }

    #[test]
    fn test_confirm_keys_require_focus() {
        let mut accordion = faq(ExpandMode::Exclusive, 2);

        let mut event = TriggerEvent::KeyPress(KeyPressEvent::new(Key::Enter));
        assert!(!accordion.trigger_event(0, &mut event));
        assert!(!accordion.is_open(0));

        accordion.set_focus(0);
        let mut event = TriggerEvent::KeyPress(KeyPressEvent::new(Key::Enter));
        assert!(accordion.trigger_event(0, &mut event));
        assert!(event.is_accepted());
        assert!(accordion.is_open(0));

        let mut event = TriggerEvent::KeyPress(KeyPressEvent::new(Key::Space));
        assert!(accordion.trigger_event(0, &mut event));
        assert!(!accordion.is_open(0));
    }

    #[test]
    fn test_arrow_keys_move_focus() {
        let mut accordion = faq(ExpandMode::Exclusive, 3);
        accordion.set_focus(2);

        let mut event = TriggerEvent::KeyPress(KeyPressEvent::new(Key::ArrowDown));
        assert!(accordion.trigger_event(2, &mut event));
        assert!(event.is_accepted());
        assert_eq!(accordion.focused(), Some(0));

        let mut event = TriggerEvent::KeyPress(KeyPressEvent::new(Key::ArrowUp));
        assert!(accordion.trigger_event(0, &mut event));
        assert_eq!(accordion.focused(), Some(2));
        assert_eq!(accordion.open_count(), 0);
    }

    #[test]
    fn test_other_keys_have_no_effect() {
        let mut accordion = faq(ExpandMode::Exclusive, 2);
        accordion.set_focus(0);

        for key in [Key::Tab, Key::Escape, Key::ArrowLeft, Key::Unknown(7)] {
            let mut event = TriggerEvent::KeyPress(KeyPressEvent::new(key));
            assert!(!accordion.trigger_event(0, &mut event));
            assert!(!event.is_accepted());
        }
        assert_eq!(accordion.open_count(), 0);
        assert_eq!(accordion.focused(), Some(0));
    }

    #[test]
    fn test_focus_events_update_bookkeeping() {
        let mut accordion = faq(ExpandMode::Exclusive, 2);

        let mut event = TriggerEvent::FocusIn(FocusInEvent::default());
        accordion.trigger_event(1, &mut event);
        assert_eq!(accordion.focused(), Some(1));

        let mut event = TriggerEvent::FocusOut(FocusOutEvent::default());
        accordion.trigger_event(1, &mut event);
        assert_eq!(accordion.focused(), None);
    }

    #[test]
    fn test_item_toggled_signal() {
        let mut accordion = faq(ExpandMode::Exclusive, 3);
        let toggles = Arc::new(Mutex::new(Vec::new()));

        let toggles_clone = toggles.clone();
        accordion.item_toggled.connect(move |&(index, open)| {
            toggles_clone.lock().push((index, open));
        });

        accordion.activate(0);
        accordion.activate(2);
        accordion.activate(2);

        assert_eq!(
            *toggles.lock(),
            vec![(0, true), (0, false), (2, true), (2, false)]
        );
    }

    #[test]
    fn test_open_changed_signal() {
        let mut accordion = faq(ExpandMode::Exclusive, 2);
        let changes = Arc::new(Mutex::new(Vec::new()));

        let changes_clone = changes.clone();
        accordion.open_changed.connect(move |&current| {
            changes_clone.lock().push(current);
        });

        accordion.activate(0);
        accordion.activate(1);
        accordion.activate(1);

        assert_eq!(*changes.lock(), vec![Some(0), Some(1), None]);
    }

    #[test]
    fn test_focus_changed_signal() {
        let mut accordion = faq(ExpandMode::Exclusive, 3);
        let moves = Arc::new(Mutex::new(Vec::new()));

        let moves_clone = moves.clone();
        accordion.focus_changed.connect(move |&index| {
            moves_clone.lock().push(index);
        });

        accordion.set_focus(0);
        accordion.focus_adjacent(0, FocusDirection::Previous);
        // Re-focusing the focused trigger is not a change
        accordion.set_focus(2);

        assert_eq!(*moves.lock(), vec![0, 2]);
    }

    #[test]
    fn test_out_of_range_indices_are_inert() {
        let mut accordion = faq(ExpandMode::Exclusive, 2);
        assert!(!accordion.activate(5));
        assert!(accordion.focus_adjacent(5, FocusDirection::Next).is_none());
        assert!(!accordion.set_focus(5));
        assert!(accordion.glyph(5).is_none());
        assert!(!accordion.is_open(5));
    }
}
