//! Accordion item model.
//!
//! An item pairs a trigger (the focusable question header) with an optional
//! panel (the answer content). The open flag is the only mutable state;
//! everything a shell renders for the item (glyph, active class, expanded
//! accessibility state) is derived from it and kept in sync by the
//! controller on every transition.

use accesskit::NodeId;

use crate::config::DEFAULT_EXPAND_GLYPH;

/// One question/answer pair in the accordion.
#[derive(Debug, Clone)]
pub struct AccordionItem {
    /// The question text shown on the trigger header.
    question: String,
    /// The answer content, if the item has a panel.
    answer: Option<String>,
    /// Whether the panel is currently shown.
    open: bool,
    /// Whether the trigger reacts to activation.
    enabled: bool,
    /// Icon glyph currently shown on the trigger.
    glyph: char,
    /// Accessibility node for the trigger, assigned at initialization.
    trigger_node: Option<NodeId>,
    /// Accessibility node for the panel, assigned at initialization.
    ///
    /// Stays `None` for panel-less items; the trigger is then left unlinked
    /// for assistive technology rather than failing initialization.
    panel_node: Option<NodeId>,
}

impl AccordionItem {
    /// Create a closed item with a question and an answer panel.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: Some(answer.into()),
            open: false,
            enabled: true,
            glyph: DEFAULT_EXPAND_GLYPH,
            trigger_node: None,
            panel_node: None,
        }
    }

    /// Create a closed item with no panel content.
    ///
    /// Covers malformed source markup where a trigger has no associated
    /// panel; the item still toggles but never gets a panel linkage.
    pub fn without_panel(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: None,
            open: false,
            enabled: true,
            glyph: DEFAULT_EXPAND_GLYPH,
            trigger_node: None,
            panel_node: None,
        }
    }

    /// The question text.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The answer content, if the item has a panel.
    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    /// Whether the item has a panel to show.
    pub fn has_panel(&self) -> bool {
        self.answer.is_some()
    }

    /// Whether the panel is currently shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the trigger reacts to activation.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The icon glyph currently shown on the trigger.
    pub fn glyph(&self) -> char {
        self.glyph
    }

    /// The trigger's accessibility node, once assigned.
    pub fn trigger_node(&self) -> Option<NodeId> {
        self.trigger_node
    }

    /// The panel's accessibility node, once assigned.
    pub fn panel_node(&self) -> Option<NodeId> {
        self.panel_node
    }

    pub(crate) fn set_open(&mut self, open: bool, glyph: char) {
        self.open = open;
        self.glyph = glyph;
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn set_trigger_node(&mut self, node: NodeId) {
        self.trigger_node = Some(node);
    }

    pub(crate) fn set_panel_node(&mut self, node: NodeId) {
        self.panel_node = Some(node);
    }
}
