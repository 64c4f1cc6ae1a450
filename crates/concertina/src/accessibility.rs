//! Accessibility tree construction for the accordion.
//!
//! This module exposes the accordion's state to assistive technologies
//! through [AccessKit](https://accesskit.dev/). Each trigger becomes a
//! focusable button node carrying the expanded state and a `controls`
//! relation to its panel node; panel nodes are hidden while their item is
//! closed. The embedding shell pushes the resulting [`TreeUpdate`]s through
//! its platform adapter.
//!
//! Node identifiers are assigned by [`Accordion::initialize`]; items without
//! a panel simply have no panel node and no `controls` relation.

use accesskit::{Action, Node, NodeId, Role, Tree, TreeUpdate};

use crate::accordion::Accordion;
use crate::item::AccordionItem;

/// The accordion container's node id. Item nodes are assigned from 1 upward.
pub const ROOT_NODE: NodeId = NodeId(0);

/// Builder for constructing AccessKit nodes with common patterns.
pub struct NodeBuilder {
    node: Node,
    children: Vec<NodeId>,
}

impl NodeBuilder {
    /// Create a new node builder with the given role.
    pub fn new(role: Role) -> Self {
        Self {
            node: Node::new(role),
            children: Vec::new(),
        }
    }

    /// Set the node's label (accessible name).
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.node.set_label(label.into());
        self
    }

    /// Set the node's expanded state.
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.node.set_expanded(expanded);
        self
    }

    /// Record which nodes this node controls.
    pub fn controls(mut self, ids: impl IntoIterator<Item = NodeId>) -> Self {
        self.node.set_controls(ids.into_iter().collect::<Vec<_>>());
        self
    }

    /// Add an action that this node supports.
    pub fn action(mut self, action: Action) -> Self {
        self.node.add_action(action);
        self
    }

    /// Mark the node as focusable.
    pub fn focusable(mut self) -> Self {
        self.node.add_action(Action::Focus);
        self
    }

    /// Mark the node as disabled.
    pub fn disabled(mut self) -> Self {
        self.node.set_disabled();
        self
    }

    /// Mark the node as hidden.
    pub fn hidden(mut self) -> Self {
        self.node.set_hidden();
        self
    }

    /// Add a child node ID.
    pub fn child(mut self, id: NodeId) -> Self {
        self.children.push(id);
        self
    }

    /// Build the final node.
    pub fn build(mut self) -> Node {
        if !self.children.is_empty() {
            self.node.set_children(self.children);
        }
        self.node
    }
}

impl Accordion {
    /// Build the complete accessibility tree for the accordion.
    ///
    /// The root container holds one button node per trigger, each followed
    /// by its panel node when the item is linked. Focus points at the
    /// focused trigger, falling back to the root.
    pub fn accessibility_tree(&self) -> TreeUpdate {
        let mut nodes = Vec::new();
        let mut root = NodeBuilder::new(Role::GenericContainer);

        for item in self.items() {
            let Some(trigger_id) = item.trigger_node() else {
                continue;
            };
            root = root.child(trigger_id);
            nodes.push((trigger_id, trigger_node(item)));

            if let Some(panel_id) = item.panel_node() {
                root = root.child(panel_id);
                nodes.push((panel_id, panel_node(item)));
            }
        }

        nodes.insert(0, (ROOT_NODE, root.build()));

        TreeUpdate {
            nodes,
            tree: Some(Tree::new(ROOT_NODE)),
            focus: self.focus_node(),
        }
    }

    /// Build an incremental update for one item after a state change.
    ///
    /// Covers the trigger node and, when linked, the panel node; the tree
    /// structure is unchanged. Returns `None` before initialization or for
    /// an out-of-range index.
    pub fn item_update(&self, index: usize) -> Option<TreeUpdate> {
        let item = self.item(index)?;
        let trigger_id = item.trigger_node()?;

        let mut nodes = vec![(trigger_id, trigger_node(item))];
        if let Some(panel_id) = item.panel_node() {
            nodes.push((panel_id, panel_node(item)));
        }

        Some(TreeUpdate {
            nodes,
            tree: None,
            focus: self.focus_node(),
        })
    }

    /// The node that currently holds accessibility focus.
    fn focus_node(&self) -> NodeId {
        self.focused()
            .and_then(|index| self.item(index))
            .and_then(|item| item.trigger_node())
            .unwrap_or(ROOT_NODE)
    }
}

/// Build the button node for an item's trigger.
fn trigger_node(item: &AccordionItem) -> Node {
    let mut builder = NodeBuilder::new(Role::Button)
        .label(item.question())
        .expanded(item.is_open())
        .focusable()
        .action(Action::Click)
        .action(if item.is_open() {
            Action::Collapse
        } else {
            Action::Expand
        });

    if let Some(panel_id) = item.panel_node() {
        builder = builder.controls([panel_id]);
    }
    if !item.is_enabled() {
        builder = builder.disabled();
    }
    builder.build()
}

/// Build the content node for an item's panel, hidden while closed.
fn panel_node(item: &AccordionItem) -> Node {
    let mut builder = NodeBuilder::new(Role::Group);
    if let Some(answer) = item.answer() {
        builder = builder.label(answer);
    }
    if !item.is_open() {
        builder = builder.hidden();
    }
    builder.build()
}
