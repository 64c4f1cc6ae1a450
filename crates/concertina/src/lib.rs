//! Concertina - accordion/disclosure widget logic.
//!
//! This crate implements the stateful core of a FAQ-style accordion: an
//! ordered collection of question/answer items where activating a trigger
//! toggles its panel, a configured policy decides whether panels open
//! exclusively or independently, and arrow keys move focus between triggers
//! with wraparound. Rendering and platform input stay in the embedding
//! shell; the crate keeps each item's glyph, active style class, and
//! AccessKit state in lockstep with its open flag and notifies the shell
//! through signals.
//!
//! # Example
//!
//! ```
//! use concertina::{Accordion, Key, KeyPressEvent, TriggerEvent};
//!
//! let mut faq = Accordion::new();
//! faq.add_item("Is it free?", "Yes, dual-licensed MIT/Apache-2.0.");
//! faq.add_item("Does it render?", "No, your shell does.");
//! assert!(faq.initialize());
//!
//! // Keyboard activation of the first trigger
//! faq.set_focus(0);
//! let mut event = TriggerEvent::KeyPress(KeyPressEvent::new(Key::Enter));
//! faq.trigger_event(0, &mut event);
//!
//! assert!(faq.is_open(0));
//! assert_eq!(faq.glyph(0), Some('−'));
//! ```

pub mod accessibility;
pub mod accordion;
pub mod config;
pub mod events;
pub mod item;
pub mod signal;

pub use accessibility::{NodeBuilder, ROOT_NODE};
pub use accordion::{Accordion, FocusDirection};
pub use config::{AccordionConfig, ConfigError, ExpandMode};
pub use events::{
    EventBase, FocusInEvent, FocusOutEvent, Key, KeyPressEvent, KeyboardModifiers, MouseButton,
    MousePressEvent, TriggerEvent,
};
pub use item::AccordionItem;
pub use signal::{ConnectionId, Signal};
