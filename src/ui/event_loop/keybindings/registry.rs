//! Focus-aware keybinding registry
//!
//! This module provides the core registry system for dispatching key events
//! according to which part of the workbench has focus, including types,
//! registry, and builder.

use crate::core::app::{App, AppActionDispatcher, UiFocus};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

// ============================================================================
// Types and Traits
// ============================================================================

/// Result of handling a key event
#[derive(Debug, Clone, PartialEq)]
pub enum KeyResult {
    /// Key was handled and should continue the loop
    Continue,
    /// Key was handled and should exit the loop
    Exit,
    /// Key was handled (generic)
    Handled,
    /// Key was not handled by this handler
    NotHandled,
}

impl From<bool> for KeyResult {
    fn from(handled: bool) -> Self {
        if handled {
            KeyResult::Handled
        } else {
            KeyResult::NotHandled
        }
    }
}

/// Trait for keybinding handlers
pub trait KeyHandler: Send + Sync {
    /// Handle a key event
    fn handle(&self, app: &mut App, dispatcher: &AppActionDispatcher, key: &KeyEvent)
        -> KeyResult;
}

/// Pattern for matching key events
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPattern {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyPattern {
    pub fn simple(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub fn alt(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::ALT,
        }
    }

    pub fn with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Match any key (catch-all for context-specific handlers)
    pub fn any() -> Self {
        Self {
            code: KeyCode::Null,          // Special marker for any key
            modifiers: KeyModifiers::ALT, // Use ALT as a marker for "any"
        }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        if is_wildcard_pattern(self) {
            return true;
        }
        self.code == key.code && self.modifiers == key.modifiers
    }
}

impl From<&KeyEvent> for KeyPattern {
    fn from(key: &KeyEvent) -> Self {
        Self {
            code: key.code,
            modifiers: key.modifiers,
        }
    }
}

// ============================================================================
// Context and Registry
// ============================================================================

/// Context for focus-aware key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyContext {
    /// File tree has focus
    Explorer,
    /// Content pane has focus
    Editor,
    /// A contact form field has focus
    Form,
}

impl KeyContext {
    pub const ALL: [KeyContext; 3] = [KeyContext::Explorer, KeyContext::Editor, KeyContext::Form];

    pub fn from_focus(focus: UiFocus) -> Self {
        match focus {
            UiFocus::Explorer => KeyContext::Explorer,
            UiFocus::Editor => KeyContext::Editor,
            UiFocus::Form(_) => KeyContext::Form,
        }
    }
}

/// Focus-aware keybinding registry
pub struct ModeAwareRegistry {
    /// Handlers organized by context and key pattern
    handlers: HashMap<KeyContext, HashMap<KeyPattern, Box<dyn KeyHandler>>>,
}

impl ModeAwareRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler for a specific context
    pub fn register_for_context(
        &mut self,
        context: KeyContext,
        pattern: KeyPattern,
        handler: Box<dyn KeyHandler>,
    ) {
        self.handlers
            .entry(context)
            .or_default()
            .insert(pattern, handler);
    }

    pub fn handler_count(&self, context: KeyContext) -> usize {
        self.handlers.get(&context).map_or(0, HashMap::len)
    }

    /// Check if a key should go straight to the focused text field (bypass registry)
    pub fn should_handle_as_text_input(&self, key: &KeyEvent, context: &KeyContext) -> bool {
        if *context != KeyContext::Form {
            return false;
        }
        // Blacklist approach: tui-textarea handles everything except the keys
        // that drive the form or the workbench.
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab => false,
            KeyCode::PageUp | KeyCode::PageDown
                if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::SHIFT) =>
            {
                false
            }
            KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                !matches!(c.to_ascii_lowercase(), 'c' | 'q' | 'w' | 't' | 'p' | ' ' | '`')
            }
            KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::ALT) => {
                !matches!(c, '1'..='4' | 't' | 'T')
            }
            _ => true,
        }
    }

    /// Handle a key event in the given context
    pub fn handle_key_event(
        &self,
        app: &mut App,
        dispatcher: &AppActionDispatcher,
        key: &KeyEvent,
        context: KeyContext,
    ) -> KeyResult {
        let Some(context_handlers) = self.handlers.get(&context) else {
            return KeyResult::NotHandled;
        };

        // First pass: exact matches
        for (pattern, handler) in context_handlers {
            if pattern.matches(key) && !is_wildcard_pattern(pattern) {
                let result = handler.handle(app, dispatcher, key);
                if result != KeyResult::NotHandled {
                    return result;
                }
            }
        }

        // Second pass: wildcard patterns
        for (pattern, handler) in context_handlers {
            if is_wildcard_pattern(pattern) {
                let result = handler.handle(app, dispatcher, key);
                if result != KeyResult::NotHandled {
                    return result;
                }
            }
        }

        KeyResult::NotHandled
    }
}

/// Wildcard patterns use KeyCode::Null as a marker and have lower priority
fn is_wildcard_pattern(pattern: &KeyPattern) -> bool {
    pattern.code == KeyCode::Null
}

impl Default for ModeAwareRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for creating a fully configured registry
pub struct ModeAwareBuilder {
    registry: ModeAwareRegistry,
}

impl ModeAwareBuilder {
    pub fn new() -> Self {
        Self {
            registry: ModeAwareRegistry::new(),
        }
    }

    /// Build the final registry
    pub fn build(self) -> ModeAwareRegistry {
        self.registry
    }

    /// Register a handler for a specific context
    pub fn register_for_context(
        mut self,
        context: KeyContext,
        pattern: KeyPattern,
        handler: Box<dyn KeyHandler>,
    ) -> Self {
        self.registry
            .register_for_context(context, pattern, handler);
        self
    }

    /// Register the same binding in every context
    pub fn register_global<F>(mut self, pattern: KeyPattern, make_handler: F) -> Self
    where
        F: Fn() -> Box<dyn KeyHandler>,
    {
        for context in KeyContext::ALL {
            self.registry
                .register_for_context(context, pattern.clone(), make_handler());
        }
        self
    }
}

impl Default for ModeAwareBuilder {
    fn default() -> Self {
        Self::new()
    }
}
