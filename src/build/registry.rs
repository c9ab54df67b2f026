use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::assets::resolver::Resolver;
use crate::build::builders;
use crate::scene::graph::Widget;
use crate::scene::model::OptionDef;

/// Builds one concrete widget kind from an option bag.
///
/// The returned widget is bare: position, rotation, color, visibility and size are applied
/// afterwards by [`crate::build::finish::finish_widget`].
pub trait WidgetParser: Send + Sync {
    /// Class name this parser handles, e.g. `"Button"`.
    fn class_name(&self) -> &str;

    /// Build the bare widget. Missing resources must degrade to a widget without that visual.
    fn parse(&self, res: &mut Resolver<'_>, option: &OptionDef) -> Widget;
}

/// Class name to parser map.
#[derive(Clone, Default)]
pub struct ParserRegistry {
    parsers: HashMap<String, Arc<dyn WidgetParser>>,
}

impl ParserRegistry {
    /// Registry with no parsers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the built-in widget vocabulary.
    pub fn with_defaults() -> Self {
        let mut reg = Self::new();
        for parser in builders::default_parsers() {
            reg.register_arc(parser);
        }
        reg
    }

    /// Register a parser under its class name, replacing any previous one.
    pub fn register(&mut self, parser: impl WidgetParser + 'static) {
        self.register_arc(Arc::new(parser));
    }

    /// Register a shared parser, replacing any previous one for the same class name.
    pub fn register_arc(&mut self, parser: Arc<dyn WidgetParser>) {
        self.parsers.insert(parser.class_name().to_owned(), parser);
    }

    /// Parser for `class_name`, if registered.
    pub fn lookup(&self, class_name: &str) -> Option<&dyn WidgetParser> {
        self.parsers.get(class_name).map(|p| p.as_ref())
    }

    /// Number of registered class names.
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Registered class names, sorted.
    pub fn class_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.parsers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("class_names", &self.class_names())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/build/registry.rs"]
mod tests;
