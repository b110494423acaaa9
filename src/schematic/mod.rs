pub mod paths;

use std::fmt;

use log::debug;

use crate::error::{Result, StencilError};

pub use paths::{compute_file_paths, FilePathMap, RootPaths};

/// The kinds of unit `stencil generate` knows how to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchematicType {
    Component,
    Container,
    Reducer,
}

/// Identifies one template in the store, e.g. `component/index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateRef {
    pub schematic: &'static str,
    pub name: &'static str,
}

impl TemplateRef {
    const fn new(schematic: &'static str, name: &'static str) -> Self {
        Self { schematic, name }
    }

    /// Key under which the rendered content and the output path are stored.
    pub fn key(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.schematic, self.name)
    }
}

/// Registry row: everything the engine needs to know about one schematic.
pub struct SchematicEntry {
    pub schematic: SchematicType,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub templates: &'static [TemplateRef],
}

const COMPONENT_TEMPLATES: &[TemplateRef] = &[
    TemplateRef::new("component", "index"),
    TemplateRef::new("component", "style"),
    TemplateRef::new("component", "component"),
    TemplateRef::new("component", "test"),
];

const CONTAINER_TEMPLATES: &[TemplateRef] = &[
    TemplateRef::new("container", "container"),
    TemplateRef::new("container", "index"),
    TemplateRef::new("container", "test"),
];

const REDUCER_TEMPLATES: &[TemplateRef] = &[
    TemplateRef::new("reducer", "actions"),
    TemplateRef::new("reducer", "reducer"),
    TemplateRef::new("reducer", "reducerIndex"),
    TemplateRef::new("reducer", "state"),
    TemplateRef::new("reducer", "test"),
];

/// Dispatch table, in lookup order.
pub const REGISTRY: &[SchematicEntry] = &[
    SchematicEntry {
        schematic: SchematicType::Component,
        name: "component",
        aliases: &["c", "pc"],
        templates: COMPONENT_TEMPLATES,
    },
    SchematicEntry {
        schematic: SchematicType::Container,
        name: "container",
        aliases: &["cr", "cc"],
        templates: CONTAINER_TEMPLATES,
    },
    SchematicEntry {
        schematic: SchematicType::Reducer,
        name: "reducer",
        aliases: &["r"],
        templates: REDUCER_TEMPLATES,
    },
];

impl SchematicType {
    pub fn entry(self) -> &'static SchematicEntry {
        match self {
            SchematicType::Component => &REGISTRY[0],
            SchematicType::Container => &REGISTRY[1],
            SchematicType::Reducer => &REGISTRY[2],
        }
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Templates to load for this schematic, in load order.
    pub fn template_refs(self) -> &'static [TemplateRef] {
        self.entry().templates
    }
}

impl fmt::Display for SchematicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Match `token` against canonical names first, then aliases, ignoring case.
pub fn resolve_schematic_type(token: &str) -> Option<SchematicType> {
    REGISTRY
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(token))
        .or_else(|| {
            REGISTRY.iter().find(|entry| {
                entry
                    .aliases
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(token))
            })
        })
        .map(|entry| entry.schematic)
}

/// Like [`resolve_schematic_type`], but unknown tokens are an error.
pub fn require_schematic_type(token: &str) -> Result<SchematicType> {
    let schematic =
        resolve_schematic_type(token).ok_or_else(|| StencilError::UnsupportedSchematic {
            token: token.to_string(),
        })?;
    debug!("schematic '{token}' resolved to {schematic}");
    Ok(schematic)
}
