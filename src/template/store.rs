use std::path::PathBuf;

use indexmap::IndexMap;
use log::debug;

use crate::error::{Result, StencilError};
use crate::schematic::TemplateRef;

/// File extension of template sources on disk.
pub const TEMPLATE_SUFFIX: &str = ".tera";

/// Source of template text, keyed by [`TemplateRef`].
pub trait TemplateStore {
    fn read(&self, reference: &TemplateRef) -> Result<String>;
}

/// Templates compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinStore;

macro_rules! builtin {
    ($schematic:literal, $name:literal) => {
        (
            $schematic,
            $name,
            include_str!(concat!("../../templates/", $schematic, "/", $name, ".tera")),
        )
    };
}

const BUILTIN_TEMPLATES: &[(&str, &str, &str)] = &[
    builtin!("component", "index"),
    builtin!("component", "style"),
    builtin!("component", "component"),
    builtin!("component", "test"),
    builtin!("container", "container"),
    builtin!("container", "index"),
    builtin!("container", "test"),
    builtin!("reducer", "actions"),
    builtin!("reducer", "reducer"),
    builtin!("reducer", "reducerIndex"),
    builtin!("reducer", "state"),
    builtin!("reducer", "test"),
];

impl TemplateStore for BuiltinStore {
    fn read(&self, reference: &TemplateRef) -> Result<String> {
        BUILTIN_TEMPLATES
            .iter()
            .find(|(schematic, name, _)| {
                *schematic == reference.schematic && *name == reference.name
            })
            .map(|(_, _, source)| source.to_string())
            .ok_or_else(|| StencilError::TemplateNotFound {
                reference: reference.to_string(),
            })
    }
}

/// Templates read from `<root>/<schematic>/<name>.tera`.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, reference: &TemplateRef) -> PathBuf {
        self.root
            .join(reference.schematic)
            .join(format!("{}{TEMPLATE_SUFFIX}", reference.name))
    }
}

impl TemplateStore for DirectoryStore {
    fn read(&self, reference: &TemplateRef) -> Result<String> {
        let path = self.path_for(reference);
        if !path.is_file() {
            return Err(StencilError::TemplateNotFound {
                reference: path.display().to_string(),
            });
        }
        std::fs::read_to_string(&path).map_err(|e| StencilError::Io {
            context: format!("reading template {}", path.display()),
            source: e,
        })
    }
}

/// Load every referenced template, keyed by the reference's output key.
pub fn load_templates(
    store: &dyn TemplateStore,
    refs: &[TemplateRef],
) -> Result<IndexMap<String, String>> {
    let mut templates = IndexMap::with_capacity(refs.len());
    for reference in refs {
        let source = store.read(reference)?;
        debug!("loaded template {reference} ({} bytes)", source.len());
        templates.insert(reference.key().to_string(), source);
    }
    Ok(templates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schematic::{SchematicType, REGISTRY};
    use std::fs;

    #[test]
    fn builtin_store_covers_the_registry() {
        for entry in REGISTRY {
            for reference in entry.templates {
                assert!(BuiltinStore.read(reference).is_ok(), "{reference}");
            }
        }
    }

    #[test]
    fn builtin_store_rejects_unknown_reference() {
        let reference = TemplateRef {
            schematic: "component",
            name: "missing",
        };
        let err = BuiltinStore.read(&reference).unwrap_err();
        assert!(matches!(err, StencilError::TemplateNotFound { .. }));
    }

    #[test]
    fn load_keys_by_template_name_in_order() {
        let templates =
            load_templates(&BuiltinStore, SchematicType::Reducer.template_refs()).unwrap();
        let keys: Vec<_> = templates.keys().map(String::as_str).collect();
        assert_eq!(keys, ["actions", "reducer", "reducerIndex", "state", "test"]);
    }

    #[test]
    fn directory_store_reads_suffixed_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("container")).unwrap();
        fs::write(dir.path().join("container/index.tera"), "custom {{ name }}").unwrap();

        let store = DirectoryStore::new(dir.path());
        let reference = SchematicType::Container.template_refs()[1];
        assert_eq!(store.read(&reference).unwrap(), "custom {{ name }}");
    }

    #[test]
    fn directory_store_missing_file_is_template_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryStore::new(dir.path());
        let result = load_templates(&store, SchematicType::Component.template_refs());
        assert!(matches!(result, Err(StencilError::TemplateNotFound { .. })));
    }
}
