use std::collections::BTreeMap;

use indexmap::IndexMap;
use tera::{Context, Tera, Value};

use super::HelperRegistry;
use crate::error::{Result, StencilError};
use crate::name::ParsedName;
use crate::options::GenerationOptions;

/// Output key to rendered file content.
pub type RenderedContentMap = IndexMap<String, String>;

/// Merge options with the derived name fields. `dirname` and `name` win.
pub fn build_context(name: &ParsedName, options: &GenerationOptions) -> Context {
    let mut variables: BTreeMap<String, Value> = options.context_values();
    variables.insert("dirname".into(), Value::String(name.dirname.clone()));
    variables.insert("name".into(), Value::String(name.basename.clone()));

    let mut context = Context::new();
    for (key, value) in &variables {
        context.insert(key, value);
    }
    context
}

/// Render every loaded template against one shared context.
pub fn render_templates(
    templates: &IndexMap<String, String>,
    name: &ParsedName,
    options: &GenerationOptions,
    helpers: &HelperRegistry,
) -> Result<RenderedContentMap> {
    let mut tera = Tera::default();
    helpers.install(&mut tera);
    let context = build_context(name, options);

    let mut rendered = RenderedContentMap::with_capacity(templates.len());
    for (key, source) in templates {
        tera.add_raw_template(key, source)
            .map_err(|e| StencilError::RenderError {
                template: key.clone(),
                source: e,
            })?;
        let content = tera
            .render(key, &context)
            .map_err(|e| StencilError::RenderError {
                template: key.clone(),
                source: e,
            })?;
        rendered.insert(key.clone(), content);
    }
    Ok(rendered)
}
