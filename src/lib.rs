pub mod config;
pub mod error;
pub mod materialize;
pub mod name;
pub mod options;
pub mod project;
pub mod schematic;
pub mod template;

use std::path::PathBuf;

use log::debug;

use crate::error::Result;
use crate::materialize::{materialize, GenerationReport};
use crate::name::{parse_name, ParsedName};
use crate::options::GenerationOptions;
use crate::project::{locate_root, MANIFEST_FILE};
use crate::schematic::{
    compute_file_paths, require_schematic_type, FilePathMap, RootPaths, SchematicType,
};
use crate::template::{
    load_templates, render_templates, HelperRegistry, RenderedContentMap, TemplateStore,
};

/// Options for the `generate` operation.
pub struct GenerateRequest {
    /// Schematic type name or alias, matched case-insensitively.
    pub schematic: String,
    /// Name of the unit, optionally prefixed with directories (`foo/bar`).
    pub name: String,
    pub options: GenerationOptions,
    /// Directory the project root search starts from.
    pub start_dir: PathBuf,
    /// File that marks the project root.
    pub manifest: String,
}

impl GenerateRequest {
    pub fn new(
        schematic: impl Into<String>,
        name: impl Into<String>,
        options: GenerationOptions,
        start_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            schematic: schematic.into(),
            name: name.into(),
            options,
            start_dir: start_dir.into(),
            manifest: MANIFEST_FILE.to_string(),
        }
    }
}

/// Everything needed to write a generation that has been planned but not yet written.
#[derive(Debug)]
pub struct GenerationPlan {
    pub schematic: SchematicType,
    pub project_root: PathBuf,
    pub name: ParsedName,
    pub paths: FilePathMap,
    pub contents: RenderedContentMap,
    pub dry_run: bool,
}

/// Plan a generation: resolve the schematic and project root, then render in memory.
///
/// No files are written.
pub fn plan_generation(
    request: &GenerateRequest,
    store: &dyn TemplateStore,
    helpers: &HelperRegistry,
) -> Result<GenerationPlan> {
    let schematic = require_schematic_type(&request.schematic)?;
    let project_root = locate_root(&request.start_dir, &request.manifest)?;

    let name = parse_name(&request.name, request.options.format);
    debug!("name '{}' parsed as {:?}", request.name, name);

    let templates = load_templates(store, schematic.template_refs())?;
    let paths = compute_file_paths(
        schematic,
        &RootPaths::new(project_root.clone()),
        &name,
        &request.options,
    );
    let contents = render_templates(&templates, &name, &request.options, helpers)?;

    Ok(GenerationPlan {
        schematic,
        project_root,
        name,
        paths,
        contents,
        dry_run: request.options.dry_run,
    })
}

/// Write a previously planned generation and report the outcome per file.
pub fn execute_generation(plan: &GenerationPlan) -> Result<GenerationReport> {
    debug!(
        "writing {} '{}' under {}",
        plan.schematic,
        plan.name.basename,
        plan.project_root.display()
    );
    materialize(
        &plan.paths,
        &plan.contents,
        &plan.project_root,
        plan.dry_run,
    )
}

/// Generate the files of one schematic.
pub fn generate(
    request: &GenerateRequest,
    store: &dyn TemplateStore,
    helpers: &HelperRegistry,
) -> Result<GenerationReport> {
    let plan = plan_generation(request, store, helpers)?;
    execute_generation(&plan)
}
