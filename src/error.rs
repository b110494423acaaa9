#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum StencilError {
    #[error("Could not find project root from {start}")]
    #[diagnostic(help("Run stencil inside a project that has a {manifest} file"))]
    NoProjectRoot { start: PathBuf, manifest: String },

    #[error("{token} is not a supported schematic type")]
    #[diagnostic(help("Run `stencil schematics` to list the supported types and their aliases"))]
    UnsupportedSchematic { token: String },

    #[error("Template not found: {reference}")]
    #[diagnostic(help("The template store does not match the schematic registry"))]
    TemplateNotFound { reference: String },

    #[error("Template rendering failed: {template}")]
    #[diagnostic(help("Check the Tera syntax of the template"))]
    RenderError {
        template: String,
        #[source]
        source: tera::Error,
    },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}")]
    #[diagnostic(help("Check the TOML syntax in your stencil config file"))]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid option: {input}")]
    #[diagnostic(help("Extra options are passed as --set key=value"))]
    InvalidOption { input: String },
}

pub type Result<T> = std::result::Result<T, StencilError>;
