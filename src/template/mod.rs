pub mod helpers;
pub mod render;
pub mod store;

pub use helpers::{format_name, function_case, HelperRegistry};
pub use render::{build_context, render_templates, RenderedContentMap};
pub use store::{load_templates, BuiltinStore, DirectoryStore, TemplateStore};
