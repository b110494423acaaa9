use std::collections::HashMap;

use tera::{Tera, Value};

type FilterFn = fn(&Value, &HashMap<String, Value>) -> tera::Result<Value>;
type FunctionFn = fn(&HashMap<String, Value>) -> tera::Result<Value>;

/// Filters and functions made available to every template.
///
/// Built once per invocation and installed into the renderer's [`Tera`]
/// instance, so nothing is registered process-wide.
pub struct HelperRegistry {
    filters: Vec<(&'static str, FilterFn)>,
    functions: Vec<(&'static str, FunctionFn)>,
}

impl HelperRegistry {
    pub fn empty() -> Self {
        Self {
            filters: Vec::new(),
            functions: Vec::new(),
        }
    }

    pub fn with_filter(mut self, name: &'static str, filter: FilterFn) -> Self {
        self.filters.push((name, filter));
        self
    }

    pub fn with_function(mut self, name: &'static str, function: FunctionFn) -> Self {
        self.functions.push((name, function));
        self
    }

    pub fn install(&self, tera: &mut Tera) {
        for (name, filter) in &self.filters {
            tera.register_filter(name, *filter);
        }
        for (name, function) in &self.functions {
            tera.register_function(name, *function);
        }
    }
}

impl Default for HelperRegistry {
    /// `functionCase` as a filter and `formatName` as a function.
    fn default() -> Self {
        Self::empty()
            .with_filter("functionCase", function_case_filter)
            .with_function("formatName", format_name_function)
    }
}

/// Lowercase the first character, leaving the rest untouched.
pub fn function_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `basename` alone when `dirname` is `.`, otherwise `dirname/basename`.
pub fn format_name(dirname: &str, basename: &str) -> String {
    if dirname == "." {
        basename.to_string()
    } else {
        format!("{dirname}/{basename}")
    }
}

fn function_case_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("functionCase expects a string"))?;
    Ok(Value::String(function_case(text)))
}

fn format_name_function(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let arg = |key: &str| {
        args.get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| tera::Error::msg(format!("formatName requires a string `{key}`")))
    };
    Ok(Value::String(format_name(arg("dirname")?, arg("basename")?)))
}
