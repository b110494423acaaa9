use std::path::{Component, Path, PathBuf};

use indexmap::IndexMap;

use super::SchematicType;
use crate::name::ParsedName;
use crate::options::GenerationOptions;
use crate::project::SRC_FOLDER;

const COMPONENTS_FOLDER: &str = "components";
const STORE_FOLDER: &str = "store";
const ACTIONS_FOLDER: &str = "actions";
const REDUCERS_FOLDER: &str = "reducers";
const STATE_FOLDER: &str = "state";

/// Output key to absolute path. `None` means the file is not generated for
/// this configuration.
pub type FilePathMap = IndexMap<String, Option<PathBuf>>;

/// Anchor directories for path composition.
#[derive(Debug, Clone)]
pub struct RootPaths {
    pub project_root: PathBuf,
    pub src: PathBuf,
}

impl RootPaths {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let src = project_root.join(SRC_FOLDER);
        Self { project_root, src }
    }
}

/// Compose the output paths for `schematic`. Pure; touches no files.
pub fn compute_file_paths(
    schematic: SchematicType,
    roots: &RootPaths,
    name: &ParsedName,
    options: &GenerationOptions,
) -> FilePathMap {
    let base = name.basename.as_str();
    let mut paths = FilePathMap::new();
    let mut put = |key: &str, path: Option<PathBuf>| {
        paths.insert(key.to_string(), path);
    };

    match schematic {
        SchematicType::Component => {
            let folder = under(&roots.src.join(COMPONENTS_FOLDER), name).join(base);
            put("index", Some(folder.join("index.ts")));
            put(
                "style",
                options
                    .style
                    .then(|| folder.join(format!("{base}.style.scss"))),
            );
            put("component", Some(folder.join(format!("{base}.component.tsx"))));
            put("test", options.test.then(|| folder.join(format!("{base}.test.tsx"))));
        }
        SchematicType::Container => {
            let folder = under(&roots.src.join(COMPONENTS_FOLDER), name).join(base);
            put("container", Some(folder.join(format!("{base}.component.ts"))));
            put("index", Some(folder.join("index.ts")));
            put("test", options.test.then(|| folder.join(format!("{base}.test.ts"))));
        }
        SchematicType::Reducer => {
            let store = roots.src.join(STORE_FOLDER);
            let reducer_folder = under(&store.join(REDUCERS_FOLDER), name).join(base);
            put(
                "actions",
                Some(under(&store.join(ACTIONS_FOLDER), name).join(format!("{base}.actions.ts"))),
            );
            put("reducer", Some(reducer_folder.join(format!("{base}.reducer.ts"))));
            put("reducerIndex", Some(reducer_folder.join("index.ts")));
            put(
                "state",
                Some(under(&store.join(STATE_FOLDER), name).join(format!("{base}.state.ts"))),
            );
            put(
                "test",
                options
                    .test
                    .then(|| reducer_folder.join(format!("{base}.test.ts"))),
            );
        }
    }

    paths
}

/// Append the name's directory part to `base`. `.` segments and root
/// prefixes are dropped so the result always stays under `base`.
fn under(base: &Path, name: &ParsedName) -> PathBuf {
    let mut path = base.to_path_buf();
    for component in Path::new(&name.dirname).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::ParentDir => path.push(".."),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::parse_name;

    fn roots() -> RootPaths {
        RootPaths::new("/proj")
    }

    fn relative(paths: &FilePathMap) -> Vec<(String, Option<String>)> {
        paths
            .iter()
            .map(|(key, path)| {
                let rel = path.as_ref().map(|p| {
                    p.strip_prefix("/proj")
                        .unwrap()
                        .to_string_lossy()
                        .replace('\\', "/")
                });
                (key.clone(), rel)
            })
            .collect()
    }

    fn some(path: &str) -> Option<String> {
        Some(path.to_string())
    }

    #[test]
    fn component_with_defaults() {
        let name = parse_name("foo/bar", true);
        let paths = compute_file_paths(
            SchematicType::Component,
            &roots(),
            &name,
            &GenerationOptions::default(),
        );
        assert_eq!(
            relative(&paths),
            vec![
                ("index".into(), some("src/components/foo/Bar/index.ts")),
                ("style".into(), some("src/components/foo/Bar/Bar.style.scss")),
                ("component".into(), some("src/components/foo/Bar/Bar.component.tsx")),
                ("test".into(), None),
            ]
        );
    }

    #[test]
    fn component_without_style_with_test() {
        let name = parse_name("bar", false);
        let options = GenerationOptions {
            style: false,
            test: true,
            ..Default::default()
        };
        let paths = compute_file_paths(SchematicType::Component, &roots(), &name, &options);
        assert_eq!(paths["style"], None);
        assert_eq!(
            paths["test"].as_deref(),
            Some(Path::new("/proj/src/components/bar/bar.test.tsx"))
        );
        assert_eq!(
            paths["index"].as_deref(),
            Some(Path::new("/proj/src/components/bar/index.ts"))
        );
    }

    #[test]
    fn container_layout() {
        let name = parse_name("pages/home", false);
        let options = GenerationOptions {
            test: true,
            ..Default::default()
        };
        let paths = compute_file_paths(SchematicType::Container, &roots(), &name, &options);
        assert_eq!(
            relative(&paths),
            vec![
                ("container".into(), some("src/components/pages/home/home.component.ts")),
                ("index".into(), some("src/components/pages/home/index.ts")),
                ("test".into(), some("src/components/pages/home/home.test.ts")),
            ]
        );
    }

    #[test]
    fn container_ignores_style_option() {
        let name = parse_name("home", false);
        let options = GenerationOptions {
            style: false,
            ..Default::default()
        };
        let paths = compute_file_paths(SchematicType::Container, &roots(), &name, &options);
        assert!(!paths.contains_key("style"));
        assert_eq!(paths.len(), 3);
    }

    #[test]
    fn reducer_layout() {
        let name = parse_name("auth/session", false);
        let options = GenerationOptions {
            test: true,
            ..Default::default()
        };
        let paths = compute_file_paths(SchematicType::Reducer, &roots(), &name, &options);
        assert_eq!(
            relative(&paths),
            vec![
                ("actions".into(), some("src/store/actions/auth/session.actions.ts")),
                ("reducer".into(), some("src/store/reducers/auth/session/session.reducer.ts")),
                ("reducerIndex".into(), some("src/store/reducers/auth/session/index.ts")),
                ("state".into(), some("src/store/state/auth/session.state.ts")),
                ("test".into(), some("src/store/reducers/auth/session/session.test.ts")),
            ]
        );
    }

    #[test]
    fn reducer_without_directory() {
        let name = parse_name("todos", false);
        let paths = compute_file_paths(
            SchematicType::Reducer,
            &roots(),
            &name,
            &GenerationOptions::default(),
        );
        assert_eq!(
            paths["actions"].as_deref(),
            Some(Path::new("/proj/src/store/actions/todos.actions.ts"))
        );
        assert_eq!(paths["test"], None);
    }

    #[test]
    fn absolute_dirname_stays_under_src() {
        let name = parse_name("/shared/button", false);
        let paths = compute_file_paths(
            SchematicType::Component,
            &roots(),
            &name,
            &GenerationOptions::default(),
        );
        assert_eq!(
            paths["index"].as_deref(),
            Some(Path::new("/proj/src/components/shared/button/index.ts"))
        );
    }

    #[test]
    fn every_path_key_has_a_template() {
        let name = parse_name("x", false);
        let options = GenerationOptions {
            test: true,
            ..Default::default()
        };
        for schematic in [
            SchematicType::Component,
            SchematicType::Container,
            SchematicType::Reducer,
        ] {
            let keys: Vec<_> = schematic.template_refs().iter().map(|t| t.key()).collect();
            for key in compute_file_paths(schematic, &roots(), &name, &options).keys() {
                assert!(keys.contains(&key.as_str()), "{schematic}: {key}");
            }
        }
    }
}
