//! Module name resolution.
//!
//! Maps a symbolic module name like `Foo::Bar` to a file path. Resolution
//! failure is not an error: the engine simply does not recurse into that
//! target.

use std::path::{Path, PathBuf};

/// Resolves a module/package name to a filesystem path.
///
/// Implementations must never fail loudly; an unresolvable name is `None`.
pub trait ModuleLocator {
    fn resolve(&self, module: &str) -> Option<PathBuf>;
}

/// Adapter wrapping a plain function or closure as a locator, for tests
/// and embedders that already have their own resolution logic.
pub struct FnLocator<F>(pub F);

impl<F> ModuleLocator for FnLocator<F>
where
    F: Fn(&str) -> Option<PathBuf>,
{
    fn resolve(&self, module: &str) -> Option<PathBuf> {
        (self.0)(module)
    }
}

/// Locator that searches a list of library directories, `@INC` style:
/// `Foo::Bar` is looked up as `<dir>/Foo/Bar.pm` (then `.pl`) in each
/// directory in turn.
#[derive(Debug, Clone, Default)]
pub struct PathLocator {
    lib_dirs: Vec<PathBuf>,
}

impl PathLocator {
    pub fn new(lib_dirs: Vec<PathBuf>) -> Self {
        Self { lib_dirs }
    }

    fn relative_candidates(module: &str) -> Vec<PathBuf> {
        let relative: PathBuf = module.split("::").collect();
        ["pm", "pl"]
            .iter()
            .map(|ext| relative.with_extension(ext))
            .collect()
    }
}

impl ModuleLocator for PathLocator {
    fn resolve(&self, module: &str) -> Option<PathBuf> {
        for dir in &self.lib_dirs {
            for candidate in Self::relative_candidates(module) {
                let path = dir.join(candidate);
                if path.is_file() {
                    return Some(path);
                }
            }
        }
        None
    }
}

/// Parse a `PERL5LIB`-style search path into directories.
pub fn split_search_path(value: &str) -> Vec<PathBuf> {
    std::env::split_paths(value).filter(|p| !p.as_os_str().is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_nested_module() {
        let dir = tempfile::tempdir().unwrap();
        let module_path = dir.path().join("Foo").join("Bar.pm");
        std::fs::create_dir_all(module_path.parent().unwrap()).unwrap();
        std::fs::write(&module_path, "package Foo::Bar;\n1;\n").unwrap();

        let locator = PathLocator::new(vec![dir.path().to_path_buf()]);
        assert_eq!(locator.resolve("Foo::Bar"), Some(module_path));
        assert_eq!(locator.resolve("Foo::Missing"), None);
    }

    #[test]
    fn test_first_directory_wins() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        for dir in [&first, &second] {
            std::fs::write(dir.path().join("Dup.pm"), "package Dup;\n").unwrap();
        }

        let locator = PathLocator::new(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);
        assert_eq!(locator.resolve("Dup"), Some(first.path().join("Dup.pm")));
    }

    #[test]
    fn test_closure_locator() {
        let locator = FnLocator(|module: &str| {
            (module == "Known").then(|| PathBuf::from("/lib/Known.pm"))
        });
        assert_eq!(locator.resolve("Known"), Some(PathBuf::from("/lib/Known.pm")));
        assert_eq!(locator.resolve("Other"), None);
    }

    #[test]
    fn test_split_search_path() {
        let dirs = split_search_path("/a/lib:/b/lib");
        assert_eq!(dirs, vec![PathBuf::from("/a/lib"), PathBuf::from("/b/lib")]);
    }
}
