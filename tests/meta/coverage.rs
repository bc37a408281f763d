#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    fn relative_entries(dir: &Path, base: &Path) -> Result<HashSet<String>, io::Error> {
        let mut entries = HashSet::new();

        if dir.is_dir() {
            for entry_result in fs::read_dir(dir)? {
                let path = entry_result?.path();

                let relative = path
                    .strip_prefix(base)
                    .map_err(io::Error::other)?
                    .to_string_lossy()
                    .to_string();

                if path.is_dir() {
                    entries.insert(relative);
                    entries.extend(relative_entries(&path, base)?);
                } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                    entries.insert(relative);
                }
            }
        }

        Ok(entries)
    }

    fn tree(dir: &Path) -> HashSet<String> {
        relative_entries(dir, dir).unwrap_or_else(|error| {
            assert!(dir.exists(), "Failed to read {}: {error}", dir.display());
            HashSet::new()
        })
    }

    #[test]
    fn test_every_src_file_has_a_unit_test_file() {
        let src_paths = tree(Path::new("src"));
        let test_paths = tree(Path::new("tests/unit"));

        let mut missing: Vec<&String> = src_paths
            .iter()
            .filter(|path| *path != "main.rs" && *path != "lib.rs" && !path.ends_with("mod.rs"))
            .filter(|path| !test_paths.contains(*path))
            .collect();
        missing.sort();

        assert!(
            missing.is_empty(),
            "src entries without a unit test counterpart:\n{}",
            missing
                .iter()
                .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_file_has_a_src_counterpart() {
        let src_paths = tree(Path::new("src"));
        let test_paths = tree(Path::new("tests/unit"));

        let mut orphaned: Vec<&String> = test_paths
            .iter()
            .filter(|path| !path.ends_with("mod.rs"))
            .filter(|path| !src_paths.contains(*path))
            .collect();
        orphaned.sort();

        assert!(
            orphaned.is_empty(),
            "unit test entries without a src counterpart:\n{}",
            orphaned
                .iter()
                .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn test_every_test_file_contains_tests() {
        let tests_dir = Path::new("tests");
        let mut empty_files = Vec::new();

        let scan = scan_for_test_markers(tests_dir, tests_dir, &mut empty_files);
        if let Err(error) = scan {
            assert!(tests_dir.exists(), "Failed to scan tests: {error}");
        }

        assert!(
            empty_files.is_empty(),
            "test files without any #[test] function:\n{}",
            empty_files.join("\n")
        );
    }

    fn scan_for_test_markers(
        dir: &Path,
        base_dir: &Path,
        empty_files: &mut Vec<String>,
    ) -> Result<(), io::Error> {
        for entry_result in fs::read_dir(dir)? {
            let path = entry_result?.path();

            if path.is_dir() {
                scan_for_test_markers(&path, base_dir, empty_files)?;
                continue;
            }

            if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
                continue;
            }

            if is_module_shell(&path, base_dir) {
                continue;
            }

            if !fs::read_to_string(&path)?.contains("#[test]") {
                empty_files.push(format!("  - {}", path.display()));
            }
        }

        Ok(())
    }

    // A mod.rs, or a top-level harness root whose body only declares
    // the modules of its sibling directory
    fn is_module_shell(path: &Path, base_dir: &Path) -> bool {
        let file_name = match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => name,
            None => return false,
        };

        if file_name == "mod.rs" {
            return true;
        }

        if path.parent() != Some(base_dir) {
            return false;
        }

        match path.file_stem().and_then(|stem| stem.to_str()) {
            Some(stem) => base_dir.join(stem).is_dir(),
            None => false,
        }
    }
}
