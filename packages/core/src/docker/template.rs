//! Literal placeholder substitution for the embedded templates

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Replace every literal occurrence of each placeholder, in the order given
///
/// No pattern syntax is interpreted; a placeholder absent from the template
/// is simply skipped.
pub fn render(template: &str, replacements: &[(&str, &str)]) -> String {
    replacements
        .iter()
        .fold(template.to_string(), |text, (placeholder, value)| {
            text.replace(placeholder, value)
        })
}

/// Write `contents` to `path`, truncating anything already there
pub fn write_file(path: &Path, contents: &str) -> io::Result<()> {
    debug!("Writing {}", path.display());
    fs::write(path, contents)
}

/// Render `template` and write the result to `path`
pub fn write_patched(
    path: &Path,
    template: &str,
    replacements: &[(&str, &str)],
) -> io::Result<()> {
    write_file(path, &render(template, replacements))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docker::dockerfile::{
        DOCKERFILE_TEMPLATE, LAUNCH_SCRIPT_TEMPLATE, LOCAL_IMAGE_PLACEHOLDER,
        UPSTREAM_IMAGE_PLACEHOLDER,
    };
    use tempfile::TempDir;

    #[test]
    fn render_replaces_every_occurrence() {
        let out = render("a __X__ b __X__", &[("__X__", "y")]);
        assert_eq!(out, "a y b y");
    }

    #[test]
    fn render_is_literal_not_regex() {
        let out = render("cost: $1.00 (x+)", &[("(x+)", "[ok]"), ("$1", "$2")]);
        assert_eq!(out, "cost: $2.00 [ok]");
    }

    #[test]
    fn render_applies_replacements_in_order() {
        let out = render("A", &[("A", "B"), ("B", "C")]);
        assert_eq!(out, "C");
    }

    #[test]
    fn render_dockerfile_only_touches_placeholder() {
        let out = render(DOCKERFILE_TEMPLATE, &[(UPSTREAM_IMAGE_PLACEHOLDER, "X")]);
        assert!(!out.contains(UPSTREAM_IMAGE_PLACEHOLDER));
        assert_eq!(out, DOCKERFILE_TEMPLATE.replacen("FROM __UPSTREAM_IMAGE__", "FROM X", 1));
        assert_eq!(render(&out, &[(UPSTREAM_IMAGE_PLACEHOLDER, "X")]), out);
    }

    #[test]
    fn launch_script_headers_survive_any_image_name() {
        for image in ["jupyter-tensorflow", "jupyter-tensorflow-gpu", "", "odd name:tag"] {
            let out = render(LAUNCH_SCRIPT_TEMPLATE, &[(LOCAL_IMAGE_PLACEHOLDER, image)]);
            let mut lines = out.lines();
            assert_eq!(lines.next(), Some("#!/usr/bin/env docker-script"));
            assert_eq!(lines.next(), Some(format!("#!{image} bash").as_str()));
        }
    }

    #[test]
    fn write_patched_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("script.sh");
        std::fs::write(&path, "stale contents that are longer than the new ones").unwrap();

        write_patched(&path, "image=__IMG__", &[("__IMG__", "x")]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "image=x");
    }

    #[test]
    fn write_file_fails_without_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("file.txt");
        let err = write_file(&path, "x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
