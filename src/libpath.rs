//! Static-library path construction
//!
//! Builds full file paths for static libraries from a base directory and the
//! platform's library prefix/suffix (e.g. `lib` / `.a` on unix).

/// Build the full path for each library name, in input order.
///
/// Pure string concatenation: `base + "/" + prefix + name + suffix`.
/// No filesystem access and no validation of the resulting paths.
pub fn build_library_paths<S: AsRef<str>>(
    base: &str,
    names: &[S],
    prefix: &str,
    suffix: &str,
) -> Vec<String> {
    names
        .iter()
        .map(|name| format!("{}/{}{}{}", base, prefix, name.as_ref(), suffix))
        .collect()
}

/// Join two path segments with exactly one `/` between them.
///
/// Trailing slashes on `base` and leading slashes on `tail` are collapsed,
/// so `join("out/", "/lib")` and `join("out", "lib")` both give `"out/lib"`.
pub fn join(base: &str, tail: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        tail.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_library_paths_unix_style() {
        let paths = build_library_paths("/build/out", &["core", "net", "utils"], "lib", ".a");
        assert_eq!(
            paths,
            vec![
                "/build/out/libcore.a",
                "/build/out/libnet.a",
                "/build/out/libutils.a",
            ]
        );
    }

    #[test]
    fn test_build_library_paths_preserves_order_and_length() {
        let names = vec!["z".to_string(), "a".to_string(), "m".to_string()];
        let paths = build_library_paths("out", &names, "", ".lib");
        assert_eq!(paths.len(), names.len());
        assert_eq!(paths, vec!["out/z.lib", "out/a.lib", "out/m.lib"]);
    }

    #[test]
    fn test_build_library_paths_empty_names() {
        let paths = build_library_paths::<&str>("/build/out", &[], "lib", ".a");
        assert!(paths.is_empty());
    }

    #[test]
    fn test_build_library_paths_empty_prefix_suffix() {
        let paths = build_library_paths("dir", &["name"], "", "");
        assert_eq!(paths, vec!["dir/name"]);
    }

    #[test]
    fn test_join_plain_segments() {
        assert_eq!(join("out", "lib"), "out/lib");
    }

    #[test]
    fn test_join_collapses_extra_slashes() {
        assert_eq!(join("out/", "lib"), "out/lib");
        assert_eq!(join("out", "/lib"), "out/lib");
        assert_eq!(join("out//", "//lib"), "out/lib");
    }
}
