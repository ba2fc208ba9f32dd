//! Remote path normalization.

/// Normalize a tree-position path into the canonical absolute remote path.
///
/// Tree-position paths are built by joining ancestor display names, and
/// depending on the presentation layer the join separator may be `/` or `\`.
/// Normalization converts every separator to `/`, collapses runs of
/// separators, guarantees a leading `/`, and drops any trailing separator.
///
/// This is total and best-effort: any input produces a canonical form, the
/// empty string and bare separators all normalize to `/`.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 1);
    out.push('/');
    for part in raw.split(['/', '\\']).filter(|part| !part.is_empty()) {
        if !out.ends_with('/') {
            out.push('/');
        }
        out.push_str(part);
    }
    out
}
