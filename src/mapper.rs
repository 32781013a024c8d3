//! Output path derivation and override resolution.
//! Pure path arithmetic: given a base-folder file and a target's settings,
//! compute where the file lands in the output tree and whether a
//! target-specific file shadows it.

use crate::config::TargetConfig;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// The canonical extension that suffix rules rewrite
const CANONICAL_EXTENSION: &str = "md";

/// Applies a target's suffix rule to a relative file path.
///
/// Only files carrying the canonical `.md` extension in a folder that has a
/// rule are renamed; everything else passes through unchanged. The
/// replacement suffix may itself contain dots, so `foo.md` with rule
/// ".agent.md" becomes `foo.agent.md`.
pub fn apply_suffix_rule(
    rel_path: &Path,
    folder_name: &str,
    suffix_rules: &IndexMap<String, String>,
) -> PathBuf {
    let Some(new_suffix) = suffix_rules.get(folder_name) else {
        return rel_path.to_path_buf();
    };

    if rel_path.extension().and_then(|ext| ext.to_str()) != Some(CANONICAL_EXTENSION) {
        return rel_path.to_path_buf();
    }

    let stem = rel_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    rel_path.with_file_name(format!("{}{}", stem, new_suffix))
}

/// Computes the output path for a base-folder file under a target.
///
/// # Arguments
/// * `rel_path` - File path relative to its base folder root
/// * `target_name` - Name of the target being built
/// * `base_folder` - Name of the base folder the file belongs to
/// * `target` - The target's settings
/// * `dist_dir` - Output root directory
///
/// # Returns
/// `dist_dir / target_name / mapped folder / suffix-transformed rel_path`,
/// where the mapped folder defaults to the base folder name when the
/// target declares no mapping for it.
pub fn target_output_path(
    rel_path: &Path,
    target_name: &str,
    base_folder: &str,
    target: &TargetConfig,
    dist_dir: &Path,
) -> PathBuf {
    let target_folder = target
        .folder_mappings
        .get(base_folder)
        .map(String::as_str)
        .unwrap_or(base_folder);

    let transformed = apply_suffix_rule(rel_path, base_folder, &target.file_suffix_rules);

    dist_dir.join(target_name).join(target_folder).join(transformed)
}

/// Reinterprets an output path as the equivalent path under the
/// target-specific source tree.
///
/// The comparison is post-mapping: the output path's remainder after
/// `dist_dir/target_name` is re-rooted under `targets_dir/target_name`.
pub fn override_path(
    output_path: &Path,
    target_name: &str,
    dist_dir: &Path,
    targets_dir: &Path,
) -> Option<PathBuf> {
    let rel_path = output_path.strip_prefix(dist_dir.join(target_name)).ok()?;
    Some(targets_dir.join(target_name).join(rel_path))
}

/// Returns true if a target-specific file exists that supersedes the base
/// file destined for `output_path`.
pub fn has_override(
    output_path: &Path,
    target_name: &str,
    dist_dir: &Path,
    targets_dir: &Path,
) -> bool {
    override_path(output_path, target_name, dist_dir, targets_dir)
        .map(|path| path.is_file())
        .unwrap_or(false)
}
