use std::path::{Path, PathBuf};

const MARKER_FILE: &str = "assets/Daydream.ttf";

pub fn resolve_assets_root(cli: Option<String>) -> PathBuf {
    // Precedence: CLI flag -> TREASURE_MAP_ASSETS env -> search nearby dirs -> CWD
    if let Some(p) = cli {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return pb;
        }
        log::warn!("--assets {:?} does not exist; searching defaults", pb);
    }
    if let Ok(p) = std::env::var("TREASURE_MAP_ASSETS") {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return pb;
        }
    }
    // Search candidates: CWD, executable dir, crate root; climb up to 5 parents
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd);
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.to_path_buf());
        }
    }
    candidates.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")));

    for base in candidates {
        if let Some(found) = search_upwards(&base, 5) {
            return found;
        }
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn search_upwards(base: &Path, levels: usize) -> Option<PathBuf> {
    let mut cur = base.to_path_buf();
    for _ in 0..levels {
        if cur.join(MARKER_FILE).exists() {
            return Some(cur);
        }
        cur = cur.parent()?.to_path_buf();
    }
    None
}

/// Resolves a configured asset path against the assets root.
pub fn asset_path(root: &Path, rel: &Path) -> PathBuf {
    if rel.is_absolute() {
        rel.to_path_buf()
    } else {
        root.join(rel)
    }
}

/// Error text for an asset file that is not on disk.
pub fn missing_asset(what: &str, path: &Path) -> String {
    format!(
        "{} not found at {:?}; place it under <root>/assets/ (see assets/README.md) \
         or point --assets / TREASURE_MAP_ASSETS at that root",
        what, path
    )
}
