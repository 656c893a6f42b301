//! `yank scan` – show how files in a directory are recognized.

use anyhow::{Context, Result};
use std::path::Path;
use yank_core::identity::normalize;
use yank_core::scan::{scan_entries, DirectoryEntry};

pub fn run_scan(dir: &Path) -> Result<()> {
    let mut entries =
        scan_entries(dir).with_context(|| format!("read directory {}", dir.display()))?;
    entries.sort_by(|a, b| a.path.cmp(&b.path));

    for entry in &entries {
        println!("{}", format_entry(entry));
    }
    let complete = entries.iter().filter(|e| e.is_complete).count();
    println!(
        "{} file(s): {} complete, {} in progress",
        entries.len(),
        complete,
        entries.len() - complete
    );
    Ok(())
}

fn format_entry(entry: &DirectoryEntry) -> String {
    match entry.fingerprint() {
        Some(fp) => format!(
            "complete     {}  {}  {}",
            fp,
            normalize(&entry.base_name),
            entry.path.display()
        ),
        None => format!("in-progress  {:<64}  -  {}", "-", entry.path.display()),
    }
}
