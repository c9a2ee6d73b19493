use std::{fs::File, io::BufReader, path::Path, path::PathBuf};

use anyhow::Context;
use serde::de::DeserializeOwned;

pub fn read_folder(folder_path: &PathBuf) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder_path)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|extension| extension == "json") {
            files.push(path);
        } else if path.is_dir() {
            files.extend(read_folder(&path)?);
        }
    }

    files.sort();

    Ok(files)
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, anyhow::Error> {
    let file = File::open(path).with_context(|| format!("Could not open {}", path.display()))?;

    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Could not parse {}", path.display()))
}

/// Writes `content` to `out`, creating parent folders, or prints it when no
/// file is given.
pub fn write_or_print(out: Option<&Path>, content: &str) -> Result<(), anyhow::Error> {
    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }

            std::fs::write(out, content)
                .with_context(|| format!("Could not write {}", out.display()))
        }
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
