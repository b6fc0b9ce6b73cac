use anyhow::Result;
use fpick::core::errors::Error;
use fpick::models::file_entry::FileEntry;
use fpick::services::fs::walker::{list_files, Directory};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn sorted(mut entries: Vec<FileEntry>) -> Vec<FileEntry> {
    entries.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    entries
}

#[tokio::test]
async fn walk_covers_every_nested_file() -> Result<()> {
    let root = tempdir()?;
    fs::create_dir_all(root.path().join("src").join("services"))?;
    fs::create_dir(root.path().join("docs"))?;
    fs::write(root.path().join("README.md"), "readme")?;
    fs::write(root.path().join("src").join("lib.rs"), "lib")?;
    fs::write(root.path().join("src").join("services").join("walker.rs"), "walk")?;
    fs::write(root.path().join("docs").join("guide.md"), "guide")?;

    let entries = sorted(list_files(root.path()).await?);
    let relatives: Vec<PathBuf> = entries.iter().map(|e| e.relative_path.clone()).collect();

    assert_eq!(
        relatives,
        vec![
            PathBuf::from("README.md"),
            Path::new("docs").join("guide.md"),
            Path::new("src").join("lib.rs"),
            Path::new("src").join("services").join("walker.rs"),
        ]
    );

    for entry in &entries {
        assert_eq!(entry.absolute_path, root.path().join(&entry.relative_path));
        assert!(entry.relative_path.ends_with(&entry.file_name));
    }
    Ok(())
}

#[tokio::test]
async fn repeated_walks_of_unchanged_tree_are_equal() -> Result<()> {
    let root = tempdir()?;
    fs::create_dir_all(root.path().join("a").join("b"))?;
    fs::write(root.path().join("a").join("one"), "1")?;
    fs::write(root.path().join("a").join("b").join("two"), "2")?;
    fs::write(root.path().join("three"), "3")?;

    let first = sorted(list_files(root.path()).await?);
    let second = sorted(list_files(root.path()).await?);
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn wide_directory_fans_out_and_joins() -> Result<()> {
    let root = tempdir()?;
    for i in 0..32 {
        let sub = root.path().join(format!("sub{i:02}"));
        fs::create_dir(&sub)?;
        fs::write(sub.join("leaf.txt"), "x")?;
    }

    let entries = list_files(root.path()).await?;
    assert_eq!(entries.len(), 32);
    for entry in &entries {
        assert_eq!(entry.file_name, "leaf.txt");
        assert_eq!(entry.relative_path.components().count(), 2);
    }
    Ok(())
}

#[tokio::test]
async fn entries_of_one_subdirectory_stay_contiguous() -> Result<()> {
    let root = tempdir()?;
    for name in ["left", "right"] {
        let sub = root.path().join(name);
        fs::create_dir(&sub)?;
        for i in 0..5 {
            fs::write(sub.join(format!("f{i}")), "x")?;
        }
    }

    let entries = list_files(root.path()).await?;
    assert_eq!(entries.len(), 10);

    // Each subdirectory's block is uninterrupted in the flattened output.
    let parents: Vec<&Path> = entries
        .iter()
        .map(|e| e.relative_path.parent().unwrap())
        .collect();
    let mut seen: Vec<&Path> = Vec::new();
    for parent in parents {
        if seen.last() != Some(&parent) {
            assert!(!seen.contains(&parent), "subdirectory block interleaved");
            seen.push(parent);
        }
    }
    Ok(())
}

#[tokio::test]
async fn empty_root_yields_empty_list() -> Result<()> {
    let root = tempdir()?;
    assert!(list_files(root.path()).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn directory_handle_exposes_validated_path() -> Result<()> {
    let root = tempdir()?;
    fs::write(root.path().join("f"), "x")?;

    let dir = Directory::open(root.path()).await?;
    assert_eq!(dir.path(), root.path());
    assert_eq!(dir.files().await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn invalid_roots_produce_no_partial_output() {
    let root = tempdir().unwrap();

    let missing = root.path().join("missing");
    assert!(matches!(
        list_files(&missing).await,
        Err(Error::InvalidRoot(p)) if p == missing
    ));

    let file = root.path().join("file.txt");
    fs::write(&file, "x").unwrap();
    assert!(matches!(
        list_files(&file).await,
        Err(Error::InvalidRoot(p)) if p == file
    ));
}
