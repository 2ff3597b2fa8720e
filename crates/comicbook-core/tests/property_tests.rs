//! Property-based tests for page filtering, ordering and path planning.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use comicbook_core::AdapterOptions;
use comicbook_core::ComicBook;
use comicbook_core::filter::IMAGE_EXTENSIONS;
use comicbook_core::filter::is_page;
use comicbook_core::paths::archive_entry_name;
use comicbook_core::paths::derive_archive_output_path;
use comicbook_core::paths::derive_extract_output_path;
use comicbook_core::paths::entry_relative_path;
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

proptest! {
    /// Every image extension is recognized in any letter case.
    #[test]
    fn prop_image_extension_case_insensitive(
        stem in "[a-z0-9_]{1,12}",
        index in 0..IMAGE_EXTENSIONS.len(),
        upper in any::<bool>(),
    ) {
        let ext = IMAGE_EXTENSIONS[index];
        let ext = if upper { ext.to_uppercase() } else { ext.to_string() };
        let name = format!("dir/{stem}.{ext}");
        prop_assert!(is_page(&name));
    }

    /// Names without an image extension are never pages.
    #[test]
    fn prop_non_image_rejected(stem in "[a-z0-9_]{1,12}", ext in "(txt|xml|nfo|pdf|zip)") {
        let name = format!("{stem}.{ext}");
        prop_assert!(!is_page(&name));
    }

    /// Extract paths are siblings of the archive, named after its stem.
    #[test]
    fn prop_extract_path_is_sibling(
        stem in "[a-zA-Z0-9_-]{1,16}",
        ext in "(cbz|cb7|cbt)",
        out in proptest::option::of("[a-z]{1,6}"),
    ) {
        let archive = PathBuf::from("/library").join(format!("{stem}.{ext}"));
        let derived = derive_extract_output_path(&archive, out.as_deref());

        prop_assert_eq!(derived.parent(), archive.parent());
        let expected = match &out {
            Some(out) => format!("{stem}.{out}"),
            None => stem.clone(),
        };
        prop_assert_eq!(derived.file_name().unwrap().to_str().unwrap(), expected);
    }

    /// Archive paths replace any folder extension with the requested one.
    #[test]
    fn prop_archive_path_uses_extension(
        stem in "[a-zA-Z0-9_-]{1,16}",
        ext in "(cbz|cb7|cbt)",
    ) {
        let folder = PathBuf::from("/library").join(format!("{stem}.cb"));
        let derived = derive_archive_output_path(&folder, &ext);
        prop_assert_eq!(derived, PathBuf::from("/library").join(format!("{stem}.{ext}")));
    }

    /// Converting an entry name to a host path and back is lossless.
    #[test]
    fn prop_entry_name_conversion_roundtrip(
        parts in prop::collection::vec("[a-zA-Z0-9_ -]{1,10}", 1..5)
    ) {
        let name = parts.join("/");
        let relative = entry_relative_path(&name).unwrap();
        prop_assert_eq!(archive_entry_name(&relative).unwrap(), name);
    }

    /// Entry names that climb out of the destination are rejected.
    #[test]
    fn prop_traversal_rejected(
        prefix in prop::collection::vec("[a-z]{1,8}", 0..3),
        suffix in "[a-z]{1,8}\\.jpg",
    ) {
        let mut parts = prefix;
        parts.push("..".to_string());
        parts.push("..".to_string());
        parts.push(suffix);
        let name = parts.join("/");
        prop_assert!(entry_relative_path(&name).is_err());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Folder listings are sorted and stable for any set of page names.
    #[test]
    fn prop_folder_listing_sorted(
        names in prop::collection::btree_set("[a-z0-9]{1,8}\\.(jpg|png)", 0..12)
    ) {
        let temp = TempDir::new().unwrap();
        for name in &names {
            fs::write(temp.path().join(name), name.as_bytes()).unwrap();
        }

        let book = ComicBook::open(temp.path()).unwrap();
        let first = book.pages().unwrap();
        let second = book.pages().unwrap();
        prop_assert_eq!(&first, &second);

        let listed: Vec<String> = first.iter().map(|p| p.display_name().to_string()).collect();
        let expected: Vec<String> = names.into_iter().collect();
        prop_assert_eq!(listed, expected);
    }

    /// Archiving then listing yields the same page set as the folder.
    #[test]
    fn prop_archive_preserves_page_set(
        names in prop::collection::btree_set("[a-z]{1,6}\\.(gif|webp)", 1..8)
    ) {
        let temp = TempDir::new().unwrap();
        let folder = temp.path().join("Book");
        fs::create_dir(&folder).unwrap();
        for name in &names {
            fs::write(folder.join(name), b"img").unwrap();
        }

        let archive = ComicBook::open(&folder)
            .unwrap()
            .archive(&AdapterOptions::default())
            .unwrap();
        let listed: BTreeSet<String> = comicbook_core::list_pages(&archive)
            .unwrap()
            .iter()
            .map(|p| p.display_name().to_string())
            .collect();
        prop_assert_eq!(listed, names);
    }
}
