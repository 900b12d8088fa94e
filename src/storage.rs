// ============================================================
// File: storage.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Final Project - Index Rework
// Date: Oct 19, 2026
//
// Description:
//   This module reads bulk key files for the ordered key store.
//   A key file holds one signed integer per line; blank lines are
//   skipped and surrounding whitespace is ignored.
//
// Goal:
// 1) The whole file is parsed before any key is inserted, so a bad
//    line leaves the tree untouched.
// 2) Keys are inserted in file order (order decides tree shape).
// ============================================================
use crate::RBTree;
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;


/// Parse every key in a reader, one integer per line.
///
/// # Errors
/// Fails on the first line that is not a valid `i64`, naming the line
/// number, or if the reader itself fails.
pub fn parse_key_lines<R: BufRead>(reader: R) -> Result<Vec<i64>> {
    let mut keys = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", idx + 1))?;
        let trimmed = line.trim();

        // Ignore blank lines silently
        if trimmed.is_empty() {
            continue;
        }

        let key = trimmed
            .parse::<i64>()
            .with_context(|| format!("line {}: '{}' is not an integer", idx + 1, trimmed))?;
        keys.push(key);
    }
    Ok(keys)
}


/// Read a key file from disk and return its keys in file order.
pub fn read_key_file<P: AsRef<Path>>(path: P) -> Result<Vec<i64>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("could not open key file '{}'", path.display()))?;

    let keys = parse_key_lines(BufReader::new(file))
        .with_context(|| format!("invalid key file '{}'", path.display()))?;
    debug!("read {} keys from {}", keys.len(), path.display());
    Ok(keys)
}


/// Load every key from a file into the tree.
///
/// Nothing is inserted unless the whole file parses.
///
/// # Returns
/// The number of keys inserted.
///
/// # Example
/// ```
/// use rbstore::{RBTree, load_keys};
///
/// let path = std::env::temp_dir().join("rbstore_doc_keys.txt");
/// std::fs::write(&path, "10\n20\n30\n").unwrap();
///
/// let mut tree = RBTree::new();
/// assert_eq!(load_keys(&mut tree, &path).unwrap(), 3);
/// assert!(tree.contains(20));
/// ```
pub fn load_keys<P: AsRef<Path>>(tree: &mut RBTree, path: P) -> Result<usize> {
    let keys = read_key_file(&path)?;
    let count = keys.len();
    tree.extend(keys);
    info!("loaded {} keys from {}", count, path.as_ref().display());
    Ok(count)
}
