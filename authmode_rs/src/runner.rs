//! Per-file pipeline and the batch loop over a directory tree.
//!
//! Every per-file failure is reported and recovered here; nothing below this
//! point can end a run early.

use std::path::Path;

use tracing::{debug, info};

use crate::codec::{read_json_file, write_json_file};
use crate::colors::Painter;
use crate::config::AuthModeConfig;
use crate::fs_utils::find_json_files;
use crate::mutator::update_auth_mode;
use crate::types::{Direction, FileOutcome, RunSummary};

/// Decode, rewrite and, if anything changed, write back a single file.
pub fn process_json_file(path: &Path, direction: Direction, painter: &Painter) -> FileOutcome {
    let shown = path.display().to_string();

    let mut decoded = match read_json_file(path) {
        Ok(decoded) => decoded,
        Err(err) => {
            debug!(path = %shown, indent = err.indent(), "decode failed");
            println!("{} {}: {}", painter.warn("Skipping"), painter.path(&shown), err);
            return err.outcome();
        }
    };

    if !update_auth_mode(&mut decoded.value, direction) {
        debug!(path = %shown, "no matching {} value", direction.source());
        return FileOutcome::SkippedUnmodified;
    }

    match write_json_file(path, &decoded.value, decoded.indent) {
        Ok(()) => {
            println!(
                "{} {} (using indent size: {})",
                painter.ok("Modified"),
                painter.path(&shown),
                decoded.indent
            );
            FileOutcome::Modified
        }
        Err(err) => {
            println!(
                "{} {}: {}",
                painter.error("Error writing to"),
                painter.path(&shown),
                err
            );
            err.outcome()
        }
    }
}

/// Run one direction over every candidate file under `root`.
pub fn process_files(
    root: &Path,
    direction: Direction,
    config: &AuthModeConfig,
    painter: &Painter,
) -> RunSummary {
    println!("Running conversion: {}", direction);

    let files = find_json_files(root, &config.exclude_markers);
    debug!(root = %root.display(), count = files.len(), "located candidate files");

    let mut summary = RunSummary::default();
    for path in &files {
        summary.record(process_json_file(path, direction, painter));
    }

    println!(
        "{}",
        painter.header(&format!(
            "Modified {} out of {} files",
            summary.modified, summary.files_seen
        ))
    );
    info!(
        modified = summary.modified,
        unmodified = summary.unmodified,
        empty = summary.empty,
        invalid_json = summary.invalid_json,
        unreadable = summary.unreadable,
        write_failed = summary.write_failed,
        "run complete"
    );

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn run(root: &Path, direction: Direction) -> RunSummary {
        process_files(root, direction, &AuthModeConfig::default(), &Painter::plain())
    }

    /// Returns false when the process can still open the file for writing
    /// (e.g. when running as root), so callers can skip.
    fn make_read_only(path: &Path) -> bool {
        let mut perms = fs::metadata(path).expect("metadata").permissions();
        perms.set_readonly(true);
        fs::set_permissions(path, perms).expect("set permissions");
        fs::OpenOptions::new().write(true).open(path).is_err()
    }

    #[test]
    fn modifies_matching_file_with_its_indent() {
        let tmp = TempDir::new().expect("tmp dir");
        let path = tmp.path().join("appsettings.json");
        fs::write(
            &path,
            "{\n    \"AuthenticationMode\": \"ConnectionString\",\n    \"Port\": 8080\n}\n",
        )
        .expect("write");

        let outcome = process_json_file(&path, Direction::ConnectionString2Msi, &Painter::plain());
        assert_eq!(outcome, FileOutcome::Modified);
        assert_eq!(
            fs::read_to_string(&path).expect("read"),
            "{\n    \"AuthenticationMode\": \"Msi\",\n    \"Port\": 8080\n}"
        );
    }

    #[test]
    fn untouched_file_is_not_rewritten() {
        let tmp = TempDir::new().expect("tmp dir");
        let path = tmp.path().join("other.json");
        let original = "{\"Name\":   \"x\",\n\"List\": [1,2]}\n";
        fs::write(&path, original).expect("write");

        for direction in [
            Direction::ConnectionString2Msi,
            Direction::Msi2ConnectionString,
        ] {
            let outcome = process_json_file(&path, direction, &Painter::plain());
            assert_eq!(outcome, FileOutcome::SkippedUnmodified);
        }
        assert_eq!(fs::read_to_string(&path).expect("read"), original);
    }

    #[test]
    fn invalid_json_is_left_byte_for_byte() {
        let tmp = TempDir::new().expect("tmp dir");
        let path = tmp.path().join("broken.json");
        let original = "{\n  \"AuthenticationMode\": \"ConnectionString\",\n}";
        fs::write(&path, original).expect("write");

        let outcome = process_json_file(&path, Direction::ConnectionString2Msi, &Painter::plain());
        assert_eq!(outcome, FileOutcome::SkippedInvalidJson);
        assert_eq!(fs::read_to_string(&path).expect("read"), original);
    }

    #[test]
    fn failed_write_is_not_counted_as_modified() {
        let tmp = TempDir::new().expect("tmp dir");
        let root = tmp.path();
        let original = r#"{"AuthenticationMode": "ConnectionString"}"#;
        let path = root.join("locked.json");
        fs::write(&path, original).expect("write");
        if !make_read_only(&path) {
            return;
        }

        let outcome = process_json_file(&path, Direction::ConnectionString2Msi, &Painter::plain());
        assert_eq!(outcome, FileOutcome::WriteFailed);
        assert_eq!(fs::read_to_string(&path).expect("read"), original);

        let summary = run(root, Direction::ConnectionString2Msi);
        assert_eq!(summary.files_seen, 1);
        assert_eq!(summary.modified, 0);
        assert_eq!(summary.write_failed, 1);
        assert_eq!(summary.failures(), 1);
    }

    #[test]
    fn batch_counts_every_outcome() {
        let tmp = TempDir::new().expect("tmp dir");
        let root = tmp.path();
        fs::create_dir_all(root.join("svc/LocalRunOutputs")).expect("mkdir");
        fs::write(root.join("a.json"), r#"{"AuthenticationMode": "ConnectionString"}"#)
            .expect("write");
        fs::write(root.join("b.json"), r#"{"AuthenticationMode": "Msi"}"#).expect("write");
        fs::write(root.join("empty.json"), "").expect("write");
        fs::write(root.join("bad.json"), "[1, 2,]").expect("write");
        fs::write(
            root.join("svc/LocalRunOutputs/out.json"),
            r#"{"AuthenticationMode": "ConnectionString"}"#,
        )
        .expect("write");

        let summary = run(root, Direction::ConnectionString2Msi);
        assert_eq!(summary.files_seen, 4);
        assert_eq!(summary.modified, 1);
        assert_eq!(summary.unmodified, 1);
        assert_eq!(summary.empty, 1);
        assert_eq!(summary.invalid_json, 1);
        assert_eq!(summary.failures(), 1);

        assert_eq!(
            fs::read_to_string(root.join("svc/LocalRunOutputs/out.json")).expect("read"),
            r#"{"AuthenticationMode": "ConnectionString"}"#
        );
    }

    #[test]
    fn config_markers_are_honored() {
        let tmp = TempDir::new().expect("tmp dir");
        let root = tmp.path();
        fs::create_dir_all(root.join("vendor")).expect("mkdir");
        fs::write(
            root.join("vendor/lib.json"),
            r#"{"AuthenticationMode": "ConnectionString"}"#,
        )
        .expect("write");

        let config = AuthModeConfig {
            exclude_markers: vec!["vendor".to_string()],
            strict: false,
        };
        let summary = process_files(
            root,
            Direction::ConnectionString2Msi,
            &config,
            &Painter::plain(),
        );
        assert_eq!(summary.files_seen, 0);
        assert_eq!(summary.modified, 0);
    }

    #[test]
    fn round_trip_restores_connection_strings() {
        let tmp = TempDir::new().expect("tmp dir");
        let root = tmp.path();
        let original = "{\n  \"AuthenticationMode\": \"ConnectionString\",\n  \"Db\": {\n    \"AuthenticationMode\": \"ConnectionString\"\n  }\n}";
        fs::write(root.join("settings.json"), original).expect("write");

        let first = run(root, Direction::ConnectionString2Msi);
        assert_eq!(first.modified, 1);
        let second = run(root, Direction::Msi2ConnectionString);
        assert_eq!(second.modified, 1);

        assert_eq!(
            fs::read_to_string(root.join("settings.json")).expect("read"),
            original
        );
    }
}
