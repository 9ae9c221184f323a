//! End-to-end CLI tests.
//!
//! Real `pod`/`xcodebuild` binaries cannot be assumed on a test machine, so
//! the end-to-end cases point `--tool-path` at small shell-script doubles
//! that replay captured output.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_both_tool_families() {
    Command::cargo_bin("xc-ctl")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pod"))
        .stdout(predicate::str::contains("xcode"));
}

#[test]
fn pod_help_lists_the_operations() {
    Command::cargo_bin("xc-ctl")
        .unwrap()
        .args(["pod", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("repo-update"))
        .stdout(predicate::str::contains("version"));
}

#[test]
fn pod_install_help_documents_the_gated_flags() {
    Command::cargo_bin("xc-ctl")
        .unwrap()
        .args(["pod", "install", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-integrate"))
        .stdout(predicate::str::contains("--no-clean"))
        .stdout(predicate::str::contains("--no-ansi"));
}

#[test]
fn xcode_build_rejects_malformed_setting_overrides() {
    Command::cargo_bin("xc-ctl")
        .unwrap()
        .args(["xcode", "build", "--setting", "NOT_A_PAIR"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected KEY=VALUE"));
}

#[cfg(unix)]
mod with_fake_tools {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    use assert_cmd::Command;
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn fixture_path(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    #[test]
    fn pod_version_reports_what_the_tool_prints() {
        let dir = TempDir::new().unwrap();
        let pod = write_script(dir.path(), "pod", "echo 1.11.3");

        Command::cargo_bin("xc-ctl")
            .unwrap()
            .env("NO_COLOR", "1")
            .args(["pod", "version", "--tool-path"])
            .arg(&pod)
            .assert()
            .success()
            .stdout(predicate::str::contains("CocoaPods 1.11.3"));
    }

    #[test]
    fn pod_version_json_output_is_structured() {
        let dir = TempDir::new().unwrap();
        let pod = write_script(dir.path(), "pod", "echo 1.11.3");

        Command::cargo_bin("xc-ctl")
            .unwrap()
            .env("NO_COLOR", "1")
            .args(["pod", "version", "--format", "json", "--tool-path"])
            .arg(&pod)
            .assert()
            .success()
            .stdout(predicate::str::contains("\"version\""))
            .stdout(predicate::str::contains("\"major\": 1"));
    }

    #[test]
    fn pod_install_withholds_deprecated_flag_and_warns() {
        let dir = TempDir::new().unwrap();
        let args_file = dir.path().join("pod-args");
        let pod = write_script(
            dir.path(),
            "pod",
            &format!("printf '%s\\n' \"$@\" > {}\necho 1.11.3", args_file.display()),
        );

        Command::cargo_bin("xc-ctl")
            .unwrap()
            .env("NO_COLOR", "1")
            .args(["pod", "install", "--no-integrate", "--no-ansi", "--tool-path"])
            .arg(&pod)
            .assert()
            .success()
            .stdout(predicate::str::contains("pod install completed"))
            .stderr(predicate::str::contains(
                "--no-integrate is not a valid option for CocoaPods >= 1.0",
            ));

        // The last invocation the double saw is the install itself.
        let seen: Vec<String> = fs::read_to_string(&args_file)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect();
        assert_eq!(seen.first().map(String::as_str), Some("install"));
        assert!(!seen.contains(&"--no-integrate".to_string()));
        assert_eq!(seen.iter().filter(|a| *a == "--no-ansi").count(), 1);
    }

    #[test]
    fn pod_install_keeps_flags_for_old_cocoapods() {
        let dir = TempDir::new().unwrap();
        let args_file = dir.path().join("pod-args");
        let pod = write_script(
            dir.path(),
            "pod",
            &format!("printf '%s\\n' \"$@\" > {}\necho 0.39.0", args_file.display()),
        );

        Command::cargo_bin("xc-ctl")
            .unwrap()
            .env("NO_COLOR", "1")
            .args(["pod", "install", "--no-integrate", "--tool-path"])
            .arg(&pod)
            .assert()
            .success()
            .stderr(predicate::str::contains("not a valid option").not());

        let seen = fs::read_to_string(&args_file).unwrap();
        assert!(seen.lines().any(|a| a == "--no-integrate"));
    }

    #[test]
    fn pod_update_passes_pod_names_through() {
        let dir = TempDir::new().unwrap();
        let args_file = dir.path().join("pod-args");
        let pod = write_script(
            dir.path(),
            "pod",
            &format!("printf '%s\\n' \"$@\" > {}\necho 1.11.3", args_file.display()),
        );

        let project = dir.path().join("project");
        fs::create_dir(&project).unwrap();

        Command::cargo_bin("xc-ctl")
            .unwrap()
            .env("NO_COLOR", "1")
            .args(["pod", "update"])
            .arg(&project)
            .args(["GoogleAnalytics", "AFNetworking", "--no-repo-update", "--tool-path"])
            .arg(&pod)
            .assert()
            .success();

        let seen: Vec<String> = fs::read_to_string(&args_file)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect();
        assert_eq!(seen.first().map(String::as_str), Some("update"));
        assert!(seen.contains(&"GoogleAnalytics".to_string()));
        assert!(seen.contains(&"AFNetworking".to_string()));
        // Ungated for update, so it survives even on 1.x.
        assert!(seen.contains(&"--no-repo-update".to_string()));
        assert!(
            seen.iter()
                .any(|a| a.starts_with("--project-directory=") && a.ends_with("/project"))
        );
    }

    #[test]
    fn xcode_sdks_parses_the_doubles_listing() {
        let dir = TempDir::new().unwrap();
        let xcodebuild = write_script(
            dir.path(),
            "xcodebuild",
            &format!("cat {}", fixture_path("xcodebuild_showsdks.txt").display()),
        );

        Command::cargo_bin("xc-ctl")
            .unwrap()
            .env("NO_COLOR", "1")
            .args(["xcode", "sdks", "--tool-path"])
            .arg(&xcodebuild)
            .assert()
            .success()
            .stdout(predicate::str::contains("iOS 16.0"))
            .stdout(predicate::str::contains("iphoneos16.0"))
            .stdout(predicate::str::contains("Installed SDKs (8)"));
    }

    #[test]
    fn xcode_sdks_json_lists_every_descriptor() {
        let dir = TempDir::new().unwrap();
        let xcodebuild = write_script(
            dir.path(),
            "xcodebuild",
            &format!("cat {}", fixture_path("xcodebuild_showsdks.txt").display()),
        );

        let output = Command::cargo_bin("xc-ctl")
            .unwrap()
            .env("NO_COLOR", "1")
            .args(["xcode", "sdks", "--format", "json", "--tool-path"])
            .arg(&xcodebuild)
            .output()
            .unwrap();

        assert!(output.status.success());
        let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(8));
        assert_eq!(parsed[0]["display_name"], "iOS 16.0");
        assert_eq!(parsed[0]["sdk_value"], "iphoneos16.0");
    }

    #[test]
    fn failing_tool_exit_code_is_mirrored() {
        let dir = TempDir::new().unwrap();
        let pod = write_script(dir.path(), "pod", "if [ \"$1\" = --version ]; then echo 1.11.3; else exit 31; fi");

        Command::cargo_bin("xc-ctl")
            .unwrap()
            .env("NO_COLOR", "1")
            .args(["pod", "install", "--tool-path"])
            .arg(&pod)
            .assert()
            .code(31)
            .stderr(predicate::str::contains("exited with status 31"));
    }

    #[test]
    fn missing_tool_is_reported_with_the_paths_tried() {
        // Only meaningful on machines without a real CocoaPods install.
        if Path::new("/usr/local/bin/pod").exists() || Path::new("/usr/bin/pod").exists() {
            return;
        }

        let empty = TempDir::new().unwrap();

        Command::cargo_bin("xc-ctl")
            .unwrap()
            .env("NO_COLOR", "1")
            .env("PATH", empty.path())
            .args(["pod", "version"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("CocoaPods executable not found"))
            .stderr(predicate::str::contains("/usr/local/bin/pod"));
    }
}
