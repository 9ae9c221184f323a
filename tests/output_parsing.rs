//! Golden-fixture tests for the two output-parsing contracts.
//!
//! The wrapped tools' output format is not specified anywhere, so these
//! fixtures capture real sample output and pin the parsers to it.

use xctools_cli::ToolVersion;
use xctools_cli::xcodebuild::{SdkDescriptor, parse_sdks};

const SHOWSDKS_OUTPUT: &str = include_str!("fixtures/xcodebuild_showsdks.txt");
const POD_VERSION_OUTPUT: &str = include_str!("fixtures/pod_version.txt");
const POD_VERSION_BANNER: &str = include_str!("fixtures/pod_version_banner.txt");

#[test]
fn showsdks_fixture_yields_every_sdk_line() {
    let sdks = parse_sdks(SHOWSDKS_OUTPUT.lines());

    assert_eq!(sdks.len(), 8, "one descriptor per -sdk line");
    assert_eq!(
        sdks[0],
        SdkDescriptor {
            display_name: "iOS 16.0".to_string(),
            sdk_value: "iphoneos16.0".to_string(),
        }
    );
    assert_eq!(
        sdks[1],
        SdkDescriptor {
            display_name: "Simulator - iOS 16.0".to_string(),
            sdk_value: "iphonesimulator16.0".to_string(),
        }
    );
    assert_eq!(sdks[7].sdk_value, "driverkit21.4");
}

#[test]
fn showsdks_fixture_preserves_input_order() {
    let sdks = parse_sdks(SHOWSDKS_OUTPUT.lines());
    let values: Vec<&str> = sdks.iter().map(|s| s.sdk_value.as_str()).collect();

    assert_eq!(
        values,
        vec![
            "iphoneos16.0",
            "iphonesimulator16.0",
            "macosx12.3",
            "appletvos16.0",
            "appletvsimulator16.0",
            "watchos9.0",
            "watchsimulator9.0",
            "driverkit21.4",
        ]
    );
}

#[test]
fn showsdks_headers_and_blanks_yield_no_descriptors() {
    let headers: Vec<&str> = SHOWSDKS_OUTPUT
        .lines()
        .filter(|line| !line.contains("-sdk"))
        .collect();

    assert!(!headers.is_empty());
    assert!(parse_sdks(headers).is_empty());
}

#[test]
fn pod_version_fixture_parses() {
    let version = ToolVersion::first_in_lines(POD_VERSION_OUTPUT.lines());

    assert_eq!(version, Some(ToolVersion::with_patch(1, 11, 3)));
}

#[test]
fn pod_version_banner_still_yields_the_version() {
    let version = ToolVersion::first_in_lines(POD_VERSION_BANNER.lines());

    assert_eq!(version, Some(ToolVersion::with_patch(1, 11, 3)));
}

#[test]
fn versionless_output_is_absent_not_an_error() {
    let version = ToolVersion::first_in_lines(["Setting up CocoaPods master repo", ""]);

    assert!(version.is_none());
}
