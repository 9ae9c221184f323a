//! Version-gated flag validity.
//!
//! Some wrapped tools drop command-line options across major versions.
//! The gate is a declarative table mapping each such flag to the version
//! that removed it; requested flags the installed version no longer
//! accepts are withheld and downgraded to advisory warnings.

use super::version::ToolVersion;

/// One row of the gate table.
#[derive(Debug, Clone, Copy)]
pub struct FlagRule {
    /// The command-line flag the rule governs.
    pub flag: &'static str,
    /// First tool version that no longer accepts the flag.
    pub removed_in: ToolVersion,
    /// Replacement guidance appended to the advisory, when one exists.
    pub guidance: Option<&'static str>,
}

/// Classification of a set of requested flags against a detected version.
#[derive(Debug, Default)]
pub struct GateOutcome {
    /// Flags still valid for the installed version, in request order.
    pub accepted: Vec<&'static str>,
    /// One advisory message per withheld flag.
    pub advisories: Vec<String>,
}

/// Table-driven capability gate for one tool family.
#[derive(Debug, Clone, Copy)]
pub struct CapabilityGate {
    tool: &'static str,
    rules: &'static [FlagRule],
}

impl CapabilityGate {
    pub const fn new(tool: &'static str, rules: &'static [FlagRule]) -> Self {
        Self { tool, rules }
    }

    /// Classify each requested flag as accepted or withheld.
    ///
    /// An absent version is treated as older than every threshold, so the
    /// flags pass through; the wrapped tool will reject them itself if the
    /// assumption was wrong. Flags without a rule are always accepted.
    pub fn classify(
        &self,
        version: Option<&ToolVersion>,
        requested: &[&'static str],
    ) -> GateOutcome {
        let mut outcome = GateOutcome::default();

        for &flag in requested {
            let removed = self
                .rule_for(flag)
                .filter(|rule| version.is_some_and(|v| *v >= rule.removed_in));

            match removed {
                Some(rule) => outcome.advisories.push(self.advisory(rule)),
                None => outcome.accepted.push(flag),
            }
        }

        outcome
    }

    fn rule_for(&self, flag: &str) -> Option<&FlagRule> {
        self.rules.iter().find(|rule| rule.flag == flag)
    }

    fn advisory(&self, rule: &FlagRule) -> String {
        let mut message = format!(
            "{} is not a valid option for {} >= {}",
            rule.flag, self.tool, rule.removed_in
        );
        if let Some(guidance) = rule.guidance {
            message.push('\n');
            message.push_str(guidance);
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_ZERO: ToolVersion = ToolVersion::new(1, 0);

    const GATE: CapabilityGate = CapabilityGate::new(
        "CocoaPods",
        &[
            FlagRule {
                flag: "--no-clean",
                removed_in: ONE_ZERO,
                guidance: None,
            },
            FlagRule {
                flag: "--no-integrate",
                removed_in: ONE_ZERO,
                guidance: Some("Use `install! 'cocoapods', :integrate_targets => false` in your Podfile instead"),
            },
        ],
    );

    #[test]
    fn old_version_keeps_gated_flags() {
        let old = ToolVersion::new(0, 39);
        let outcome = GATE.classify(Some(&old), &["--no-clean", "--no-integrate"]);

        assert_eq!(outcome.accepted, vec!["--no-clean", "--no-integrate"]);
        assert!(outcome.advisories.is_empty());
    }

    #[test]
    fn new_version_withholds_flag_and_emits_one_advisory() {
        let new = ToolVersion::with_patch(1, 11, 3);
        let outcome = GATE.classify(Some(&new), &["--no-integrate"]);

        assert!(outcome.accepted.is_empty());
        assert_eq!(outcome.advisories.len(), 1);
        assert!(outcome.advisories[0].contains("--no-integrate"));
        assert!(outcome.advisories[0].contains("CocoaPods >= 1.0"));
        assert!(outcome.advisories[0].contains(":integrate_targets => false"));
    }

    #[test]
    fn threshold_version_itself_is_gated() {
        let outcome = GATE.classify(Some(&ONE_ZERO), &["--no-clean"]);

        assert!(outcome.accepted.is_empty());
        assert_eq!(outcome.advisories.len(), 1);
    }

    #[test]
    fn absent_version_assumes_older_behavior() {
        let outcome = GATE.classify(None, &["--no-clean", "--no-integrate"]);

        assert_eq!(outcome.accepted, vec!["--no-clean", "--no-integrate"]);
        assert!(outcome.advisories.is_empty());
    }

    #[test]
    fn unknown_flags_pass_through_regardless_of_version() {
        let new = ToolVersion::new(2, 1);
        let outcome = GATE.classify(Some(&new), &["--silent", "--no-ansi"]);

        assert_eq!(outcome.accepted, vec!["--silent", "--no-ansi"]);
        assert!(outcome.advisories.is_empty());
    }

    #[test]
    fn request_order_is_preserved() {
        let old = ToolVersion::new(0, 39);
        let outcome = GATE.classify(Some(&old), &["--no-integrate", "--no-clean"]);

        assert_eq!(outcome.accepted, vec!["--no-integrate", "--no-clean"]);
    }
}
