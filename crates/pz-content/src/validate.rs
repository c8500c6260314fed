//! Checks that the collections are well-formed and that every spread can
//! actually be drawn from the content it points at.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::cache::ContentSource;
use crate::content::Content;
use crate::item::Hexagram;
use crate::kind::{ContentKind, OracleType};
use crate::spread::SpreadDefinition;

/// A warning or error found during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Where the issue was found, e.g. `spread 'tarot_3'` or `iching[4]`.
    pub subject: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.subject, self.message)
    }
}

/// Validate every collection reachable through `source`.
///
/// Load and parse failures are reported as issues rather than returned,
/// so one broken file does not hide problems in the others.
pub fn validate_library<C: ContentSource + ?Sized>(source: &C) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let mut load = |kind: ContentKind| -> Option<Arc<Content>> {
        match source.collection(kind) {
            Ok(content) => content,
            Err(e) => {
                issues.push(ValidationIssue::error(kind.as_str(), e.to_string()));
                None
            }
        }
    };
    let tarot = load(ContentKind::Tarot);
    let iching = load(ContentKind::IChing);
    let rueda = load(ContentKind::Rueda);
    let spreads = load(ContentKind::Spreads);

    if let Some(deck) = tarot.as_deref().and_then(Content::tarot) {
        for (i, card) in deck.iter().enumerate() {
            let subject = format!("tarot[{i}]");
            if card.name.trim().is_empty() {
                issues.push(ValidationIssue::warning(&subject, "card has no name"));
            }
            if card.upright.trim().is_empty() || card.reversed_text.trim().is_empty() {
                issues.push(ValidationIssue::warning(
                    &subject,
                    "card is missing upright or reversed text",
                ));
            }
        }
    }

    if let Some(hexagrams) = iching.as_deref().and_then(Content::iching) {
        validate_hexagrams(hexagrams, &mut issues);
    }

    if let Some(animals) = rueda.as_deref().and_then(Content::rueda) {
        for (i, animal) in animals.iter().enumerate() {
            if animal.name.trim().is_empty() {
                issues.push(ValidationIssue::warning(format!("rueda[{i}]"), "animal has no name"));
            }
        }
    }

    match spreads.as_deref().and_then(Content::spreads) {
        Some(spreads) => {
            let size_of = |oracle: OracleType| -> Option<usize> {
                let content = match oracle {
                    OracleType::Tarot => &tarot,
                    OracleType::IChing => &iching,
                    OracleType::Rueda => &rueda,
                };
                content.as_deref().map(Content::len)
            };
            for (id, spread) in spreads {
                validate_spread(id, spread, &size_of, &mut issues);
            }
        }
        None => issues.push(ValidationIssue::warning("spreads", "no spreads defined")),
    }
    let rejected = spreads.as_deref().and_then(Content::rejected_spreads);
    for (id, reason) in rejected.into_iter().flatten() {
        issues.push(ValidationIssue::error(
            format!("spread '{id}'"),
            format!("malformed definition: {reason}"),
        ));
    }

    issues
}

fn validate_hexagrams(hexagrams: &[Hexagram], issues: &mut Vec<ValidationIssue>) {
    let mut seen = BTreeSet::new();
    for (i, hex) in hexagrams.iter().enumerate() {
        let subject = format!("iching[{i}]");
        if !(1..=64).contains(&hex.number) {
            issues.push(ValidationIssue::error(
                &subject,
                format!("hexagram number {} is outside 1..=64", hex.number),
            ));
        } else if !seen.insert(hex.number) {
            issues.push(ValidationIssue::error(
                &subject,
                format!("hexagram {} appears more than once", hex.number),
            ));
        }
        for line in hex.lines.keys() {
            if !(1..=6).contains(line) {
                issues.push(ValidationIssue::error(
                    &subject,
                    format!("line {line} is outside 1..=6"),
                ));
            }
        }
    }
    if !hexagrams.is_empty() && hexagrams.len() != 64 {
        issues.push(ValidationIssue::warning(
            "iching",
            format!("{} hexagrams defined, expected 64", hexagrams.len()),
        ));
    }
}

fn validate_spread(
    id: &str,
    spread: &SpreadDefinition,
    size_of: impl Fn(OracleType) -> Option<usize>,
    issues: &mut Vec<ValidationIssue>,
) {
    let subject = format!("spread '{id}'");

    let Some(oracle) = spread.oracle_type() else {
        issues.push(ValidationIssue::error(
            &subject,
            format!("unknown oracle \"{}\"", spread.oracle),
        ));
        return;
    };

    if spread.count == 0 {
        issues.push(ValidationIssue::error(&subject, "draws zero items"));
    }

    if let Some(positions) = &spread.positions {
        if positions.len() != spread.count {
            issues.push(ValidationIssue::warning(
                &subject,
                format!(
                    "{} position labels for {} items",
                    positions.len(),
                    spread.count
                ),
            ));
        }
    }

    match size_of(oracle) {
        None | Some(0) => issues.push(ValidationIssue::error(
            &subject,
            format!("{} content is missing or empty", oracle.content_kind()),
        )),
        Some(size) if oracle != OracleType::IChing && spread.count > size => {
            issues.push(ValidationIssue::error(
                &subject,
                format!(
                    "draws {} distinct items but {} has only {size}",
                    spread.count,
                    oracle.content_kind()
                ),
            ));
        }
        Some(_) => {}
    }
}
