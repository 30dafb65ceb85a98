#![allow(clippy::expect_used, clippy::unwrap_used)]
//! The static deployment plan: which asset lands where, and with what mode.

use std::collections::HashSet;

use platform_starter::resources::asset::{AssetStore, EmbeddedAssets};
use platform_starter::resources::file::{CONFIG_FILES, FileSpec, GITIGNORE, PRECOMMIT_HOOK};

/// Every file spec in the order a run deploys them.
fn plan() -> Vec<FileSpec> {
    std::iter::once(GITIGNORE)
        .chain(CONFIG_FILES.iter().copied())
        .chain(std::iter::once(PRECOMMIT_HOOK))
        .collect()
}

/// Snapshot of the full deployment plan.
///
/// Any change to an asset name, destination, anchor, or mode fails this
/// test, prompting a deliberate snapshot update.
#[test]
fn deployment_plan() {
    let lines: Vec<String> = plan()
        .iter()
        .map(|spec| {
            let asset = EmbeddedAssets.fetch(spec.asset).unwrap();
            format!(
                "{} -> {} [{:?}] {:o}",
                spec.asset,
                spec.display_destination(),
                spec.anchor,
                asset.mode
            )
        })
        .collect();
    insta::assert_snapshot!("deployment_plan", lines.join("\n"));
}

#[test]
fn every_planned_asset_exists() {
    for spec in plan() {
        assert!(
            EmbeddedAssets.fetch(spec.asset).is_ok(),
            "{} is not embedded",
            spec.asset
        );
    }
}

#[test]
fn destinations_are_unique_and_non_empty() {
    let mut seen = HashSet::new();
    for spec in plan() {
        assert!(!spec.destination.is_empty());
        assert!(
            seen.insert((spec.anchor, spec.display_destination())),
            "{} planned twice",
            spec.display_destination()
        );
    }
}
