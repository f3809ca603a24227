use std::process;

use cyrkana_core::{Engine, EngineError, SchemaReport};

use crate::assets::AssetDir;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Diagnostics for one profile, or for every registered profile.
pub fn check_reports(
    engine: &Engine,
    profile_id: Option<&str>,
) -> Result<Vec<SchemaReport>, EngineError> {
    match profile_id {
        Some(id) => Ok(vec![engine.diagnose(id)?]),
        None => engine
            .profiles()?
            .iter()
            .map(|p| engine.diagnose(&p.id))
            .collect(),
    }
}

fn print_report(r: &SchemaReport) {
    let status = if r.is_clean() { "ok" } else { "ISSUES" };
    println!(
        "{} ({}): {} entries, {} prefixes  [{status}]",
        r.profile_id, r.schema_id, r.entry_count, r.prefix_count
    );
    for m in &r.missing_syllables {
        println!("  missing syllable: {} -> {}", m.sequence, m.syllable);
    }
    for s in &r.shadowed_entries {
        println!("  unreachable: {} (commits at {})", s.sequence, s.shadowed_by);
    }
    if !r.unused_keys.is_empty() {
        println!("  unused keys: {}", r.unused_keys.join(" "));
    }
}

/// Exits with status 1 when any report has findings.
pub fn check_cmd(assets: &AssetDir, profile_id: Option<&str>, json: bool) {
    let engine = die!(assets.open_engine(), "Error loading assets: {}");
    let reports = die!(check_reports(&engine, profile_id), "Error: {}");

    if json {
        let out = die!(serde_json::to_string_pretty(&reports), "Error: {}");
        println!("{out}");
    } else {
        for r in &reports {
            print_report(r);
        }
    }

    if reports.iter().any(|r| !r.is_clean()) {
        process::exit(1);
    }
}
