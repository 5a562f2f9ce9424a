use anyhow::{Result, bail};
use serde::Serialize;
use tracing::info;

use classreg_rs::classes::{self, ClassCodeRegistry};
use classreg_rs::logger;

/// One line of `check` output.
#[derive(Debug, Serialize)]
struct CheckOutcome<'a> {
    code: &'a str,
    valid: bool,
    year_level: Option<u8>,
}

/// One line of `list` output.
#[derive(Debug, Serialize)]
struct RosterEntry {
    code: &'static str,
    year_level: u8,
}

fn main() -> Result<()> {
    logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|arg| arg == "--json");
    let registry = classes::get();

    let all_valid = match args.split_first() {
        Some((cmd, rest)) if cmd == "check" => {
            let codes: Vec<&String> = rest.iter().filter(|arg| arg.as_str() != "--json").collect();
            if codes.is_empty() {
                bail!("check needs at least one class code");
            }
            run_check(registry, &codes, json)?
        }
        Some((cmd, _)) if cmd == "list" => {
            run_list(registry, json)?;
            true
        }
        _ => bail!("usage: classreg_rs check <CODE>... [--json] | list [--json]"),
    };

    if !all_valid {
        std::process::exit(1);
    }
    Ok(())
}

/// Validate each code against the roster. Returns false when any code is
/// invalid, which becomes exit code 1 (the check-script convention).
fn run_check(registry: &ClassCodeRegistry, codes: &[&String], json: bool) -> Result<bool> {
    let outcomes = check_codes(registry, codes);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        for outcome in &outcomes {
            let status = if outcome.valid { "valid" } else { "INVALID" };
            match outcome.year_level {
                Some(year) => println!("{}\t{status}\tyear {year}", outcome.code),
                None => println!("{}\t{status}\tunknown grade", outcome.code),
            }
        }
    }

    let invalid = outcomes.iter().filter(|outcome| !outcome.valid).count();
    info!("checked {} codes, {} invalid", outcomes.len(), invalid);
    Ok(invalid == 0)
}

fn check_codes<'a>(registry: &ClassCodeRegistry, codes: &[&'a String]) -> Vec<CheckOutcome<'a>> {
    codes
        .iter()
        .map(|&code| CheckOutcome {
            code: code.as_str(),
            valid: registry.is_valid_class(code),
            year_level: registry.year_level_of(code),
        })
        .collect()
}

/// Dump the full roster, e.g. for seeding a form dropdown.
fn run_list(registry: &ClassCodeRegistry, json: bool) -> Result<()> {
    let entries = roster_entries(registry);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            println!("{}\tyear {}", entry.code, entry.year_level);
        }
    }

    info!("listed {} classes", entries.len());
    Ok(())
}

fn roster_entries(registry: &ClassCodeRegistry) -> Vec<RosterEntry> {
    registry
        .classes()
        .map(|code| RosterEntry {
            code,
            // Registry initialization guarantees the mapping; a miss here
            // means the static tables diverged and must not pass silently.
            year_level: registry
                .year_level_of(code)
                .expect("roster class without a year-level mapping"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_reports_validity_and_year_level() {
        logger::init_test();
        let registry = classes::get();
        let codes = ["M1/3".to_string(), "M1/7".to_string(), "Z9/1".to_string()];
        let refs: Vec<&String> = codes.iter().collect();

        let outcomes = check_codes(registry, &refs);
        assert!(outcomes[0].valid);
        assert_eq!(outcomes[0].year_level, Some(7));
        // Known grade, nonexistent section.
        assert!(!outcomes[1].valid);
        assert_eq!(outcomes[1].year_level, Some(7));
        // Unknown grade entirely.
        assert!(!outcomes[2].valid);
        assert_eq!(outcomes[2].year_level, None);
    }

    #[test]
    fn check_outcome_json_shape() {
        let registry = classes::get();
        let code = "P6/6".to_string();
        let refs = [&code];

        let value = serde_json::to_value(check_codes(registry, &refs)).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "code": "P6/6", "valid": false, "year_level": 6 }])
        );
    }

    #[test]
    fn roster_entries_cover_every_class_in_order() {
        let registry = classes::get();
        let entries = roster_entries(registry);
        assert_eq!(entries.len(), 48);
        assert_eq!(entries[0].code, "M1/1");
        assert_eq!(entries[0].year_level, 7);
        assert_eq!(entries[47].code, "P6/5");
        assert_eq!(entries[47].year_level, 6);
        assert!(entries.iter().all(|entry| (1..=9).contains(&entry.year_level)));
    }
}
