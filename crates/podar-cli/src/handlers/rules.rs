//! Rules command handler

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::{RulesArgs, RulesFormat};
use podar::SuppressionRules;

/// Execute the rules command
pub fn execute_rules(_config: &CliConfig, args: &RulesArgs) -> CliResult<()> {
    let rules = SuppressionRules::default();

    match args.format {
        RulesFormat::Text => print_rules_text(&rules),
        RulesFormat::Json => {
            let json = serde_json::to_string_pretty(&rules).map_err(|e| {
                CliError::report_generation(format!("JSON serialization error: {e}"))
            })?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Print the rule sets in human-readable form
fn print_rules_text(rules: &SuppressionRules) {
    println!("Line suppression patterns (DA records):");
    for pattern in rules.line_patterns() {
        println!("  {pattern}");
    }
    println!();
    println!("Branch suppression patterns (BRDA records):");
    for pattern in rules.branch_patterns() {
        println!("  {pattern}");
    }
}
