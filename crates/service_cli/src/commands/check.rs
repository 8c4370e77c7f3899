//! Check command implementation
//!
//! Confirms the configuration resolves to valid parameters, runs the
//! valuation, and audits the replication equations at every node.

use pricer_pricing::replication::{audit_replication, value_option_with_lattice};
use tracing::info;

use super::audit_tolerance;
use crate::config::ValuationConfig;
use crate::{CliError, Result};

/// Run the check command
pub fn run(config: &ValuationConfig) -> Result<()> {
    info!("Checking configuration...");
    let params = config.resolve_params()?;
    println!("Parameters: OK");
    println!("  spot               {}", params.spot());
    println!("  strike             {}", params.strike());
    println!("  shares_controlled  {}", params.shares_controlled());
    println!("  up_factor          {}", params.up_factor());
    println!("  down_factor        {}", params.down_factor());
    println!("  periods            {}", params.periods());
    println!("  risk_free_rate     {}", params.risk_free_rate());
    println!("  option_type        {}", params.option_type());

    let valuation = value_option_with_lattice(&params)?;
    println!("Lattice: {} nodes", valuation.lattice.node_count());

    let report = audit_replication(&valuation.lattice, params.risk_free_rate())?;
    let tolerance = audit_tolerance(&params);
    println!(
        "Replication: {} internal nodes, max error {:e} (tolerance {:e})",
        report.nodes_checked, report.max_error, tolerance
    );

    if !report.is_within(tolerance) {
        return Err(CliError::AuditFailed {
            max_error: report.max_error,
            tolerance,
        });
    }

    println!("All checks passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"
spot = 420.0
strike = 500.0
shares_controlled = 100.0
up_factor = 0.1
down_factor = 0.1
periods = 4
risk_free_rate = 0.05
option_type = "put"
"#;

    #[test]
    fn test_check_passes_for_reference_scenario() {
        let config = ValuationConfig::from_toml_str(SCENARIO).unwrap();
        assert!(run(&config).is_ok());
    }

    #[test]
    fn test_check_reports_incomplete_config() {
        let config = ValuationConfig::from_toml_str("spot = 420.0").unwrap();
        assert!(matches!(run(&config), Err(CliError::Config(_))));
    }
}
