//! Price command implementation
//!
//! Values the option and prints the root option price, hedge shares, and
//! risk-free amount at reporting precision.

use pricer_pricing::replication::{audit_replication, value_option_with_lattice};
use tracing::{debug, info};

use super::audit_tolerance;
use crate::config::ValuationConfig;
use crate::{CliError, OutputFormat, Result};

/// Run the price command
pub fn run(config: &ValuationConfig, format: OutputFormat, audit: bool) -> Result<()> {
    let params = config.resolve_params()?;
    info!("Starting valuation...");
    info!("  Option type: {}", params.option_type());
    info!("  Periods: {}", params.periods());

    let valuation = value_option_with_lattice(&params)?;

    if audit {
        let report = audit_replication(&valuation.lattice, params.risk_free_rate())?;
        let tolerance = audit_tolerance(&params);
        debug!(
            nodes = report.nodes_checked,
            max_error = report.max_error,
            tolerance,
            "replication audit"
        );
        if !report.is_within(tolerance) {
            return Err(CliError::AuditFailed {
                max_error: report.max_error,
                tolerance,
            });
        }
    }

    match format {
        OutputFormat::Table => println!("{}", valuation.result),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&valuation.result.rounded())?;
            println!("{}", json);
        }
    }

    info!("Valuation complete");
    Ok(())
}
