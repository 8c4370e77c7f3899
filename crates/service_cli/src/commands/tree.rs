//! Tree command implementation
//!
//! Prints every resolved lattice node in-order (up subtree, node, down
//! subtree), indented by depth, so the output reads as the tree rotated
//! a quarter turn.

use pricer_pricing::lattice::Lattice;
use pricer_pricing::replication::value_option_with_lattice;
use tracing::info;

use crate::config::ValuationConfig;
use crate::Result;

/// Run the tree command
pub fn run(config: &ValuationConfig) -> Result<()> {
    let params = config.resolve_params()?;
    let valuation = value_option_with_lattice(&params)?;
    info!(
        "Dumping {} nodes over {} periods",
        valuation.lattice.node_count(),
        valuation.lattice.periods()
    );

    for line in render(&valuation.lattice) {
        println!("{}", line);
    }
    Ok(())
}

/// One line per node: depth, price, option value, hedge shares, risk-free amount.
fn render(lattice: &Lattice) -> Vec<String> {
    lattice
        .in_order()
        .into_iter()
        .map(|id| {
            let node = lattice.node(id);
            let value = node
                .option_value()
                .value()
                .map(|v| format!("{:.4}", v))
                .unwrap_or_else(|| "unresolved".to_string());
            format!(
                "{}[t={}] price={:.4} option={} shares={:.4} risk_free={:.4}",
                "    ".repeat(node.depth()),
                node.depth(),
                node.price(),
                value,
                node.hedge_shares(),
                node.risk_free_amount(),
            )
        })
        .collect()
}
