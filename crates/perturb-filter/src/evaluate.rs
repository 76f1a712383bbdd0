//! Set-based evaluation of filter expressions.

use std::collections::BTreeSet;

use perturb_core::config::FilterConfig;
use perturb_core::errors::FilterError;
use tracing::debug;

use crate::expr::FilterExpr;
use crate::target::EntitySource;

/// Ids in `domain` that satisfy `expr`, with the default depth limit.
///
/// - `Never` is empty and `Always` is the whole domain; neither consults
///   `source`
/// - `Identity` asks `source` about every id in the domain
/// - `And`, `Or` and `Not` are intersection, union and complement within
///   the domain
pub fn evaluate(
    expr: &FilterExpr,
    domain: &BTreeSet<String>,
    source: &dyn EntitySource,
) -> Result<BTreeSet<String>, FilterError> {
    evaluate_with_config(expr, domain, source, &FilterConfig::default())
}

/// [`evaluate`] with an explicit configuration.
pub fn evaluate_with_config(
    expr: &FilterExpr,
    domain: &BTreeSet<String>,
    source: &dyn EntitySource,
    config: &FilterConfig,
) -> Result<BTreeSet<String>, FilterError> {
    let depth = expr.depth();
    if depth > config.max_depth {
        return Err(FilterError::DepthExceeded {
            max_depth: config.max_depth,
            depth,
        });
    }
    let result = eval_node(expr, domain, source)?;
    debug!(
        domain = domain.len(),
        matched = result.len(),
        depth,
        "filter evaluated"
    );
    Ok(result)
}

fn eval_node(
    expr: &FilterExpr,
    domain: &BTreeSet<String>,
    source: &dyn EntitySource,
) -> Result<BTreeSet<String>, FilterError> {
    match expr {
        FilterExpr::Never => Ok(BTreeSet::new()),
        FilterExpr::Always => Ok(domain.clone()),
        FilterExpr::Identity(filter) => {
            filter.validate()?;
            let mut matched = BTreeSet::new();
            for id in domain {
                if source.matches(id, filter)? {
                    matched.insert(id.clone());
                }
            }
            Ok(matched)
        }
        FilterExpr::And(l, r) => {
            let left = eval_node(l, domain, source)?;
            let right = eval_node(r, domain, source)?;
            Ok(left.intersection(&right).cloned().collect())
        }
        FilterExpr::Or(l, r) => {
            let mut left = eval_node(l, domain, source)?;
            left.extend(eval_node(r, domain, source)?);
            Ok(left)
        }
        FilterExpr::Not(inner) => {
            let excluded = eval_node(inner, domain, source)?;
            Ok(domain.difference(&excluded).cloned().collect())
        }
    }
}
