use crate::parser::CommandLineError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Distribute the free-standing tokens across `count` sequential positions.
///
/// Produces `(position, token)` pairs in token order.
/// Without an absorber, positions take one token each; surplus tokens are an error, while missing tokens are left to the mandatory checks.
/// With an absorber at position `k`, the absorber takes every token not claimed by the other positions (possibly none).
pub(crate) fn distribute<'t>(
    count: usize,
    absorber: Option<usize>,
    tokens: &'t [&'t str],
) -> Result<Vec<(usize, &'t str)>, CommandLineError> {
    let distribution: Vec<(usize, &str)> = match absorber {
        None => {
            if tokens.len() > count {
                return Err(CommandLineError::TooManyArguments(
                    tokens[count].to_string(),
                ));
            }

            tokens.iter().copied().enumerate().collect()
        }
        Some(k) => {
            // `tokens - (count - 1)`, clamped at zero.
            let absorbed = (tokens.len() + 1).saturating_sub(count);
            let mut remaining = tokens.iter().copied();
            let mut distribution = Vec::with_capacity(tokens.len());

            for position in 0..count {
                let take = if position == k { absorbed } else { 1 };

                for token in remaining.by_ref().take(take) {
                    distribution.push((position, token));
                }
            }

            distribution
        }
    };

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Distributed {distribution:?} across {count} sequentials (absorber={absorber:?}).");
    }

    Ok(distribution)
}
