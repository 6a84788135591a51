use crate::error::RegistryError;
use std::collections::{HashMap, HashSet};

/// Checks a declaration against the names registered so far and returns the
/// activity's earliest finish.
///
/// Predecessors must already be present in `index`, which is what keeps the
/// precedence graph acyclic without a separate cycle search. `finishes[i]` is
/// the earliest finish of activity `i`; a declaration whose finish would not
/// fit in an `i64` is rejected so the schedule passes never overflow.
pub(crate) fn validate_declaration(
    index: &HashMap<String, usize>,
    finishes: &[i64],
    name: &str,
    duration: i64,
    predecessors: &[String],
) -> Result<i64, RegistryError> {
    if name.trim().is_empty() {
        return Err(RegistryError::EmptyName);
    }

    if index.contains_key(name) {
        return Err(RegistryError::DuplicateName {
            name: name.to_string(),
        });
    }

    if duration < 0 {
        return Err(RegistryError::InvalidDuration {
            name: name.to_string(),
            duration,
        });
    }

    let mut seen = HashSet::with_capacity(predecessors.len());
    let mut earliest_start = 0;
    for predecessor in predecessors {
        if predecessor == name {
            return Err(RegistryError::SelfReference {
                name: name.to_string(),
            });
        }
        if !seen.insert(predecessor.as_str()) {
            return Err(RegistryError::DuplicatePredecessor {
                activity: name.to_string(),
                predecessor: predecessor.clone(),
            });
        }
        match index.get(predecessor) {
            Some(&idx) => earliest_start = earliest_start.max(finishes[idx]),
            None => {
                return Err(RegistryError::UnknownPredecessor {
                    activity: name.to_string(),
                    predecessor: predecessor.clone(),
                });
            }
        }
    }

    earliest_start
        .checked_add(duration)
        .ok_or_else(|| RegistryError::InvalidDuration {
            name: name.to_string(),
            duration,
        })
}
