use std::cmp::Ordering;

use super::super::domain::Provider;

/// Placement score. Featured listings only outrank plain verified ones while they stay
/// verified.
pub fn tier_score(provider: &Provider) -> u8 {
    match (provider.is_featured, provider.is_verified) {
        (true, true) => 5,
        (false, true) => 4,
        (true, false) => 2,
        (false, false) if provider.is_claimed => 1,
        (false, false) => 0,
    }
}

/// Case-aware comparison approximating a locale collation: letters compare
/// case-insensitively first, then lowercase sorts ahead of uppercase. Accented
/// letters are not folded and sort after the ASCII range.
pub fn locale_cmp(left: &str, right: &str) -> Ordering {
    let primary = left
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase));
    if primary != Ordering::Equal {
        return primary;
    }

    for (a, b) in left.chars().zip(right.chars()) {
        if a == b {
            continue;
        }
        match (a.is_lowercase(), b.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }

    left.cmp(right)
}

pub(crate) fn by_recommendation(left: &Provider, right: &Provider) -> Ordering {
    tier_score(right)
        .cmp(&tier_score(left))
        .then_with(|| by_name(left, right))
}

pub(crate) fn by_name(left: &Provider, right: &Provider) -> Ordering {
    locale_cmp(&left.name, &right.name).then_with(|| left.id.cmp(&right.id))
}

pub(crate) fn by_tier_level(left: &Provider, right: &Provider) -> Ordering {
    right
        .tier_level
        .cmp(&left.tier_level)
        .then_with(|| by_name(left, right))
}
