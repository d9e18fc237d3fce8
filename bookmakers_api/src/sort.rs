//! Sort modes and the ordering algorithm for the bookmakers list.

use std::str::FromStr;

use crate::types::Bookmaker;

/// Sort mode selected by a tab: a tagged variant over the four known
/// modes plus an explicit passthrough for everything else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Descending by review count. The default when a tab link carries
    /// no `type` parameter.
    #[default]
    ByUser,
    /// Descending by editorial rating.
    ByEditors,
    /// Descending by parsed bonus amount.
    ByBonus,
    /// Descending by the named sub-rating.
    BySubrating(Subrating),
    /// No reordering; the source order is kept.
    Unsorted,
}

/// Recognized sub-rating criteria for [`SortMode::BySubrating`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Subrating {
    Reliability,
}

impl SortMode {
    /// Maps the raw `type`/`id` query parameters to a mode. A missing
    /// `type` means [`SortMode::ByUser`]; an unknown `type`, or
    /// `bysubrating` without a recognized `id`, falls through to
    /// [`SortMode::Unsorted`].
    pub fn from_params(sort_type: Option<&str>, subrating_id: Option<&str>) -> Self {
        match sort_type {
            None | Some("byuser") => SortMode::ByUser,
            Some("byeditors") => SortMode::ByEditors,
            Some("bybonus") => SortMode::ByBonus,
            Some("bysubrating") => match subrating_id.and_then(|id| id.parse().ok()) {
                Some(subrating) => SortMode::BySubrating(subrating),
                None => SortMode::Unsorted,
            },
            Some(_) => SortMode::Unsorted,
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortMode::ByUser => "byuser",
                SortMode::ByEditors => "byeditors",
                SortMode::ByBonus => "bybonus",
                SortMode::BySubrating(_) => "bysubrating",
                SortMode::Unsorted => "unsorted",
            }
        )
    }
}

impl FromStr for Subrating {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reliability" => Ok(Subrating::Reliability),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Subrating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Subrating::Reliability => "reliability",
            }
        )
    }
}

/// Returns a copy of `entries` ordered per `mode`. The input slice is
/// never reordered in place.
///
/// `sort_by` is stable, so ties keep their input order here; the data
/// contract makes no such promise and callers must not rely on it.
pub fn sorted(entries: &[Bookmaker], mode: SortMode) -> Vec<Bookmaker> {
    let mut arr = entries.to_vec();
    match mode {
        SortMode::ByUser => arr.sort_by(|a, b| b.reviews_count.cmp(&a.reviews_count)),
        SortMode::ByEditors => arr.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortMode::ByBonus => arr.sort_by(|a, b| bonus_amount(b).total_cmp(&bonus_amount(a))),
        SortMode::BySubrating(Subrating::Reliability) => {
            arr.sort_by(|a, b| reliability(b).total_cmp(&reliability(a)))
        }
        SortMode::Unsorted => {}
    }
    arr
}

fn bonus_amount(entry: &Bookmaker) -> f64 {
    entry.bonus.as_ref().map(|b| b.amount()).unwrap_or(0.0)
}

fn reliability(entry: &Bookmaker) -> f64 {
    entry.reliability.unwrap_or(0.0)
}
