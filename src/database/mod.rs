pub mod manager;
pub mod models;
pub mod schema;
pub mod update_builder;

/// Result of a mutating statement, distinguishing "ran and matched rows",
/// "keyed statement matched nothing" and "nothing to do".
///
/// Repositories return this instead of a bare boolean so callers can tell a
/// miss apart from an actual storage fault (which travels as an error).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The statement ran; `rows_affected` may be 0 for bulk deletes.
    Applied { rows_affected: u64 },
    /// A statement keyed on an identifier matched no row.
    NoMatch,
    /// No statement was issued (e.g. an empty partial update).
    Noop,
}

impl MutationOutcome {
    /// Outcome for a statement expected to match exactly one row.
    pub fn from_keyed(rows_affected: u64) -> Self {
        if rows_affected == 0 {
            MutationOutcome::NoMatch
        } else {
            MutationOutcome::Applied { rows_affected }
        }
    }

    /// Outcome for a bulk statement, where zero matched rows is still success.
    pub fn from_bulk(rows_affected: u64) -> Self {
        MutationOutcome::Applied { rows_affected }
    }

    pub fn succeeded(&self) -> bool {
        !matches!(self, MutationOutcome::NoMatch)
    }

    pub fn rows_affected(&self) -> u64 {
        match self {
            MutationOutcome::Applied { rows_affected } => *rows_affected,
            MutationOutcome::NoMatch | MutationOutcome::Noop => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyed_outcome_distinguishes_miss() {
        assert_eq!(MutationOutcome::from_keyed(1), MutationOutcome::Applied { rows_affected: 1 });
        assert_eq!(MutationOutcome::from_keyed(0), MutationOutcome::NoMatch);
        assert!(!MutationOutcome::from_keyed(0).succeeded());
    }

    #[test]
    fn bulk_outcome_accepts_zero_rows() {
        let outcome = MutationOutcome::from_bulk(0);
        assert!(outcome.succeeded());
        assert_eq!(outcome.rows_affected(), 0);
    }
}
