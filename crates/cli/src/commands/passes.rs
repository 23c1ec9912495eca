//! Pass commands: list, details, redeem, reset, status.
//!
//! # Usage
//!
//! ```bash
//! # Show every pass and its status
//! bp-cli list
//!
//! # Redeem a pass (asks for confirmation unless --yes)
//! bp-cli redeem food-treat
//!
//! # Return every pass to available
//! bp-cli reset --yes
//! ```

use std::convert::Infallible;

use birthday_pass_core::confirm::{ConfirmationGate, Gated, REDEEM_PROMPT, RESET_PROMPT, gated};
use birthday_pass_core::store::StorageBackend;
use birthday_pass_core::{Clock, Pass, PassError, PassStatus, RedemptionController, RedemptionRecord};

use super::emit;

const SUBTITLE: &str =
    "No sweets \u{2014} just power, memories, and small promises. Use them when you want.";

/// Printed under every card.
const VALIDITY_NOTE: &str = "Use within 1 year \u{b7} Redeem in person or show this page.";

const ALL_REDEEMED_TITLE: &str = "You used ALL the power. Proud of you.";
const ALL_REDEEMED_BODY: &str = "New season releases soon\u{2026} if you\u{2019}re nice to me.";

/// Show the greeting and every card.
pub fn list<B: StorageBackend, C: Clock>(
    passes: &RedemptionController<B, C>,
    friend_name: &str,
) {
    emit(&render_list(passes, friend_name));
}

/// Show one pass's title and description.
///
/// # Errors
///
/// Returns [`PassError::UnknownPass`] if `id` is not in the catalog.
pub fn details<B: StorageBackend, C: Clock>(
    passes: &RedemptionController<B, C>,
    id: &str,
) -> Result<(), PassError> {
    let pass = find(passes, id)?;
    emit(&[pass.title.clone(), String::new(), pass.description.clone()]);
    Ok(())
}

/// Redeem a pass after confirmation.
///
/// Already-redeemed passes are reported without prompting. Returns the
/// outcome so callers can tell a declined prompt from a redemption.
///
/// # Errors
///
/// Returns [`PassError::UnknownPass`] if `id` is not in the catalog.
pub fn redeem<B: StorageBackend, C: Clock>(
    passes: &mut RedemptionController<B, C>,
    id: &str,
    gate: &mut dyn ConfirmationGate,
) -> Result<Gated<RedemptionRecord>, PassError> {
    let title = find(passes, id)?.title.clone();

    if let Some(record) = passes.record(id).copied() {
        tracing::info!("{title} was already used on {}", format_date(&record));
        return Ok(Gated::Committed(record));
    }

    let outcome = gated(gate, REDEEM_PROMPT, || passes.redeem(id))?;
    match &outcome {
        Gated::Committed(record) => {
            tracing::info!("{title} redeemed on {}", format_date(record));
            if passes.all_redeemed() {
                emit(&[ALL_REDEEMED_TITLE.to_owned(), ALL_REDEEMED_BODY.to_owned()]);
            }
        }
        Gated::Declined => tracing::info!("Redemption cancelled, {title} is still available"),
    }
    Ok(outcome)
}

/// Return every pass to available after confirmation.
pub fn reset<B: StorageBackend, C: Clock>(
    passes: &mut RedemptionController<B, C>,
    gate: &mut dyn ConfirmationGate,
) -> Gated<()> {
    let Ok(outcome) = gated(gate, RESET_PROMPT, || {
        passes.reset_all();
        Ok::<_, Infallible>(())
    });

    match outcome {
        Gated::Committed(()) => tracing::info!("All passes are available again"),
        Gated::Declined => tracing::info!("Reset cancelled"),
    }
    outcome
}

/// Show how many passes are used.
pub fn status<B: StorageBackend, C: Clock>(passes: &RedemptionController<B, C>) {
    emit(&render_status(passes));
}

fn find<'a, B: StorageBackend, C: Clock>(
    passes: &'a RedemptionController<B, C>,
    id: &str,
) -> Result<&'a Pass, PassError> {
    passes.catalog().get(id).ok_or_else(|| {
        tracing::warn!(pass_id = %id, "Unknown pass");
        PassError::UnknownPass(id.to_owned())
    })
}

fn format_date(record: &RedemptionRecord) -> String {
    record.redeemed_at().map_or_else(
        || format!("an unknown date ({} ms)", record.date),
        |at| at.format("%Y-%m-%d %H:%M UTC").to_string(),
    )
}

fn render_list<B: StorageBackend, C: Clock>(
    passes: &RedemptionController<B, C>,
    friend_name: &str,
) -> Vec<String> {
    let mut lines = vec![
        format!("Happy Birthday {friend_name}!"),
        format!("Your {} Redeemable Passes", passes.catalog().len()),
        SUBTITLE.to_owned(),
    ];

    for (pass, status) in passes.passes() {
        lines.push(String::new());
        lines.push(format!("{} [{status}]", pass.title));
        lines.push(format!("  id: {}", pass.id));
        lines.push(format!("  {}", pass.description));
        if let Some(record) = passes.record(pass.id.as_str()) {
            lines.push(format!("  Used on {}", format_date(record)));
        }
        if !pass.image.is_empty() {
            lines.push(format!("  image: {}", pass.image));
        }
        lines.push(format!("  {VALIDITY_NOTE}"));
    }

    if passes.all_redeemed() {
        lines.push(String::new());
        lines.push(ALL_REDEEMED_TITLE.to_owned());
        lines.push(ALL_REDEEMED_BODY.to_owned());
    }
    lines
}

fn render_status<B: StorageBackend, C: Clock>(
    passes: &RedemptionController<B, C>,
) -> Vec<String> {
    let total = passes.catalog().len();
    let mut lines = vec![format!(
        "{} of {total} passes used",
        passes.redeemed_count()
    )];
    lines.extend(
        passes
            .passes()
            .filter(|(_, status)| *status == PassStatus::Available)
            .map(|(pass, _)| format!("  available: {}", pass.id)),
    );
    if passes.all_redeemed() {
        lines.push(ALL_REDEEMED_TITLE.to_owned());
    }
    lines
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use birthday_pass_core::confirm::{AutoConfirm, AutoDecline};
    use birthday_pass_core::store::MemoryBackend;
    use birthday_pass_core::{Catalog, FixedClock};

    use super::*;

    // 2024-03-01 12:30:00 UTC
    const NOW: i64 = 1_709_296_200_000;

    fn controller() -> RedemptionController<MemoryBackend, FixedClock> {
        RedemptionController::with_clock(
            Catalog::default(),
            MemoryBackend::new(),
            FixedClock(NOW),
        )
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&RedemptionRecord::new(NOW)), "2024-03-01 12:30 UTC");
        assert!(format_date(&RedemptionRecord::new(i64::MAX)).starts_with("an unknown date"));
    }

    #[test]
    fn test_render_list_fresh() {
        let lines = render_list(&controller(), "Sam");
        assert_eq!(
            lines.get(..3).unwrap(),
            &["Happy Birthday Sam!", "Your 5 Redeemable Passes", SUBTITLE]
        );
        assert_eq!(
            lines.iter().filter(|l| l.ends_with("[Available]")).count(),
            5
        );
        assert!(!lines.iter().any(|l| l == ALL_REDEEMED_TITLE));
    }

    #[test]
    fn test_render_list_shows_used_date() {
        let mut passes = controller();
        passes.redeem("food-treat").unwrap();
        let lines = render_list(&passes, "Sam");
        assert!(lines.iter().any(|l| l == "Food Treat Pass [Redeemed]"));
        assert!(lines.iter().any(|l| l == "  Used on 2024-03-01 12:30 UTC"));
    }

    #[test]
    fn test_render_list_all_redeemed_message() {
        let mut passes = controller();
        let ids: Vec<String> = passes.catalog().ids().map(ToString::to_string).collect();
        for id in &ids {
            passes.redeem(id).unwrap();
        }
        let lines = render_list(&passes, "Sam");
        assert!(lines.iter().any(|l| l == ALL_REDEEMED_TITLE));
    }

    #[test]
    fn test_redeem_confirmed() {
        let mut passes = controller();
        let outcome = redeem(&mut passes, "movie-night", &mut AutoConfirm).unwrap();
        assert_eq!(outcome, Gated::Committed(RedemptionRecord::new(NOW)));
        assert!(passes.is_redeemed("movie-night"));
    }

    #[test]
    fn test_redeem_declined() {
        let mut passes = controller();
        let outcome = redeem(&mut passes, "movie-night", &mut AutoDecline).unwrap();
        assert_eq!(outcome, Gated::Declined);
        assert!(!passes.is_redeemed("movie-night"));
    }

    #[test]
    fn test_redeem_already_used_skips_prompt() {
        let mut passes = controller();
        passes.redeem("chore-pass").unwrap();
        let mut asked = false;
        let mut gate = |_: &str| {
            asked = true;
            true
        };
        let outcome = redeem(&mut passes, "chore-pass", &mut gate).unwrap();
        assert!(outcome.is_committed());
        assert!(!asked);
    }

    #[test]
    fn test_redeem_unknown() {
        let mut passes = controller();
        let err = redeem(&mut passes, "nap-pass", &mut AutoConfirm).unwrap_err();
        assert_eq!(err, PassError::UnknownPass("nap-pass".to_owned()));
    }

    #[test]
    fn test_reset_declined_keeps_state() {
        let mut passes = controller();
        passes.redeem("food-treat").unwrap();
        assert_eq!(reset(&mut passes, &mut AutoDecline), Gated::Declined);
        assert!(passes.is_redeemed("food-treat"));
    }

    #[test]
    fn test_reset_confirmed() {
        let mut passes = controller();
        passes.redeem("food-treat").unwrap();
        assert!(reset(&mut passes, &mut AutoConfirm).is_committed());
        assert_eq!(passes.redeemed_count(), 0);
    }

    #[test]
    fn test_details_unknown() {
        assert!(details(&controller(), "nap-pass").is_err());
        assert!(details(&controller(), "visit-home").is_ok());
    }

    #[test]
    fn test_render_status() {
        let mut passes = controller();
        passes.redeem("argument-immunity").unwrap();
        let lines = render_status(&passes);
        assert_eq!(lines.first().unwrap(), "1 of 5 passes used");
        assert_eq!(lines.len(), 5);
        assert!(!lines.iter().any(|l| l.contains("argument-immunity")));
    }
}
