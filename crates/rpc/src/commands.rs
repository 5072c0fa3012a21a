//! CLI commands

use credo_core::{AccountId, LoanId};
use credo_engine::Assessment;

use crate::context::AppContext;

/// Register the caller as a borrower (or reset an existing profile).
pub fn register(
    ctx: &mut AppContext,
    caller: &AccountId,
    collateral: u64,
    correlation_id: &str,
) -> anyhow::Result<()> {
    ctx.engine.register(caller, collateral)?;
    ctx.save()?;

    println!(
        "✅ Registered {} with {} collateral (op: {})",
        caller, collateral, correlation_id
    );
    Ok(())
}

/// Top up the caller's collateral.
pub fn top_up(
    ctx: &mut AppContext,
    caller: &AccountId,
    amount: u64,
    correlation_id: &str,
) -> anyhow::Result<()> {
    let total = ctx.engine.add_collateral(caller, amount)?;
    ctx.save()?;

    println!(
        "✅ Added {} collateral for {} (total: {}, op: {})",
        amount, caller, total, correlation_id
    );
    Ok(())
}

/// Run the assessment pipeline and issue a loan on full approval.
pub fn assess(
    ctx: &mut AppContext,
    caller: &AccountId,
    amount: u64,
    correlation_id: &str,
) -> anyhow::Result<()> {
    let height = ctx.height();
    let outcome = ctx.engine.assess_and_issue(caller, amount, height)?;
    ctx.save()?;

    match &outcome {
        Assessment::Approved {
            loan_id,
            risk_score,
            interest_rate,
            approved_amount,
            duration,
        } => println!(
            "✅ APPROVED loan {} for {}: {} at {}% over {} blocks (score {}, op: {})",
            loan_id, caller, approved_amount, interest_rate, duration, risk_score, correlation_id
        ),
        Assessment::PartialApproval {
            risk_score,
            interest_rate,
            approved_amount,
        } => println!(
            "⚠️  PARTIAL: {} supports at most {} at {}% (score {}); no loan issued",
            caller, approved_amount, interest_rate, risk_score
        ),
        Assessment::Rejected { risk_score } => {
            println!("❌ REJECTED: {} scored {} below threshold", caller, risk_score)
        }
    }
    Ok(())
}

/// Dry-run the assessment without touching state.
pub fn preview(ctx: &AppContext, caller: &AccountId) -> anyhow::Result<()> {
    let preview = ctx.engine.preview(caller)?;

    println!(
        "Preview for {}: raw {} / adjusted {} ({}), rate {}%, duration {}, max loan {}",
        caller,
        preview.raw_score,
        preview.adjusted_score,
        if preview.qualifies { "qualifies" } else { "below threshold" },
        preview.interest_rate,
        preview.duration,
        preview.max_loan
    );
    Ok(())
}

/// Repay the caller's active loan.
pub fn repay(ctx: &mut AppContext, caller: &AccountId, correlation_id: &str) -> anyhow::Result<()> {
    let loan_id = ctx.engine.repay(caller)?;
    ctx.save()?;

    println!("✅ Loan {} repaid by {} (op: {})", loan_id, caller, correlation_id);
    Ok(())
}

/// Liquidate a past-due borrower. Operator only.
pub fn liquidate(
    ctx: &mut AppContext,
    caller: &AccountId,
    borrower: &AccountId,
    correlation_id: &str,
) -> anyhow::Result<()> {
    let height = ctx.height();
    let loan_id = ctx.engine.liquidate(caller, borrower, height)?;
    ctx.save()?;

    println!(
        "✅ Loan {} of {} liquidated at height {} (op: {})",
        loan_id, borrower, height, correlation_id
    );
    Ok(())
}

/// Flip the circuit breaker. Operator only.
pub fn set_paused(ctx: &mut AppContext, caller: &AccountId, paused: bool) -> anyhow::Result<()> {
    ctx.engine.set_paused(caller, paused)?;
    ctx.save()?;

    println!("✅ System {}", if paused { "paused" } else { "resumed" });
    Ok(())
}

/// Overwrite the scoring weights and threshold. Operator only.
pub fn set_weights(
    ctx: &mut AppContext,
    caller: &AccountId,
    weight_collateral: u64,
    weight_history: u64,
    weight_repayment: u64,
    risk_threshold: u64,
) -> anyhow::Result<()> {
    ctx.engine.set_model_weights(
        caller,
        weight_collateral,
        weight_history,
        weight_repayment,
        risk_threshold,
    )?;
    ctx.save()?;

    println!(
        "✅ Model weights set to ({}, {}, {}), threshold {}",
        weight_collateral, weight_history, weight_repayment, risk_threshold
    );
    Ok(())
}

/// Overwrite the market risk factor. Operator only.
pub fn set_market_risk(ctx: &mut AppContext, caller: &AccountId, factor: u64) -> anyhow::Result<()> {
    ctx.engine.update_market_risk(caller, factor)?;
    ctx.save()?;

    println!("✅ Market risk factor set to {}", factor);
    Ok(())
}

/// Print a borrower's profile.
pub fn profile(ctx: &AppContext, account: &AccountId) -> anyhow::Result<()> {
    match ctx.engine.profile(account) {
        Some(profile) => {
            println!("Profile {}", account);
            println!("  collateral:       {}", profile.collateral);
            println!("  history score:    {}", profile.history_score);
            println!("  repayments:       {}", profile.repayment_count);
            println!("  defaults:         {}", profile.default_count);
            match profile.active_loan {
                Some(id) => println!("  active loan:      {}", id),
                None => println!("  active loan:      none"),
            }
        }
        None => println!("No profile registered for {}", account),
    }
    Ok(())
}

/// Print a loan record.
pub fn loan(ctx: &AppContext, id: u64) -> anyhow::Result<()> {
    match ctx.engine.loan(LoanId::new(id)) {
        Some(loan) => println!("{}", serde_json::to_string_pretty(loan)?),
        None => println!("Loan #{} not found", id),
    }
    Ok(())
}

/// Print system-wide status.
pub fn status(ctx: &AppContext) -> anyhow::Result<()> {
    let book = ctx.engine.loan_book();
    let params = ctx.engine.params();

    println!("Credo status @ height {}", ctx.height());
    println!(
        "  paused: {} | operator: {}",
        ctx.engine.is_paused(),
        ctx.engine.operator()
    );
    println!(
        "  weights: ({}, {}, {}) | threshold: {} | market risk: {}",
        params.weight_collateral,
        params.weight_history,
        params.weight_repayment,
        params.risk_threshold,
        params.market_risk_factor
    );
    println!(
        "  loans: {} active / {} repaid / {} liquidated | outstanding principal: {}",
        book.active, book.repaid, book.liquidated, book.outstanding_principal
    );
    Ok(())
}
