//! Credo CLI - Main entry point

use clap::{Parser, Subcommand};
use credo_core::{AccountId, Height};
use credo_governance::ModelParams;
use credo_rpc::{commands, AppContext};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "credo")]
#[command(about = "Credo - Credit-risk scoring and loan lifecycle", long_about = None)]
struct Cli {
    /// Data directory path
    #[arg(short, long, default_value = "./data")]
    data: PathBuf,

    /// Caller identity for this operation
    #[arg(short, long, default_value = "OPERATOR")]
    caller: String,

    /// Advance the ledger height counter before executing (monotonic)
    #[arg(long)]
    height: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the system with an operator and model parameters
    Init {
        /// Operator account for governance and liquidations
        #[arg(long, default_value = "OPERATOR")]
        operator: String,
        /// Optional JSON file with model parameters
        #[arg(long)]
        params: Option<PathBuf>,
    },

    /// Register the caller as a borrower
    Register {
        /// Initial collateral to post
        collateral: u64,
    },

    /// Add collateral to the caller's profile
    TopUp {
        /// Amount to add
        amount: u64,
    },

    /// Assess the caller and issue a loan on full approval
    Assess {
        /// Requested principal
        amount: u64,
        /// Optional correlation ID
        #[arg(long)]
        correlation_id: Option<String>,
    },

    /// Dry-run the assessment for the caller (no state change)
    Preview,

    /// Repay the caller's active loan
    Repay,

    /// Liquidate a past-due borrower (operator only)
    Liquidate {
        /// Borrower to liquidate
        borrower: String,
    },

    /// Pause all non-operator mutations (operator only)
    Pause,

    /// Resume normal operation (operator only)
    Resume,

    /// Overwrite scoring weights and threshold (operator only)
    SetWeights {
        weight_collateral: u64,
        weight_history: u64,
        weight_repayment: u64,
        risk_threshold: u64,
    },

    /// Overwrite the market risk factor (operator only)
    SetMarketRisk { factor: u64 },

    /// Show a borrower profile
    Profile {
        /// Account to inspect (defaults to the caller)
        account: Option<String>,
    },

    /// Show a loan record
    Loan { id: u64 },

    /// Show system-wide status
    Status,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let caller = AccountId::new(cli.caller.clone());

    if let Commands::Init { operator, params } = &cli.command {
        let params = match params {
            Some(path) => ModelParams::from_file(path)?,
            None => ModelParams::default(),
        };
        AppContext::init(&cli.data, AccountId::new(operator.clone()), params)?;
        println!("✅ System initialized (operator: {})", operator);
        return Ok(());
    }

    let mut ctx = AppContext::open(&cli.data)?;
    if let Some(height) = cli.height {
        ctx.advance_height(Height::new(height))?;
        ctx.save()?;
    }

    match cli.command {
        Commands::Init { .. } => unreachable!("handled above"),

        Commands::Register { collateral } => {
            let correlation_id = Uuid::new_v4().to_string();
            commands::register(&mut ctx, &caller, collateral, &correlation_id)?;
        }

        Commands::TopUp { amount } => {
            let correlation_id = Uuid::new_v4().to_string();
            commands::top_up(&mut ctx, &caller, amount, &correlation_id)?;
        }

        Commands::Assess {
            amount,
            correlation_id,
        } => {
            let correlation_id = correlation_id.unwrap_or_else(|| Uuid::new_v4().to_string());
            commands::assess(&mut ctx, &caller, amount, &correlation_id)?;
        }

        Commands::Preview => {
            commands::preview(&ctx, &caller)?;
        }

        Commands::Repay => {
            let correlation_id = Uuid::new_v4().to_string();
            commands::repay(&mut ctx, &caller, &correlation_id)?;
        }

        Commands::Liquidate { borrower } => {
            let correlation_id = Uuid::new_v4().to_string();
            commands::liquidate(&mut ctx, &caller, &AccountId::new(borrower), &correlation_id)?;
        }

        Commands::Pause => {
            commands::set_paused(&mut ctx, &caller, true)?;
        }

        Commands::Resume => {
            commands::set_paused(&mut ctx, &caller, false)?;
        }

        Commands::SetWeights {
            weight_collateral,
            weight_history,
            weight_repayment,
            risk_threshold,
        } => {
            commands::set_weights(
                &mut ctx,
                &caller,
                weight_collateral,
                weight_history,
                weight_repayment,
                risk_threshold,
            )?;
        }

        Commands::SetMarketRisk { factor } => {
            commands::set_market_risk(&mut ctx, &caller, factor)?;
        }

        Commands::Profile { account } => {
            let account = account.map(AccountId::new).unwrap_or(caller);
            commands::profile(&ctx, &account)?;
        }

        Commands::Loan { id } => {
            commands::loan(&ctx, id)?;
        }

        Commands::Status => {
            commands::status(&ctx)?;
        }
    }

    Ok(())
}
