use clap::Parser;
use schoolbank::app::run_bank_session;
use schoolbank::utils::error::ErrorCategory;
use schoolbank::{AppError, CliConfig, StdConsole};

#[derive(Parser)]
#[command(name = "bank")]
#[command(about = "Toy bank with savings, checking and trust accounts")]
struct Args {
    #[command(flatten)]
    common: CliConfig,
}

fn main() {
    let args = Args::parse();

    // 初始化日誌
    args.common.init_logging();

    tracing::info!("🚀 Starting bank console");

    if let Err(e) = run(&args) {
        // 登入失敗只結束本次會話，訊息已顯示在選單上
        if e.category() != ErrorCategory::Authentication {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
        }
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        let exit_code = e.severity().exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let config = args.common.load()?;
    let mut bank = config.bank.build_bank();
    tracing::debug!(accounts = bank.len(), "bank seeded");

    let mut console = StdConsole::new();
    run_bank_session(&mut console, &mut bank)
}
