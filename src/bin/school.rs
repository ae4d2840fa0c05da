use clap::Parser;
use schoolbank::app::run_school_menu;
use schoolbank::{AppError, CliConfig, StdConsole};

#[derive(Parser)]
#[command(name = "school")]
#[command(about = "In-memory student management system")]
struct Args {
    #[command(flatten)]
    common: CliConfig,
}

fn main() {
    let args = Args::parse();

    // 初始化日誌
    args.common.init_logging();

    tracing::info!("🚀 Starting school records manager");

    if let Err(e) = run(&args) {
        report(e);
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let config = args.common.load()?;
    let mut registry = config.school.build_registry()?;
    tracing::debug!(
        students = registry.student_count(),
        courses = registry.course_count(),
        instructors = registry.instructor_count(),
        "registry seeded"
    );

    let mut console = StdConsole::new();
    run_school_menu(&mut console, &mut registry)
}

fn report(e: AppError) {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    let exit_code = e.severity().exit_code();
    if exit_code > 0 {
        std::process::exit(exit_code);
    }
}
