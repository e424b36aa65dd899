use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tcr_app::{AppResult, RunOptions, RunRequest, project_service, report, run_service};
use tcr_contact::ContactModel;
use tcr_results::format_value;

#[derive(Parser)]
#[command(name = "tcr-cli")]
#[command(about = "Thermal contact resistance of layered stacks", long_about = None)]
struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate case file structure and material completeness
    Validate {
        /// Path to the case file (YAML or JSON)
        case_path: PathBuf,
    },
    /// List interfaces of the stack
    Interfaces {
        /// Path to the case file
        case_path: PathBuf,
    },
    /// Show effective surface parameters of every TCR interface
    Microsurface {
        /// Path to the case file
        case_path: PathBuf,
    },
    /// Show nominal pressure per force and TCR interface
    Pressures {
        /// Path to the case file
        case_path: PathBuf,
    },
    /// Run a contact model over every force case
    Run {
        /// Path to the case file
        case_path: PathBuf,
        /// Contact model (mikic_elastic, mikic_plastic, cmy, yovanovich)
        #[arg(short, long)]
        model: Option<ContactModel>,
        /// Results root directory (defaults to results/ next to the case)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Print results without writing CSV files
        #[arg(long)]
        no_export: bool,
    },
    /// List exported runs for a case
    Runs {
        /// Path to the case file
        case_path: PathBuf,
        /// Results root directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Interfaces { case_path } => cmd_interfaces(&case_path),
        Commands::Microsurface { case_path } => cmd_microsurface(&case_path),
        Commands::Pressures { case_path } => cmd_pressures(&case_path),
        Commands::Run {
            case_path,
            model,
            out,
            no_export,
        } => cmd_run(&case_path, model, out, !no_export),
        Commands::Runs { case_path, out } => cmd_runs(&case_path, out.as_deref()),
    }
}

fn cmd_validate(case_path: &Path) -> AppResult<()> {
    println!("Validating case: {}", case_path.display());
    let case = project_service::load_case(case_path)?;
    println!("✓ Case structure is valid");

    let check = project_service::check_case(&case)?;
    for (top, bottom) in &check.dropped_tcr_pairs {
        println!("  ! {top} → {bottom} is not a contiguous pair, flag dropped");
    }
    if check.missing_tims {
        println!("  ! TCR interfaces are defined but the TIM library is empty");
    }
    for issue in &check.material_issues {
        println!("  ! {issue}");
    }
    if check.is_ready() {
        println!("✓ Ready to run");
    }
    Ok(())
}

fn cmd_interfaces(case_path: &Path) -> AppResult<()> {
    let case = project_service::load_case(case_path)?;
    let interfaces = project_service::list_interfaces(&case)?;

    if interfaces.is_empty() {
        println!("Stack has fewer than two geometries, no interfaces");
        return Ok(());
    }
    println!("Interfaces of '{}':", case.name);
    for iface in interfaces {
        let assignment = match (&iface.tim, &iface.thickness) {
            (None, _) => "not configured".to_string(),
            (Some(tim), thickness) => {
                let tim = if tim.is_empty() { "no TIM" } else { tim.as_str() };
                match thickness.as_deref().filter(|t| !t.trim().is_empty()) {
                    Some(t) => format!("{tim}, thickness {t} m"),
                    None => tim.to_string(),
                }
            }
        };
        println!(
            "  [{}] {:<30} TCR: {:<3}  A = {:.6e} m²  {}",
            iface.index,
            iface.label,
            if iface.has_tcr { "yes" } else { "no" },
            iface.a_nominal,
            assignment
        );
    }
    Ok(())
}

fn cmd_microsurface(case_path: &Path) -> AppResult<()> {
    let case = project_service::load_case(case_path)?;
    let report = report::microsurface(&case)?;

    if report.interfaces.is_empty() && report.diagnostics.is_empty() {
        println!("No TCR interfaces");
        return Ok(());
    }
    println!(
        "{:<30} {:>12} {:>10} {:>10} {:>12} {:>12}",
        "Interface", "σ_s [m]", "m_s [-]", "k_s [W/mK]", "E' [Pa]", "Hc [Pa]"
    );
    for (_, p) in &report.interfaces {
        println!(
            "{:<30} {:>12.4e} {:>10.4} {:>10.3} {:>12.4e} {:>12.4e}",
            p.label, p.sig_s, p.m_s, p.k_s, p.e_s, p.hc_soft
        );
    }
    for d in &report.diagnostics {
        println!("  ! {d}");
    }
    Ok(())
}

fn cmd_pressures(case_path: &Path) -> AppResult<()> {
    let case = project_service::load_case(case_path)?;
    let rows = report::pressures(&case)?;

    println!("{:>12} {:<30} {:>14} {:>16}", "Force [N]", "Interface", "A [m²]", "Pressure [Pa]");
    for row in rows {
        println!(
            "{:>12} {:<30} {:>14.6e} {:>16.4}",
            row.force_n, row.interface, row.area_m2, row.pressure_pa
        );
    }
    Ok(())
}

fn cmd_run(case_path: &Path, model: Option<ContactModel>, out: Option<PathBuf>, export: bool) -> AppResult<()> {
    let request = RunRequest {
        case_path,
        options: RunOptions {
            model,
            export,
            out_dir: out,
            ..RunOptions::default()
        },
    };
    let response = run_service::run_case(&request)?;
    let output = &response.output;

    println!("✓ {} run completed: {}", output.model, response.run_id);
    for (top, bottom) in &response.dropped_tcr_pairs {
        println!("  ! {top} → {bottom} is not a contiguous pair, flag dropped");
    }
    for d in &output.diagnostics {
        println!("  ! {d}");
    }

    println!(
        "\n{:>12} {:>14} {:>14} {:>14} {:>14}",
        "Force [N]", "R_bulk [K/W]", "ΣTCR [K/W]", "R_total [K/W]", "Q [W]"
    );
    for s in &output.summaries {
        println!(
            "{:>12} {:>14} {:>14} {:>14} {:>14}",
            s.force_n,
            format_value(s.r_bulk, 4),
            format_value(s.tcr_sum, 4),
            format_value(s.r_total, 4),
            format_value(s.q_w, 4)
        );
    }

    if let Some(files) = &response.files {
        println!("\nResults written:");
        println!("  {}", files.detail.display());
        println!("  {}", files.summary.display());
    }
    println!("  ({:.3} s)", response.elapsed_s);
    Ok(())
}

fn cmd_runs(case_path: &Path, out: Option<&Path>) -> AppResult<()> {
    let runs = run_service::list_runs(case_path, out)?;

    if runs.is_empty() {
        println!("No exported runs found for: {}", case_path.display());
    } else {
        println!("Exported runs:");
        for manifest in runs {
            println!(
                "  {:<14} {} ({}, {} rows)",
                manifest.model, manifest.run_id, manifest.timestamp, manifest.detail_rows
            );
        }
    }
    Ok(())
}
