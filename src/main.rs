// Interactive console front end for the spectrum allocation dashboard.
//
// - Option [1] loads the allocation service's JSON result and prints
//   what had to be defaulted.
// - Option [2] derives every dashboard view, writes three CSV tables and a
//   JSON snapshot, and previews each table on the console.
// - After generating reports, the user can go back to the menu or exit.
use once_cell::sync::Lazy;
use spectrum_report::error::{ReportError, Result};
use spectrum_report::types::{AllocationResult, Bucket};
use spectrum_report::{loader, output, reports, util, Config};
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

// Holds the last loaded result so reports can be regenerated without
// reloading. A new load replaces it wholesale.
static APP_STATE: Lazy<Mutex<AppState>> = Lazy::new(|| Mutex::new(AppState { data: None }));

struct AppState {
    data: Option<AllocationResult>,
}

fn app_state() -> MutexGuard<'static, AppState> {
    APP_STATE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Read a single line of input after printing the common "Enter choice:" prompt.
///
/// Returns `None` once stdin is closed.
fn read_choice() -> Option<String> {
    print!("Enter choice: ");
    let _ = io::stdout().flush();
    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf.trim().to_string()),
    }
}

/// Returns `true` if the user chose `Y`, `false` if they chose `N`.
fn prompt_back_to_menu() -> bool {
    loop {
        print!("Back to Report Selection (Y/N): ");
        let _ = io::stdout().flush();
        let mut buf = String::new();
        if io::stdin().read_line(&mut buf).unwrap_or(0) == 0 {
            return false;
        }
        match buf.trim().to_uppercase().as_str() {
            "Y" => return true,
            "N" => return false,
            _ => println!("Invalid choice. Please enter Y or N."),
        }
    }
}

fn handle_load(config: &Config) {
    match loader::load_allocation(&config.input_path) {
        Ok((data, load_report)) => {
            println!(
                "Loaded allocation result ({} regions from {})",
                util::format_int(load_report.regions),
                config.input_path.display()
            );
            if load_report.missing_numeric_fields > 0 {
                println!(
                    "Note: {} numeric fields were missing and read as 0.",
                    util::format_int(load_report.missing_numeric_fields)
                );
            }
            if load_report.missing_policy_fields > 0 {
                println!(
                    "Info: {} policy fields were missing and will show as blank.",
                    util::format_int(load_report.missing_policy_fields)
                );
            }
            println!();
            app_state().data = Some(data);
        }
        Err(e) => {
            error!(error = %e, "failed to load allocation result");
            eprintln!("Failed to load file: {}\n", e);
        }
    }
}

fn generate_reports(config: &Config) -> Result<()> {
    let data = app_state().data.clone().ok_or(ReportError::NoData)?;
    std::fs::create_dir_all(&config.output_dir)
        .map_err(|e| ReportError::io(&config.output_dir, e))?;

    println!("Generating reports...\n");

    let r1 = reports::generate_allocation_table(&data);
    let file1 = config.output_dir.join("report1_allocation_table.csv");
    output::write_csv(&file1, &r1)?;
    println!("Report 1: Detailed Region-wise Allocation\n");
    output::preview_table_rows(&r1, 5);
    let legend: Vec<String> = Bucket::LEGEND
        .iter()
        .map(|b| format!("{} {}", b.label(), b.range_label()))
        .collect();
    println!("Categories by final allocation percentile: {}", legend.join(", "));
    println!("(Full table exported to {})\n", file1.display());

    let r2 = reports::generate_share_table(&data, config.top_n);
    let file2 = config.output_dir.join("report2_top_regions.csv");
    output::write_csv(&file2, &r2)?;
    println!("Report 2: Top {} Regions by Final Allocation\n", config.top_n);
    output::preview_table_rows(&r2, config.top_n);
    println!("(Full table exported to {})\n", file2.display());

    let r3 = reports::generate_policy_table(&data);
    let file3 = config.output_dir.join("report3_policy_compliance.csv");
    output::write_csv(&file3, &r3)?;
    println!("Report 3: Policy Compliance\n");
    output::preview_table_rows(&r3, 5);
    println!("(Full table exported to {})\n", file3.display());

    let snapshot = reports::build_snapshot(&data, config);
    let file4 = config.output_dir.join("dashboard.json");
    output::write_json(&file4, &snapshot)?;

    println!("Dashboard Summary ({}):", file4.display());
    let stats = &snapshot.statistics;
    if let (Some(high), Some(low)) = (&stats.highest, &stats.lowest) {
        println!("  Highest: {} ({} MHz)", high.region, util::format_number(high.value, 2));
        println!("  Lowest:  {} ({} MHz)", low.region, util::format_number(low.value, 2));
    }
    println!("  Average: {} MHz over {} regions", util::format_number(stats.average, 2), stats.count);
    println!("  {}", reports::utilization_line(&snapshot));
    println!(
        "  Policy: {} capped, {} compliant ({:.1}%)\n",
        snapshot.policy.capped, snapshot.policy.compliant, snapshot.policy.compliance_percent
    );
    info!(regions = stats.count, "generated dashboard reports");
    Ok(())
}

fn handle_generate_reports(config: &Config) {
    match generate_reports(config) {
        Ok(()) => {}
        Err(ReportError::NoData) => {
            println!("Error: No data loaded. Please load the allocation result first (option 1).\n");
        }
        Err(e) => {
            error!(error = %e, "report generation failed");
            eprintln!("Write error: {}\n", e);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            eprintln!("Configuration error: {}", e);
            std::process::exit(2);
        }
    };
    info!(?config, "starting spectrum report");

    loop {
        println!("Spectrum Allocation Dashboard:");
        println!("[1] Load the allocation result");
        println!("[2] Generate Reports\n");
        let Some(choice) = read_choice() else {
            break;
        };
        match choice.as_str() {
            "1" => {
                handle_load(&config);
            }
            "2" => {
                println!();
                handle_generate_reports(&config);
                if !prompt_back_to_menu() {
                    println!("Exiting the program.");
                    break;
                }
            }
            _ => {
                println!("Invalid choice. Please enter 1 or 2.\n");
            }
        }
    }
}
