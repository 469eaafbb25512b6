use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vaidya_core::{
    checking::InteractionCheckService,
    config::{data_dir_from_env_value, validate_data_dir},
    interaction::{EvaluationResult, RuleCatalogue},
    repositories::{
        doctors::DoctorService, patients::PatientService, prescriptions::PrescriptionService,
    },
    seed::write_seed_data,
    CoreConfig,
};

#[derive(Parser)]
#[command(name = "vaidya")]
#[command(about = "Vaidya prescription interaction checker CLI")]
struct Cli {
    /// Data directory (defaults to VAIDYA_DATA_DIR, then ./vaidya_data)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the bundled doctors, patients and interaction rules into the data directory
    Init {
        /// Overwrite files that already exist
        #[arg(long)]
        force: bool,
    },
    /// List the interaction rule catalogue
    Rules,
    /// List all patients
    Patients,
    /// Check medicines against a patient's diseases and each other
    Check {
        /// Patient identifier, e.g. P001
        #[arg(long)]
        patient: String,
        /// Record the check against this doctor
        #[arg(long)]
        doctor: Option<u32>,
        /// Medicine names
        #[arg(required = true)]
        medicines: Vec<String>,
    },
    /// Show a doctor's recorded checks, newest first
    History {
        #[arg(long)]
        doctor: u32,
    },
    /// Show verdict counts for a doctor
    Stats {
        #[arg(long)]
        doctor: u32,
    },
}

fn load_config(data_dir: PathBuf) -> Result<Arc<CoreConfig>, Box<dyn std::error::Error>> {
    let cfg = CoreConfig::new(data_dir)?;
    validate_data_dir(&cfg)?;
    Ok(Arc::new(cfg))
}

fn print_evaluation(evaluation: &EvaluationResult) {
    println!("Result: {}", evaluation.verdict());
    if evaluation.matches().is_empty() {
        println!("No interactions found.");
    }
    for m in evaluation.matches() {
        println!("  [{}] {}: {}", m.severity, m.label, m.description);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vaidya_core=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let data_dir = cli
        .data_dir
        .unwrap_or_else(|| data_dir_from_env_value(std::env::var("VAIDYA_DATA_DIR").ok()));

    match cli.command {
        Some(Commands::Init { force }) => {
            let written = write_seed_data(&data_dir, force)?;
            if written.is_empty() {
                println!(
                    "Data directory {} already initialised (use --force to overwrite).",
                    data_dir.display()
                );
            }
            for path in written {
                println!("Wrote {}", path.display());
            }
        }
        Some(Commands::Rules) => {
            let cfg = load_config(data_dir)?;
            let catalogue = RuleCatalogue::load(&cfg.interactions_file())?;
            for rule in catalogue.rules() {
                println!(
                    "{} | {} + {} | {} | {}",
                    rule.kind, rule.drug_a, rule.drug_b, rule.severity, rule.description
                );
            }
        }
        Some(Commands::Patients) => {
            let cfg = load_config(data_dir)?;
            let patients = PatientService::new(cfg).list()?;
            if patients.is_empty() {
                println!("No patients found.");
            }
            for patient in patients {
                println!(
                    "ID: {}, Name: {}, Age: {}, Diseases: {}",
                    patient.id,
                    patient.name,
                    patient.age,
                    patient.diseases_display()
                );
            }
        }
        Some(Commands::Check {
            patient,
            doctor,
            medicines,
        }) => {
            let cfg = load_config(data_dir)?;
            let catalogue = RuleCatalogue::load(&cfg.interactions_file())?;
            let service = InteractionCheckService::new(cfg.clone(), Arc::new(catalogue));

            match doctor {
                Some(doctor_id) => {
                    let doctor = DoctorService::new(cfg).find(doctor_id)?;
                    let checked = service.check_prescription(&doctor, &patient, &medicines)?;
                    print_evaluation(&checked.evaluation);
                    println!("Recorded as {}", checked.record.id);
                }
                None => {
                    let (_, evaluation) = service.evaluate_for_patient(&patient, &medicines)?;
                    print_evaluation(&evaluation);
                }
            }
        }
        Some(Commands::History { doctor }) => {
            let cfg = load_config(data_dir)?;
            let records = PrescriptionService::new(cfg).history(doctor);
            if records.is_empty() {
                println!("No prescriptions recorded.");
            }
            for record in records {
                println!(
                    "{} | {} | {} | {} | {}",
                    record.created_at.to_rfc3339(),
                    record.id,
                    record.patient_id,
                    record.verdict,
                    record.medicines
                );
            }
        }
        Some(Commands::Stats { doctor }) => {
            let cfg = load_config(data_dir)?;
            let stats = PrescriptionService::new(cfg).stats(doctor);
            println!(
                "Total: {}, Safe: {}, Warning: {}, Danger: {}",
                stats.total, stats.safe, stats.warning, stats.danger
            );
        }
        None => {
            println!("Use 'vaidya --help' for commands");
        }
    }

    Ok(())
}
