use clap::{Args, Parser, Subcommand};

use patient_care_relay::client::api::{ApiClient, ApiTarget, DEFAULT_BASE_PATH};
use patient_care_relay::client::pages::{self, RegistrationForm};
use patient_care_relay::client::patient::{Exercise, Medication};
use patient_care_relay::relay::RelayKind;

#[derive(Parser)]
#[command(name = "care-cli")]
#[command(about = "Register patients and query schedules or adherence through the relay", long_about = None)]
struct Cli {
    /// Origin of the relay front door.
    #[arg(short, long, default_value = "http://localhost:3001")]
    url: String,

    /// Call the deployed routes under the base path instead of `/api`.
    #[arg(long)]
    deployed: bool,

    #[arg(long, default_value = DEFAULT_BASE_PATH)]
    base_path: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a patient with a care plan
    Register(RegisterArgs),
    /// Generate a daily reminder schedule
    Schedule(LookupArgs),
    /// Fetch adherence analytics
    Adherence(LookupArgs),
}

#[derive(Args)]
struct RegisterArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    age: String,

    /// Defaults to a generated `p_NNNN` identifier.
    #[arg(long)]
    patient_id: Option<String>,

    /// `name|dosage|frequency`, up to three times.
    #[arg(long = "medication", value_parser = parse_medication)]
    medications: Vec<Medication>,

    /// `type|duration|timing`, up to three times.
    #[arg(long = "exercise", value_parser = parse_exercise)]
    exercises: Vec<Exercise>,
}

#[derive(Args)]
struct LookupArgs {
    #[arg(long)]
    patient_id: String,

    #[arg(long)]
    name: String,
}

fn split3(value: &str) -> Result<(String, String, String), String> {
    let parts: Vec<&str> = value.split('|').map(str::trim).collect();
    match parts.as_slice() {
        [a, b, c] => Ok((a.to_string(), b.to_string(), c.to_string())),
        _ => Err(format!("expected three '|'-separated fields, got '{}'", value)),
    }
}

fn parse_medication(value: &str) -> Result<Medication, String> {
    let (name, dosage, frequency) = split3(value)?;
    Ok(Medication { name, dosage, frequency })
}

fn parse_exercise(value: &str) -> Result<Exercise, String> {
    let (kind, duration, timing) = split3(value)?;
    Ok(Exercise { kind, duration, timing })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let target = if cli.deployed {
        ApiTarget::deployed(&cli.base_path)
    } else {
        ApiTarget::Development
    };
    let client = ApiClient::new(&cli.url, target);

    match cli.command {
        Commands::Register(args) => {
            let mut form = RegistrationForm::new();
            if let Some(id) = args.patient_id {
                form.patient_id = id;
            }
            form.name = args.name;
            form.age = args.age;
            form.medications.clear();
            form.exercises.clear();
            for m in args.medications {
                if !form.add_medication(m) {
                    eprintln!("Ignoring medication beyond the first three");
                }
            }
            for e in args.exercises {
                if !form.add_exercise(e) {
                    eprintln!("Ignoring exercise beyond the first three");
                }
            }

            match pages::register(&client, &form).await {
                Ok((record, response)) => {
                    println!("Patient registered successfully! Care plan has been created.");
                    println!("Patient ID: {}", record.patient_id);
                    println!("{}", serde_json::to_string_pretty(&response)?);
                }
                Err(e) => fail(RelayKind::Registration, &e),
            }
        }
        Commands::Schedule(args) => {
            match pages::schedule(&client, &args.patient_id, &args.name).await {
                Ok(data) => {
                    println!("Tasks successfully scheduled for Google Calendar!");
                    println!("Schedule created for {}", data.name);
                    for item in &data.daily_reminders {
                        println!("  {}  {}", item.time, item.task);
                    }
                }
                Err(e) => fail(RelayKind::Scheduling, &e),
            }
        }
        Commands::Adherence(args) => {
            match pages::adherence(&client, &args.patient_id, &args.name).await {
                Ok(data) => {
                    println!("{}", data.level().message());
                    println!("{}", serde_json::to_string_pretty(&data)?);
                }
                Err(e) => fail(RelayKind::Adherence, &e),
            }
        }
    }

    Ok(())
}

fn fail(kind: RelayKind, err: &pages::PageError) -> ! {
    eprintln!("{}", err.user_message(kind));
    eprintln!("  cause: {}", err);
    std::process::exit(1);
}
