use std::env;
use std::path::PathBuf;

use donorbridge_generate::output::csv::write_dataset_csv;
use donorbridge_generate::{DatasetSpec, HolderCapacity, generate_dataset};
use tracing_subscriber::EnvFilter;

const DEFAULT_CAMPAIGNS: [&str; 10] = [
    "Annual Fund Drive",
    "Fiscal Year End Appeal",
    "Spring Gala",
    "School Supplies",
    "Capital Campaign",
    "Scholarship Drive",
    "Summer Campaign",
    "Year-End Appeal",
    "Monthly Giving",
    "Legacy Society",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut out_dir = PathBuf::from("out");
    let mut donors = 1000_u64;
    let mut donations = 5000_u64;
    let mut seed = Some(42_u64);

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => out_dir = args.next().map(PathBuf::from).ok_or("missing --out value")?,
            "--donors" => donors = args.next().ok_or("missing --donors value")?.parse()?,
            "--donations" => donations = args.next().ok_or("missing --donations value")?.parse()?,
            "--seed" => seed = Some(args.next().ok_or("missing --seed value")?.parse()?),
            "--no-seed" => seed = None,
            _ => return Err(format!("unexpected argument '{arg}'").into()),
        }
    }

    let holders = (1..=5)
        .map(|id| HolderCapacity {
            portfolio_holder_id: id,
            capacity: donors as usize / 10,
        })
        .collect();

    let spec = DatasetSpec {
        donors,
        donations,
        campaign_names: DEFAULT_CAMPAIGNS.iter().map(|name| name.to_string()).collect(),
        holders,
        no_campaign_rate: 0.1,
        seed,
    };

    let dataset = generate_dataset(&spec)?;
    let bytes = write_dataset_csv(&out_dir, &dataset)?;

    println!(
        "wrote {} donors, {} campaigns, {} donations, {} assignments ({bytes} bytes) to {}",
        dataset.report.donors,
        dataset.report.campaigns,
        dataset.report.donations,
        dataset.report.assignments,
        out_dir.display()
    );
    Ok(())
}
