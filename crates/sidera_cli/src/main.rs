use clap::{Parser, Subcommand};
use sidera_content::ContentEntry;
use sidera_signs::{ALL_PLACEMENTS, ALL_SIGNS, Placement, Sign};

#[derive(Parser)]
#[command(name = "sidera", about = "Sidera astrology content CLI")]
struct Cli {
    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compatibility reading for an ordered sign pair
    Compat {
        /// Your sign
        user: String,
        /// The other sign
        other: String,
    },
    /// Compatibility readings for one sign against all twelve
    CompatAll {
        /// Your sign
        sign: String,
    },
    /// Placement interpretation for a sign (canonical lowercase keys)
    Content {
        /// Sign key, e.g. "aries"
        sign: String,
        /// Placement key, e.g. "sun"
        placement: String,
    },
    /// All interpretations for one placement
    ContentPlacement {
        /// Placement key, e.g. "moon"
        placement: String,
    },
    /// All interpretations for one sign
    ContentSign {
        /// Sign key, e.g. "leo"
        sign: String,
    },
    /// List the twelve signs in canonical order
    Signs,
    /// List the twelve placements in table order
    Placements,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compat { user, other } => {
            let record = sidera_compat::compatibility(&user, &other);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                print_compat(&record);
            }
        }
        Commands::CompatAll { sign } => {
            let records = sidera_compat::compatibility_for_all(&sign);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                for record in &records {
                    print_compat(record);
                    println!();
                }
            }
        }
        Commands::Content { sign, placement } => {
            let entry = sidera_content::placement_content_by_key(&sign, &placement);
            match entry {
                Some(entry) if cli.json => println!("{}", serde_json::to_string_pretty(entry)?),
                Some(entry) => print_content(entry),
                None => anyhow::bail!("no content for {}", sidera_signs::pair_key(&sign, &placement)),
            }
        }
        Commands::ContentPlacement { placement } => {
            let placement: Placement = placement.parse()?;
            let entries = sidera_content::content_for_placement(placement);
            print_content_list(&entries, cli.json)?;
        }
        Commands::ContentSign { sign } => {
            let sign: Sign = sign.parse()?;
            let entries = sidera_content::content_for_sign(sign);
            print_content_list(&entries, cli.json)?;
        }
        Commands::Signs => {
            for sign in ALL_SIGNS {
                println!("{}", sign.key());
            }
        }
        Commands::Placements => {
            for placement in ALL_PLACEMENTS {
                println!("{}", placement.key());
            }
        }
    }

    Ok(())
}

fn print_compat(record: &sidera_compat::CompatibilityRecord) {
    println!("{} ({} + {})", record.heading, record.user_sign, record.other_sign);
    match record.score {
        Some(score) => println!("score: {score}/10"),
        None => println!("score: unrated"),
    }
    println!("{}", record.description);
}

fn print_content(entry: &ContentEntry) {
    println!("{}", entry.title);
    if let Some(subtitle) = entry.subtitle {
        println!("{subtitle}");
    }
    for section in entry.sections {
        println!();
        if let Some(heading) = section.heading {
            println!("## {heading}");
        }
        println!("{}", section.content);
    }
    if !entry.traits.is_empty() {
        println!("\ntraits: {}", entry.traits.join(", "));
    }
    if !entry.strengths.is_empty() {
        println!("strengths: {}", entry.strengths.join(", "));
    }
    if !entry.challenges.is_empty() {
        println!("challenges: {}", entry.challenges.join(", "));
    }
}

fn print_content_list(entries: &[&'static ContentEntry], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
    } else {
        for entry in entries {
            print_content(entry);
            println!("\n---");
        }
    }
    Ok(())
}
