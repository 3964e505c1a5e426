use std::error::Error;

use clap::{Parser, Subcommand};
use jataka_chart::{
    AnalyticEphemeris, Ayanamsa, Chart, ChartConfig, GeoPosition, HouseSystem,
};
use jataka_dasha::{DashaSystem, current_dasha, dasha_timeline};
use jataka_ephem::ayanamsa_deg;
use jataka_time::CivilDateTime;

#[derive(Parser)]
#[command(name = "jataka", about = "Jataka chart and dasha CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a chart and print objects, houses and angles
    Chart {
        /// Birth date/time (YYYY-MM-DDThh:mm[:ss])
        #[arg(long)]
        date: String,
        /// UTC offset in hours, east positive
        #[arg(long, default_value = "0")]
        offset: f64,
        /// Latitude in degrees, north positive
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long)]
        lon: f64,
        /// Ayanamsa name for a sidereal chart (e.g. lahiri)
        #[arg(long)]
        ayanamsa: Option<String>,
        /// House system (wholesign, equal, porphyry, placidus, koch, meridian)
        #[arg(long)]
        hsys: Option<String>,
        /// Use Krishnamurti-Paddhati conventions
        #[arg(long)]
        kp: bool,
    },
    /// Compute a dasha timeline and the active periods
    Dasha {
        /// Dasha system (vimshottari, ashtottari, chara, sthira)
        #[arg(long)]
        system: String,
        /// Birth date/time (YYYY-MM-DDThh:mm[:ss])
        #[arg(long)]
        date: String,
        /// UTC offset in hours, east positive
        #[arg(long, default_value = "0")]
        offset: f64,
        /// Latitude in degrees, north positive
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long)]
        lon: f64,
        /// Ayanamsa name (defaults to lahiri)
        #[arg(long)]
        ayanamsa: Option<String>,
        /// Target date for the active-period query (defaults to birth)
        #[arg(long)]
        on: Option<String>,
    },
    /// Print the ayanamsa value at a date
    Ayanamsa {
        /// Ayanamsa name (e.g. lahiri)
        #[arg(long)]
        name: String,
        /// Date/time (YYYY-MM-DDThh:mm[:ss])
        #[arg(long)]
        date: String,
    },
}

fn parse_datetime(s: &str, offset: f64) -> Result<CivilDateTime, Box<dyn Error>> {
    let (date_part, time_part) = s
        .split_once('T')
        .ok_or_else(|| format!("expected YYYY-MM-DDThh:mm[:ss], got '{s}'"))?;

    let mut date_fields = date_part.split('-');
    let year: i32 = date_fields.next().ok_or("missing year")?.parse()?;
    let month: u32 = date_fields.next().ok_or("missing month")?.parse()?;
    let day: u32 = date_fields.next().ok_or("missing day")?.parse()?;

    let mut time_fields = time_part.split(':');
    let hour: u32 = time_fields.next().ok_or("missing hour")?.parse()?;
    let minute: u32 = time_fields.next().ok_or("missing minute")?.parse()?;
    let second: f64 = match time_fields.next() {
        Some(v) => v.parse()?,
        None => 0.0,
    };

    Ok(CivilDateTime::new(
        year, month, day, hour, minute, second, offset,
    )?)
}

fn parse_ayanamsa(s: &str) -> Result<Ayanamsa, Box<dyn Error>> {
    match s.to_ascii_lowercase().as_str() {
        "lahiri" => Ok(Ayanamsa::Lahiri),
        "raman" => Ok(Ayanamsa::Raman),
        "krishnamurti" | "kp" => Ok(Ayanamsa::Krishnamurti),
        "yukteshwar" => Ok(Ayanamsa::Yukteshwar),
        "jnbhasin" => Ok(Ayanamsa::JnBhasin),
        "suryasiddhanta" => Ok(Ayanamsa::SuryaSiddhanta),
        "aryabhata" => Ok(Ayanamsa::Aryabhata),
        "truecitra" => Ok(Ayanamsa::TrueCitra),
        "truerevati" => Ok(Ayanamsa::TrueRevati),
        _ => Err(format!("unknown ayanamsa '{s}'").into()),
    }
}

fn parse_house_system(s: &str) -> Result<HouseSystem, Box<dyn Error>> {
    match s.to_ascii_lowercase().as_str() {
        "wholesign" | "whole-sign" => Ok(HouseSystem::WholeSign),
        "equal" => Ok(HouseSystem::Equal),
        "porphyry" => Ok(HouseSystem::Porphyry),
        "placidus" => Ok(HouseSystem::Placidus),
        "koch" => Ok(HouseSystem::Koch),
        "meridian" => Ok(HouseSystem::Meridian),
        _ => Err(format!("unknown house system '{s}'").into()),
    }
}

fn parse_dasha_system(s: &str) -> Result<DashaSystem, Box<dyn Error>> {
    match s.to_ascii_lowercase().as_str() {
        "vimshottari" => Ok(DashaSystem::Vimshottari),
        "ashtottari" => Ok(DashaSystem::Ashtottari),
        "chara" => Ok(DashaSystem::Chara),
        "sthira" => Ok(DashaSystem::Sthira),
        _ => Err(format!("unknown dasha system '{s}'").into()),
    }
}

/// Format a longitude as sign-relative degrees/minutes/seconds.
fn format_position(lon: f64, sign_name: &str) -> String {
    let in_sign = lon % 30.0;
    let deg = in_sign.floor();
    let minutes_full = (in_sign - deg) * 60.0;
    let minutes = minutes_full.floor();
    let seconds = (minutes_full - minutes) * 60.0;
    format!("{deg:2.0}\u{00b0}{minutes:02.0}'{seconds:02.0}\" {sign_name}")
}

fn run_chart(
    date: String,
    offset: f64,
    lat: f64,
    lon: f64,
    ayanamsa: Option<String>,
    hsys: Option<String>,
    kp: bool,
) -> Result<(), Box<dyn Error>> {
    let birth = parse_datetime(&date, offset)?;
    let position = GeoPosition::new(lat, lon)?;

    let mut config = ChartConfig::new();
    if let Some(name) = ayanamsa {
        config = config.with_ayanamsa(parse_ayanamsa(&name)?);
    }
    if let Some(name) = hsys {
        config = config.with_house_system(parse_house_system(&name)?);
    }
    if kp {
        config = config.kp();
    }

    let provider = AnalyticEphemeris::new();
    let chart = Chart::new(&provider, birth, position, config)?;

    let mode = match chart.ayanamsa() {
        Some(a) => format!("sidereal ({})", a.name()),
        None => "tropical".to_string(),
    };
    println!("{} at {:.2}N {:.2}E", birth, lat, lon);
    println!(
        "{} zodiac, {} houses\n",
        mode,
        chart.house_system().name()
    );

    println!("Objects:");
    for (body, obj) in chart.objects() {
        let retro = if obj.is_retrograde() { " R" } else { "" };
        println!(
            "  {:8} {}{}",
            body.name(),
            format_position(obj.lon, obj.sign().name()),
            retro
        );
    }

    println!("\nAngles:");
    for (angle, obj) in chart.angles() {
        println!(
            "  {:8} {}",
            angle.name(),
            format_position(obj.lon, obj.sign().name())
        );
    }

    println!("\nHouses:");
    for (n, obj) in chart.houses() {
        println!(
            "  House{:<3} {}",
            n,
            format_position(obj.lon, obj.sign().name())
        );
    }

    Ok(())
}

fn run_dasha(
    system: String,
    date: String,
    offset: f64,
    lat: f64,
    lon: f64,
    ayanamsa: Option<String>,
    on: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let system = parse_dasha_system(&system)?;
    let birth = parse_datetime(&date, offset)?;
    let position = GeoPosition::new(lat, lon)?;
    let mode = match ayanamsa {
        Some(name) => parse_ayanamsa(&name)?,
        None => Ayanamsa::Lahiri,
    };

    let provider = AnalyticEphemeris::new();
    let chart = Chart::new(
        &provider,
        birth,
        position,
        ChartConfig::new().with_ayanamsa(mode),
    )?;

    let timeline = dasha_timeline(&chart, system)?;
    println!("{} dasha from {}\n", system.name(), birth);
    println!("Mahadashas:");
    for m in &timeline.mahadashas {
        println!(
            "  {:12} {}  to  {}  ({:6.2}y)",
            m.ruler.name(),
            m.start_date(offset),
            m.end_date(offset),
            m.years
        );
    }

    let target = match on {
        Some(s) => Some(parse_datetime(&s, offset)?),
        None => None,
    };
    match current_dasha(&chart, system, target.as_ref())? {
        Some(current) => {
            println!("\nActive mahadasha: {}", current.mahadasha.ruler.name());
            if let Some(a) = &current.antardasha {
                println!("Active antardasha: {}", a.ruler.name());
            }
        }
        None => println!("\nTarget date is outside the computed timeline"),
    }

    Ok(())
}

fn run_ayanamsa(name: String, date: String) -> Result<(), Box<dyn Error>> {
    let ayanamsa = parse_ayanamsa(&name)?;
    let when = parse_datetime(&date, 0.0)?;
    let value = ayanamsa_deg(ayanamsa, when.to_jd_utc());
    println!("{} ayanamsa at {}: {:.6} deg", ayanamsa.name(), when, value);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            date,
            offset,
            lat,
            lon,
            ayanamsa,
            hsys,
            kp,
        } => run_chart(date, offset, lat, lon, ayanamsa, hsys, kp),
        Commands::Dasha {
            system,
            date,
            offset,
            lat,
            lon,
            ayanamsa,
            on,
        } => run_dasha(system, date, offset, lat, lon, ayanamsa, on),
        Commands::Ayanamsa { name, date } => run_ayanamsa(name, date),
    }
}
