//! muster-runner: headless front end for the readiness desk.
//!
//! Usage:
//!   muster-runner --seed 12345 --db session.db
//!   muster-runner --config desk.json --ipc-mode

use anyhow::{Context, Result};
use muster_core::{
    clock::SystemClock,
    command::{dispatch, DeskCommand},
    config::DeskConfig,
    engine::Desk,
};
use std::env;
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let mut config = match find_arg(&args, "--config") {
        Some(path) => DeskConfig::load(path)?,
        None => DeskConfig::default(),
    };
    config.seed = parse_arg(&args, "--seed", config.seed);
    if let Some(db) = find_arg(&args, "--db") {
        config.session_db = db.to_string();
    }

    if !ipc_mode {
        println!("Muster: readiness desk");
        println!("  seed:       {}", config.seed);
        println!("  session db: {}", config.session_db);
        println!("  live feed:  every {}s", config.feed_period_secs);
        println!();
    }

    let mut desk = Desk::build(config, Box::new(SystemClock))
        .context("Cannot build desk")?;

    if ipc_mode {
        run_ipc_loop(&mut desk)?;
    } else {
        print_summary(&desk);
    }
    Ok(())
}

fn run_ipc_loop(desk: &mut Desk) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        // The feed runs on wall-clock time; catch up before every command.
        desk.poll()?;

        let cmd: DeskCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        let response = match dispatch(desk, cmd) {
            Ok(result) => serde_json::json!({
                "result": result,
                "events": desk.drain_events(),
            }),
            Err(e) => {
                log::warn!("command failed: {e}");
                serde_json::json!({ "error": e.to_string() })
            }
        };
        writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
        stdout.flush()?;
    }
    Ok(())
}

fn print_summary(desk: &Desk) {
    let stats = desk.stats();
    println!("=== ROSTER SUMMARY ===");
    println!("  personnel:       {}", stats.total);
    println!("  available:       {}", stats.available);
    println!("  deployed:        {}", stats.deployed);
    println!("  on leave:        {}", stats.on_leave);
    println!("  medical:         {}", stats.medical);
    println!("  mean readiness:  {}%", stats.mean_readiness);
    match desk.current_user() {
        Some(user) => println!("  signed in:       {} ({})", user.name, user.role),
        None => println!("  signed in:       nobody"),
    }

    println!();
    println!("=== ALERTS ===");
    if desk.alerts().is_empty() {
        println!("  (none)");
    }
    for alert in desk.alerts() {
        println!("  [{:?}] {}: {}", alert.severity, alert.title, alert.description);
    }
}

fn find_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    find_arg(args, flag)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
