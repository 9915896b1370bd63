//! ivn main entry point
//!
//! The interactive loop reads one command per line:
//! 1. `say <n> [es|en]` (or just `<n> [es|en]`) - speak a note
//! 2. `list`, `add`, `copy` - board management
//! 3. `register`, `login`, `users` - accounts
//! 4. `help`, `quit`

use std::io::{self, BufRead, Write};
use std::process;

use log::{debug, error, info, warn};
use unicode_width::UnicodeWidthStr;

use ivn::commands::{self, Command};
use ivn::config::Config;
use ivn::note::{Note, NoteCatalog};
use ivn::speech::SpeechDispatcher;
use ivn::translation::TranslationTable;
use ivn::users::{User, UserRegistry, MAX_USERS};
use ivn::Result;

fn main() {
    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let debug_mode = args.iter().any(|arg| arg == "--debug" || arg == "-d");

    // Initialize logger
    if debug_mode {
        // Debug mode: write to ivn.log file
        use std::fs::OpenOptions;
        match OpenOptions::new().create(true).append(true).open("ivn.log") {
            Ok(log_file) => {
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Debug)
                    .target(env_logger::Target::Pipe(Box::new(log_file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Warning: Failed to open ivn.log for debug logging: {}", e);
                eprintln!("Continuing without file logging...");
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Warn)
                    .init();
            }
        }

        info!(
            "ivn version {} starting (debug mode, logging to ivn.log)",
            ivn::VERSION
        );
    } else {
        // Normal mode: minimal logging to stderr, only errors
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Error)
            .init();
    }

    if let Err(e) = run() {
        error!("Fatal error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    debug!("Initializing ivn");

    let config = Config::load()?;
    info!("Config loaded from {}", config.path().display());

    // Assemble the translation table: built-in pairs, then any configured
    // extras on top
    let mut table = TranslationTable::builtin();
    if let Some(path) = config.translations_path() {
        match TranslationTable::from_json_file(path) {
            Ok(extra) => {
                info!("Merged {} extra translations", extra.len());
                table.merge(extra);
            }
            Err(e) => warn!("Ignoring translation table {}: {}", path.display(), e),
        }
    }

    let mut catalog = NoteCatalog::seeded();
    let mut registry = UserRegistry::new();

    // Engine failure is announced once in here; afterwards speaking is a no-op
    let mut dispatcher = SpeechDispatcher::initialize(
        table,
        config.pitch(),
        config.rate(),
        config.default_language(),
    );

    println!("{} {} ready", ivn::APP_NAME, ivn::VERSION);
    if dispatcher.is_ready() {
        println!("Speech engine initialized");
    }
    println!(
        "{} notes on the board, {} translations loaded",
        catalog.len(),
        dispatcher.table().len()
    );
    println!("Type help for commands, quit to exit");
    print_board(&catalog);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            info!("EOF on stdin, exiting");
            return Ok(());
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match commands::parse(line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Quit => {
                dispatcher.cancel();
                return Ok(());
            }
            Command::Help => print_help(),
            Command::List => print_board(&catalog),
            Command::Say { index, language } => {
                let language = language.unwrap_or_else(|| config.default_language());
                match catalog.get(index - 1) {
                    Some(note) => {
                        debug!("Speaking note {} in {}", index, language);
                        dispatcher.speak(note, language);
                    }
                    None => println!("No note {} (the board has {})", index, catalog.len()),
                }
            }
            Command::Add { title, content } => {
                catalog.add(Note::new(title, content));
                println!("Added note {}", catalog.len());
            }
            Command::Copy { index } => match catalog.get(index - 1) {
                Some(note) => match ivn::clipboard::copy_to_clipboard(note.content()) {
                    Ok(()) => println!("Copied: {}", note.content()),
                    Err(e) => println!("{}", e),
                },
                None => println!("No note {} (the board has {})", index, catalog.len()),
            },
            Command::Register => register_user(&mut registry)?,
            Command::Login => login_user(&registry)?,
            Command::Users => print_users(&registry),
        }
    }
}

/// Print the board with numbered rows and an aligned title column
fn print_board(catalog: &NoteCatalog) {
    if catalog.is_empty() {
        println!("No notes on the board");
        return;
    }

    let title_width = catalog
        .notes()
        .iter()
        .map(|note| note.title().width())
        .max()
        .unwrap_or(0);

    for (i, note) in catalog.notes().iter().enumerate() {
        let pad = title_width - note.title().width();
        println!(
            "{:>3}  {}{}  {}",
            i + 1,
            note.title(),
            " ".repeat(pad),
            note.content()
        );
    }
}

fn print_help() {
    println!("Commands:");
    println!("  say <n> [es|en]   speak note n (also just: <n> [es|en])");
    println!("  list              show the board");
    println!("  add <title> | <content>");
    println!("  copy <n>          copy note content to the clipboard");
    println!("  register          create an account (max {})", MAX_USERS);
    println!("  login             sign in");
    println!("  users             list registered users");
    println!("  quit");
}

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim().to_string())
}

fn register_user(registry: &mut UserRegistry) -> Result<()> {
    let first_name = prompt("First name")?;
    let last_name = prompt("Last name")?;
    let email = prompt("Email")?;
    let age = match prompt("Age")?.parse::<u32>() {
        Ok(age) => age,
        Err(_) => {
            println!("Age must be a number");
            return Ok(());
        }
    };
    let password = prompt("Password")?;

    match registry.register(User::new(first_name, last_name, email, password, age)) {
        Ok(()) => println!("User registered ({} of {})", registry.len(), MAX_USERS),
        Err(e) => println!("{}", e),
    }
    Ok(())
}

fn login_user(registry: &UserRegistry) -> Result<()> {
    let email = prompt("Email")?;
    let password = prompt("Password")?;

    match registry.login(&email, &password) {
        Some(user) => println!("Welcome, {} {}", user.first_name, user.last_name),
        None => println!("Invalid email or password"),
    }
    Ok(())
}

fn print_users(registry: &UserRegistry) {
    println!("{} of {} users registered", registry.len(), MAX_USERS);
    for user in registry.users() {
        println!("  {} {} <{}>", user.first_name, user.last_name, user.email);
    }
}
