#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(elided_lifetimes_in_paths)]

use std::{env, path, process};

mod args;
mod config;
mod file_paths;

use args::{Action, Mode};

const UNESCAPE_ERROR_PREFIX: &str = "ERROR: Invalid string to unescape. Please check the format. ";

enum EvalResult {
    Ok,
    Err,
    NoInput,
}

fn transform_and_print(line: &str, mode: Mode) -> EvalResult {
    if line.is_empty() {
        return EvalResult::NoInput;
    }
    match mode {
        Mode::Escape => {
            println!("{}", jsonesc_core::escape(line));
            EvalResult::Ok
        }
        Mode::Unescape => match jsonesc_core::unescape(line) {
            Ok(res) => {
                println!("{res}");
                EvalResult::Ok
            }
            Err(msg) => {
                eprintln!("{UNESCAPE_ERROR_PREFIX}{msg}");
                EvalResult::Err
            }
        },
    }
}

fn print_help(explain_quitting: bool) {
    println!("jsonesc converts plain text into its JSON-string-literal escaped");
    println!("form, and back. The result carries no surrounding quotes.");
    println!();
    println!("Usage: jsonesc [-e|--escape] [-u|--unescape] [text]");
    println!("Without any text, jsonesc starts in interactive mode.");
    println!();
    println!("Version: {}", jsonesc_core::get_version());
    if let Some(config_path) = file_paths::get_config_file_location() {
        println!("Config file: {}", config_path.to_string_lossy());
    } else {
        println!("Failed to get config file location");
    }
    if let Some(history_path) = file_paths::get_history_file_location() {
        println!("History file: {}", history_path.to_string_lossy());
    } else {
        println!("Failed to get history file location");
    }
    if explain_quitting {
        println!("\nTo quit, type `quit`.");
    }
}

fn save_history(rl: &mut rustyline::DefaultEditor, path: &Option<path::PathBuf>) {
    if let Some(history_path) = path {
        if rl.save_history(history_path.as_path()).is_err() {
            // Error trying to save history
        }
    }
}

fn repl_loop(config: &config::Config, initial_mode: Mode) -> i32 {
    let mut rl = match rustyline::DefaultEditor::with_config(
        rustyline::config::Builder::new()
            .history_ignore_space(true)
            .auto_add_history(true)
            .build(),
    ) {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("Error: {err}");
            return 1;
        }
    };
    let history_path = file_paths::get_history_file_location();
    if let Some(history_path) = history_path.clone() {
        if rl.load_history(history_path.as_path()).is_err() {
            // No previous history
        }
    }
    let mut mode = initial_mode;
    let mut last_command_success = true;
    loop {
        let readline = rl.readline(&config.prompt);
        match readline {
            Ok(line) => match line.as_str() {
                "exit" | "exit()" | ".exit" | ":exit" | "quit" | "quit()" | ":quit" | ":q"
                | ":wq" | ":q!" | ":wq!" | ":qa" | ":wqa" | ":qa!" | ":wqa!" => break,
                "help" | "?" => {
                    print_help(true);
                }
                "escape" => {
                    mode = Mode::Escape;
                    println!("Escaping input. Type `unescape` to switch direction.");
                }
                "unescape" => {
                    mode = Mode::Unescape;
                    println!("Unescaping input. Type `escape` to switch direction.");
                }
                line => match transform_and_print(line, mode) {
                    EvalResult::Ok | EvalResult::NoInput => {
                        last_command_success = true;
                    }
                    EvalResult::Err => {
                        last_command_success = false;
                    }
                },
            },
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("Use Ctrl-D (i.e. EOF) to exit");
            }
            Err(rustyline::error::ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {err}");
                break;
            }
        }
        save_history(&mut rl, &history_path);
    }
    save_history(&mut rl, &history_path);
    if last_command_success {
        0
    } else {
        1
    }
}

fn main() {
    process::exit(real_main())
}

fn real_main() -> i32 {
    // Assemble the action from all but the first argument.
    let action: Action = env::args().skip(1).collect();
    match action {
        Action::Help => {
            print_help(false);
            0
        }
        Action::Version => {
            println!("{}", jsonesc_core::get_version());
            0
        }
        Action::DefaultConfig => {
            println!("{}", config::DEFAULT_CONFIG_FILE);
            0
        }
        Action::Text(mode, text) => {
            let config = config::read();
            let mode = mode.unwrap_or(config.default_mode);
            match transform_and_print(text.as_str(), mode) {
                EvalResult::Ok | EvalResult::NoInput => 0,
                EvalResult::Err => 1,
            }
        }
        Action::Repl(mode) => {
            let config = config::read();
            let mode = mode.unwrap_or(config.default_mode);
            repl_loop(&config, mode)
        }
    }
}
