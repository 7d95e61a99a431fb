use sshmenu::menu::{self, ModeMenu};
use sshmenu::{Result, args, config, dispatch, log, log_debug, ui};

use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let args = args::main_args();

    // Initialize logging
    let logger = log::Logger::new();
    if args.debug {
        logger.enable_debug();
        if let Err(err) = logger.log_debug("Debug mode enabled") {
            eprintln!("❌ Failed to initialize debug logging: {}", err);
            return Ok(ExitCode::FAILURE);
        }
    }

    if args.init {
        return match config::ConfigLoader::write_default_config() {
            Ok(path) => {
                println!("Wrote starter configuration to {}", path.display());
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => {
                eprintln!("❌ {}", err);
                Ok(ExitCode::FAILURE)
            }
        };
    }

    let tree = match config::ConfigLoader::new(args.config.clone()).and_then(config::ConfigLoader::load) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("❌ Failed to load configuration: {}", err);
            return Ok(ExitCode::FAILURE);
        }
    };

    if tree.settings.debug && !logger.is_debug_enabled() {
        logger.enable_debug();
        if let Err(err) = logger.log_debug("Debug mode enabled by configuration") {
            eprintln!("❌ Failed to initialize debug logging: {}", err);
            return Ok(ExitCode::FAILURE);
        }
    }

    let settings = &tree.settings;
    let columns = match args.columns {
        Some(n) => config::ColumnMode::Fixed(n),
        None => settings.columns,
    };

    // A numeric argument skips the menu; otherwise render it and prompt.
    let index = match args.target {
        Some(index) if !args.list => index,
        _ => {
            let flattened = menu::flatten(&tree, settings.group_step);
            if flattened.entries.is_empty() {
                println!("No hosts configured.");
                return Ok(ExitCode::SUCCESS);
            }

            let grid = menu::layout(&flattened, ui::terminal_width(), columns, settings.color);
            print!("{}", ui::render_grid(&grid, settings.color));
            if args.list {
                return Ok(ExitCode::SUCCESS);
            }

            let Some(input) = ui::read_line("\nSelect host: ")? else {
                return Ok(ExitCode::SUCCESS);
            };
            match input.parse::<u32>() {
                Ok(index) => index,
                Err(_) => {
                    eprintln!("❌ Invalid selection: '{}'", input);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    };

    let resolved = match menu::resolve(&tree, index, settings.group_step) {
        Ok(resolved) => resolved,
        Err(err) => {
            eprintln!("❌ {}", err);
            return Ok(ExitCode::FAILURE);
        }
    };
    log_debug!("Index {} resolved to '{}'", index, resolved.indexed.entry.name);

    let mode_menu = ModeMenu::new(&resolved.capabilities);
    let outcome = if let Some(mode) = args.mode {
        if resolved.capabilities.contains(mode) {
            Ok(mode)
        } else {
            Err(menu::SelectionError::InvalidModeChoice(format!(
                "'{}' does not offer {}",
                resolved.indexed.entry.name,
                mode.label()
            )))
        }
    } else if let Some(choice) = args.choice {
        mode_menu.decide(Some(&choice.to_string()))
    } else if let Some(only) = mode_menu.sole_option() {
        Ok(only)
    } else {
        ui::print_mode_menu(&resolved.indexed.entry.name, &mode_menu)?;
        let input = ui::read_line_timeout(settings.choice_timeout)?;
        if input.is_none() {
            // The prompt line stays open when the read timed out.
            println!();
        }
        mode_menu.decide(input.as_deref())
    };

    let mode = match outcome {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("❌ {}", err);
            return Ok(ExitCode::FAILURE);
        }
    };
    log_debug!("Connecting to '{}' via {}", resolved.indexed.entry.name, mode.label());

    let prepared = match dispatch::build_command(mode, resolved.indexed.entry, settings) {
        Ok(prepared) => prepared,
        Err(err) => {
            eprintln!("❌ {}", err);
            return Ok(ExitCode::FAILURE);
        }
    };

    match dispatch::run(&prepared) {
        Ok(code) => Ok(code),
        Err(err) => {
            eprintln!("❌ {}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}
