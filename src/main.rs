use stencil::{
    cli::{get_log_level_from_verbose, parse_cli, run_list, Commands, Runner},
    error::default_error_handler,
};

fn main() {
    let cli = parse_cli();
    let result = match cli.command {
        None => {
            println!("Welcome to stencil! Use `stencil init` to start a new project.");
            return;
        }
        Some(Commands::Init(args)) => {
            let level = get_log_level_from_verbose(args.verbose);
            env_logger::Builder::new().filter_level(level).init();
            Runner::new(args).run()
        }
        Some(Commands::List(args)) => {
            let level = get_log_level_from_verbose(args.verbose);
            env_logger::Builder::new().filter_level(level).init();
            run_list(args)
        }
    };

    if let Err(err) = result {
        default_error_handler(err);
    }
}
