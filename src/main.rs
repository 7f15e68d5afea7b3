use jinja_view::{
    cli::{get_args, get_log_level_from_verbose, run},
    constants::verbosity,
    error::default_error_handler,
};

fn main() {
    let args = get_args();

    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose > verbosity::OFF {
        logger.filter_level(get_log_level_from_verbose(args.verbose));
    }
    logger.init();

    if let Err(err) = run(&args, std::io::stdin().lock(), std::io::stdout().lock()) {
        default_error_handler(err);
    }
}
