use crate::demo::{run_assess, run_demo, run_locations, AssessArgs, DemoArgs, LocationsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use safe_route::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Safe Route",
    about = "Assess the infection risk of journeys and serve the assessment API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Assess a single journey and print the breakdown
    Assess(AssessArgs),
    /// List known locations or the destinations reachable from an origin
    Locations(LocationsArgs),
    /// Assess a fixed set of sample journeys across the graph
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Locations(args) => run_locations(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use safe_route::assessment::{SafeCode, TransportMode};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn assess_arguments_parse() {
        let cli = Cli::try_parse_from([
            "safe-route",
            "assess",
            "--origin",
            "CUHK",
            "--destination",
            "HKU",
            "--age",
            "65",
            "--unvaccinated",
            "--safe-code",
            "yellow",
            "--mode",
            "private",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Assess(args)) => {
                assert_eq!(args.origin.as_deref(), Some("CUHK"));
                assert_eq!(args.age, 65);
                assert!(args.unvaccinated);
                assert_eq!(args.safe_code, SafeCode::Yellow);
                assert_eq!(args.mode, TransportMode::Private);
            }
            other => panic!("expected assess command, got {other:?}"),
        }
    }

    #[test]
    fn assess_accepts_negative_model_overrides() {
        let cli = Cli::try_parse_from([
            "safe-route",
            "assess",
            "--destination",
            "HKU",
            "--route-weight",
            "-1.5",
            "--personal-weight",
            "-0.5",
            "--bias",
            "-2",
        ])
        .expect("negative overrides parse");

        match cli.command {
            Some(Command::Assess(args)) => {
                assert_eq!(args.route_weight, Some(-1.5));
                assert_eq!(args.personal_weight, Some(-0.5));
                assert_eq!(args.bias, Some(-2.0));
            }
            other => panic!("expected assess command, got {other:?}"),
        }
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["safe-route"]).expect("no arguments parse");
        assert!(cli.command.is_none());
    }
}
