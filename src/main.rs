use pilotlog::cli;
use pilotlog::errors::AppResult;

fn main() -> AppResult<()> {
    cli::cli()
}
