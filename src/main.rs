use termlevel::color::{ColorSupport, ProcessEnv};
use termlevel::config::{Config, config_path};

fn print_help() {
    println!("termlevel {}", env!("CARGO_PKG_VERSION"));
    println!("Detect the color level of the current terminal\n");
    println!("USAGE:");
    println!("    termlevel [OPTIONS]\n");
    println!("OPTIONS:");
    println!("    --level           Print only the level name (none, ansi, 256, true)");
    println!("    --print-config    Print the effective configuration to stdout");
    println!("    --version, -V     Print version information");
    println!("    --help, -h        Print this help message");
    println!("\nCONFIG:");
    println!("    {}", config_path().display());
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return;
    }

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("termlevel {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let config = Config::load();

    if args.iter().any(|a| a == "--print-config") {
        match config.to_toml() {
            Ok(s) => print!("{s}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let support = ColorSupport::with_config(ProcessEnv, &config);

    if args.iter().any(|a| a == "--level") {
        println!("{}", support.level());
        return;
    }

    println!("level:          {}", support.level());
    println!("source:         {}", support.source());
    println!("supports_color: {}", support.is_support_color());
    println!("256:            {}", support.is_support_256_color());
    println!("truecolor:      {}", support.is_support_true_color());
    println!("no_color:       {}", support.no_color());
    println!("needs_vtp:      {}", support.needs_vtp());
    if support.needs_vtp() {
        println!("vtp_enabled:    {}", support.enable_vtp_if_needed());
    }
    println!("wsl:            {}", support.is_wsl());
    if let Some(err) = support.last_error() {
        println!("warning:        {err}");
    }
}
