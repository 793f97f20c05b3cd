use anybase::{Pool, PoolsConfig, decode, encode, group};
use clap::Parser;
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "anybase")]
#[command(version)]
#[command(about = "Convert decimal integers of any length to and from arbitrary bases", long_about = None)]
struct Cli {
    /// Number to convert (reads from stdin when omitted)
    #[arg(value_name = "NUMBER")]
    number: Option<String>,

    /// Named digit pool to use
    #[arg(short, long, default_value = "base62")]
    pool: String,

    /// Explicit pool characters, overriding --pool
    #[arg(short, long)]
    chars: Option<String>,

    /// Convert from the pool's base back to decimal
    #[arg(short, long)]
    decode: bool,

    /// Group the decimal output with this separator
    #[arg(short, long)]
    separator: Option<char>,

    /// List available pools
    #[arg(short, long)]
    list: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load pool configuration with user overrides
    let config = PoolsConfig::load_with_overrides()?;

    if cli.list {
        println!("Available pools:\n");
        let mut pools: Vec<_> = config.pools.iter().collect();
        pools.sort_by_key(|(name, _)| *name);

        for (name, pool_config) in pools {
            let count = pool_config.chars.chars().count();
            let preview: String = pool_config.chars.chars().take(20).collect();
            let suffix = if count > 20 { "..." } else { "" };
            let description = pool_config.description.as_deref().unwrap_or("");
            println!(
                "  {:<15} base-{:<4} {}{}  {}",
                name, count, preview, suffix, description
            );
        }
        return Ok(());
    }

    let pool: Pool = match &cli.chars {
        Some(chars) => chars.parse().map_err(|e: anybase::Error| e.to_string())?,
        None => {
            let pool_config = config.get_pool(&cli.pool).ok_or_else(|| {
                format!(
                    "Pool '{}' not found. Use --list to see available pools.",
                    cli.pool
                )
            })?;
            pool_config.to_pool().map_err(|e| e.to_string())?
        }
    };

    let input = match cli.number {
        Some(number) => number,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let input = input.trim();

    if cli.decode {
        let decimal = decode(input, &pool).map_err(|e| e.to_string())?;
        match cli.separator {
            Some(sep) => println!("{}", group(&decimal, sep)),
            None => println!("{}", decimal),
        }
    } else {
        println!("{}", encode(input, &pool).map_err(|e| e.to_string())?);
    }

    Ok(())
}
