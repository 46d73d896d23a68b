//! Scale an ingredient list to a new serving count
//! Usage: cargo run --bin scale_recipe -- <ingredients.json|-> <original_servings> <target_servings>

use std::io::Read;

use rsm::build_info::BuildInfo;
use rsm::tools::scaling::scale_ingredients_json;

fn read_input(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.get(1).map(|s| s.as_str()) == Some("--version") {
        println!("{}", BuildInfo::current().version_line());
        return Ok(());
    }

    if args.len() != 4 {
        eprintln!(
            "Usage: {} <ingredients.json|-> <original_servings> <target_servings>",
            args.first().map(|s| s.as_str()).unwrap_or("scale_recipe")
        );
        std::process::exit(2);
    }

    let original: u32 = args[2].parse()?;
    let target: u32 = args[3].parse()?;

    let (scaled, stats) = scale_ingredients_json(&read_input(&args[1])?, original, target)?;

    println!("{}", scaled);
    eprintln!(
        "Scaled {} ingredients ({} unchanged) from {} to {} servings",
        stats.scaled, stats.passed_through, original, target
    );

    Ok(())
}
