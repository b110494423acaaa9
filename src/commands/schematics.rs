use console::style;
use miette::Result;

use stencil::schematic::REGISTRY;

pub fn run() -> Result<()> {
    println!("{}\n", style("Available schematic types").bold());
    println!(
        "  {} {}",
        style(format!("{:<12}", "Schematic")).dim(),
        style("Aliases").dim()
    );

    for entry in REGISTRY {
        println!(
            "  {} {}",
            style(format!("{:<12}", entry.name)).cyan(),
            entry
                .aliases
                .iter()
                .map(|alias| style(alias).cyan().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(())
}
