//! Implementation of the `archgen list` command.

use archgen_core::domain::{ArchitectureStyle, layers_for};

use crate::{
    cli::ListArgs,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let styles: Vec<ArchitectureStyle> = match args.style {
        Some(filter) => vec![filter.into()],
        None => ArchitectureStyle::all().to_vec(),
    };

    for style in styles {
        output.header(&format!("{} ({})", style.display_name(), style))?;
        for layer in layers_for(style) {
            output.print(&format!("  {} ({})", layer.name(), layer.kind))?;
            for package in layer.package_refs {
                output.print(&format!("    + package {package}"))?;
            }
            if !layer.project_refs.is_empty() {
                let refs: Vec<&str> = layer
                    .project_refs
                    .iter()
                    .map(|s| s.trim_start_matches('.'))
                    .collect();
                output.print(&format!("    -> references {}", refs.join(", ")))?;
            }
        }
        output.print("")?;
    }

    Ok(())
}
