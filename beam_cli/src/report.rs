//! Report printing
//!
//! Renders a `BeamAnalysis` for the terminal. The plots of the interactive
//! front end are replaced by the diagram tables and their derivations.

use anyhow::Result;
use beam_core::calculations::FieldSample;
use beam_core::derivation::format_number;
use beam_core::{BeamAnalysis, BeamInput, SupportConfiguration};

const RULE: &str = "═══════════════════════════════════════";

/// Human-readable report
pub fn print_text(input: &BeamInput, analysis: &BeamAnalysis) {
    println!("{}", RULE);
    println!("  BEAM ANALYSIS RESULTS");
    println!("{}", RULE);
    println!();
    println!("Input:");
    if !input.label.is_empty() {
        println!("  Label:    {}", input.label);
    }
    println!("  Span:     {:.2} m", input.span_m);
    println!("  Supports: {}", input.supports);
    if input.loads.is_empty() {
        println!("  Loads:    none");
    }
    for (i, load) in input.loads.iter().enumerate() {
        println!(
            "  Load {:<3} P = {} kN at a = {} m",
            i + 1,
            format_number(load.magnitude_kn()),
            format_number(load.location_m())
        );
    }
    println!();

    println!("Support Reactions:");
    let reactions = &analysis.reactions;
    match input.supports {
        SupportConfiguration::SimplySupported { .. } => {
            println!("  Va = {} kN", format_number(reactions.va_kn));
            println!("  Vb = {} kN", format_number(reactions.vb_kn));
        }
        SupportConfiguration::Cantilever => {
            println!("  Va = {} kN", format_number(reactions.va_kn));
            println!("  Ma = {} kN·m", format_number(reactions.ma_knm));
        }
    }
    println!();
    print_indented(&analysis.reaction_derivation.to_string());
    println!();

    print_indented(&analysis.shear_derivation.to_string());
    if let Some(peak) = analysis.max_shear {
        println!(
            "  |V|max = {} kN at x = {} m",
            format_number(peak.value.abs()),
            format_number(peak.position_m)
        );
    }
    println!();

    println!("Bending Moment Diagram:");
    print_field(&analysis.moment, "M (kN·m)");
    if let Some(peak) = analysis.max_moment {
        println!(
            "  |M|max = {} kN·m at x = {} m",
            format_number(peak.value.abs()),
            format_number(peak.position_m)
        );
    }
    println!();
    print_indented(&analysis.moment_derivation.to_string());
    println!("{}", RULE);
}

/// Derivations only, as LaTeX blocks
pub fn print_latex(analysis: &BeamAnalysis) {
    for derivation in [
        &analysis.reaction_derivation,
        &analysis.shear_derivation,
        &analysis.moment_derivation,
    ] {
        println!("{}", derivation.to_latex());
        println!();
    }
}

/// Full analysis as pretty JSON (for LLM/API use)
pub fn print_json(analysis: &BeamAnalysis) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(analysis)?);
    Ok(())
}

fn print_field(field: &FieldSample, label: &str) {
    println!("  {:>10}  {:>12}", "x (m)", label);
    for point in field {
        println!(
            "  {:>10}  {:>12}",
            format_number(point.position_m),
            format_number(point.value)
        );
    }
}

fn print_indented(text: &str) {
    for line in text.lines() {
        println!("  {}", line);
    }
}
