//! framegen example - generate and screen a 4-story frame

use anyhow::Result;
use framegen::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== framegen example: 4-story frame on a 60 x 40 m plot ===\n");

    let catalog = Catalog::default();
    let tables = CodeTables::default();

    let input = PipelineInput {
        grid: GridConfig::new(60.0, 40.0, 4),
        location: "Delhi".to_string(),
        active: ActiveCases::all(),
    };

    let output = run_pipeline(&input, &catalog, &tables, &ProfileSolver)?;

    println!(
        "Model: {} nodes, {} members, {} plates, {} supports",
        output.model.nodes.len(),
        output.model.members.len(),
        output.model.plates.len(),
        output.model.supports.len()
    );

    println!(
        "\nWind at {}: Vb = {} m/s, pz = {:.0} N/m²",
        output.wind.location, output.wind.basic_speed, output.wind.design_pressure
    );
    println!(
        "Seismic zone {} (Z = {}), Ah = {:.3}",
        output.seismic.zone.label(),
        output.seismic.zone_factor,
        output.seismic.design_coefficient
    );

    println!("\nLoad combinations:");
    for combo in &output.combinations {
        println!("  [{}] {}", combo.id, combo.name);
    }

    let mut pass = 0;
    let mut warning = 0;
    let mut fail = 0;
    let mut skipped = 0;
    for result in output.design_results.values() {
        match result.status {
            CheckStatus::Pass => pass += 1,
            CheckStatus::Warning => warning += 1,
            CheckStatus::Fail => fail += 1,
            CheckStatus::NotApplicable => skipped += 1,
        }
    }
    println!(
        "\nDesign screening: {} pass, {} warning, {} fail, {} not checked",
        pass, warning, fail, skipped
    );

    if let Some((id, worst)) = output
        .design_results
        .iter()
        .filter(|(_, r)| r.combo.is_some())
        .max_by(|a, b| a.1.utilization.total_cmp(&b.1.utilization))
    {
        println!(
            "Governing member {}: utilization {:.2} ({})",
            id, worst.utilization, worst.check
        );
    }

    // Incremental edit: stiffen one beam section, then re-screen it
    let edited = apply(
        &output.model,
        &Mutation::UpdateMember {
            id: 500,
            patch: MemberPatch {
                section: Some(1),
                ..Default::default()
            },
        },
    );
    println!(
        "\nAfter edit, member 500 section: {:?}",
        edited.member(500).map(|m| m.section)
    );

    Ok(())
}
