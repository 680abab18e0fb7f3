use crate::cli::GenerateArgs;
use crate::error::Result;
use molgen::core::models::molecule::MoleculeRecord;
use molgen::engine::config::GenerationConfigBuilder;
use molgen::workflows;
use std::collections::HashSet;
use tracing::info;

pub fn run(args: GenerateArgs) -> Result<()> {
    let mut builder = GenerationConfigBuilder::new().count(args.count);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    if let Some(mechanism) = &args.mechanism {
        builder = builder.mechanism(mechanism.clone());
    }
    let config = builder.build()?;

    info!("Invoking the core generation workflow...");
    let batch = workflows::generate::run(&config);
    info!("Workflow finished, received {} record(s).", batch.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&batch)?);
        return Ok(());
    }

    println!("\n--- Generated candidate compounds ---");
    for record in &batch {
        print_record(record);
    }
    print_diversity_report(&batch);

    Ok(())
}

fn print_record(record: &MoleculeRecord) {
    println!("Name: {}", record.name);
    println!("SMILES: {}", record.smiles);
    println!("Formula: {}", record.formula);
    println!(
        "MW: {}, LogP: {}, drug-likeness: {:.2}",
        record.molecular_weight, record.log_p, record.drug_likeness
    );
    println!("Mechanism: {}", record.mechanism);
    println!("Advantages: {}", record.advantages.join(", "));
    println!("Concerns: {}", record.concerns.join(", "));
    println!(
        "Structure: rings={}, aromatic={}, heteroatoms={}, groups={}",
        record.structure.rings,
        record.structure.aromatic_rings,
        record.structure.heteroatoms,
        record.structure.functional_groups.join(", ")
    );
    println!("------------------------");
}

/// Diversity is not guaranteed by construction: the encoding vocabulary is
/// finite, so duplicates are expected in larger batches. This check is a
/// diagnostic only, never an error.
fn print_diversity_report(batch: &[MoleculeRecord]) {
    let unique_smiles = distinct_count(batch.iter().map(|r| r.smiles.as_str()));
    println!("\nDistinct SMILES: {}/{}", unique_smiles, batch.len());
    if unique_smiles == batch.len() {
        println!("✓ All records carry a distinct structural encoding.");
    } else {
        println!("⚠ Some records share a structural encoding.");
    }

    let unique_names = distinct_count(batch.iter().map(|r| r.name.as_str()));
    println!("Distinct names: {}/{}", unique_names, batch.len());
    if unique_names == batch.len() {
        println!("✓ All records carry a distinct name.");
    } else {
        println!("⚠ Some records share a name.");
    }
}

fn distinct_count<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.collect::<HashSet<_>>().len()
}
