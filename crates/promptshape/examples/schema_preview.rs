//! # Offline preview of a response structure
//!
//! Builds a small nutrition-log structure, then prints the derived schema,
//! the example payload and the system instructions a submission would send.
//! No API key or network access is needed:
//!
//! ```bash
//! cargo run -p promptshape --example schema_preview
//! ```
use promptshape::{
    prompt::{compose_instructions, presets::default_preset},
    schema::{FieldKind, FieldPatch, FieldTree},
};

fn main() -> anyhow::Result<()> {
    let mut tree = FieldTree::new();

    tree.insert_with(
        None,
        FieldPatch::new()
            .name("caloriesIn")
            .kind(FieldKind::Number)
            .description("Total calories eaten today")
            .required(true),
    );
    let meals = tree
        .insert_with(None, FieldPatch::new().name("meals").kind(FieldKind::Array))
        .ok_or_else(|| anyhow::anyhow!("root insert cannot miss"))?;
    let meal = tree
        .insert_with(Some(meals), FieldPatch::new().name("meal").kind(FieldKind::Object))
        .ok_or_else(|| anyhow::anyhow!("`meals` was just inserted"))?;
    tree.insert_with(Some(meal), FieldPatch::new().name("name").example("Chicken"));
    tree.insert_with(
        Some(meal),
        FieldPatch::new()
            .name("calories")
            .kind(FieldKind::Number)
            .example("250"),
    );

    println!("{} fields\n", tree.len());
    println!("Schema:\n{}\n", serde_json::to_string_pretty(&tree.schema())?);
    println!("Example:\n{}\n", tree.example_preview());
    println!(
        "Instructions:\n{}",
        compose_instructions(default_preset().prompt, &tree)
    );

    Ok(())
}
