//! Text and JSON rendering of walk results

use std::io::Write;

use colored::Colorize;

use flux_catalog_core::{Catalog, Result, TypeReport, WalkResult};

pub fn write_catalog_text(out: &mut impl Write, catalog: &Catalog) -> Result<()> {
    writeln!(out, "detected {} entries", catalog.len())?;
    for entry in catalog.entries() {
        writeln!(
            out,
            "category '{}' ({}):",
            entry.category.as_str().cyan().bold(),
            entry.count
        )?;
        for member in &entry.members {
            writeln!(out, "    {}", member)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

pub fn write_catalog_json(out: &mut impl Write, catalog: &Catalog) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, catalog)?;
    writeln!(out)?;
    Ok(())
}

/// Per-type classification listing
pub fn write_inspection(out: &mut impl Write, result: &WalkResult, nodes_only: bool) -> Result<()> {
    let reports = result
        .reports
        .iter()
        .filter(|r| !nodes_only || r.handle.is_node);

    for report in reports {
        write_type_report(out, report)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{} {} types, {} nodes, {} categories",
        "Summary:".green(),
        result.reports.len(),
        result.nodes().count(),
        result.categories.group_count()
    )?;
    Ok(())
}

fn write_type_report(out: &mut impl Write, report: &TypeReport) -> Result<()> {
    let handle = &report.handle;
    writeln!(out, "{}:", handle.declaration().bold())?;

    if handle.is_node {
        writeln!(out, "    is a Node")?;
        if handle.inputs.is_empty() {
            writeln!(out, "        inputs: {}", "<none>".dimmed())?;
        } else {
            writeln!(out, "        inputs:")?;
            for input in &handle.inputs {
                writeln!(
                    out,
                    "        - {}: {} ({})",
                    input.name.yellow(),
                    input.element_type,
                    input.shape
                )?;
            }
        }
    }

    if let Some(category) = &report.category {
        writeln!(out, "    set Category '{}'", category.as_str().cyan())?;
    }

    for attr in &report.attributes {
        writeln!(
            out,
            "    attr[{}]: {}",
            attr.attribute_type,
            attr.arguments_summary()
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flux_catalog_core::{
        walk_universe, AttributeInstance, FieldDescriptor, ModuleDump, TypeDescriptor, TypeRef,
        TypeUniverse, WalkOptions,
    };
    use serde_json::json;

    fn sample_result() -> WalkResult {
        let mut sin = TypeDescriptor::new("ProtoFlux.Runtimes.Execution.Nodes.Math", "Sin");
        sin.attributes.push(AttributeInstance::new(
            "ProtoFlux.Core.NodeNameAttribute",
            vec![json!("sin")],
        ));
        sin.attributes.push(AttributeInstance::new(
            "ProtoFlux.Core.NodeCategoryAttribute",
            vec![json!("Math/Trig")],
        ));
        sin.fields.push(FieldDescriptor {
            name: "Angle".to_string(),
            is_public: true,
            is_static: false,
            field_type: TypeRef::new("ProtoFlux.Core", "ValueArgument`1")
                .with_arguments(vec![TypeRef::named("float")]),
        });

        let mut add = TypeDescriptor::new("ProtoFlux.Runtimes.Execution.Nodes.Math", "ValueAdd`1");
        add.generic_parameters = vec!["T".to_string()];
        add.attributes.push(AttributeInstance::new(
            "ProtoFlux.Core.NodeNameAttribute",
            vec![json!("+")],
        ));
        add.attributes.push(AttributeInstance::new(
            "ProtoFlux.Core.NodeCategoryAttribute",
            vec![json!("Math")],
        ));

        let universe = TypeUniverse::from_modules([ModuleDump {
            name: "ProtoFlux.Nodes".to_string(),
            types: vec![
                TypeDescriptor::new("System", "NodeNameAttribute"),
                TypeDescriptor::new("ProtoFlux.Core", "NodeNameAttribute"),
                TypeDescriptor::new("ProtoFlux.Core", "NodeCategoryAttribute"),
                sin,
                add,
            ],
        }]);
        walk_universe(&universe, WalkOptions::default()).unwrap()
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn catalog_text_lists_sorted_categories() {
        let catalog = sample_result().into_catalog();
        let text = render(|out| write_catalog_text(out, &catalog));

        let expected = "detected 2 entries\n\
                        category 'Math' (1):\n    ProtoFlux.Runtimes.Execution.Nodes.Math.ValueAdd\n\
                        category 'Math/Trig' (1):\n    ProtoFlux.Runtimes.Execution.Nodes.Math.Sin\n\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn catalog_json_has_entries() {
        let catalog = sample_result().into_catalog();
        let text = render(|out| write_catalog_json(out, &catalog));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["entries"][1]["category"], "Math/Trig");
        assert_eq!(value["entries"][1]["members"][0], "ProtoFlux.Runtimes.Execution.Nodes.Math.Sin");
    }

    #[test]
    fn inspection_lists_inputs_and_attributes() {
        let result = sample_result();
        let text = render(|out| write_inspection(out, &result, true));

        assert!(text.contains("ProtoFlux.Runtimes.Execution.Nodes.Math.Sin:\n    is a Node\n"));
        assert!(text.contains("        - Angle: float (ValueArgument)\n"));
        assert!(text.contains("ProtoFlux.Runtimes.Execution.Nodes.Math.ValueAdd`1<T>:"));
        assert!(text.contains("        inputs: <none>\n"));
        assert!(text.contains("    set Category 'Math/Trig'\n"));
        assert!(text.contains("    attr[ProtoFlux.Core.NodeCategoryAttribute]: Math\n"));
        // marker types are not nodes
        assert!(!text.contains("ProtoFlux.Core.NodeNameAttribute:\n"));
        assert!(text.contains("4 types, 2 nodes, 2 categories"));
    }

    #[test]
    fn inspection_includes_non_nodes_by_default() {
        let result = sample_result();
        let text = render(|out| write_inspection(out, &result, false));
        assert!(text.contains("ProtoFlux.Core.NodeCategoryAttribute:\n"));
        assert!(!text.contains("System.NodeNameAttribute"));
    }
}
