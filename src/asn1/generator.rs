//! ASN.1 module rendering for parsed ROS messages

use crate::asn1::msg::{FieldKind, MessageIndex, MsgSpec};
use crate::asn1::types::{primitive_asn1_type, primitive_library};
use crate::exceptions::Result;
use log::{debug, info};
use std::collections::{HashSet, VecDeque};
use std::fs;
use std::path::Path;

/// Upper size bound used for variable-length arrays
const VARIABLE_ARRAY_MAX: usize = 256;

/// A rendered ASN.1 module plus the messages it depends on
#[derive(Debug)]
pub struct GeneratedMessage {
    /// The ASN.1 module text
    pub text: String,
    /// Non-primitive field types as `pkg/Name`, to be generated in turn
    pub dependencies: Vec<String>,
}

/// ASN.1 type, source library and dependency for one ROS field type
fn asn1_field_type(spec: &MsgSpec, ros_type: &str) -> (String, String, Option<String>) {
    if let Some(asn1) = primitive_asn1_type(ros_type) {
        return (asn1.to_string(), primitive_library(asn1).to_string(), None);
    }

    // Composed type: `pkg/Name`, or a bare `Name` from the same package
    let (pkg, name) = match ros_type.split_once('/') {
        Some((pkg, name)) => (pkg, name),
        None => (spec.package.as_str(), ros_type),
    };
    (
        name.to_string(),
        format!("{name}-Types"),
        Some(format!("{pkg}/{name}")),
    )
}

/// Render the IMPORTS line for the collected libraries, in first-use order
fn imports_line(imports: &[(String, Vec<String>)]) -> String {
    let mut line = String::from("IMPORTS ");
    for (library, type_names) in imports {
        line.push_str(&type_names.join(", "));
        line.push_str(&format!(" FROM {library} "));
    }
    line.push_str(";\n");
    line
}

/// Render one message as an ASN.1 module
pub fn generate(spec: &MsgSpec) -> Result<GeneratedMessage> {
    let mut imports: Vec<(String, Vec<String>)> = Vec::new();
    let mut dependencies = Vec::new();

    // Per-field ASN.1 type names, aliases substituted in below for arrays
    let mut field_types: Vec<String> = Vec::new();

    for field in &spec.fields {
        let (asn1_type, library, dependency) = asn1_field_type(spec, &field.ty);

        match imports.iter_mut().find(|(lib, _)| *lib == library) {
            Some((_, type_names)) => {
                if !type_names.contains(&asn1_type) {
                    type_names.push(asn1_type.clone());
                }
            }
            None => imports.push((library, vec![asn1_type.clone()])),
        }

        if let Some(dep) = dependency {
            dependencies.push(dep);
        }
        field_types.push(asn1_type);
    }

    let mut text = format!("{}-Types DEFINITIONS ::=\nBEGIN\n", spec.name);
    text.push_str(&imports_line(&imports));

    // Hoist arrays into named SEQUENCE OF aliases
    for (i, field) in spec.fields.iter().enumerate() {
        let alias_name = field.name.replace('_', "-");
        match field.kind {
            FieldKind::Scalar => {}
            FieldKind::FixedArray(length) => {
                text.push_str(&format!(
                    "L{alias_name}::= SEQUENCE (SIZE(0..{length})) OF {}\n",
                    field_types[i]
                ));
                field_types[i] = format!("L{alias_name}");
            }
            FieldKind::VariableArray => {
                text.push_str(&format!(
                    "V{alias_name}::= SEQUENCE (SIZE(0..{VARIABLE_ARRAY_MAX})) OF {}\n",
                    field_types[i]
                ));
                field_types[i] = format!("V{alias_name}");
            }
        }
    }

    text.push_str(&format!("{}::=\nSEQUENCE\n{{\n", spec.name));
    let mut separator = "";
    for (field, asn1_type) in spec.fields.iter().zip(&field_types) {
        // Repair names ASN.1 cannot accept: a literal 'type' field, or a
        // field spelled like its own type
        let mut field_name = field.name.clone();
        if field_name == "type" {
            field_name = format!("type-{asn1_type}");
        }
        if field_name.to_lowercase() == asn1_type.to_lowercase() {
            field_name.push_str("-field");
        }

        text.push_str(separator);
        text.push_str(&format!("\t{}\t{asn1_type}", field_name.replace('_', "-")));
        separator = ",\n";
    }
    text.push_str("\n}\nEND");

    debug!(
        "Rendered {}/{} with {} dependencies",
        spec.package,
        spec.name,
        dependencies.len()
    );
    Ok(GeneratedMessage { text, dependencies })
}

/// Convert the named messages and all their transitive dependencies
///
/// Writes `<Name>.asn` files into `out_dir` and returns the qualified names
/// of every generated message, in generation order.
pub fn convert_all(
    index: &MessageIndex,
    messages: &[String],
    out_dir: &Path,
) -> Result<Vec<String>> {
    fs::create_dir_all(out_dir)?;

    let mut queue: VecDeque<String> = messages.iter().cloned().collect();
    let mut done: HashSet<String> = HashSet::new();
    let mut generated = Vec::new();

    while let Some(message) = queue.pop_front() {
        let spec = index.load(&message)?;
        let qualified = format!("{}/{}", spec.package, spec.name);
        if done.contains(&qualified) {
            continue;
        }

        let rendered = generate(&spec)?;
        let out_file = out_dir.join(format!("{}.asn", spec.name));
        fs::write(&out_file, &rendered.text)?;
        info!("Generated {}", out_file.display());

        done.insert(qualified.clone());
        generated.push(qualified);

        for dep in rendered.dependencies {
            if !done.contains(&dep) && !queue.contains(&dep) {
                queue.push_back(dep);
            }
        }
    }

    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn make_pkg(root: &Path, pkg: &str, msg: &str, content: &str) {
        let msg_dir = root.join(pkg).join("msg");
        fs::create_dir_all(&msg_dir).unwrap();
        fs::write(msg_dir.join(format!("{msg}.msg")), content).unwrap();
    }

    #[test]
    fn test_generate_primitive_message() {
        let spec = MsgSpec::parse("demo", "Point", "float64 x\nfloat64 y\nfloat64 z\n").unwrap();
        let rendered = generate(&spec).unwrap();

        assert!(rendered.dependencies.is_empty());
        assert!(rendered.text.starts_with("Point-Types DEFINITIONS ::=\nBEGIN\n"));
        assert!(rendered
            .text
            .contains("IMPORTS T-Double FROM TASTE-ExtendedTypes ;\n"));
        assert!(rendered.text.contains("Point::=\nSEQUENCE\n{\n"));
        assert!(rendered.text.contains("\tx\tT-Double,\n"));
        assert!(rendered.text.ends_with("\n}\nEND"));
    }

    #[test]
    fn test_generate_arrays_are_hoisted() {
        let spec =
            MsgSpec::parse("demo", "Scan", "float32[] ranges\nuint8[4] raw_flags\n").unwrap();
        let rendered = generate(&spec).unwrap();

        assert!(rendered
            .text
            .contains("Vranges::= SEQUENCE (SIZE(0..256)) OF T-Float\n"));
        assert!(rendered
            .text
            .contains("Lraw-flags::= SEQUENCE (SIZE(0..4)) OF T-UInt8\n"));
        assert!(rendered.text.contains("\tranges\tVranges"));
        assert!(rendered.text.contains("\traw-flags\tLraw-flags"));
    }

    #[test]
    fn test_generate_collects_dependencies() {
        let spec = MsgSpec::parse(
            "nav_pkg",
            "Odometry",
            "geometry_msgs/Pose pose\nTwist twist\n",
        )
        .unwrap();
        let rendered = generate(&spec).unwrap();

        // Bare types resolve to the message's own package
        assert_eq!(
            rendered.dependencies,
            vec!["geometry_msgs/Pose", "nav_pkg/Twist"]
        );
        assert!(rendered.text.contains("Pose FROM Pose-Types"));
        // 'pose' collides with its own type name and gets the -field suffix
        assert!(rendered.text.contains("\tpose-field\tPose"));
    }

    #[test]
    fn test_generate_repairs_reserved_field_names() {
        let spec = MsgSpec::parse("demo", "Tagged", "uint8 type\ntime time\n").unwrap();
        let rendered = generate(&spec).unwrap();

        assert!(rendered.text.contains("\ttype-T-UInt8\tT-UInt8"));
        assert!(rendered.text.contains("\ttime-field\tTime"));
    }

    #[test]
    fn test_convert_all_follows_dependencies() {
        let temp_dir = TempDir::new().unwrap();
        make_pkg(
            temp_dir.path(),
            "nav_pkg",
            "Odometry",
            "geometry_msgs/Pose pose\nuint32 seq\n",
        );
        make_pkg(
            temp_dir.path(),
            "geometry_msgs",
            "Pose",
            "float64 x\nfloat64 y\n",
        );

        let out_dir = temp_dir.path().join("asn1");
        let index = MessageIndex::new(&[temp_dir.path().to_path_buf()]);
        let generated = convert_all(
            &index,
            &["nav_pkg/Odometry".to_string()],
            &out_dir,
        )
        .unwrap();

        assert_eq!(generated, vec!["nav_pkg/Odometry", "geometry_msgs/Pose"]);
        assert!(out_dir.join("Odometry.asn").is_file());
        assert!(out_dir.join("Pose.asn").is_file());
    }

    #[test]
    fn test_convert_all_missing_dependency_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        make_pkg(temp_dir.path(), "nav_pkg", "Odometry", "Missing dep\n");

        let index = MessageIndex::new(&[temp_dir.path().to_path_buf()]);
        let result = convert_all(
            &index,
            &["nav_pkg/Odometry".to_string()],
            &temp_dir.path().join("asn1"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_convert_all_creates_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        make_pkg(temp_dir.path(), "demo", "Empty", "");

        let out_dir: PathBuf = temp_dir.path().join("deep").join("out");
        let index = MessageIndex::new(&[temp_dir.path().to_path_buf()]);
        convert_all(&index, &["demo/Empty".to_string()], &out_dir).unwrap();
        assert!(out_dir.is_dir());
    }
}
