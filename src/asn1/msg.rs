//! ROS `.msg` definition parsing and message lookup
//!
//! Messages are plain text files, one field per line (`type name`), with
//! `#` comments and constant definitions (`NAME=value`) ignored. A message
//! named `pkg/Name` lives at `<root>/pkg/msg/Name.msg` under one of the
//! search-path roots.

use crate::exceptions::{EsrocosError, Result};
use log::debug;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Shape of a message field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain scalar field
    Scalar,
    /// Fixed-length array `T[N]`
    FixedArray(usize),
    /// Variable-length array `T[]`
    VariableArray,
}

/// One field of a message definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgField {
    /// ROS type of the field, without any array suffix
    pub ty: String,
    /// Field name as written in the definition
    pub name: String,
    /// Scalar or array shape
    pub kind: FieldKind,
}

/// A parsed message definition
#[derive(Debug, Clone)]
pub struct MsgSpec {
    /// Package the message belongs to
    pub package: String,
    /// Message name without package prefix
    pub name: String,
    /// Fields in definition order
    pub fields: Vec<MsgField>,
}

/// Split an array suffix off a ROS field type
fn parse_field_type(raw: &str) -> Result<(String, FieldKind)> {
    let Some(open) = raw.find('[') else {
        return Ok((raw.to_string(), FieldKind::Scalar));
    };

    let close = raw.find(']').ok_or_else(|| {
        EsrocosError::GenerationError(format!("malformed array type '{raw}'"))
    })?;
    let base = raw[..open].to_string();
    let len_str = &raw[open + 1..close];

    if len_str.is_empty() {
        Ok((base, FieldKind::VariableArray))
    } else {
        let length = len_str.parse::<usize>().map_err(|_| {
            EsrocosError::GenerationError(format!("bad array length in type '{raw}'"))
        })?;
        Ok((base, FieldKind::FixedArray(length)))
    }
}

impl MsgSpec {
    /// Parse a message definition from its text
    pub fn parse(package: &str, name: &str, text: &str) -> Result<Self> {
        let mut fields = Vec::new();

        for line in text.lines() {
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            // Constant definitions carry no field
            if line.contains('=') {
                continue;
            }

            let mut parts = line.split_whitespace();
            let (Some(ty), Some(field_name)) = (parts.next(), parts.next()) else {
                return Err(EsrocosError::GenerationError(format!(
                    "malformed field line '{line}' in message {package}/{name}"
                )));
            };

            let (ty, kind) = parse_field_type(ty)?;
            fields.push(MsgField {
                ty,
                name: field_name.to_string(),
                kind,
            });
        }

        Ok(MsgSpec {
            package: package.to_string(),
            name: name.to_string(),
            fields,
        })
    }
}

/// Locator for message definitions under a set of package roots
#[derive(Debug, Clone)]
pub struct MessageIndex {
    roots: Vec<PathBuf>,
}

impl MessageIndex {
    /// Create an index over explicit roots plus `ROS_PACKAGE_PATH` entries
    pub fn new(extra_roots: &[PathBuf]) -> Self {
        let mut roots: Vec<PathBuf> = extra_roots.to_vec();
        if let Ok(ros_path) = env::var("ROS_PACKAGE_PATH") {
            roots.extend(ros_path.split(':').filter(|p| !p.is_empty()).map(PathBuf::from));
        }
        Self { roots }
    }

    /// Resolve a message reference to `(package, name, file path)`
    ///
    /// A `pkg/Name` reference is searched only in that package. A bare name
    /// is searched in every package of every root and must be unique; the
    /// ambiguity diagnostic lists all candidates so the caller can qualify
    /// the name.
    pub fn resolve(&self, message: &str) -> Result<(String, String, PathBuf)> {
        if let Some((pkg, name)) = message.split_once('/') {
            for root in &self.roots {
                let path = root.join(pkg).join("msg").join(format!("{name}.msg"));
                if path.is_file() {
                    return Ok((pkg.to_string(), name.to_string(), path));
                }
            }
            return Err(EsrocosError::GenerationError(format!(
                "couldn't find the message {message}"
            )));
        }

        let mut matches: Vec<(String, PathBuf)> = Vec::new();
        for root in &self.roots {
            let Ok(entries) = fs::read_dir(root) else {
                continue;
            };
            for entry in entries.flatten() {
                let pkg_dir = entry.path();
                if !pkg_dir.is_dir() {
                    continue;
                }
                let candidate = pkg_dir.join("msg").join(format!("{message}.msg"));
                if candidate.is_file() {
                    let pkg = entry.file_name().to_string_lossy().into_owned();
                    matches.push((pkg, candidate));
                }
            }
        }

        match matches.len() {
            0 => Err(EsrocosError::GenerationError(format!(
                "couldn't find the message {message}"
            ))),
            1 => {
                let (pkg, path) = matches.remove(0);
                debug!("Found the message {pkg}/{message}");
                Ok((pkg, message.to_string(), path))
            }
            _ => {
                let candidates: Vec<String> = matches
                    .iter()
                    .map(|(pkg, _)| format!("{pkg}/{message}"))
                    .collect();
                Err(EsrocosError::GenerationError(format!(
                    "found {} messages with name {message}, please qualify with the package \
                     name: [{}]",
                    candidates.len(),
                    candidates.join(", ")
                )))
            }
        }
    }

    /// Resolve and parse a message reference
    pub fn load(&self, message: &str) -> Result<MsgSpec> {
        let (pkg, name, path) = self.resolve(message)?;
        let text = fs::read_to_string(&path)?;
        MsgSpec::parse(&pkg, &name, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn make_pkg(root: &Path, pkg: &str, msg: &str, content: &str) {
        let msg_dir = root.join(pkg).join("msg");
        fs::create_dir_all(&msg_dir).unwrap();
        fs::write(msg_dir.join(format!("{msg}.msg")), content).unwrap();
    }

    #[test]
    fn test_parse_fields_arrays_and_constants() {
        let text = "# header comment\n\
                    uint32 seq\n\
                    float64[] positions\n\
                    uint8[4] quad  # trailing comment\n\
                    int32 SOME_CONST=42\n\
                    \n\
                    geometry_msgs/Pose pose\n";
        let spec = MsgSpec::parse("demo_pkg", "Demo", text).unwrap();

        assert_eq!(spec.fields.len(), 4);
        assert_eq!(
            spec.fields[0],
            MsgField {
                ty: "uint32".into(),
                name: "seq".into(),
                kind: FieldKind::Scalar
            }
        );
        assert_eq!(spec.fields[1].kind, FieldKind::VariableArray);
        assert_eq!(spec.fields[2].kind, FieldKind::FixedArray(4));
        assert_eq!(spec.fields[3].ty, "geometry_msgs/Pose");
    }

    #[test]
    fn test_parse_rejects_malformed_line() {
        assert!(MsgSpec::parse("p", "M", "uint32\n").is_err());
    }

    #[test]
    fn test_resolve_qualified_and_bare() {
        let temp_dir = TempDir::new().unwrap();
        make_pkg(temp_dir.path(), "alpha", "Pose", "float64 x\n");
        make_pkg(temp_dir.path(), "beta", "Twist", "float64 w\n");

        let index = MessageIndex::new(&[temp_dir.path().to_path_buf()]);

        let (pkg, name, _) = index.resolve("alpha/Pose").unwrap();
        assert_eq!((pkg.as_str(), name.as_str()), ("alpha", "Pose"));

        let (pkg, _, _) = index.resolve("Twist").unwrap();
        assert_eq!(pkg, "beta");

        assert!(index.resolve("Missing").is_err());
    }

    #[test]
    fn test_resolve_ambiguous_lists_candidates() {
        let temp_dir = TempDir::new().unwrap();
        make_pkg(temp_dir.path(), "alpha", "Pose", "float64 x\n");
        make_pkg(temp_dir.path(), "beta", "Pose", "float64 y\n");

        let index = MessageIndex::new(&[temp_dir.path().to_path_buf()]);
        let err = index.resolve("Pose").unwrap_err().to_string();
        assert!(err.contains("alpha/Pose"));
        assert!(err.contains("beta/Pose"));
    }
}
