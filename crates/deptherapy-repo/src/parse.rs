use crate::ManifestError;
use camino::Utf8Path;
use deptherapy_domain::model::{DepGroup, DependencySpec, ManifestModel};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Top-level shape of `package.json`; everything else in the file is ignored.
#[derive(Debug, Default, Deserialize)]
struct PackageJson {
    #[serde(default)]
    name: Option<Value>,
    #[serde(default)]
    dependencies: Option<Value>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: Option<Value>,
    #[serde(default, rename = "peerDependencies")]
    peer_dependencies: Option<Value>,
}

/// Parse manifest text into a model. Never panics on any input.
pub fn parse_manifest(path: &Utf8Path, text: &str) -> Result<ManifestModel, ManifestError> {
    let value: Value = serde_json::from_str(text).map_err(|source| ManifestError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    if !value.is_object() {
        return Err(shape(path, "top-level value must be an object"));
    }
    let pkg: PackageJson = serde_json::from_value(value).map_err(|source| ManifestError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    // A non-string name is tolerated and treated as anonymous.
    let name = pkg.name.as_ref().and_then(Value::as_str).map(str::to_string);

    let mut dependencies = Vec::new();
    for (section, group, value) in [
        ("dependencies", DepGroup::Direct, &pkg.dependencies),
        ("devDependencies", DepGroup::Development, &pkg.dev_dependencies),
        ("peerDependencies", DepGroup::Peer, &pkg.peer_dependencies),
    ] {
        let Some(table) = section_table(path, section, value.as_ref())? else {
            continue;
        };
        for (dep_name, range) in table {
            let Some(range) = range.as_str() else {
                return Err(shape(
                    path,
                    &format!("{section}.{dep_name} must be a version string"),
                ));
            };
            dependencies.push(DependencySpec {
                name: dep_name.clone(),
                version_range: range.to_string(),
                group,
            });
        }
    }

    Ok(ManifestModel {
        path: path.to_path_buf(),
        name,
        dependencies,
    })
}

fn section_table<'a>(
    path: &Utf8Path,
    section: &str,
    value: Option<&'a Value>,
) -> Result<Option<&'a Map<String, Value>>, ManifestError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(shape(path, &format!("{section} must be an object"))),
    }
}

fn shape(path: &Utf8Path, reason: &str) -> ManifestError {
    ManifestError::Shape {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
