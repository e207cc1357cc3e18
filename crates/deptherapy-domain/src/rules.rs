//! Fixed lookup tables for the pattern checks.
//!
//! The tables are data so they can be extended from `deptherapy.toml` without touching
//! the checks themselves.

/// Packages that are conventionally installed together.
pub const PAIRED_PACKAGES: &[(&str, &str)] = &[
    ("react", "react-dom"),
    ("webpack", "webpack-cli"),
    ("eslint", "prettier"),
    ("jest", "babel-jest"),
    ("typescript", "ts-node"),
    ("express", "body-parser"),
    ("vue", "vue-router"),
    ("@babel/core", "@babel/preset-env"),
    ("mocha", "chai"),
    ("redux", "react-redux"),
];

/// Packages that have been deprecated or abandoned upstream.
pub const DEPRECATED_PACKAGES: &[&str] = &[
    "request",
    "request-promise",
    "node-sass",
    "tslint",
    "babel-eslint",
    "gulp-util",
    "istanbul",
    "node-uuid",
    "coffee-script",
    "bower",
    "jade",
    "left-pad",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTables {
    pub pairs: Vec<(String, String)>,
    pub deprecated: Vec<String>,
}

impl Default for RuleTables {
    fn default() -> Self {
        Self {
            pairs: PAIRED_PACKAGES
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
            deprecated: DEPRECATED_PACKAGES.iter().map(|n| n.to_string()).collect(),
        }
    }
}

impl RuleTables {
    /// Append extra pairs, skipping self-pairs and pairs already present in either order.
    pub fn extend_pairs<I>(&mut self, extra: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (a, b) in extra {
            if a == b {
                continue;
            }
            let known = self
                .pairs
                .iter()
                .any(|(x, y)| (x == &a && y == &b) || (x == &b && y == &a));
            if !known {
                self.pairs.push((a, b));
            }
        }
    }

    pub fn extend_deprecated<I>(&mut self, extra: I)
    where
        I: IntoIterator<Item = String>,
    {
        for name in extra {
            if !self.deprecated.contains(&name) {
                self.deprecated.push(name);
            }
        }
    }
}
