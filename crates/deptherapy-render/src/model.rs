/// Who is on the couch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionInfo {
    pub patient_name: String,
    /// Direct plus development dependencies.
    pub total_deps: usize,
    pub dev_deps: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub lines: Vec<String>,
    pub finding_count: usize,
}

impl Report {
    /// Report text with a trailing newline.
    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}
