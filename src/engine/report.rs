// * Report blocks handed to the emit collaborator.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub heading: String,
    pub body: String,
}

/// Everything shown for one matched crew
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportBlock {
    pub title: String,
    pub link: Option<String>,
    pub sections: Vec<ReportSection>,
    /// Non-fatal problems hit while building the block
    pub notes: Vec<String>,
}

impl ReportBlock {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn section(&mut self, heading: impl Into<String>, body: impl Into<String>) {
        self.sections.push(ReportSection {
            heading: heading.into(),
            body: body.into(),
        });
    }

    pub fn note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    pub fn section_named(&self, heading: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.heading == heading)
    }

    pub fn is_partial(&self) -> bool {
        !self.notes.is_empty()
    }

    /// Markdown with one fenced block per section
    pub fn render(&self) -> String {
        let mut out = format!("**{}**", self.title);
        if let Some(link) = &self.link {
            out.push_str(&format!("\n[Crew's page]({})", link));
        }
        for section in &self.sections {
            out.push_str(&format!("\n__{}__\n```\n{}\n```", section.heading, section.body));
        }
        for note in &self.notes {
            out.push_str(&format!("\n_{}_", note));
        }
        out
    }
}
