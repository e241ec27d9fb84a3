//! Job card rendering.
//!
//! Output is a structured node tree, never concatenated markup. Every text
//! node and attribute value is escaped on serialization, so listing content
//! (which echoes the caller's query) cannot inject markup.

use chrono::{DateTime, Utc};

use crate::listings::models::JobListing;

pub const NO_RESULTS: &str = "NO JOBS FOUND. TRY A DIFFERENT SEARCH.";

/// Per-card stagger for the entrance animation, in seconds.
const CARD_STAGGER_SECS: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|c| c.split_whitespace().any(|part| part == class))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    /// Serializes to an HTML fragment with all text and attributes escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Element(el) => {
                out.push('<');
                out.push_str(el.tag);
                for (name, value) in &el.attrs {
                    out.push_str(&format!(" {name}=\"{}\"", escape_html(value)));
                }
                out.push('>');
                for child in &el.children {
                    child.write_html(out);
                }
                out.push_str(&format!("</{}>", el.tag));
            }
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(el) => el.children.iter().map(Node::text_content).collect(),
        }
    }

    /// Plain-text rendering for terminals: one line per block element.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();
        self.collect_lines(&mut lines);
        lines.join("\n")
    }

    fn collect_lines(&self, lines: &mut Vec<String>) {
        match self {
            Node::Text(text) => lines.push(text.clone()),
            Node::Element(el) if el.tag == "div" => {
                for child in &el.children {
                    child.collect_lines(lines);
                }
            }
            Node::Element(_) => lines.push(self.text_content()),
        }
    }

    /// Depth-first search for descendants (including self) carrying `class`.
    pub fn find_by_class<'a>(&'a self, class: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.walk(&mut |el: &'a Element| {
            if el.has_class(class) {
                found.push(el);
            }
        });
        found
    }

    fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Element)) {
        if let Node::Element(el) = self {
            visit(el);
            for child in &el.children {
                child.walk(visit);
            }
        }
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn format_day(date: &DateTime<Utc>) -> String {
    date.format("%d %b %Y").to_string()
}

/// Builds one job card. Enhanced fields are rendered only when present.
pub fn render_card(job: &JobListing, index: usize) -> Node {
    let mut card = Element::new("div").class("job-card").attr(
        "style",
        format!("animation-delay: {:.1}s", index as f64 * CARD_STAGGER_SECS),
    );

    card = card
        .child(
            Element::new("h4")
                .class("job-title")
                .text(format!("► {}", job.title)),
        )
        .child(
            Element::new("p")
                .class("job-company")
                .text(format!("COMPANY: {}", job.company)),
        )
        .child(
            Element::new("p")
                .class("job-location")
                .text(format!("LOCATION: {}", job.location)),
        )
        .child(
            Element::new("p")
                .class("job-description")
                .text(job.description.as_str()),
        )
        .child(
            Element::new("p")
                .class("job-salary")
                .text(format!("SALARY: {}", job.salary_range)),
        );

    if let Some(eligibility) = &job.eligibility {
        card = card.child(
            Element::new("p")
                .class("job-eligibility")
                .text(format!("ELIGIBILITY: {eligibility}")),
        );
    }
    if let Some(deadline) = &job.application_deadline {
        card = card.child(
            Element::new("p")
                .class("job-deadline")
                .text(format!("LAST DATE: {}", format_day(deadline))),
        );
    }
    if let Some(exam) = &job.exam_date {
        card = card.child(
            Element::new("p")
                .class("job-exam")
                .text(format!("EXAM DATE: {}", format_day(exam))),
        );
    }
    if let Some(vacancies) = job.vacancies {
        card = card.child(
            Element::new("p")
                .class("job-vacancies")
                .text(format!("VACANCIES: {vacancies}")),
        );
    }

    card.child(
        Element::new("a")
            .class("job-link")
            .attr("href", format!("#{}", job.id))
            .text("[ VIEW DETAILS ]"),
    )
    .into()
}

/// Renders a result set. Empty input yields exactly one "no results" node.
pub fn render_results(jobs: &[JobListing]) -> Vec<Node> {
    if jobs.is_empty() {
        return vec![Element::new("p").class("error-message").text(NO_RESULTS).into()];
    }

    let header = Element::new("div").class("results-header").child(
        Element::new("h3")
            .child(Element::new("span").class("blink").text("►"))
            .text(" SEARCH RESULTS"),
    );

    std::iter::once(Node::from(header))
        .chain(jobs.iter().enumerate().map(|(i, job)| render_card(job, i)))
        .collect()
}

/// Status line. A loading spinner precedes "SEARCHING" messages.
pub fn render_status(message: &str, status_class: &str) -> Node {
    let mut line = Element::new("p").class("status-text");
    if message.contains("SEARCHING") {
        line = line
            .child(Element::new("span").class("loading"))
            .text(" ");
    }
    line.child(Element::new("span").class(status_class).text(message))
        .into()
}

pub fn render_notice(message: &str) -> Node {
    Element::new("div").class("error-message").text(message).into()
}
