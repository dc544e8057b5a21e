// * Declarative structural path over a parsed document.
// * Each step is a CSS selector applied inside the node matched by the previous step.
// * Resolution stops at the first step that matches nothing and reports it.

use scraper::{ElementRef, Html, Selector};

use super::ExtractionError;

#[derive(Debug)]
pub struct SelectorPath {
    table: &'static str,
    steps: Vec<(String, Selector)>,
}

impl SelectorPath {
    /// Compiles every step up front so a bad selector fails before any fetch happens
    pub fn parse(table: &'static str, steps: &[&str]) -> Result<Self, ExtractionError> {
        let steps = steps
            .iter()
            .map(|raw| {
                Selector::parse(raw)
                    .map(|sel| (raw.to_string(), sel))
                    .map_err(|e| ExtractionError::InvalidSelector {
                        selector: raw.to_string(),
                        reason: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { table, steps })
    }

    /// Walks the path from the document root
    pub fn resolve<'a>(&self, document: &'a Html) -> Result<ElementRef<'a>, ExtractionError> {
        let mut current = document.root_element();

        for (index, (raw, selector)) in self.steps.iter().enumerate() {
            current = current
                .select(selector)
                .next()
                .ok_or_else(|| ExtractionError::MissingNode {
                    table: self.table,
                    step: index + 1,
                    selector: raw.clone(),
                })?;
        }

        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_nested_steps() {
        let doc = Html::parse_document(
            r#"<div id="outer"><table><tbody><tr><td>cell</td></tr></tbody></table></div>"#,
        );
        let path = SelectorPath::parse("demo", &["#outer", "table", "tbody"]).unwrap();
        let tbody = path.resolve(&doc).unwrap();
        assert_eq!(tbody.value().name(), "tbody");
    }

    #[test]
    fn test_reports_first_unmatched_step() {
        let doc = Html::parse_document(r#"<div id="outer"><p>no table here</p></div>"#);
        let path = SelectorPath::parse("demo", &["#outer", "table", "tbody"]).unwrap();

        match path.resolve(&doc) {
            Err(ExtractionError::MissingNode { table, step, selector }) => {
                assert_eq!(table, "demo");
                assert_eq!(step, 2);
                assert_eq!(selector, "table");
            }
            other => panic!("expected MissingNode, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_selector_is_an_error() {
        let err = SelectorPath::parse("demo", &["div >>> p"]).unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidSelector { .. }));
    }
}
